//! Common utility functions

use chrono::{DateTime, Utc};

/// Get current UTC datetime
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Normalize a matter name for case-insensitive comparison
pub fn normalize_matter_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Replace path separators and control characters in a filename
///
/// Uploaded filenames are only ever used as the suffix of a storage
/// filename, never as a path on their own.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_matter_name() {
        assert_eq!(normalize_matter_name("Test Matter"), "test matter");
        assert_eq!(normalize_matter_name("  Test  "), "test");
        assert_eq!(normalize_matter_name("TEST"), "test");
    }

    #[test]
    fn test_normalize_matter_name_hebrew() {
        assert_eq!(normalize_matter_name("תיק בדיקה"), "תיק בדיקה");
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("invoice.pdf"), "invoice.pdf");
        assert_eq!(sanitize_filename("a/b\\c.pdf"), "a_b_c.pdf");
        assert_eq!(sanitize_filename("bad\nname.pdf"), "bad_name.pdf");
        assert_eq!(sanitize_filename("חשבונית.pdf"), "חשבונית.pdf");
    }

    #[test]
    fn test_now() {
        let before = Utc::now();
        let result = now();
        let after = Utc::now();
        assert!(result >= before);
        assert!(result <= after);
    }
}
