//! ID generation utilities

use rand::Rng;

/// Characters used for ID generation
const ID_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a random alphanumeric string of the specified length
pub fn generate_id(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..ID_CHARS.len());
            ID_CHARS[idx] as char
        })
        .collect()
}

/// Generate an identifier for a matter or entry (UUID v4)
pub fn generate_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Generate the random prefix for an invoice storage filename
pub fn generate_invoice_prefix() -> String {
    generate_id(crate::INVOICE_PREFIX_LENGTH)
}
