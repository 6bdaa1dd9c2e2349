//! JSON persistence with atomic writes and schema validation
//!
//! The entire application state lives in one JSON document with two
//! top-level arrays, `matters` and `entries`. Saves go through a temp file
//! and an atomic rename so a crash mid-write never corrupts the previous
//! file; a `.bak` sibling copy is refreshed on a best-effort basis first.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDateTime};
use log::warn;
use serde_json::Value;
use tempfile::NamedTempFile;

use crate::BACKUP_EXTENSION;
use crate::error::{Result, WorklogError};
use crate::storage::state::Worklog;

/// Required fields of a persisted matter record
const MATTER_REQUIRED_FIELDS: &[&str] = &["id", "name", "created_at"];

/// Required fields of a persisted entry record
const ENTRY_REQUIRED_FIELDS: &[&str] = &[
    "id",
    "entry_date",
    "week_index",
    "matter_id",
    "actions",
    "total_minutes",
];

/// Handle to the work log data file
pub struct DataFile {
    path: PathBuf,
}

impl DataFile {
    /// Create a handle for the given data file path
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Path of the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the backup sibling (`<data file>.bak`)
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".");
        name.push(BACKUP_EXTENSION);
        PathBuf::from(name)
    }

    /// Load the work log from disk
    ///
    /// A missing file yields an empty work log. Malformed content fails
    /// with [`WorklogError::CorruptData`]. Legacy records are migrated:
    /// actions without an `action_date` inherit the owning entry's date.
    pub fn load(&self) -> Result<Worklog> {
        if !self.path.exists() {
            return Ok(Worklog::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        let mut value: Value = serde_json::from_str(&raw)
            .map_err(|e| WorklogError::CorruptData(format!("invalid JSON: {e}")))?;

        validate_structure(&value)?;
        migrate(&mut value);

        serde_json::from_value(value)
            .map_err(|e| WorklogError::CorruptData(e.to_string()))
    }

    /// Save the work log to disk atomically
    ///
    /// Writes pretty-printed UTF-8 JSON to a temp file in the same
    /// directory and renames it over the data file. A failed save removes
    /// the temp file and leaves the previous data file untouched. The
    /// backup copy is best-effort and never fails the save.
    pub fn save(&self, worklog: &Worklog) -> Result<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)
            .map_err(|e| WorklogError::Save(e.to_string()))?;

        if self.path.exists() {
            if let Err(e) = fs::copy(&self.path, self.backup_path()) {
                warn!("Backup of {} failed: {}", self.path.display(), e);
            }
        }

        let serialized = serde_json::to_string_pretty(worklog)
            .map_err(|e| WorklogError::Save(e.to_string()))?;

        let mut temp = NamedTempFile::new_in(&parent)
            .map_err(|e| WorklogError::Save(e.to_string()))?;
        temp.write_all(serialized.as_bytes())
            .map_err(|e| WorklogError::Save(e.to_string()))?;
        temp.flush()
            .map_err(|e| WorklogError::Save(e.to_string()))?;

        // PersistError carries the temp file; dropping it removes the file
        temp.persist(&self.path)
            .map_err(|e| WorklogError::Save(e.error.to_string()))?;

        Ok(())
    }
}

/// Check the top-level document shape and per-record required fields
fn validate_structure(value: &Value) -> Result<()> {
    let root = value
        .as_object()
        .ok_or_else(|| corrupt("Data file must contain a JSON object"))?;

    let matters = root
        .get("matters")
        .and_then(Value::as_array)
        .ok_or_else(|| corrupt("Data file must contain 'matters' and 'entries' arrays"))?;
    let entries = root
        .get("entries")
        .and_then(Value::as_array)
        .ok_or_else(|| corrupt("Data file must contain 'matters' and 'entries' arrays"))?;

    for (i, matter) in matters.iter().enumerate() {
        let record = matter
            .as_object()
            .ok_or_else(|| corrupt(&format!("Matter {i} is not a valid object")))?;
        for field in MATTER_REQUIRED_FIELDS {
            if !record.contains_key(*field) {
                return Err(corrupt(&format!("Matter {i} missing required field: {field}")));
            }
        }
    }

    for (i, entry) in entries.iter().enumerate() {
        let record = entry
            .as_object()
            .ok_or_else(|| corrupt(&format!("Entry {i} is not a valid object")))?;
        for field in ENTRY_REQUIRED_FIELDS {
            if !record.contains_key(*field) {
                return Err(corrupt(&format!("Entry {i} missing required field: {field}")));
            }
        }
        if !record["actions"].is_array() {
            return Err(corrupt(&format!("Entry {i} actions must be an array")));
        }
    }

    Ok(())
}

fn corrupt(message: &str) -> WorklogError {
    WorklogError::CorruptData(message.to_string())
}

/// One-way migration of legacy record shapes
///
/// Actions without an `action_date` inherit their entry's `entry_date`,
/// and timestamps written without an offset or as empty strings are
/// normalized so typed records never see them.
fn migrate(value: &mut Value) {
    let Some(root) = value.as_object_mut() else {
        return;
    };

    if let Some(matters) = root.get_mut("matters").and_then(Value::as_array_mut) {
        for matter in matters.iter_mut().filter_map(Value::as_object_mut) {
            normalize_timestamp(matter, "created_at", false);
        }
    }

    if let Some(entries) = root.get_mut("entries").and_then(Value::as_array_mut) {
        for entry in entries.iter_mut().filter_map(Value::as_object_mut) {
            normalize_timestamp(entry, "created_at", true);
            normalize_timestamp(entry, "updated_at", true);

            let entry_date = entry.get("entry_date").cloned();
            let Some(entry_date) = entry_date else {
                continue;
            };
            if let Some(actions) = entry.get_mut("actions").and_then(Value::as_array_mut) {
                for action in actions.iter_mut().filter_map(Value::as_object_mut) {
                    if !action.contains_key("action_date") {
                        action.insert("action_date".to_string(), entry_date.clone());
                    }
                }
            }
        }
    }
}

/// Rewrite a legacy timestamp field in place
///
/// Empty strings become absent (only for optional fields); naive local
/// timestamps written by earlier versions gain a UTC offset marker.
fn normalize_timestamp(record: &mut serde_json::Map<String, Value>, key: &str, optional: bool) {
    let Some(Value::String(s)) = record.get(key) else {
        return;
    };

    if s.is_empty() {
        if optional {
            record.remove(key);
        }
        return;
    }

    if DateTime::parse_from_rfc3339(s).is_ok() {
        return;
    }
    if NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").is_ok() {
        let normalized = format!("{s}Z");
        record.insert(key.to_string(), Value::String(normalized));
    }
}
