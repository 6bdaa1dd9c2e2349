//! Invoice file storage
//!
//! Invoices are stored as independent blobs under a dedicated directory.
//! Each file is named by a random prefix plus the sanitized original
//! filename, so uploads never collide and path-unsafe names never reach
//! the filesystem. The entry referencing an invoice owns it exclusively.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::Result;
use crate::storage::models::InvoiceInfo;
use crate::utils::{generate_invoice_prefix, sanitize_filename};

/// Store for invoice files under one directory
pub struct InvoiceStore {
    folder: PathBuf,
}

impl InvoiceStore {
    /// Create a store rooted at the given directory
    pub fn new(folder: &Path) -> Self {
        Self {
            folder: folder.to_path_buf(),
        }
    }

    /// The invoice directory
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Store an uploaded invoice and return its metadata
    pub fn save(&self, original_filename: &str, contents: &[u8]) -> Result<InvoiceInfo> {
        fs::create_dir_all(&self.folder)?;

        let storage_filename = format!(
            "{}_{}",
            generate_invoice_prefix(),
            sanitize_filename(original_filename)
        );
        let path = self.folder.join(&storage_filename);
        fs::write(&path, contents)?;

        Ok(InvoiceInfo {
            original_filename: original_filename.to_string(),
            storage_filename,
            path: path.to_string_lossy().to_string(),
        })
    }

    /// Delete a stored invoice file
    ///
    /// Returns true if a file was removed. A missing file is not an error;
    /// a failed removal is logged and reported as false.
    pub fn delete(&self, storage_filename: &str) -> bool {
        if storage_filename.is_empty() {
            return false;
        }

        let path = self.folder.join(storage_filename);
        if !path.exists() {
            return false;
        }

        match fs::remove_file(&path) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to delete invoice {}: {}", path.display(), e);
                false
            }
        }
    }

    /// Full path of a stored invoice, if the file exists
    pub fn path_of(&self, storage_filename: &str) -> Option<PathBuf> {
        if storage_filename.is_empty() {
            return None;
        }

        let path = self.folder.join(storage_filename);
        path.exists().then_some(path)
    }
}
