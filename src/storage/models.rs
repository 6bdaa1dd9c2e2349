//! Data models for work log entities

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A named case file that entries are organized under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matter {
    /// Unique matter ID (UUID)
    pub id: String,
    /// Matter name; lookups are case-insensitive and trim-normalized
    pub name: String,
    /// Free-text case type
    #[serde(default)]
    pub case_type: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A single dated, timed line item within an entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Free-text description of the work performed
    pub action_description: String,
    /// Duration in minutes; must be a positive multiple of 15
    pub duration_minutes: i64,
    /// Date the work was performed, within the period
    pub action_date: NaiveDate,
}

/// A work record grouping one or more actions under one matter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique entry ID (UUID)
    pub id: String,
    /// Effective date: the earliest action date
    pub entry_date: NaiveDate,
    /// Week bucket of the effective date
    pub week_index: u32,
    /// ID of the owning matter
    pub matter_id: String,
    /// Actions in display order
    pub actions: Vec<Action>,
    /// Sum of action durations
    pub total_minutes: i64,
    /// User-visible filename of the attached invoice
    #[serde(default)]
    pub invoice_original_filename: Option<String>,
    /// Collision-safe storage filename of the attached invoice
    #[serde(default)]
    pub invoice_storage_filename: Option<String>,
    /// Full path of the stored invoice file
    #[serde(default)]
    pub invoice_path: Option<String>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entry {
    /// Invoice metadata, if an invoice is attached
    pub fn invoice(&self) -> Option<InvoiceInfo> {
        match (
            &self.invoice_original_filename,
            &self.invoice_storage_filename,
            &self.invoice_path,
        ) {
            (Some(original), Some(storage), Some(path)) => Some(InvoiceInfo {
                original_filename: original.clone(),
                storage_filename: storage.clone(),
                path: path.clone(),
            }),
            _ => None,
        }
    }

    pub(crate) fn set_invoice(&mut self, invoice: Option<&InvoiceInfo>) {
        self.invoice_original_filename = invoice.map(|i| i.original_filename.clone());
        self.invoice_storage_filename = invoice.map(|i| i.storage_filename.clone());
        self.invoice_path = invoice.map(|i| i.path.clone());
    }
}

/// Metadata for a stored invoice file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceInfo {
    /// Filename as uploaded by the user
    pub original_filename: String,
    /// Prefixed filename under the invoices directory
    pub storage_filename: String,
    /// Full path of the stored file
    pub path: String,
}

/// Requested change to an entry's invoice attachment
#[derive(Debug, Clone, PartialEq)]
pub enum InvoiceChange {
    /// Leave the current attachment as is
    Keep,
    /// Attach a new invoice, releasing any previous one
    Replace(InvoiceInfo),
    /// Detach the invoice, releasing the stored file
    Remove,
}
