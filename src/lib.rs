//! # Work Log Core
//!
//! A retrospective work-time diary library. Work records (entries made of
//! timed actions) are organized under matters (case files), bucketed into
//! fixed 7-day weeks over a closed half-year period, and persisted to a
//! single JSON file with atomic writes. Reports can be exported as CSV or
//! a paginated PDF.
//!
//! ## Features
//!
//! - Fixed period (2024-06-01 to 2024-12-31) with 1-based week bucketing
//! - Matters, entries and actions with derived totals and week indexes
//! - Flat JSON persistence with backup, atomic replace and legacy migration
//! - Invoice attachments stored as independent blobs
//! - CSV exports (per-action and weekly summary) and PDF reports
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use chrono::NaiveDate;
//! use worklog_core::{Action, DataFile};
//!
//! let file = DataFile::new(Path::new("data/worklog.json"));
//! let mut worklog = file.load().unwrap();
//!
//! let matter = worklog.upsert_matter("Smith v. Jones", "Civil");
//! let actions = vec![Action {
//!     action_description: "Drafted motion".to_string(),
//!     duration_minutes: 90,
//!     action_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
//! }];
//! worklog.add_entry(&matter.id, actions, None).unwrap();
//!
//! file.save(&worklog).unwrap();
//! ```

pub mod error;
pub mod export;
pub mod period;
pub mod storage;
pub mod utils;

// Re-export main types
pub use error::{Result, WorklogError};
pub use export::{ReportFilter, pdf_report, weekly_summary_csv, work_entries_csv};
pub use period::{Week, all_weeks, format_hhmm, week_boundaries, week_index_of};
pub use storage::invoices::InvoiceStore;
pub use storage::models::{Action, Entry, InvoiceChange, InvoiceInfo, Matter};
pub use storage::persist::DataFile;
pub use storage::state::Worklog;

/// Data file name
pub const DATA_FILENAME: &str = "worklog.json";

/// Extension appended to the data file name for the best-effort backup copy
pub const BACKUP_EXTENSION: &str = "bak";

/// Directory name for stored invoice files
pub const INVOICES_DIRNAME: &str = "invoices";

/// Granularity of action durations, in minutes
pub const DURATION_STEP_MINUTES: i64 = 15;

/// Length of the random prefix on invoice storage filenames
pub const INVOICE_PREFIX_LENGTH: usize = 16;

/// Font family name expected by the PDF report generator
pub const PDF_FONT_FAMILY: &str = "NotoSans";
