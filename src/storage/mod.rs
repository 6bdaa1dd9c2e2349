//! Data store: in-memory state, JSON persistence and invoice files

pub mod invoices;
pub mod models;
pub mod persist;
pub mod state;
pub mod validate;

pub use invoices::InvoiceStore;
pub use models::{Action, Entry, InvoiceChange, InvoiceInfo, Matter};
pub use persist::DataFile;
pub use state::Worklog;
