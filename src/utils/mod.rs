//! Utility functions

pub mod common;
pub mod id_gen;

pub use common::{normalize_matter_name, now, sanitize_filename};
pub use id_gen::{generate_id, generate_invoice_prefix, generate_record_id};
