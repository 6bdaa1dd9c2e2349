//! In-memory work log state and CRUD operations
//!
//! `Worklog` owns the matters and entries collections. It is an explicit,
//! caller-owned value: the caller loads it from a [`DataFile`], threads it
//! through operations, and saves it back.
//!
//! [`DataFile`]: crate::storage::persist::DataFile

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WorklogError};
use crate::period;
use crate::storage::models::{Action, Entry, InvoiceChange, InvoiceInfo, Matter};
use crate::storage::validate;
use crate::utils::{generate_record_id, normalize_matter_name, now};

/// The entire application state: matters and entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Worklog {
    /// All matters
    pub matters: Vec<Matter>,
    /// All entries
    pub entries: Vec<Entry>,
}

impl Worklog {
    /// Create an empty work log
    pub fn new() -> Self {
        Self::default()
    }

    // Matter operations

    /// Get a matter by ID
    pub fn matter(&self, matter_id: &str) -> Option<&Matter> {
        self.matters.iter().find(|m| m.id == matter_id)
    }

    /// Get a matter by name (case-insensitive, trim-normalized)
    pub fn matter_by_name(&self, name: &str) -> Option<&Matter> {
        let normalized = normalize_matter_name(name);
        self.matters
            .iter()
            .find(|m| normalize_matter_name(&m.name) == normalized)
    }

    /// Create a matter, or update the case type of an existing one
    ///
    /// Matters are unique by normalized name: if a match exists its case
    /// type is updated in place, otherwise a new matter is created.
    pub fn upsert_matter(&mut self, name: &str, case_type: &str) -> Matter {
        let normalized = normalize_matter_name(name);
        if let Some(existing) = self
            .matters
            .iter_mut()
            .find(|m| normalize_matter_name(&m.name) == normalized)
        {
            existing.case_type = case_type.to_string();
            return existing.clone();
        }

        let matter = Matter {
            id: generate_record_id(),
            name: name.trim().to_string(),
            case_type: case_type.to_string(),
            created_at: now(),
        };
        self.matters.push(matter.clone());
        matter
    }

    /// Update an existing matter's name and case type
    pub fn update_matter(&mut self, matter_id: &str, name: &str, case_type: &str) -> Result<Matter> {
        let matter = self
            .matters
            .iter_mut()
            .find(|m| m.id == matter_id)
            .ok_or_else(|| WorklogError::MatterNotFound(matter_id.to_string()))?;

        matter.name = name.trim().to_string();
        matter.case_type = case_type.to_string();
        Ok(matter.clone())
    }

    /// Delete a matter
    ///
    /// Rejected with [`WorklogError::MatterInUse`] while any entry still
    /// references the matter.
    pub fn delete_matter(&mut self, matter_id: &str) -> Result<Matter> {
        let position = self
            .matters
            .iter()
            .position(|m| m.id == matter_id)
            .ok_or_else(|| WorklogError::MatterNotFound(matter_id.to_string()))?;

        if self.entries.iter().any(|e| e.matter_id == matter_id) {
            return Err(WorklogError::MatterInUse(matter_id.to_string()));
        }

        Ok(self.matters.remove(position))
    }

    // Entry operations

    /// Get an entry by ID
    pub fn entry(&self, entry_id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == entry_id)
    }

    /// Add a new entry
    ///
    /// The effective date is the earliest action date; week index and total
    /// minutes are derived from it and the action list. The matter must
    /// exist and the action list must pass validation.
    pub fn add_entry(
        &mut self,
        matter_id: &str,
        actions: Vec<Action>,
        invoice: Option<InvoiceInfo>,
    ) -> Result<Entry> {
        if self.matter(matter_id).is_none() {
            return Err(WorklogError::MatterNotFound(matter_id.to_string()));
        }
        validate::validate_actions(&actions)?;

        let entry_date = validate::effective_date(&actions)?;
        let week_index = period::week_index_of(entry_date)?;
        let total_minutes = actions.iter().map(|a| a.duration_minutes).sum();
        let timestamp = now();

        let mut entry = Entry {
            id: generate_record_id(),
            entry_date,
            week_index,
            matter_id: matter_id.to_string(),
            actions,
            total_minutes,
            invoice_original_filename: None,
            invoice_storage_filename: None,
            invoice_path: None,
            created_at: Some(timestamp),
            updated_at: Some(timestamp),
        };
        entry.set_invoice(invoice.as_ref());

        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Update an existing entry, re-deriving all computed fields
    ///
    /// Either the whole update succeeds or the entry is left untouched.
    /// Returns the updated entry together with the invoice released by a
    /// `Replace` or `Remove` change; the caller is responsible for deleting
    /// the released file.
    pub fn update_entry(
        &mut self,
        entry_id: &str,
        matter_id: &str,
        actions: Vec<Action>,
        invoice_change: InvoiceChange,
    ) -> Result<(Entry, Option<InvoiceInfo>)> {
        if self.matter(matter_id).is_none() {
            return Err(WorklogError::MatterNotFound(matter_id.to_string()));
        }
        validate::validate_actions(&actions)?;

        let entry_date = validate::effective_date(&actions)?;
        let week_index = period::week_index_of(entry_date)?;
        let total_minutes = actions.iter().map(|a| a.duration_minutes).sum();

        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == entry_id)
            .ok_or_else(|| WorklogError::EntryNotFound(entry_id.to_string()))?;

        entry.entry_date = entry_date;
        entry.week_index = week_index;
        entry.matter_id = matter_id.to_string();
        entry.actions = actions;
        entry.total_minutes = total_minutes;
        entry.updated_at = Some(now());

        let released = match invoice_change {
            InvoiceChange::Keep => None,
            InvoiceChange::Replace(new_invoice) => {
                let previous = entry.invoice();
                entry.set_invoice(Some(&new_invoice));
                previous
            }
            InvoiceChange::Remove => {
                let previous = entry.invoice();
                entry.set_invoice(None);
                previous
            }
        };

        Ok((entry.clone(), released))
    }

    /// Delete an entry, returning it if found
    ///
    /// The returned entry still carries its invoice fields; the caller is
    /// responsible for deleting the stored file.
    pub fn delete_entry(&mut self, entry_id: &str) -> Option<Entry> {
        let position = self.entries.iter().position(|e| e.id == entry_id)?;
        Some(self.entries.remove(position))
    }

    // Queries

    /// All entries in a given week
    pub fn entries_by_week(&self, week_index: u32) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| e.week_index == week_index)
            .collect()
    }

    /// All entries for a given matter
    pub fn entries_by_matter(&self, matter_id: &str) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| e.matter_id == matter_id)
            .collect()
    }

    /// Total recorded minutes for a matter
    pub fn matter_total_minutes(&self, matter_id: &str) -> i64 {
        self.entries
            .iter()
            .filter(|e| e.matter_id == matter_id)
            .map(|e| e.total_minutes)
            .sum()
    }

    /// Distinct non-empty action descriptions across all entries
    ///
    /// Descriptions belonging to `preferred_matter_id` come first; each
    /// partition is sorted and the second contains no duplicates of the
    /// first.
    pub fn unique_action_descriptions(&self, preferred_matter_id: Option<&str>) -> Vec<String> {
        let mut matter_descriptions = BTreeSet::new();
        let mut other_descriptions = BTreeSet::new();

        for entry in &self.entries {
            for action in &entry.actions {
                let description = action.action_description.trim();
                if description.is_empty() {
                    continue;
                }
                if preferred_matter_id == Some(entry.matter_id.as_str()) {
                    matter_descriptions.insert(description.to_string());
                } else {
                    other_descriptions.insert(description.to_string());
                }
            }
        }

        let mut result: Vec<String> = matter_descriptions.iter().cloned().collect();
        result.extend(
            other_descriptions
                .into_iter()
                .filter(|d| !matter_descriptions.contains(d)),
        );
        result
    }
}
