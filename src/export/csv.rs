//! CSV report generation
//!
//! Two exports: one row per action across all entries, and a weekly
//! summary with one row per week in the period (including empty weeks).
//! Output is UTF-8 with a BOM for spreadsheet compatibility, and the
//! first data row is the retrospective disclaimer.

use crate::error::{Result, WorklogError};
use crate::period::{all_weeks, format_hhmm};
use crate::storage::state::Worklog;

use super::{DISCLAIMER_TEXT, ReportFilter, report_entries, week_totals};

/// UTF-8 byte order mark
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Generate the per-action CSV
///
/// Columns: week index, action date, matter name, case type, description,
/// formatted duration, entry id, invoice filename and path, timestamps.
pub fn work_entries_csv(worklog: &Worklog, filter: &ReportFilter) -> Result<Vec<u8>> {
    let entries = report_entries(worklog, filter);

    let mut buffer = Vec::new();
    buffer.extend_from_slice(UTF8_BOM);
    let mut writer = csv::Writer::from_writer(buffer);

    writer.write_record([
        "week_index",
        "action_date",
        "matter_name",
        "case_type",
        "action_description",
        "action_minutes",
        "entry_id",
        "invoice_original_filename",
        "invoice_path",
        "created_at",
        "updated_at",
    ])?;

    // Disclaimer row, in the matter name column
    writer.write_record(["", "", DISCLAIMER_TEXT, "", "", "", "", "", "", "", ""])?;

    for re in &entries {
        let entry = re.entry;
        for action in &entry.actions {
            writer.write_record([
                entry.week_index.to_string(),
                action.action_date.to_string(),
                re.matter_name.clone(),
                re.case_type.clone(),
                action.action_description.clone(),
                format_hhmm(action.duration_minutes),
                entry.id.clone(),
                entry.invoice_original_filename.clone().unwrap_or_default(),
                entry.invoice_path.clone().unwrap_or_default(),
                entry.created_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
                entry.updated_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
            ])?;
        }
    }

    finish(writer)
}

/// Generate the weekly summary CSV
///
/// One row per week of the period, weeks without entries included with a
/// zero total.
pub fn weekly_summary_csv(worklog: &Worklog, filter: &ReportFilter) -> Result<Vec<u8>> {
    let entries = report_entries(worklog, filter);
    let totals = week_totals(&entries);

    let mut buffer = Vec::new();
    buffer.extend_from_slice(UTF8_BOM);
    let mut writer = csv::Writer::from_writer(buffer);

    writer.write_record([
        "week_index",
        "week_start",
        "week_end",
        "total_minutes",
        "total_hhmm",
    ])?;
    writer.write_record(["", DISCLAIMER_TEXT, "", "", ""])?;

    for week in all_weeks() {
        let total = totals.get(&week.index).copied().unwrap_or(0);
        writer.write_record([
            week.index.to_string(),
            week.start.to_string(),
            week.end.to_string(),
            total.to_string(),
            format_hhmm(total),
        ])?;
    }

    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| WorklogError::Export(e.to_string()))
}
