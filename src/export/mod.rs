//! Report export functionality
//!
//! Shared building blocks for the CSV and PDF exports: the report filter,
//! the entry/matter join and the per-week totals. Every exported report is
//! prefixed with the retrospective disclaimer.

mod csv;
mod pdf;

pub use self::csv::{weekly_summary_csv, work_entries_csv};
pub use self::pdf::pdf_report;

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::storage::models::Entry;
use crate::storage::state::Worklog;

/// Retrospective disclaimer text
pub const DISCLAIMER_TEXT: &str = "Work log organized retrospectively from existing records.";

/// Retrospective disclaimer text (Hebrew)
pub const DISCLAIMER_TEXT_HE: &str = "יומן עבודה מאורגן רטרוספקטיבית מרשומות קיימות.";

/// Placeholder matter name for entries whose matter no longer resolves
pub const UNKNOWN_MATTER_NAME: &str = "Unknown";

/// Filter applied to report entries
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    /// Only entries of this matter
    pub matter_id: Option<String>,
    /// Only entries of matters with this case type
    pub case_type: Option<String>,
    /// Only entries with an effective date on or after this date
    pub date_start: Option<NaiveDate>,
    /// Only entries with an effective date on or before this date
    pub date_end: Option<NaiveDate>,
}

/// An entry joined with its matter's display fields
#[derive(Debug, Clone)]
pub struct ReportEntry<'a> {
    /// The underlying entry
    pub entry: &'a Entry,
    /// Name of the owning matter
    pub matter_name: String,
    /// Case type of the owning matter
    pub case_type: String,
}

/// Join entries with matter info and apply the filter
pub fn report_entries<'a>(worklog: &'a Worklog, filter: &ReportFilter) -> Vec<ReportEntry<'a>> {
    worklog
        .entries
        .iter()
        .map(|entry| {
            let matter = worklog.matter(&entry.matter_id);
            ReportEntry {
                entry,
                matter_name: matter
                    .map(|m| m.name.clone())
                    .unwrap_or_else(|| UNKNOWN_MATTER_NAME.to_string()),
                case_type: matter.map(|m| m.case_type.clone()).unwrap_or_default(),
            }
        })
        .filter(|re| {
            if let Some(matter_id) = &filter.matter_id {
                if &re.entry.matter_id != matter_id {
                    return false;
                }
            }
            if let Some(case_type) = &filter.case_type {
                if &re.case_type != case_type {
                    return false;
                }
            }
            if let Some(start) = filter.date_start {
                if re.entry.entry_date < start {
                    return false;
                }
            }
            if let Some(end) = filter.date_end {
                if re.entry.entry_date > end {
                    return false;
                }
            }
            true
        })
        .collect()
}

/// Total minutes per week index over the given report entries
pub fn week_totals(entries: &[ReportEntry<'_>]) -> BTreeMap<u32, i64> {
    let mut totals = BTreeMap::new();
    for re in entries {
        *totals.entry(re.entry.week_index).or_insert(0) += re.entry.total_minutes;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::models::Action;

    fn action(description: &str, minutes: i64, month: u32, day: u32) -> Action {
        Action {
            action_description: description.to_string(),
            duration_minutes: minutes,
            action_date: NaiveDate::from_ymd_opt(2024, month, day).unwrap(),
        }
    }

    fn sample_worklog() -> (Worklog, String, String) {
        let mut worklog = Worklog::new();
        let civil = worklog.upsert_matter("Civil Matter", "Civil");
        let criminal = worklog.upsert_matter("Criminal Matter", "Criminal");
        worklog
            .add_entry(&civil.id, vec![action("Research", 30, 6, 3)], None)
            .unwrap();
        worklog
            .add_entry(&civil.id, vec![action("Hearing", 120, 7, 1)], None)
            .unwrap();
        worklog
            .add_entry(&criminal.id, vec![action("Filing", 45, 6, 3)], None)
            .unwrap();
        (worklog, civil.id, criminal.id)
    }

    #[test]
    fn test_report_entries_join() {
        let (worklog, _, _) = sample_worklog();
        let entries = report_entries(&worklog, &ReportFilter::default());
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].matter_name, "Civil Matter");
        assert_eq!(entries[0].case_type, "Civil");
    }

    #[test]
    fn test_report_entries_unknown_matter() {
        let (mut worklog, _, _) = sample_worklog();
        worklog.entries[0].matter_id = "gone".to_string();

        let entries = report_entries(&worklog, &ReportFilter::default());
        assert_eq!(entries[0].matter_name, UNKNOWN_MATTER_NAME);
        assert_eq!(entries[0].case_type, "");
    }

    #[test]
    fn test_report_entries_matter_filter() {
        let (worklog, civil_id, _) = sample_worklog();
        let filter = ReportFilter {
            matter_id: Some(civil_id),
            ..Default::default()
        };
        let entries = report_entries(&worklog, &filter);
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|re| re.matter_name == "Civil Matter"));
    }

    #[test]
    fn test_report_entries_case_type_filter() {
        let (worklog, _, _) = sample_worklog();
        let filter = ReportFilter {
            case_type: Some("Criminal".to_string()),
            ..Default::default()
        };
        assert_eq!(report_entries(&worklog, &filter).len(), 1);
    }

    #[test]
    fn test_report_entries_date_filters() {
        let (worklog, _, _) = sample_worklog();
        let filter = ReportFilter {
            date_start: Some(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()),
            ..Default::default()
        };
        assert_eq!(report_entries(&worklog, &filter).len(), 1);

        let filter = ReportFilter {
            date_end: Some(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()),
            ..Default::default()
        };
        assert_eq!(report_entries(&worklog, &filter).len(), 2);
    }

    #[test]
    fn test_week_totals() {
        let (worklog, _, _) = sample_worklog();
        let entries = report_entries(&worklog, &ReportFilter::default());
        let totals = week_totals(&entries);

        // 2024-06-03 is week 1, 2024-07-01 is week 5
        assert_eq!(totals.get(&1), Some(&75));
        assert_eq!(totals.get(&5), Some(&120));
        assert_eq!(totals.values().sum::<i64>(), 195);
    }
}
