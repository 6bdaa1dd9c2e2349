//! Week arithmetic over the fixed work log period
//!
//! The period is a closed calendar range (2024-06-01 to 2024-12-31) split
//! into consecutive 7-day weeks anchored at the period start. Week indexes
//! are 1-based and always re-derivable from a date alone, so reports
//! regenerated later stay consistent.

use chrono::{Days, NaiveDate};

use crate::error::{Result, WorklogError};

/// First day of the work log period
pub fn period_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid period start")
}

/// Last day of the work log period (inclusive)
pub fn period_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid period end")
}

/// A 7-day bucket of the period; the final week may be shorter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    /// 1-based week index
    pub index: u32,
    /// First day of the week
    pub start: NaiveDate,
    /// Last day of the week (inclusive, clamped to the period end)
    pub end: NaiveDate,
}

/// Check whether a date lies within the period
pub fn date_in_period(date: NaiveDate) -> bool {
    date >= period_start() && date <= period_end()
}

/// Compute the 1-based week index for a date
///
/// Week 1 is 2024-06-01 to 2024-06-07, week 2 starts 2024-06-08, and so on.
pub fn week_index_of(date: NaiveDate) -> Result<u32> {
    if !date_in_period(date) {
        return Err(WorklogError::DateOutOfRange(date));
    }

    let days_since_start = (date - period_start()).num_days();
    Ok((days_since_start / 7) as u32 + 1)
}

/// Get the start and end dates for a week index
///
/// The end date of the last week is clamped to the period end.
pub fn week_boundaries(week_index: u32) -> Result<(NaiveDate, NaiveDate)> {
    if week_index < 1 {
        return Err(WorklogError::InvalidWeekIndex(week_index));
    }

    let start = period_start() + Days::new((week_index as u64 - 1) * 7);
    let mut end = start + Days::new(6);
    if end > period_end() {
        end = period_end();
    }

    Ok((start, end))
}

/// Total number of weeks in the period (31)
pub fn total_weeks() -> u32 {
    let total_days = (period_end() - period_start()).num_days() + 1;
    ((total_days + 6) / 7) as u32
}

/// Enumerate every week of the period in order
pub fn all_weeks() -> Vec<Week> {
    (1..=total_weeks())
        .map(|index| {
            let (start, end) = week_boundaries(index).expect("index >= 1");
            Week { index, start, end }
        })
        .collect()
}

/// Format minutes as a zero-padded "HH:MM" string
///
/// Negative input is treated as zero, for display purposes.
pub fn format_hhmm(minutes: i64) -> String {
    if minutes < 0 {
        return "00:00".to_string();
    }
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
