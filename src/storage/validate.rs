//! Validation of actions and entry inputs

use chrono::NaiveDate;

use crate::DURATION_STEP_MINUTES;
use crate::error::{Result, WorklogError};
use crate::period;
use crate::storage::models::Action;

/// Validate that a duration is a positive multiple of 15 minutes
pub fn validate_duration(minutes: i64) -> Result<()> {
    if minutes <= 0 {
        return Err(WorklogError::Validation(
            "Duration must be greater than 0".to_string(),
        ));
    }
    if minutes % DURATION_STEP_MINUTES != 0 {
        return Err(WorklogError::Validation(
            "Duration must be a multiple of 15 minutes".to_string(),
        ));
    }
    Ok(())
}

/// Validate a single action: description, duration and date
pub fn validate_action(action: &Action) -> Result<()> {
    if action.action_description.trim().is_empty() {
        return Err(WorklogError::Validation(
            "Action description cannot be empty".to_string(),
        ));
    }
    validate_duration(action.duration_minutes)?;
    if !period::date_in_period(action.action_date) {
        return Err(WorklogError::DateOutOfRange(action.action_date));
    }
    Ok(())
}

/// Validate an entry's action list
///
/// At least one action is required, and every action must be valid. Errors
/// are prefixed with the 1-based action position.
pub fn validate_actions(actions: &[Action]) -> Result<()> {
    if actions.is_empty() {
        return Err(WorklogError::Validation(
            "At least one action is required".to_string(),
        ));
    }
    for (i, action) in actions.iter().enumerate() {
        validate_action(action).map_err(|e| {
            WorklogError::Validation(format!("Action {}: {}", i + 1, e))
        })?;
    }
    Ok(())
}

/// Derive an entry's effective date: the earliest action date
pub fn effective_date(actions: &[Action]) -> Result<NaiveDate> {
    actions
        .iter()
        .map(|a| a.action_date)
        .min()
        .ok_or_else(|| WorklogError::Validation("At least one action is required".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(description: &str, minutes: i64, day: u32) -> Action {
        Action {
            action_description: description.to_string(),
            duration_minutes: minutes,
            action_date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
        }
    }

    #[test]
    fn test_validate_duration_valid() {
        for minutes in [15, 30, 45, 60, 480] {
            assert!(validate_duration(minutes).is_ok(), "{} should be valid", minutes);
        }
    }

    #[test]
    fn test_validate_duration_invalid() {
        for minutes in [0, -15, 10, 20] {
            assert!(
                matches!(validate_duration(minutes), Err(WorklogError::Validation(_))),
                "{} should be invalid",
                minutes
            );
        }
    }

    #[test]
    fn test_validate_action_valid() {
        assert!(validate_action(&action("Drafted motion", 30, 15)).is_ok());
    }

    #[test]
    fn test_validate_action_empty_description() {
        assert!(validate_action(&action("", 30, 15)).is_err());
        assert!(validate_action(&action("   ", 30, 15)).is_err());
    }

    #[test]
    fn test_validate_action_bad_duration() {
        assert!(validate_action(&action("Work", 10, 15)).is_err());
    }

    #[test]
    fn test_validate_action_date_out_of_period() {
        let mut bad = action("Work", 30, 15);
        bad.action_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(matches!(
            validate_action(&bad),
            Err(WorklogError::DateOutOfRange(_))
        ));
    }

    #[test]
    fn test_validate_actions_empty_list() {
        assert!(validate_actions(&[]).is_err());
    }

    #[test]
    fn test_validate_actions_reports_position() {
        let actions = vec![action("Valid", 30, 15), action("", 15, 16)];
        match validate_actions(&actions) {
            Err(WorklogError::Validation(msg)) => assert!(msg.starts_with("Action 2:")),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_effective_date_is_earliest() {
        let actions = vec![action("A", 30, 20), action("B", 45, 15), action("C", 15, 18)];
        assert_eq!(
            effective_date(&actions).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
    }

    #[test]
    fn test_effective_date_empty_is_error() {
        assert!(effective_date(&[]).is_err());
    }
}
