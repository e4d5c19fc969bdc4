use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::calendar;
use crate::error::ValidationError;

/// Sprint length used when a board has no stored parameters.
pub const DEFAULT_DURATION: u32 = 10;

/// Longest accepted sprint: one working year.
pub const MAX_DURATION: u32 = 260;

/// Sprint parameters supplied by the user for one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub start_date: NaiveDate,
    /// Sprint length in weekdays.
    pub duration: u32,
    /// Label marking unplanned work among the done cards. Empty for none.
    #[serde(default)]
    pub interference_label: String,
}

impl UserInput {
    /// Validated parameters. A weekend start date moves to the next Monday.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDuration`] unless `duration` is in
    /// `1..=MAX_DURATION`.
    pub fn new(
        start_date: NaiveDate,
        duration: u32,
        interference_label: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if !(1..=MAX_DURATION).contains(&duration) {
            return Err(ValidationError::InvalidDuration(duration));
        }
        Ok(Self {
            start_date: calendar::fix_start_date(start_date),
            duration,
            interference_label: interference_label.into().trim().to_string(),
        })
    }

    /// Parameters offered for a board seen for the first time:
    /// started yesterday, no interference label.
    pub fn defaults(today: NaiveDate, duration: u32) -> Self {
        Self {
            start_date: today.checked_sub_days(Days::new(1)).unwrap_or(today),
            duration: duration.clamp(1, MAX_DURATION),
            interference_label: String::new(),
        }
    }

    pub fn interference_label(&self) -> Option<&str> {
        Some(self.interference_label.as_str()).filter(|l| !l.is_empty())
    }

    pub fn end_date(&self) -> NaiveDate {
        calendar::end_date(self.start_date, self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn new_rejects_zero_duration() {
        assert_eq!(
            UserInput::new(date("2015-08-17"), 0, ""),
            Err(ValidationError::InvalidDuration(0))
        );
    }

    #[test]
    fn new_rejects_durations_beyond_a_working_year() {
        assert!(UserInput::new(date("2015-08-17"), MAX_DURATION, "").is_ok());
        assert_eq!(
            UserInput::new(date("2015-08-17"), MAX_DURATION + 1, ""),
            Err(ValidationError::InvalidDuration(MAX_DURATION + 1))
        );
        assert_eq!(
            UserInput::new(date("2015-08-17"), 100_000_000, ""),
            Err(ValidationError::InvalidDuration(100_000_000))
        );
    }

    #[test]
    fn defaults_clamp_configured_duration() {
        let input = UserInput::defaults(date("2015-08-21"), 100_000_000);
        assert_eq!(input.duration, MAX_DURATION);
        assert_eq!(UserInput::defaults(date("2015-08-21"), 0).duration, 1);
    }

    #[test]
    fn new_fixes_weekend_start() {
        let input = UserInput::new(date("2015-08-22"), 10, " Bug-Interference ").unwrap();
        assert_eq!(input.start_date, date("2015-08-24"));
        assert_eq!(input.interference_label(), Some("Bug-Interference"));
    }

    #[test]
    fn defaults_start_yesterday() {
        let input = UserInput::defaults(date("2015-08-21"), DEFAULT_DURATION);
        assert_eq!(input.start_date, date("2015-08-20"));
        assert_eq!(input.duration, 10);
        assert_eq!(input.interference_label(), None);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let input = UserInput::new(date("2015-08-17"), 5, "").unwrap();
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["startDate"], "2015-08-17");
        assert_eq!(json["duration"], 5);
        assert_eq!(json["interferenceLabel"], "");
    }

    #[test]
    fn missing_interference_label_deserializes_empty() {
        let input: UserInput =
            serde_json::from_str(r#"{"startDate": "2015-08-17", "duration": 10}"#).unwrap();
        assert_eq!(input.interference_label, "");
        assert_eq!(input.end_date(), date("2015-08-28"));
    }
}
