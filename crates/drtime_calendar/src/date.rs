// --- File: crates/drtime_calendar/src/date.rs ---
//! Day and month values used by the calendar.

use crate::error::CalendarError;
use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const KEY_FORMAT: &str = "%Y-%m-%d";

/// A specific day. Months are 1-indexed (January = 1).
///
/// Serialized as its `YYYY-MM-DD` key, which is also the lookup key of an
/// [`AvailabilitySet`](crate::availability::AvailabilitySet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Shifts by `days` (negative moves back). Saturates at the range chrono
    /// can represent.
    pub fn add_days(self, days: i64) -> Self {
        match self.0.checked_add_signed(Duration::days(days)) {
            Some(date) => Self(date),
            None if days >= 0 => Self(NaiveDate::MAX),
            None => Self(NaiveDate::MIN),
        }
    }

    /// Canonical `YYYY-MM-DD` key.
    pub fn key(&self) -> String {
        self.0.format(KEY_FORMAT).to_string()
    }

    /// Long human form, e.g. "Wednesday, October 14, 2026".
    pub fn display_long(&self) -> String {
        self.0.format("%A, %B %-d, %Y").to_string()
    }

    pub fn first_of_month(self) -> Self {
        Self(self.0.with_day(1).unwrap_or(self.0))
    }

    pub fn same_month(&self, other: &CalendarDate) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(KEY_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), KEY_FORMAT)
            .map(Self)
            .map_err(|_| CalendarError::InvalidDateKey(s.to_string()))
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.key()
    }
}

/// The month currently on display.
///
/// `current_date` always sits on the 1st so month arithmetic never overflows
/// (Jan 31 + 1 month would otherwise have no answer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewState {
    current_date: CalendarDate,
}

impl ViewState {
    pub fn new(date: CalendarDate) -> Self {
        Self {
            current_date: date.first_of_month(),
        }
    }

    pub fn current_date(&self) -> CalendarDate {
        self.current_date
    }

    pub fn next_month(&mut self) {
        if let Some(next) = self.current_date.0.checked_add_months(Months::new(1)) {
            self.current_date = CalendarDate(next);
        }
    }

    pub fn prev_month(&mut self) {
        if let Some(prev) = self.current_date.0.checked_sub_months(Months::new(1)) {
            self.current_date = CalendarDate(prev);
        }
    }

    /// Heading text, e.g. "October 2026".
    pub fn month_label(&self) -> String {
        self.current_date.0.format("%B %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_key_is_zero_padded() {
        assert_eq!(date(2026, 3, 7).key(), "2026-03-07");
        assert_eq!("2026-03-07".parse::<CalendarDate>().unwrap(), date(2026, 3, 7));
    }

    #[test]
    fn test_invalid_key_is_rejected() {
        assert_eq!(
            "2026-02-30".parse::<CalendarDate>(),
            Err(CalendarError::InvalidDateKey("2026-02-30".to_string()))
        );
        assert!("next tuesday".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn test_weekend_detection() {
        // 2026-10-17 is a Saturday
        assert!(date(2026, 10, 17).is_weekend());
        assert!(date(2026, 10, 18).is_weekend());
        assert!(!date(2026, 10, 19).is_weekend());
    }

    #[test]
    fn test_add_days_crosses_month_and_year() {
        assert_eq!(date(2026, 12, 30).add_days(3), date(2027, 1, 2));
        assert_eq!(date(2026, 3, 1).add_days(-1), date(2026, 2, 28));
    }

    #[test]
    fn test_display_long() {
        assert_eq!(date(2026, 10, 14).display_long(), "Wednesday, October 14, 2026");
        assert_eq!(date(2026, 11, 2).display_long(), "Monday, November 2, 2026");
    }

    #[test]
    fn test_serde_uses_key() {
        let json = serde_json::to_string(&date(2026, 10, 14)).unwrap();
        assert_eq!(json, "\"2026-10-14\"");
        let back: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date(2026, 10, 14));
    }

    #[test]
    fn test_view_state_normalizes_to_first() {
        let mut view = ViewState::new(date(2027, 1, 31));
        assert_eq!(view.current_date(), date(2027, 1, 1));
        view.next_month();
        assert_eq!(view.current_date(), date(2027, 2, 1));
        assert_eq!(view.month_label(), "February 2027");
    }

    #[test]
    fn test_navigation_round_trip() {
        let mut view = ViewState::new(date(2026, 12, 14));
        view.next_month();
        view.next_month();
        assert_eq!(view.month_label(), "February 2027");
        view.prev_month();
        view.prev_month();
        assert_eq!(view.current_date(), date(2026, 12, 1));
    }
}
