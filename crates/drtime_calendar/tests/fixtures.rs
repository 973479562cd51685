//! Test fixtures for calendar tests
//!
//! Factory functions shared by the integration tests.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use drtime_calendar::availability::AvailabilitySet;
use drtime_calendar::validation::BookingForm;
use drtime_calendar::{AvailabilityCalendar, CalendarDate, CalendarSettings};
use drtime_common::logging;
use drtime_common::services::FixedClock;
use std::sync::Arc;

/// Routes test output through the shared subscriber; safe to call repeatedly.
pub fn init_test_logging() {
    logging::init_with_level(tracing::Level::DEBUG);
}

/// Wednesday, 2026-10-14 at 10:00.
pub fn test_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 14)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::from_ymd(y, m, d).unwrap()
}

/// Two bookable days in October and one in November.
pub fn create_test_availability() -> AvailabilitySet {
    vec![
        (
            date(2026, 10, 15),
            vec!["9:00 AM".to_string(), "10:00 AM".to_string()],
        ),
        (date(2026, 10, 16), vec!["2:00 PM".to_string()]),
        (date(2026, 10, 19), Vec::new()),
        (date(2026, 11, 2), vec!["11:00 AM".to_string()]),
    ]
    .into_iter()
    .collect()
}

pub fn create_test_calendar() -> (AvailabilityCalendar, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(test_now()));
    let calendar = AvailabilityCalendar::with_availability(
        create_test_availability(),
        clock.clone(),
        CalendarSettings::default(),
    );
    (calendar, clock)
}

pub fn create_booking_form(service: &str, email: &str) -> BookingForm {
    BookingForm {
        service: service.to_string(),
        name: "Ada Lovelace".to_string(),
        email: email.to_string(),
        phone: "+41 79 123 45 67".to_string(),
        notes: "First visit".to_string(),
    }
}
