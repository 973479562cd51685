// --- File: crates/drtime_calendar/src/lib.rs ---
// Declare modules within this crate
pub mod availability;
pub mod calendar;
pub mod date;
pub mod error;
pub mod grid;
#[cfg(test)]
mod grid_proptest;
#[cfg(test)]
mod grid_test;
pub mod handlers;
pub mod notification;
pub mod pipeline;
pub mod routes;
pub mod selection;
pub mod service;
pub mod validation;
#[cfg(test)]
mod validation_test;

pub use calendar::{AvailabilityCalendar, CalendarSettings, CalendarSnapshot};
pub use date::{CalendarDate, ViewState};
pub use error::{CalendarError, SubmissionError, ValidationError};
