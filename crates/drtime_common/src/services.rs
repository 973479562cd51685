// --- File: crates/drtime_common/src/services.rs ---
//! Service abstractions for collaborators of the calendar.
//!
//! The calendar core never talks to a backend or reads the system clock
//! directly. It goes through these traits so tests can substitute scripted
//! implementations.

use crate::models::{BookingAcknowledgement, BookingPayload};
use chrono::{Local, NaiveDate, NaiveDateTime};
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use thiserror::Error;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Failures a booking backend can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingServiceError {
    /// The slot was taken between selection and submission.
    #[error("Slot no longer available: {0}")]
    Conflict(String),
    /// The backend could not be reached or did not answer in time.
    #[error("Booking backend unavailable: {0}")]
    Unavailable(String),
}

/// A trait for booking backend operations.
pub trait BookingService: Send + Sync {
    /// Submit one booking. Resolves once the backend acknowledged it.
    fn submit_booking(
        &self,
        payload: BookingPayload,
    ) -> BoxFuture<'_, BookingAcknowledgement, BookingServiceError>;
}

/// Source of "now" for everything date related.
pub trait Clock: Send + Sync {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Current local date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the local system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Moves the clock to `now`.
    pub fn set(&self, now: NaiveDateTime) {
        let mut guard = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = now;
    }

    /// Moves the clock forward by `delta`.
    pub fn advance(&self, delta: chrono::Duration) {
        let mut guard = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard += delta;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    #[test]
    fn test_fixed_clock_advances() {
        let start = NaiveDate::from_ymd_opt(2026, 10, 14)
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap();
        let clock = FixedClock::new(start);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 10, 14).unwrap());

        clock.advance(Duration::hours(2));
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 10, 15).unwrap());
    }
}
