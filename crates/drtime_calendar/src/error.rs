// --- File: crates/drtime_calendar/src/error.rs ---
use crate::date::CalendarDate;
use drtime_common::error::{
    conflict, internal_error, parse_error, unavailable, validation_error, DrtimeError,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// `select_slot` was called before any date was selected.
    #[error("No date selected; a slot can only be chosen for a selected date")]
    InvalidSelectionState,
    #[error("Date {0} is not available for booking")]
    DateNotSelectable(CalendarDate),
    #[error("Slot {0:?} is not offered on the selected date")]
    SlotNotAvailable(String),
    #[error("Invalid date key {0:?}, expected YYYY-MM-DD")]
    InvalidDateKey(String),
    #[error("Random source failed: {0}")]
    RandomSource(String),
}

/// Field names reported by [`ValidationError::MissingRequiredField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Service,
    Date,
    Slot,
    Name,
    Email,
    Phone,
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FormField::Service => "service",
            FormField::Date => "date",
            FormField::Slot => "time slot",
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields (missing {0})")]
    MissingRequiredField(FormField),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Unknown service {0:?}")]
    UnknownService(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("A booking is already being submitted")]
    AlreadySubmitting,
    #[error("No booking is being submitted")]
    NotSubmitting,
    #[error("Completion does not belong to the booking in flight")]
    TokenMismatch,
    #[error("This time slot was just booked by someone else: {0}")]
    BookingConflict(String),
    #[error("Booking service is unavailable, please try again: {0}")]
    BackendUnavailable(String),
}

impl From<CalendarError> for DrtimeError {
    fn from(err: CalendarError) -> Self {
        match err {
            CalendarError::DateNotSelectable(_) | CalendarError::SlotNotAvailable(_) => conflict(err),
            CalendarError::InvalidDateKey(_) => parse_error(err),
            CalendarError::InvalidSelectionState | CalendarError::RandomSource(_) => {
                internal_error(err)
            }
        }
    }
}

impl From<ValidationError> for DrtimeError {
    fn from(err: ValidationError) -> Self {
        validation_error(err)
    }
}

impl From<SubmissionError> for DrtimeError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::Validation(inner) => inner.into(),
            SubmissionError::AlreadySubmitting | SubmissionError::BookingConflict(_) => conflict(err),
            SubmissionError::NotSubmitting | SubmissionError::TokenMismatch => internal_error(err),
            SubmissionError::BackendUnavailable(_) => unavailable(err),
        }
    }
}
