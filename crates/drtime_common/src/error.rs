// --- File: crates/drtime_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type shared by all drtime crates.
///
/// Crate-specific errors convert into this type with `From` impls, which lets
/// the HTTP adapter answer every failure with a consistent status code.
#[derive(Error, Debug)]
pub enum DrtimeError {
    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// User input failed validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The requested state change conflicts with the current state
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// The booking backend could not be reached or refused to answer
    #[error("Service unavailable: {0}")]
    UnavailableError(String),

    /// A caller broke an API contract
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for DrtimeError {
    fn status_code(&self) -> u16 {
        match self {
            DrtimeError::ParseError(_) => 400,
            DrtimeError::ValidationError(_) => 400,
            DrtimeError::ConflictError(_) => 409,
            DrtimeError::UnavailableError(_) => 503,
            DrtimeError::InternalError(_) => 500,
        }
    }
}

// Utility functions for error handling
pub fn parse_error<T: fmt::Display>(message: T) -> DrtimeError {
    DrtimeError::ParseError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> DrtimeError {
    DrtimeError::ValidationError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> DrtimeError {
    DrtimeError::ConflictError(message.to_string())
}

pub fn unavailable<T: fmt::Display>(message: T) -> DrtimeError {
    DrtimeError::UnavailableError(message.to_string())
}

pub fn internal_error<T: fmt::Display>(message: T) -> DrtimeError {
    DrtimeError::InternalError(message.to_string())
}
