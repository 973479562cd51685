// --- File: crates/drtime_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod logging; // Logging utilities
pub mod models; // Wire payloads shared between the calendar and booking backends
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    conflict, internal_error, parse_error, unavailable, validation_error, DrtimeError,
    HttpStatusCode,
};

// Re-export logging utilities for easier access
pub use logging::{init, init_from_config, init_with_level, log_result};

pub use services::{BookingService, BookingServiceError, BoxFuture, Clock, FixedClock, SystemClock};
