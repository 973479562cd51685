// --- File: crates/drtime_common/src/models.rs ---

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A validated booking as handed to a booking backend.
///
/// `request_token` is generated once per submission on the client side. A
/// backend that sees the same token twice must treat the second delivery as a
/// replay of the first, never as a second booking of the slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingPayload {
    pub request_token: Uuid,
    /// Service code, e.g. "business".
    pub service: String,
    /// Day in `YYYY-MM-DD` form.
    pub date: String,
    /// Slot label, e.g. "10:00 AM".
    pub slot: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: Option<String>,
}

/// What a booking backend returns once it accepted a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingAcknowledgement {
    /// Backend-side identifier of the booking.
    pub booking_id: String,
    /// Echo of the token the booking was submitted with.
    pub request_token: Uuid,
    pub accepted_at: NaiveDateTime,
}
