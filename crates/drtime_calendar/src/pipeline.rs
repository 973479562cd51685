// --- File: crates/drtime_calendar/src/pipeline.rs ---
//! Booking submission state machine.
//!
//! `Idle -> Submitting -> Succeeded -> Idle` on success,
//! `Idle -> Submitting -> Idle` when the backend refuses or times out.
//! Validation happens before `begin`, so a rejected form never leaves `Idle`.

use crate::error::SubmissionError;
use crate::validation::BookingRequest;
use drtime_common::models::{BookingAcknowledgement, BookingPayload};
use drtime_common::services::{BookingService, BookingServiceError};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SubmissionPhase {
    Idle,
    /// A request is in flight; further submissions are rejected.
    Submitting { token: Uuid },
    Succeeded,
}

/// A validated request that has entered `Submitting`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    token: Uuid,
    request: BookingRequest,
}

impl PendingSubmission {
    pub fn token(&self) -> Uuid {
        self.token
    }

    pub fn request(&self) -> &BookingRequest {
        &self.request
    }

    pub fn payload(&self) -> BookingPayload {
        BookingPayload {
            request_token: self.token,
            service: self.request.service().code().to_string(),
            date: self.request.date().key(),
            slot: self.request.slot().to_string(),
            name: self.request.name().to_string(),
            email: self.request.email().to_string(),
            phone: self.request.phone().to_string(),
            notes: self.request.notes().map(str::to_string),
        }
    }
}

/// Summary shown after a successful booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub booking_id: String,
    pub service_name: String,
    pub formatted_date: String,
    pub slot: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Confirmation {
    pub fn new(request: &BookingRequest, acknowledgement: &BookingAcknowledgement) -> Self {
        Self {
            booking_id: acknowledgement.booking_id.clone(),
            service_name: request.service().display_name().to_string(),
            formatted_date: request.date().display_long(),
            slot: request.slot().to_string(),
            name: request.name().to_string(),
            email: request.email().to_string(),
            phone: request.phone().to_string(),
            notes: request.notes().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmissionPipeline {
    phase: SubmissionPhase,
    successful: u64,
}

impl Default for SubmissionPipeline {
    fn default() -> Self {
        Self {
            phase: SubmissionPhase::Idle,
            successful: 0,
        }
    }
}

impl SubmissionPipeline {
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Submitting { .. })
    }

    /// Number of submissions that reached `Succeeded`.
    pub fn successful_submissions(&self) -> u64 {
        self.successful
    }

    /// `Succeeded -> Idle`, once the caller has consumed the result.
    pub fn reset(&mut self) {
        if self.phase == SubmissionPhase::Succeeded {
            self.phase = SubmissionPhase::Idle;
        }
    }

    /// Moves `Idle -> Submitting` and mints the request token.
    pub fn begin(&mut self, request: BookingRequest) -> Result<PendingSubmission, SubmissionError> {
        if self.is_submitting() {
            warn!("Submission rejected: another booking is in flight");
            return Err(SubmissionError::AlreadySubmitting);
        }
        let token = Uuid::new_v4();
        self.phase = SubmissionPhase::Submitting { token };
        debug!("Submission {} entered Submitting", token);
        Ok(PendingSubmission { token, request })
    }

    /// Leaves `Submitting` with the backend outcome: `Succeeded` on success,
    /// straight back to `Idle` on failure.
    pub fn finish(
        &mut self,
        token: Uuid,
        outcome: Result<BookingAcknowledgement, BookingServiceError>,
    ) -> Result<BookingAcknowledgement, SubmissionError> {
        match self.phase {
            SubmissionPhase::Submitting { token: in_flight } if in_flight == token => {}
            SubmissionPhase::Submitting { .. } => return Err(SubmissionError::TokenMismatch),
            _ => return Err(SubmissionError::NotSubmitting),
        }

        match outcome {
            Ok(acknowledgement) => {
                self.phase = SubmissionPhase::Succeeded;
                self.successful += 1;
                info!(
                    "Submission {} succeeded as booking {}",
                    token, acknowledgement.booking_id
                );
                Ok(acknowledgement)
            }
            Err(err) => {
                self.phase = SubmissionPhase::Idle;
                warn!("Submission {} failed: {}", token, err);
                Err(match err {
                    BookingServiceError::Conflict(message) => SubmissionError::BookingConflict(message),
                    BookingServiceError::Unavailable(message) => {
                        SubmissionError::BackendUnavailable(message)
                    }
                })
            }
        }
    }
}

/// Sends `pending` to the backend, giving up after `timeout`.
pub async fn dispatch(
    service: &dyn BookingService,
    pending: &PendingSubmission,
    timeout: Duration,
) -> Result<BookingAcknowledgement, BookingServiceError> {
    match tokio::time::timeout(timeout, service.submit_booking(pending.payload())).await {
        Ok(outcome) => outcome,
        Err(_) => Err(BookingServiceError::Unavailable(format!(
            "no answer within {} ms",
            timeout.as_millis()
        ))),
    }
}
