// --- File: crates/drtime_calendar/src/service.rs ---
//! Booking backends.
//!
//! Bookings are not persisted anywhere yet. [`SimulatedBookingService`]
//! stands in for a real backend and acknowledges every booking after a fixed
//! delay.

use chrono::NaiveDateTime;
use drtime_common::models::{BookingAcknowledgement, BookingPayload};
use drtime_common::services::{BookingService, BookingServiceError, BoxFuture, Clock};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

/// Request tokens remembered for replay detection by default.
pub const DEFAULT_REPLAY_CAPACITY: usize = 1024;

/// Acknowledges every booking after `latency`.
///
/// Acknowledgements are remembered by request token, so delivering the same
/// token again yields the original acknowledgement instead of a new booking.
/// Only the most recent `replay_capacity` tokens are kept.
pub struct SimulatedBookingService {
    latency: Duration,
    clock: Arc<dyn Clock>,
    replay_capacity: usize,
    log: Mutex<ReplayLog>,
}

#[derive(Default)]
struct ReplayLog {
    acknowledged: HashMap<Uuid, BookingAcknowledgement>,
    // oldest first
    order: VecDeque<Uuid>,
    issued: usize,
}

impl ReplayLog {
    fn remember(&mut self, acknowledgement: BookingAcknowledgement, capacity: usize) {
        self.issued += 1;
        let token = acknowledgement.request_token;
        self.acknowledged.insert(token, acknowledgement);
        self.order.push_back(token);
        while self.order.len() > capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.acknowledged.remove(&oldest);
            }
        }
    }
}

impl SimulatedBookingService {
    pub fn new(latency: Duration, clock: Arc<dyn Clock>) -> Self {
        Self::with_replay_capacity(latency, clock, DEFAULT_REPLAY_CAPACITY)
    }

    pub fn with_replay_capacity(
        latency: Duration,
        clock: Arc<dyn Clock>,
        replay_capacity: usize,
    ) -> Self {
        Self {
            latency,
            clock,
            replay_capacity: replay_capacity.max(1),
            log: Mutex::new(ReplayLog::default()),
        }
    }

    /// Number of distinct bookings acknowledged so far.
    pub fn booking_count(&self) -> usize {
        self.lock_log().issued
    }

    /// Number of request tokens currently remembered.
    pub fn remembered_tokens(&self) -> usize {
        self.lock_log().order.len()
    }

    fn lock_log(&self) -> std::sync::MutexGuard<'_, ReplayLog> {
        self.log.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl BookingService for SimulatedBookingService {
    fn submit_booking(
        &self,
        payload: BookingPayload,
    ) -> BoxFuture<'_, BookingAcknowledgement, BookingServiceError> {
        Box::pin(async move {
            tokio::time::sleep(self.latency).await;

            let mut log = self.lock_log();
            if let Some(previous) = log.acknowledged.get(&payload.request_token) {
                info!(
                    "Replayed request {} resolved to booking {}",
                    payload.request_token, previous.booking_id
                );
                return Ok(previous.clone());
            }

            let acknowledgement = acknowledge(&payload, self.clock.now());
            info!(
                "Simulated booking {}: {} on {} at {} for {}",
                acknowledgement.booking_id, payload.service, payload.date, payload.slot, payload.name
            );
            log.remember(acknowledgement.clone(), self.replay_capacity);
            Ok(acknowledgement)
        })
    }
}

fn acknowledge(payload: &BookingPayload, now: NaiveDateTime) -> BookingAcknowledgement {
    BookingAcknowledgement {
        booking_id: format!("bk-{}", Uuid::new_v4().simple()),
        request_token: payload.request_token,
        accepted_at: now,
    }
}

/// Scripted backends for tests.
#[cfg(any(test, feature = "test-util"))]
pub mod mock {
    use super::*;

    /// What the next call should do.
    #[derive(Debug, Clone)]
    pub enum ScriptedOutcome {
        Accept,
        Fail(BookingServiceError),
        /// Never answers; the caller's timeout decides.
        Hang,
    }

    /// Replies according to a queue of outcomes, accepting once the queue is
    /// empty, and records every payload it receives.
    pub struct ScriptedBookingService {
        script: Mutex<VecDeque<ScriptedOutcome>>,
        received: Mutex<Vec<BookingPayload>>,
        accepted_at: NaiveDateTime,
    }

    impl ScriptedBookingService {
        pub fn new(script: Vec<ScriptedOutcome>, accepted_at: NaiveDateTime) -> Self {
            Self {
                script: Mutex::new(script.into()),
                received: Mutex::new(Vec::new()),
                accepted_at,
            }
        }

        pub fn received(&self) -> Vec<BookingPayload> {
            self.received
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .clone()
        }
    }

    impl BookingService for ScriptedBookingService {
        fn submit_booking(
            &self,
            payload: BookingPayload,
        ) -> BoxFuture<'_, BookingAcknowledgement, BookingServiceError> {
            let outcome = self
                .script
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .pop_front()
                .unwrap_or(ScriptedOutcome::Accept);
            self.received
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .push(payload.clone());

            Box::pin(async move {
                match outcome {
                    ScriptedOutcome::Accept => Ok(acknowledge(&payload, self.accepted_at)),
                    ScriptedOutcome::Fail(err) => Err(err),
                    ScriptedOutcome::Hang => std::future::pending().await,
                }
            })
        }
    }
}
