// --- File: crates/drtime_calendar/src/notification.rs ---
//! The single toast-style notification shown above the page.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub shown_at: NaiveDateTime,
}

/// Holds at most one notification; a new one replaces the old.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    current: Option<Notification>,
    dismiss_after: Duration,
}

impl NotificationCenter {
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            current: None,
            dismiss_after,
        }
    }

    pub fn notify(&mut self, message: impl Into<String>, level: NotificationLevel, now: NaiveDateTime) {
        let message = message.into();
        match level {
            NotificationLevel::Info => info!("notify: {}", message),
            NotificationLevel::Error => warn!("notify: {}", message),
        }
        self.current = Some(Notification {
            message,
            level,
            shown_at: now,
        });
    }

    /// The notification still on screen at `now`, if any.
    pub fn visible(&self, now: NaiveDateTime) -> Option<&Notification> {
        self.current
            .as_ref()
            .filter(|notification| now < notification.shown_at + self.dismiss_after)
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
