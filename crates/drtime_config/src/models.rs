// --- File: crates/drtime_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the page markup, served at `/` when present.
    pub static_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            static_dir: None,
        }
    }
}

// --- Calendar / Availability Config ---
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct CalendarConfig {
    /// Number of days after today for which sample slots are generated.
    pub availability_window_days: u32,
    /// Probability that a catalog slot is kept for a given day.
    pub slot_keep_probability: f64,
    /// Bookable time labels, in display order.
    pub slot_catalog: Vec<String>,
    /// Fixes the random source; `None` uses the system generator.
    pub seed: Option<u64>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            availability_window_days: 30,
            slot_keep_probability: 0.7,
            slot_catalog: default_slot_catalog(),
            seed: None,
        }
    }
}

pub fn default_slot_catalog() -> Vec<String> {
    [
        "9:00 AM", "10:00 AM", "11:00 AM", "2:00 PM", "3:00 PM", "4:00 PM", "5:00 PM",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

// --- Booking Config ---
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct BookingConfig {
    /// Latency of the simulated acknowledgment.
    pub simulated_latency_ms: u64,
    /// Upper bound on how long a submission may stay in flight.
    pub timeout_ms: u64,
    /// Also reject phone numbers that do not look like `+15551234567`.
    pub strict_phone_validation: bool,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 2000,
            timeout_ms: 10_000,
            strict_phone_validation: false,
        }
    }
}

// --- Notification Config ---
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct NotificationConfig {
    pub dismiss_after_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: 5000,
        }
    }
}

// --- Logging Config ---
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level: trace, debug, info, warn or error.
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub calendar: CalendarConfig,
    pub booking: BookingConfig,
    pub notification: NotificationConfig,
    pub logging: LoggingConfig,
}
