// --- File: crates/drtime_calendar/src/validation.rs ---
//! Booking form validation.

use crate::date::CalendarDate;
use crate::error::{FormField, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("phone pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Business,
    Financial,
    Technology,
    Career,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::Business,
        ServiceKind::Financial,
        ServiceKind::Technology,
        ServiceKind::Career,
    ];

    /// Form value, e.g. "business".
    pub fn code(&self) -> &'static str {
        match self {
            ServiceKind::Business => "business",
            ServiceKind::Financial => "financial",
            ServiceKind::Technology => "technology",
            ServiceKind::Career => "career",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceKind::Business => "Business Consultation",
            ServiceKind::Financial => "Financial Advisory",
            ServiceKind::Technology => "Technology Consulting",
            ServiceKind::Career => "Career Coaching",
        }
    }
}

impl FromStr for ServiceKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceKind::ALL
            .into_iter()
            .find(|kind| kind.code() == s)
            .ok_or_else(|| ValidationError::UnknownService(s.to_string()))
    }
}

/// Raw form input plus the current selection, as read at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BookingFields {
    pub service: String,
    pub date: Option<CalendarDate>,
    pub slot: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
}

/// Form inputs typed by the user; the date and slot come from the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BookingForm {
    pub service: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
}

impl BookingFields {
    pub fn from_form(form: &BookingForm, date: Option<CalendarDate>, slot: Option<&str>) -> Self {
        Self {
            service: form.service.clone(),
            date,
            slot: slot.map(str::to_string),
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            notes: form.notes.clone(),
        }
    }
}

/// A validated booking. Built only by [`BookingValidator::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    service: ServiceKind,
    date: CalendarDate,
    slot: String,
    name: String,
    email: String,
    phone: String,
    notes: Option<String>,
}

impl BookingRequest {
    pub fn service(&self) -> ServiceKind {
        self.service
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Digits with an optional leading `+`; whitespace is ignored.
pub fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_PATTERN.is_match(&compact)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BookingValidator {
    pub strict_phone: bool,
}

impl BookingValidator {
    pub fn new(strict_phone: bool) -> Self {
        Self { strict_phone }
    }

    /// Checks the rules in order and reports the first failure:
    /// a missing field, a malformed email, an unknown service, and with
    /// `strict_phone` a malformed phone number.
    pub fn validate(&self, fields: &BookingFields) -> Result<BookingRequest, ValidationError> {
        let service = required(&fields.service, FormField::Service)?;
        let date = fields
            .date
            .ok_or(ValidationError::MissingRequiredField(FormField::Date))?;
        let slot = required(fields.slot.as_deref().unwrap_or(""), FormField::Slot)?;
        let name = required(&fields.name, FormField::Name)?;
        let email = required(&fields.email, FormField::Email)?;
        let phone = required(&fields.phone, FormField::Phone)?;

        // checked untrimmed: surrounding whitespace makes the address invalid
        if !is_valid_email(&fields.email) {
            return Err(ValidationError::InvalidEmail);
        }
        let service: ServiceKind = service.parse()?;
        if self.strict_phone && !is_valid_phone(phone) {
            return Err(ValidationError::InvalidPhone);
        }

        let notes = fields.notes.trim();
        Ok(BookingRequest {
            service,
            date,
            slot: slot.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }
}

/// Validates with the default rules (no phone format check).
pub fn validate(fields: &BookingFields) -> Result<BookingRequest, ValidationError> {
    BookingValidator::default().validate(fields)
}

fn required(value: &str, field: FormField) -> Result<&str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingRequiredField(field))
    } else {
        Ok(trimmed)
    }
}
