// --- File: crates/drtime_calendar/src/calendar.rs ---
//! The availability calendar: one owned object per session holding the
//! displayed month, the selection and the submission pipeline.

use crate::availability::{
    generate_from_config, AvailabilitySet, SeededRandomSource, SystemRandomSource,
};
use crate::date::{CalendarDate, ViewState};
use crate::error::{CalendarError, SubmissionError};
use crate::grid::{compute_month_grid, CellClass, MonthView};
use crate::notification::{Notification, NotificationCenter, NotificationLevel};
use crate::pipeline::{dispatch, Confirmation, PendingSubmission, SubmissionPhase, SubmissionPipeline};
use crate::selection::{slot_list_view, SelectionState, SlotListView};
use crate::validation::{BookingFields, BookingForm, BookingValidator};
use drtime_common::models::BookingAcknowledgement;
use drtime_common::services::{BookingService, BookingServiceError, Clock};
use drtime_config::AppConfig;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Tunables taken from the `[booking]` and `[notification]` config sections.
#[derive(Debug, Clone)]
pub struct CalendarSettings {
    pub notification_timeout: chrono::Duration,
    pub booking_timeout: Duration,
    pub strict_phone: bool,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        CalendarSettings::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for CalendarSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            notification_timeout: chrono::Duration::milliseconds(
                i64::try_from(config.notification.dismiss_after_ms).unwrap_or(i64::MAX),
            ),
            booking_timeout: Duration::from_millis(config.booking.timeout_ms),
            strict_phone: config.booking.strict_phone_validation,
        }
    }
}

/// Everything a page needs to redraw after any event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarSnapshot {
    pub month: MonthView,
    pub slots: SlotListView,
    pub selection: SelectionState,
    pub phase: SubmissionPhase,
    pub notification: Option<Notification>,
    pub confirmation: Option<Confirmation>,
}

pub struct AvailabilityCalendar {
    availability: AvailabilitySet,
    view: ViewState,
    selection: SelectionState,
    pipeline: SubmissionPipeline,
    notifications: NotificationCenter,
    confirmation: Option<Confirmation>,
    validator: BookingValidator,
    booking_timeout: Duration,
    clock: Arc<dyn Clock>,
}

impl AvailabilityCalendar {
    /// Builds a calendar showing the current month, with sample availability
    /// generated from `config.calendar`. A configured seed makes the sample
    /// reproducible.
    pub fn from_config(config: &AppConfig, clock: Arc<dyn Clock>) -> Result<Self, CalendarError> {
        let today = CalendarDate::from(clock.today());
        let availability = match config.calendar.seed {
            Some(seed) => {
                generate_from_config(&config.calendar, today, &mut SeededRandomSource::new(seed))?
            }
            None => generate_from_config(&config.calendar, today, &mut SystemRandomSource::new())?,
        };
        info!(
            "Calendar initialised on {} with {} bookable days",
            today,
            availability
                .dates()
                .filter(|date| availability.is_available(date))
                .count()
        );
        Ok(Self::with_availability(
            availability,
            clock,
            CalendarSettings::from(config),
        ))
    }

    pub fn with_availability(
        availability: AvailabilitySet,
        clock: Arc<dyn Clock>,
        settings: CalendarSettings,
    ) -> Self {
        let today = CalendarDate::from(clock.today());
        Self {
            availability,
            view: ViewState::new(today),
            selection: SelectionState::default(),
            pipeline: SubmissionPipeline::default(),
            notifications: NotificationCenter::new(settings.notification_timeout),
            confirmation: None,
            validator: BookingValidator::new(settings.strict_phone),
            booking_timeout: settings.booking_timeout,
            clock,
        }
    }

    fn today(&self) -> CalendarDate {
        CalendarDate::from(self.clock.today())
    }

    pub fn availability(&self) -> &AvailabilitySet {
        &self.availability
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.pipeline.phase()
    }

    pub fn successful_submissions(&self) -> u64 {
        self.pipeline.successful_submissions()
    }

    pub fn booking_timeout(&self) -> Duration {
        self.booking_timeout
    }

    // --- Rendering ---

    pub fn month_view(&self) -> MonthView {
        let selected = self.selection.selected_date();
        let mut cells =
            compute_month_grid(&self.view.current_date(), &self.availability, &self.today());
        for cell in &mut cells {
            cell.selected =
                cell.classification != CellClass::OtherMonth && Some(cell.date) == selected;
        }
        MonthView {
            label: self.view.month_label(),
            cells,
        }
    }

    pub fn slot_list(&self) -> SlotListView {
        slot_list_view(&self.selection, &self.availability)
    }

    pub fn snapshot(&self) -> CalendarSnapshot {
        CalendarSnapshot {
            month: self.month_view(),
            slots: self.slot_list(),
            selection: self.selection.clone(),
            phase: self.phase(),
            notification: self.notification().cloned(),
            confirmation: self.confirmation.clone(),
        }
    }

    // --- Navigation and selection ---

    /// Shows the following month. The selection is kept.
    pub fn next_month(&mut self) -> MonthView {
        self.view.next_month();
        debug!("View moved to {}", self.view.month_label());
        self.month_view()
    }

    /// Shows the preceding month. The selection is kept.
    pub fn prev_month(&mut self) -> MonthView {
        self.view.prev_month();
        debug!("View moved to {}", self.view.month_label());
        self.month_view()
    }

    pub fn select_date(&mut self, date: CalendarDate) -> Result<SelectionState, CalendarError> {
        let today = self.today();
        self.selection
            .select_date(date, &self.view.current_date(), &self.availability, &today)
    }

    pub fn select_slot(&mut self, label: &str) -> Result<SelectionState, CalendarError> {
        self.selection.select_slot(label, &self.availability)
    }

    // --- Submission ---

    /// Validates `form` against the current selection and enters `Submitting`.
    ///
    /// Validation failures are shown as an error notification and leave the
    /// calendar untouched.
    pub fn begin_submission(
        &mut self,
        form: &BookingForm,
    ) -> Result<PendingSubmission, SubmissionError> {
        if self.pipeline.is_submitting() {
            return Err(SubmissionError::AlreadySubmitting);
        }
        let fields = BookingFields::from_form(
            form,
            self.selection.selected_date(),
            self.selection.selected_slot(),
        );
        let request = match self.validator.validate(&fields) {
            Ok(request) => request,
            Err(err) => {
                self.notify(err.to_string(), NotificationLevel::Error);
                return Err(err.into());
            }
        };
        self.pipeline.begin(request)
    }

    /// Applies the backend outcome for `pending`.
    ///
    /// On success the confirmation is stored, the selection cleared and the
    /// pipeline returned to `Idle`. On a conflict or unavailable backend an
    /// error notification is shown and the selection is kept for a retry.
    pub fn finish_submission(
        &mut self,
        pending: PendingSubmission,
        outcome: Result<BookingAcknowledgement, BookingServiceError>,
    ) -> Result<Confirmation, SubmissionError> {
        match self.pipeline.finish(pending.token(), outcome) {
            Ok(acknowledgement) => {
                let confirmation = Confirmation::new(pending.request(), &acknowledgement);
                self.confirmation = Some(confirmation.clone());
                self.selection.clear();
                self.pipeline.reset();
                Ok(confirmation)
            }
            Err(err) => {
                if matches!(
                    err,
                    SubmissionError::BookingConflict(_) | SubmissionError::BackendUnavailable(_)
                ) {
                    self.notify(err.to_string(), NotificationLevel::Error);
                }
                Err(err)
            }
        }
    }

    /// Runs the whole pipeline against `service`.
    pub async fn submit(
        &mut self,
        form: &BookingForm,
        service: &dyn BookingService,
    ) -> Result<Confirmation, SubmissionError> {
        let pending = self.begin_submission(form)?;
        let outcome = dispatch(service, &pending, self.booking_timeout).await;
        self.finish_submission(pending, outcome)
    }

    // --- Notification and summary panel ---

    pub fn notify(&mut self, message: impl Into<String>, level: NotificationLevel) {
        let now = self.clock.now();
        self.notifications.notify(message, level, now);
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.visible(self.clock.now())
    }

    pub fn dismiss_notification(&mut self) {
        self.notifications.dismiss();
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    pub fn close_confirmation(&mut self) {
        self.confirmation = None;
    }
}
