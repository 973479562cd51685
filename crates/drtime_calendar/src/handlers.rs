// File: crates/drtime_calendar/src/handlers.rs
//! HTTP adapter: maps page events onto [`AvailabilityCalendar`] calls.
use crate::calendar::{AvailabilityCalendar, CalendarSnapshot};
use crate::date::CalendarDate;
use crate::pipeline::{dispatch, Confirmation};
use crate::validation::BookingForm;
use axum::{extract::State, http::StatusCode, response::Json};
use drtime_common::error::{internal_error, DrtimeError, HttpStatusCode};
use drtime_common::services::BookingService;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

// Shared state needed by the calendar handlers
#[derive(Clone)]
pub struct CalendarState {
    pub calendar: Arc<Mutex<AvailabilityCalendar>>,
    pub booking_service: Arc<dyn BookingService>,
}

impl CalendarState {
    pub fn new(calendar: AvailabilityCalendar, booking_service: Arc<dyn BookingService>) -> Self {
        Self {
            calendar: Arc::new(Mutex::new(calendar)),
            booking_service,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct SelectDateRequest {
    /// Day in YYYY-MM-DD format
    pub date: String,
}

#[derive(Deserialize, Debug)]
pub struct SelectSlotRequest {
    pub slot: String,
}

#[derive(Serialize, Debug)]
pub struct BookingResponse {
    pub success: bool,
    pub message: String,
    pub confirmation: Option<Confirmation>,
    /// Tells the page to clear its form inputs.
    pub reset_form: bool,
}

type HandlerError = (StatusCode, String);

fn to_http_error<E: Into<DrtimeError>>(err: E) -> HandlerError {
    let err: DrtimeError = err.into();
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, err.to_string())
}

/// Handler returning the current calendar snapshot.
#[axum::debug_handler]
pub async fn get_calendar_handler(
    State(state): State<Arc<CalendarState>>,
) -> Json<CalendarSnapshot> {
    let calendar = state.calendar.lock().await;
    Json(calendar.snapshot())
}

#[axum::debug_handler]
pub async fn next_month_handler(State(state): State<Arc<CalendarState>>) -> Json<CalendarSnapshot> {
    let mut calendar = state.calendar.lock().await;
    calendar.next_month();
    Json(calendar.snapshot())
}

#[axum::debug_handler]
pub async fn prev_month_handler(State(state): State<Arc<CalendarState>>) -> Json<CalendarSnapshot> {
    let mut calendar = state.calendar.lock().await;
    calendar.prev_month();
    Json(calendar.snapshot())
}

#[axum::debug_handler]
pub async fn select_date_handler(
    State(state): State<Arc<CalendarState>>,
    Json(request): Json<SelectDateRequest>,
) -> Result<Json<CalendarSnapshot>, HandlerError> {
    let date: CalendarDate = request.date.parse().map_err(to_http_error)?;
    let mut calendar = state.calendar.lock().await;
    calendar.select_date(date).map_err(to_http_error)?;
    Ok(Json(calendar.snapshot()))
}

#[axum::debug_handler]
pub async fn select_slot_handler(
    State(state): State<Arc<CalendarState>>,
    Json(request): Json<SelectSlotRequest>,
) -> Result<Json<CalendarSnapshot>, HandlerError> {
    let mut calendar = state.calendar.lock().await;
    calendar.select_slot(&request.slot).map_err(to_http_error)?;
    Ok(Json(calendar.snapshot()))
}

/// Handler to book the selected slot.
///
/// The calendar lock is released while the backend works, so the page can
/// still be rendered and a second submission is answered with 409 instead of
/// waiting. The backend call and its completion run in a spawned task: once a
/// submission has started it is finished even if the client goes away.
#[axum::debug_handler]
pub async fn book_handler(
    State(state): State<Arc<CalendarState>>,
    Json(form): Json<BookingForm>,
) -> (StatusCode, Json<BookingResponse>) {
    let (pending, timeout) = {
        let mut calendar = state.calendar.lock().await;
        match calendar.begin_submission(&form) {
            Ok(pending) => (pending, calendar.booking_timeout()),
            Err(err) => return failure_response(err),
        }
    };

    info!(
        "Submitting booking {} for {} at {}",
        pending.token(),
        pending.request().date(),
        pending.request().slot()
    );
    let task_state = Arc::clone(&state);
    let completion = tokio::spawn(async move {
        let outcome = dispatch(task_state.booking_service.as_ref(), &pending, timeout).await;
        let mut calendar = task_state.calendar.lock().await;
        calendar.finish_submission(pending, outcome)
    });

    match completion.await {
        Ok(Ok(confirmation)) => (
            StatusCode::OK,
            Json(BookingResponse {
                success: true,
                message: "Appointment booked".to_string(),
                confirmation: Some(confirmation),
                reset_form: true,
            }),
        ),
        Ok(Err(err)) => failure_response(err),
        Err(join_error) => failure_response(internal_error(format!(
            "booking task failed: {}",
            join_error
        ))),
    }
}

fn failure_response<E: Into<DrtimeError>>(err: E) -> (StatusCode, Json<BookingResponse>) {
    let (status, message) = to_http_error(err);
    warn!("Booking failed with {}: {}", status, message);
    (
        status,
        Json(BookingResponse {
            success: false,
            message,
            confirmation: None,
            reset_form: false,
        }),
    )
}

#[axum::debug_handler]
pub async fn dismiss_notification_handler(State(state): State<Arc<CalendarState>>) -> StatusCode {
    state.calendar.lock().await.dismiss_notification();
    StatusCode::NO_CONTENT
}

#[axum::debug_handler]
pub async fn close_confirmation_handler(State(state): State<Arc<CalendarState>>) -> StatusCode {
    state.calendar.lock().await.close_confirmation();
    StatusCode::NO_CONTENT
}
