// --- File: crates/drtime_calendar/src/routes.rs ---

use crate::handlers::{
    book_handler, close_confirmation_handler, dismiss_notification_handler, get_calendar_handler,
    next_month_handler, prev_month_handler, select_date_handler, select_slot_handler,
    CalendarState,
};
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

/// Creates a router containing all routes of the booking calendar.
pub fn routes(state: CalendarState) -> Router {
    Router::new()
        .route("/calendar", get(get_calendar_handler))
        .route("/calendar/next", post(next_month_handler))
        .route("/calendar/prev", post(prev_month_handler))
        .route("/calendar/select-date", post(select_date_handler))
        .route("/calendar/select-slot", post(select_slot_handler))
        .route("/book", post(book_handler))
        .route("/notification", delete(dismiss_notification_handler))
        .route("/confirmation/close", post(close_confirmation_handler))
        .with_state(Arc::new(state))
}
