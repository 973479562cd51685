// File: services/drtime_backend/src/main.rs
use axum::{extract::State, routing::get, Json, Router};
use drtime_calendar::handlers::CalendarState;
use drtime_calendar::routes as calendar_routes;
use drtime_calendar::service::SimulatedBookingService;
use drtime_calendar::AvailabilityCalendar;
use drtime_common::logging;
use drtime_common::services::{Clock, SystemClock};
use drtime_config::{load_config, AppConfig};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

#[axum::debug_handler]
async fn show_config(State(config): State<Arc<AppConfig>>) -> Json<AppConfig> {
    Json(config.as_ref().clone())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(load_config()?);
    // keeps the file writer flushing until shutdown
    let _log_guard = logging::init_from_config(&config.logging);

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let calendar = logging::log_result(
        AvailabilityCalendar::from_config(&config, clock.clone()),
        "Availability calendar ready",
        "Failed to build availability calendar",
    )?;
    let booking_service = Arc::new(SimulatedBookingService::new(
        Duration::from_millis(config.booking.simulated_latency_ms),
        clock,
    ));
    let calendar_router = calendar_routes::routes(CalendarState::new(calendar, booking_service));

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to the drtime booking API!" }))
        .route("/config", get(show_config))
        .with_state(config.clone())
        .merge(calendar_router);

    let mut app = Router::new().nest("/api", api_router);

    if let Some(static_dir) = &config.server.static_dir {
        info!("Serving static files from {}", static_dir);
        app = app.fallback_service(ServeDir::new(static_dir));
    }
    let app = app.layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = logging::log_result(
        TcpListener::bind(&addr).await,
        "Listener bound",
        &format!("Failed to bind {}", addr),
    )?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
