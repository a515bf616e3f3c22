use axum::{
    http::StatusCode,
    middleware as axum_mw,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::any::Any;
use std::sync::Arc;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;

use crate::handlers::{self, AppError};
use crate::middleware::timing;
use crate::AppState;

/// Upper bound on a single request, read through write.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Builds the full Axum `Router` with all routes and middleware.
pub fn create_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        // ── Events ──────────────────────────────────────────────
        .route(
            "/events",
            get(handlers::events::list_events).post(handlers::events::create_event),
        )
        // ── Metrics ─────────────────────────────────────────────
        .route("/metrics/daily", get(handlers::metrics::list_daily));

    Router::new()
        .route("/healthz", get(handlers::health::healthz))
        .nest("/api/v1", api)
        .fallback(handlers::not_found)
        // ── Provide shared state to all routes above ────────────
        .with_state(state)
        // ── Global middleware (applied bottom-up) ───────────────
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(axum_mw::map_response(timeout_response))
        .layer(CorsLayer::permissive())
        // Outermost so guard responses and preflights are timed too
        .layer(axum_mw::from_fn(timing::timing_middleware))
}

/// `TimeoutLayer` answers with a bare 408; give it the JSON error body.
async fn timeout_response(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return AppError::Timeout.into_response();
    }
    response
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(detail, "handler panicked");

    AppError::Internal("internal server error".into()).into_response()
}
