use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::domain::{CreateEventInput, Event};
use crate::AppState;

use super::{parse_window, AppError, Envelope, WindowQuery};

// ─── GET /api/v1/events ──────────────────────────────────────────

pub async fn list_events(
    State(state): State<Arc<AppState>>,
    query: Result<Query<WindowQuery>, QueryRejection>,
) -> Result<Json<Envelope<Vec<Event>>>, AppError> {
    let query = WindowQuery::or_default(query);
    let limit = parse_window(query.limit.as_deref());

    let items = state
        .store
        .list_events(limit)
        .map_err(|e| AppError::Store("list events", e))?;

    Ok(Json(Envelope::list(items)))
}

// ─── POST /api/v1/events ─────────────────────────────────────────

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateEventInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<Event>>), AppError> {
    // Every body problem is a plain 400, whatever axum would have chosen
    let Json(input) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "rejected event payload");
        AppError::BadRequest("invalid payload".into())
    })?;

    if !input.has_title() {
        return Err(AppError::BadRequest("title is required".into()));
    }

    let event = state
        .store
        .create_event(input)
        .map_err(|e| AppError::Store("create event", e))?;

    Ok((StatusCode::CREATED, Json(Envelope::single(event))))
}
