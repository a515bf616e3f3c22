use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use std::sync::Arc;

use crate::domain::Metric;
use crate::AppState;

use super::{parse_window, AppError, Envelope, WindowQuery};

// ─── GET /api/v1/metrics/daily ───────────────────────────────────

/// `days` counts the most recently stored points, not calendar days.
pub async fn list_daily(
    State(state): State<Arc<AppState>>,
    query: Result<Query<WindowQuery>, QueryRejection>,
) -> Result<Json<Envelope<Vec<Metric>>>, AppError> {
    let query = WindowQuery::or_default(query);
    let days = parse_window(query.days.as_deref());

    let items = state
        .store
        .list_metrics(days)
        .map_err(|e| AppError::Store("list metrics", e))?;

    Ok(Json(Envelope::list(items)))
}
