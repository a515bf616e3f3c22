pub mod events;
pub mod health;
pub mod metrics;

use axum::{
    extract::{rejection::QueryRejection, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

// ─── Shared response envelope ────────────────────────────────────

/// Every API response wraps its payload in `data`; list endpoints also
/// carry `meta.count`.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T: Serialize> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Meta {
    pub count: usize,
}

impl<T: Serialize> Envelope<Vec<T>> {
    pub fn list(items: Vec<T>) -> Self {
        let count = items.len();
        Self {
            data: items,
            meta: Some(Meta { count }),
        }
    }
}

impl<T: Serialize> Envelope<T> {
    pub fn single(item: T) -> Self {
        Self {
            data: item,
            meta: None,
        }
    }
}

// ─── Query parameters ────────────────────────────────────────────

/// Window size from the query string. Kept raw so a non-numeric value
/// falls back to "everything" instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct WindowQuery {
    pub limit: Option<String>,
    pub days: Option<String>,
}

impl WindowQuery {
    /// A query string that does not fit the shape (e.g. a repeated key)
    /// is treated like an empty one.
    pub fn or_default(query: Result<Query<Self>, QueryRejection>) -> Self {
        match query {
            Ok(Query(query)) => query,
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "ignoring query string");
                Self::default()
            }
        }
    }
}

/// Absent or unparseable → 0, which the store treats as "no limit".
pub(crate) fn parse_window(raw: Option<&str>) -> i64 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

// ─── Unified error type ──────────────────────────────────────────

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    /// Store failure during the named operation
    Store(&'static str, StoreError),
    Timeout,
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Store(op, err) => {
                tracing::error!(op, error = %err, "store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{op}: {err}"))
            }
            Self::Timeout => (StatusCode::REQUEST_TIMEOUT, "request timed out".into()),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error":  message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

/// Fallback for unmatched routes.
pub async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_window_is_lenient() {
        assert_eq!(parse_window(None), 0);
        assert_eq!(parse_window(Some("3")), 3);
        assert_eq!(parse_window(Some(" 4 ")), 4);
        assert_eq!(parse_window(Some("-2")), -2);
        assert_eq!(parse_window(Some("abc")), 0);
        assert_eq!(parse_window(Some("")), 0);
    }

    #[test]
    fn list_envelope_counts_items() {
        let json = serde_json::to_value(Envelope::list(vec![1, 2, 3])).unwrap();
        assert_eq!(json["meta"]["count"], 3);

        let json = serde_json::to_value(Envelope::single("x")).unwrap();
        assert!(json.get("meta").is_none());
        assert_eq!(json["data"], "x");
    }
}
