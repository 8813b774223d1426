//! `GET /api/priorities`.

#[cfg(test)]
#[path = "priorities_test.rs"]
mod priorities_test;

use axum::extract::State;
use axum::response::{IntoResponse, Json, Response};

use crate::services::priorities::PrioritiesError;
use crate::state::AppState;

/// Return the current envelope, or an `{error, message, status}` body.
pub async fn get_priorities(State(state): State<AppState>) -> Response {
    match state.priorities.load().await {
        Ok(envelope) => {
            tracing::debug!(items = envelope.items.len(), "priorities served");
            Json(envelope).into_response()
        }
        Err(err) => error_response(&err),
    }
}

pub(crate) fn error_response(err: &PrioritiesError) -> Response {
    tracing::warn!(error = %err, code = err.error_code(), "priorities request failed");
    (err.status_code(), Json(err.to_body())).into_response()
}
