//! Fetch error taxonomy.
//!
//! Transport failures and non-2xx responses both surface as
//! [`FetchError::FetchFailed`]; a 2xx body that does not decode into an
//! envelope is [`FetchError::ParseFailed`]. The view only ever shows the
//! single string from [`FetchError::user_message`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::model::ApiErrorBody;

/// Error returned by a [`crate::FeedbackSource`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Network failure or non-2xx response.
    #[error("{message}")]
    FetchFailed { message: String },
    /// Response body did not match the envelope schema.
    #[error("unexpected response from server: {0}")]
    ParseFailed(String),
}

impl FetchError {
    /// Failure for a request that never produced a response.
    #[must_use]
    pub fn transport(detail: impl std::fmt::Display) -> Self {
        Self::FetchFailed { message: format!("Failed to load priorities: {detail}") }
    }

    /// Failure for a non-2xx response.
    ///
    /// Prefers the server-provided `message` (or `detail`) from an
    /// [`ApiErrorBody`], then falls back to a generic message naming the
    /// status code.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let server_message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.server_message().map(str::to_owned));
        let message = server_message.unwrap_or_else(|| format!("Failed to load priorities: HTTP {status}"));
        Self::FetchFailed { message }
    }

    /// The one string the UI shows for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseFailed(err.to_string())
    }
}
