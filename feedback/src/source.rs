//! Data source contract for the priorities envelope.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client fetches with `gloo-net`, the CLI with `reqwest`; both
//! funnel the raw status + body through [`decode_response`] so error
//! messages and parse failures read the same everywhere. There is no retry
//! and no timeout override: callers decide what to show on failure.

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::model::ListEnvelope;

/// Same-origin path of the one read-only endpoint.
pub const PRIORITIES_PATH: &str = "/api/priorities";

/// Anything that can produce a priorities envelope.
///
/// `?Send` so browser futures (which hold JS handles) can implement it.
#[async_trait(?Send)]
pub trait FeedbackSource {
    /// Fetch the full envelope once.
    ///
    /// # Errors
    ///
    /// [`FetchError::FetchFailed`] on transport failure or non-2xx status,
    /// [`FetchError::ParseFailed`] when the body is not an envelope.
    async fn fetch_feedback(&self) -> Result<ListEnvelope, FetchError>;
}

/// Decode a 2xx body into an envelope.
///
/// # Errors
///
/// Returns [`FetchError::ParseFailed`] for malformed JSON or a body missing
/// required item fields.
pub fn decode_envelope(body: &str) -> Result<ListEnvelope, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// Turn a completed HTTP exchange into an envelope or a typed failure.
///
/// # Errors
///
/// Non-2xx statuses become [`FetchError::FetchFailed`] (see
/// [`FetchError::from_status`]); bad 2xx bodies become
/// [`FetchError::ParseFailed`].
pub fn decode_response(status: u16, body: &str) -> Result<ListEnvelope, FetchError> {
    if (200..300).contains(&status) {
        decode_envelope(body)
    } else {
        Err(FetchError::from_status(status, body))
    }
}

/// Source that always yields the same outcome. Backs offline fixtures.
#[derive(Clone, Debug)]
pub struct StaticSource {
    outcome: Result<ListEnvelope, FetchError>,
}

impl StaticSource {
    #[must_use]
    pub fn new(envelope: ListEnvelope) -> Self {
        Self { outcome: Ok(envelope) }
    }

    #[must_use]
    pub fn failing(error: FetchError) -> Self {
        Self { outcome: Err(error) }
    }
}

#[async_trait(?Send)]
impl FeedbackSource for StaticSource {
    async fn fetch_feedback(&self) -> Result<ListEnvelope, FetchError> {
        self.outcome.clone()
    }
}
