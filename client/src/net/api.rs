//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the fetch is never issued during rendering; the stub
//! reports an error so misuse is visible instead of hanging.
//!
//! ERROR HANDLING
//! ==============
//! Transport errors, non-2xx responses, and malformed bodies are all mapped
//! into `feedback::FetchError` by the shared decoder so the page shows the
//! same messages the CLI prints.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use feedback::{FetchError, ListEnvelope, PRIORITIES_PATH};

#[cfg(any(test, feature = "hydrate"))]
fn body_read_failed_message(status: u16) -> String {
    format!("response body unreadable (HTTP {status})")
}

/// Fetch the priorities envelope from the same origin.
///
/// # Errors
///
/// Returns [`FetchError::FetchFailed`] for network errors or non-2xx
/// responses and [`FetchError::ParseFailed`] for bodies that are not an
/// envelope.
pub async fn fetch_priorities() -> Result<ListEnvelope, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PRIORITIES_PATH)
            .send()
            .await
            .map_err(FetchError::transport)?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|_| FetchError::transport(body_read_failed_message(status)))?;
        feedback::source::decode_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::transport(format!("{PRIORITIES_PATH} is only fetched in the browser")))
    }
}

/// Browser data source handed to `ViewState` loads.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpSource;

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl feedback::FeedbackSource for HttpSource {
    async fn fetch_feedback(&self) -> Result<ListEnvelope, FetchError> {
        fetch_priorities().await
    }
}
