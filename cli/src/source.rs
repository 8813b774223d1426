//! Data sources for the CLI: the live API or a local envelope file.

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use std::path::Path;

use async_trait::async_trait;
use feedback::source::{StaticSource, decode_envelope, decode_response};
use feedback::{FeedbackSource, FetchError, ListEnvelope, PRIORITIES_PATH};

/// `GET {base_url}/api/priorities` over reqwest.
pub struct ApiSource {
    http: reqwest::Client,
    url: String,
}

impl ApiSource {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self { http, url: format!("{}{PRIORITIES_PATH}", base_url.trim_end_matches('/')) }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl FeedbackSource for ApiSource {
    async fn fetch_feedback(&self) -> Result<ListEnvelope, FetchError> {
        let response = self.http.get(&self.url).send().await.map_err(FetchError::transport)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(FetchError::transport)?;
        decode_response(status, &body)
    }
}

/// Source backed by an envelope file. A body that does not decode becomes a
/// source that fails with `ParseFailed`, same as a bad API response.
pub fn read_fixture(path: &Path) -> std::io::Result<StaticSource> {
    let body = std::fs::read_to_string(path)?;
    Ok(match decode_envelope(&body) {
        Ok(envelope) => StaticSource::new(envelope),
        Err(err) => StaticSource::failing(err),
    })
}
