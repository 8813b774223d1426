//! Priorities backend: local fixture file or upstream analysis API.
//!
//! DESIGN
//! ======
//! Both backends produce a validated `ListEnvelope`. The upstream path runs
//! the same response decoding the browser uses, so an upstream error body's
//! `message` survives the hop and a malformed upstream body is reported
//! rather than forwarded. The fixture is re-read on every request so it can
//! be edited while the host runs.

#[cfg(test)]
#[path = "priorities_test.rs"]
mod priorities_test;

use std::path::{Path, PathBuf};
use std::time::Duration;

use axum::http::StatusCode;
use feedback::model::ApiErrorBody;
use feedback::source::{decode_envelope, decode_response};
use feedback::{FetchError, ListEnvelope, PRIORITIES_PATH};

use crate::config::PrioritiesBackend;

const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum PrioritiesError {
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
    #[error("{0}")]
    Upstream(#[from] FetchError),
    #[error("Failed to fetch priorities: cannot read {path}: {detail}")]
    FixtureRead { path: String, detail: String },
    #[error("Failed to fetch priorities: {path} is not a priorities envelope: {detail}")]
    FixtureParse { path: String, detail: String },
}

impl PrioritiesError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::HttpClientBuild(_) | Self::FixtureRead { .. } | Self::FixtureParse { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::HttpClientBuild(_) => "client_build_failed",
            Self::Upstream(_) => "upstream_failed",
            Self::FixtureRead { .. } => "fixture_unreadable",
            Self::FixtureParse { .. } => "fixture_invalid",
        }
    }

    /// Error body in the shape the dashboard decodes.
    pub fn to_body(&self) -> ApiErrorBody {
        ApiErrorBody {
            error: self.error_code().to_owned(),
            message: self.to_string(),
            status: self.status_code().as_u16(),
            ..ApiErrorBody::default()
        }
    }
}

enum Backend {
    Fixture { path: PathBuf },
    Upstream { http: reqwest::Client, url: String },
}

pub struct PrioritiesService {
    backend: Backend,
}

impl PrioritiesService {
    pub fn from_config(config: &PrioritiesBackend) -> Result<Self, PrioritiesError> {
        let backend = match config {
            PrioritiesBackend::Fixture { path } => Backend::Fixture { path: path.clone() },
            PrioritiesBackend::Upstream { base_url, timeout_secs } => {
                let http = reqwest::Client::builder()
                    .timeout(Duration::from_secs(*timeout_secs))
                    .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
                    .build()
                    .map_err(|e| PrioritiesError::HttpClientBuild(e.to_string()))?;
                Backend::Upstream { http, url: format!("{base_url}{PRIORITIES_PATH}") }
            }
        };
        Ok(Self { backend })
    }

    /// Short description for the startup log line.
    pub fn describe(&self) -> String {
        match &self.backend {
            Backend::Fixture { path } => format!("fixture {}", path.display()),
            Backend::Upstream { url, .. } => format!("upstream {url}"),
        }
    }

    pub async fn load(&self) -> Result<ListEnvelope, PrioritiesError> {
        match &self.backend {
            Backend::Fixture { path } => load_fixture(path).await,
            Backend::Upstream { http, url } => Ok(fetch_upstream(http, url).await?),
        }
    }
}

async fn load_fixture(path: &Path) -> Result<ListEnvelope, PrioritiesError> {
    let shown = path.display().to_string();
    let body = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| PrioritiesError::FixtureRead { path: shown.clone(), detail: e.to_string() })?;
    decode_envelope(&body).map_err(|e| PrioritiesError::FixtureParse { path: shown, detail: e.to_string() })
}

async fn fetch_upstream(http: &reqwest::Client, url: &str) -> Result<ListEnvelope, FetchError> {
    let response = http.get(url).send().await.map_err(FetchError::transport)?;
    let status = response.status().as_u16();
    let body = response.text().await.map_err(FetchError::transport)?;
    decode_response(status, &body)
}
