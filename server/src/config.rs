//! Host configuration parsed from environment variables.
//!
//! Required (one of):
//! - `SURF_FIXTURE_PATH`: serve a JSON envelope file from disk
//! - `SURF_UPSTREAM_URL`: proxy `GET {url}/api/priorities`
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `SURF_UPSTREAM_TIMEOUT_SECS`: upstream request timeout, default 30
//!
//! When both backends are set the fixture wins.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("set SURF_FIXTURE_PATH or SURF_UPSTREAM_URL to choose a priorities backend")]
    NoBackend,
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Where `/api/priorities` data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrioritiesBackend {
    Fixture { path: PathBuf },
    Upstream { base_url: String, timeout_secs: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub backend: PrioritiesBackend,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup. Blank values count as
    /// unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;

        let backend = if let Some(path) = get("SURF_FIXTURE_PATH") {
            PrioritiesBackend::Fixture { path: PathBuf::from(path) }
        } else if let Some(url) = get("SURF_UPSTREAM_URL") {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Invalid { var: "SURF_UPSTREAM_URL", value: url });
            }
            let timeout_secs = parse_or(
                "SURF_UPSTREAM_TIMEOUT_SECS",
                get("SURF_UPSTREAM_TIMEOUT_SECS"),
                DEFAULT_UPSTREAM_TIMEOUT_SECS,
            )?;
            PrioritiesBackend::Upstream { base_url: url.trim_end_matches('/').to_owned(), timeout_secs }
        } else {
            return Err(ConfigError::NoBackend);
        };

        Ok(Self { port, backend })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}
