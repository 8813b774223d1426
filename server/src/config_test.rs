use super::*;
use std::collections::HashMap;

fn config(vars: &[(&str, &str)]) -> Result<HostConfig, ConfigError> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    HostConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn fixture_backend_with_default_port() {
    let cfg = config(&[("SURF_FIXTURE_PATH", "fixtures/priorities.json")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend, PrioritiesBackend::Fixture { path: PathBuf::from("fixtures/priorities.json") });
}

#[test]
fn upstream_backend_trims_trailing_slash_and_defaults_timeout() {
    let cfg = config(&[("SURF_UPSTREAM_URL", "http://localhost:8000/"), ("PORT", "8080")]).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(
        cfg.backend,
        PrioritiesBackend::Upstream {
            base_url: "http://localhost:8000".to_owned(),
            timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS
        }
    );
}

#[test]
fn upstream_timeout_override() {
    let cfg = config(&[("SURF_UPSTREAM_URL", "https://api.example.test"), ("SURF_UPSTREAM_TIMEOUT_SECS", "5")])
        .unwrap();
    assert_eq!(
        cfg.backend,
        PrioritiesBackend::Upstream { base_url: "https://api.example.test".to_owned(), timeout_secs: 5 }
    );
}

#[test]
fn fixture_wins_when_both_are_set() {
    let cfg = config(&[("SURF_UPSTREAM_URL", "http://localhost:8000"), ("SURF_FIXTURE_PATH", "data.json")]).unwrap();
    assert!(matches!(cfg.backend, PrioritiesBackend::Fixture { .. }));
}

#[test]
fn missing_backend_is_an_error() {
    assert_eq!(config(&[("PORT", "3000")]), Err(ConfigError::NoBackend));
    assert_eq!(config(&[("SURF_FIXTURE_PATH", "   ")]), Err(ConfigError::NoBackend));
}

#[test]
fn invalid_port_is_reported() {
    let err = config(&[("SURF_FIXTURE_PATH", "data.json"), ("PORT", "eighty")]).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
}

#[test]
fn upstream_url_needs_http_scheme() {
    let err = config(&[("SURF_UPSTREAM_URL", "localhost:8000")]).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "SURF_UPSTREAM_URL", value: "localhost:8000".to_owned() });
}
