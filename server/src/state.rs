//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It only holds the priorities backend; the host keeps no session data.

use std::sync::Arc;

use crate::services::priorities::PrioritiesService;

#[derive(Clone)]
pub struct AppState {
    pub priorities: Arc<PrioritiesService>,
}

impl AppState {
    #[must_use]
    pub fn new(priorities: PrioritiesService) -> Self {
        Self { priorities: Arc::new(priorities) }
    }
}
