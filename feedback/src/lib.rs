//! Shared feedback model, data source contract, and view state.
//!
//! This crate owns everything about the priorities dashboard that does not
//! depend on a rendering target: the `/api/priorities` wire schema, the
//! fetch error taxonomy, the session view state (items, filter, selection,
//! load status), presentation lookups, and CSV export. Both the Leptos
//! `client` and the `cli` front-end drive the same [`ViewState`].

pub mod error;
pub mod export;
pub mod model;
pub mod present;
pub mod source;
pub mod view;

pub use error::FetchError;
pub use model::{ActionPlan, FeedbackItem, ItemId, ListEnvelope, StepTier};
pub use source::{FeedbackSource, PRIORITIES_PATH};
pub use view::{LoadStatus, ViewState};
