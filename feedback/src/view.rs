//! Session view state: fetched items, search filter, selection, load status.
//!
//! DESIGN
//! ======
//! One `ViewState` value is owned by the page shell and passed down. Panes
//! call the operations below and never touch fields directly, so the
//! invariants hold no matter which surface drives it:
//!
//! - exactly one [`LoadStatus`] at a time;
//! - `selected_id` is `None` or the id of an item from the last fetch;
//! - changing the filter never changes the selection;
//! - [`ViewState::visible_items`] is a pure, restartable derivation.
//!
//! Loads are split into [`ViewState::begin_load`] and
//! [`ViewState::finish_load`] so reactive hosts can release their borrow
//! across the await. Each begin hands out a [`LoadTicket`]; finishing with
//! an outdated ticket is ignored, which keeps a slow earlier fetch from
//! overwriting a newer one.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::error::FetchError;
use crate::model::{FeedbackItem, ItemId, ListEnvelope};
use crate::source::FeedbackSource;

/// Where the single fetch of this session stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    /// User-facing failure message.
    Error(String),
}

/// Envelope-level figures shown in the dashboard header.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnvelopeSummary {
    pub total_analyzed: u64,
    pub item_count: usize,
    pub total_risk_estimate: String,
    pub generated_at: String,
    pub pipeline_version: Option<String>,
    pub confidence: Option<f64>,
}

impl EnvelopeSummary {
    fn from_envelope(envelope: &ListEnvelope) -> Self {
        Self {
            total_analyzed: envelope.total_analyzed,
            item_count: envelope.items.len(),
            total_risk_estimate: envelope.total_risk_estimate.clone(),
            generated_at: envelope.generated_at.clone(),
            pipeline_version: envelope.agent_pipeline_version.clone(),
            confidence: envelope.metadata.as_ref().map(|m| m.confidence_score),
        }
    }
}

/// Proof that a load was started; pass it back to [`ViewState::finish_load`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Clone, Debug, Default)]
pub struct ViewState {
    items: Vec<FeedbackItem>,
    filter_text: String,
    filter_lower: String,
    selected_id: Option<ItemId>,
    status: LoadStatus,
    summary: Option<EnvelopeSummary>,
    generation: u64,
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // LOADING
    // =========================================================================

    /// Enter `Loading` and hand out the ticket for the matching finish.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation = self.generation.wrapping_add(1);
        self.status = LoadStatus::Loading;
        LoadTicket(self.generation)
    }

    /// Apply a fetch outcome.
    ///
    /// On success the item collection is replaced wholesale, a selection
    /// that no longer exists is dropped, and the first item in list order is
    /// selected when nothing is. On failure items, selection, and summary are
    /// cleared and the status carries the user message.
    ///
    /// Returns `false` (and changes nothing) when `ticket` is stale.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<ListEnvelope, FetchError>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        match result {
            Ok(envelope) => {
                self.summary = Some(EnvelopeSummary::from_envelope(&envelope));
                self.items = envelope.items;
                if self.selected_id.is_some_and(|id| !self.contains(id)) {
                    self.selected_id = None;
                }
                if self.selected_id.is_none() {
                    self.selected_id = self.items.first().map(|item| item.id);
                }
                self.status = LoadStatus::Ready;
            }
            Err(err) => {
                self.items.clear();
                self.selected_id = None;
                self.summary = None;
                self.status = LoadStatus::Error(err.user_message());
            }
        }
        true
    }

    /// Fetch from `source` and apply the outcome.
    pub async fn load<S: FeedbackSource + ?Sized>(&mut self, source: &S) {
        let ticket = self.begin_load();
        let result = source.fetch_feedback().await;
        self.finish_load(ticket, result);
    }

    // =========================================================================
    // LOCAL STATE
    // =========================================================================

    /// Replace the search text. Selection is left alone even if the selected
    /// item stops being visible.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
        self.filter_lower = self.filter_text.to_lowercase();
    }

    /// Select `id` if it belongs to the fetched items; otherwise no-op.
    ///
    /// Returns whether the selection now points at `id`.
    pub fn select(&mut self, id: ItemId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.selected_id = Some(id);
        true
    }

    // =========================================================================
    // DERIVED VIEWS
    // =========================================================================

    /// Items whose title contains the filter text, ignoring case, in list
    /// order. Cloning the iterator restarts the walk.
    pub fn visible_items(&self) -> impl Iterator<Item = &FeedbackItem> + Clone {
        let needle = self.filter_lower.as_str();
        self.items.iter().filter(move |item| item.title_matches(needle))
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_items().count()
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&FeedbackItem> {
        let id = self.selected_id?;
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected_id == Some(id)
    }

    /// A successful fetch that returned zero items.
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        self.status == LoadStatus::Ready && self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[FeedbackItem] {
        &self.items
    }

    #[must_use]
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<ItemId> {
        self.selected_id
    }

    #[must_use]
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    #[must_use]
    pub fn summary(&self) -> Option<&EnvelopeSummary> {
        self.summary.as_ref()
    }

    fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }
}
