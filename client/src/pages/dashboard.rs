//! Dashboard page: sidebar, summary header, list pane, and detail pane.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. The page owns the session's `ViewState` and
//! passes it to both panes, so list and detail always agree on filter and
//! selection. Mounting starts exactly one load.
//!
//! LIFECYCLE
//! =========
//! The HTTP request is not cancelled when the page unmounts. Its completion
//! goes through `RwSignal::try_update`, which is a no-op once the signal is
//! disposed, and through the view state's load ticket, which discards a
//! result that a newer reload has superseded.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use feedback::{LoadStatus, ViewState};
use leptos::prelude::*;

use crate::components::detail_pane::DetailPane;
use crate::components::list_pane::ListPane;
use crate::components::sidebar::Sidebar;
use crate::components::status_view::{EmptyView, ErrorView, LoadingView};
use crate::components::summary_bar::SummaryBar;
use crate::state::ui::{NavTab, UiState};

/// Which body the dashboard shows for the current view state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BodyPhase {
    Loading,
    Error(String),
    Empty,
    Ready,
}

impl BodyPhase {
    pub fn of(view: &ViewState) -> Self {
        match view.status() {
            LoadStatus::Loading => Self::Loading,
            LoadStatus::Error(message) => Self::Error(message.clone()),
            LoadStatus::Ready if view.is_empty_result() => Self::Empty,
            LoadStatus::Ready => Self::Ready,
        }
    }
}

/// Placeholder copy for tabs without content.
pub fn stub_message(tab: NavTab) -> String {
    format!("{} is not available yet.", tab.label())
}

/// Enter `Loading` and fetch in the background.
fn start_load(view_state: RwSignal<ViewState>) {
    let Some(ticket) = view_state.try_update(ViewState::begin_load) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use feedback::FeedbackSource as _;

        let result = crate::net::api::HttpSource.fetch_feedback().await;
        if let Err(err) = &result {
            log::warn!("priorities load failed: {err}");
        }
        let applied = view_state.try_update(|v| v.finish_load(ticket, result)).unwrap_or(false);
        if !applied {
            log::debug!("discarded superseded priorities load");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = ticket;
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let view_state = RwSignal::new(ViewState::new());
    let reload = Callback::new(move |()| start_load(view_state));

    // Runs once after hydration; nothing inside is tracked.
    Effect::new(move || start_load(view_state));

    let phase = Memo::new(move |_| view_state.with(BodyPhase::of));
    let active_tab = move || ui.get().active_nav;

    view! {
        <div class="app-shell">
            <Sidebar/>
            <main class="app-main">
                <Show
                    when=move || active_tab().has_content()
                    fallback=move || {
                        view! {
                            <section class="tab-stub">
                                <h2>{move || active_tab().label()}</h2>
                                <p>{move || stub_message(active_tab())}</p>
                            </section>
                        }
                    }
                >
                    <header class="app-main__header">
                        <h1>"Feedback Priorities"</h1>
                    </header>
                    {move || match phase.get() {
                        BodyPhase::Loading => view! { <LoadingView/> }.into_any(),
                        BodyPhase::Error(message) => view! { <ErrorView message/> }.into_any(),
                        BodyPhase::Empty => view! { <EmptyView on_refresh=reload/> }.into_any(),
                        BodyPhase::Ready => {
                            view! {
                                <SummaryBar view_state/>
                                <div class="dashboard-panes">
                                    <ListPane view_state on_refresh=reload/>
                                    <DetailPane view_state/>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </Show>
            </main>
        </div>
    }
}
