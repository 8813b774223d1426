//! Left navigation rail: brand, tabs, and theme toggle.
//!
//! Tab selection is local UI state; only the dashboard tab has content.

use leptos::prelude::*;

use crate::state::ui::{NavTab, UiState};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__logo">"SURF"</span>
                <span class="sidebar__tagline">"Feedback Priorities"</span>
            </div>

            <ul class="sidebar__nav">
                {NavTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <li>
                                <button
                                    class="sidebar__tab"
                                    class:sidebar__tab--active=move || ui.get().active_nav == tab
                                    on:click=move |_| ui.update(|u| u.active_nav = tab)
                                >
                                    {tab.label()}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <span class="sidebar__spacer"></span>

            <button
                class="btn sidebar__theme-toggle"
                title="Toggle dark mode"
                on:click=move |_| {
                    let next = crate::util::theme::toggle(ui.get_untracked().theme);
                    ui.update(|u| u.theme = next);
                }
            >
                {move || ui.get().theme.toggle_icon()}
            </button>
        </nav>
    }
}
