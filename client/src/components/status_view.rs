//! Loading, error, and empty-result states for the dashboard body.

use leptos::prelude::*;

pub const LOADING_TEXT: &str = "Loading priorities…";
pub const EMPTY_TEXT: &str = "No prioritized feedback to show yet.";

#[component]
pub fn LoadingView() -> impl IntoView {
    view! {
        <div class="status-view status-view--loading" role="status">
            <span class="status-view__spinner"></span>
            <p>{LOADING_TEXT}</p>
        </div>
    }
}

/// Failed load. The retry action reloads the whole page.
#[component]
pub fn ErrorView(message: String) -> impl IntoView {
    let on_reload = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(w) = web_sys::window() {
                let _ = w.location().reload();
            }
        }
    };

    view! {
        <div class="status-view status-view--error" role="alert">
            <p class="status-view__message">{message}</p>
            <button class="btn status-view__retry" on:click=on_reload>
                "Reload page"
            </button>
        </div>
    }
}

#[component]
pub fn EmptyView(on_refresh: Callback<()>) -> impl IntoView {
    view! {
        <div class="status-view status-view--empty">
            <p>{EMPTY_TEXT}</p>
            <button class="btn" on:click=move |_| on_refresh.run(())>
                "Check again"
            </button>
        </div>
    }
}
