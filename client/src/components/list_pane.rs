//! Searchable list of visible feedback items.
//!
//! SYSTEM CONTEXT
//! ==============
//! The search input is bound both ways to the view state's filter text.
//! Cards call `select`; the pane never touches view state fields directly.
//! The download button exports exactly the items the pane is showing.

#[cfg(test)]
#[path = "list_pane_test.rs"]
mod list_pane_test;

use feedback::export::{export_filename, visible_items_csv};
use feedback::{ItemId, ViewState};
use leptos::prelude::*;

use crate::components::feedback_card::FeedbackCard;

/// "3 items", "1 of 3 items", and so on.
pub fn count_label(visible: usize, total: usize) -> String {
    let noun = if total == 1 { "item" } else { "items" };
    if visible == total {
        format!("{total} {noun}")
    } else {
        format!("{visible} of {total} {noun}")
    }
}

/// File name and CSV body for the download action.
///
/// # Errors
///
/// Returns a user-facing message when there is nothing to export or the
/// CSV cannot be produced.
pub fn prepare_download(view: &ViewState) -> Result<(String, String), String> {
    if view.visible_count() == 0 {
        return Err("Nothing to export.".to_owned());
    }
    let csv = visible_items_csv(view).map_err(|e| format!("Export failed: {e}"))?;
    let filename = export_filename(view.summary().map(|s| s.generated_at.as_str()));
    Ok((filename, csv))
}

#[component]
pub fn ListPane(view_state: RwSignal<ViewState>, on_refresh: Callback<()>) -> impl IntoView {
    let download_error = RwSignal::new(None::<String>);

    let filter_text = move || view_state.with(|v| v.filter_text().to_owned());
    let counts = move || view_state.with(|v| count_label(v.visible_count(), v.items().len()));
    let visible = move || view_state.with(|v| v.visible_items().cloned().collect::<Vec<_>>());

    let on_select = Callback::new(move |id: ItemId| {
        view_state.update(|v| {
            v.select(id);
        });
    });

    let on_download = move |_| {
        let outcome = view_state
            .with_untracked(prepare_download)
            .and_then(|(filename, csv)| {
                crate::util::download::save_text(&filename, crate::util::download::CSV_MIME, &csv)
            });
        #[cfg(feature = "hydrate")]
        if let Err(message) = &outcome {
            log::warn!("priorities download failed: {message}");
        }
        download_error.set(outcome.err());
    };

    view! {
        <section class="list-pane">
            <div class="list-pane__toolbar">
                <input
                    class="list-pane__search"
                    type="search"
                    placeholder="Search feedback titles"
                    prop:value=filter_text
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        view_state.update(|v| v.set_filter(text));
                    }
                />
                <button class="btn list-pane__refresh" title="Reload priorities" on:click=move |_| on_refresh.run(())>
                    "↻"
                </button>
                <button class="btn list-pane__download" title="Download visible items as CSV" on:click=on_download>
                    "Download CSV"
                </button>
            </div>

            <div class="list-pane__count">{counts}</div>
            <Show when=move || download_error.get().is_some()>
                <div class="list-pane__error">{move || download_error.get().unwrap_or_default()}</div>
            </Show>

            <div class="list-pane__cards">
                <Show
                    when=move || view_state.with(|v| v.visible_count() > 0)
                    fallback=|| view! { <p class="list-pane__no-match">"No feedback matches your search."</p> }
                >
                    <For
                        each=visible
                        key=|item| (item.id, item.rank, item.title.clone())
                        children=move |item| {
                            let id = item.id;
                            let selected = Signal::derive(move || view_state.with(|v| v.is_selected(id)));
                            view! { <FeedbackCard item selected on_select/> }
                        }
                    />
                </Show>
            </div>
        </section>
    }
}
