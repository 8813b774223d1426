//! Summary card for one feedback item in the list pane.

#[cfg(test)]
#[path = "feedback_card_test.rs"]
mod feedback_card_test;

use feedback::present::{ScoreTier, category_color, category_icon};
use feedback::{FeedbackItem, ItemId};
use leptos::prelude::*;

/// Inline style for a category badge.
pub fn badge_style(category: &str) -> String {
    format!("background-color: {}", category_color(category))
}

pub fn rank_label(rank: u32) -> String {
    format!("#{rank}")
}

/// A clickable card: category badge, rounded score, and title.
#[component]
pub fn FeedbackCard(
    item: FeedbackItem,
    #[prop(into)] selected: Signal<bool>,
    on_select: Callback<ItemId>,
) -> impl IntoView {
    let id = item.id;
    let category = item.display_category().to_owned();
    let style = badge_style(&category);
    let icon = category_icon(&category);
    let score_class = ScoreTier::from_score(item.score).css_class();
    let score = item.rounded_score();
    let rank = rank_label(item.rank);
    let team = item.team.trim().to_owned();

    view! {
        <button
            class="feedback-card"
            class:feedback-card--selected=move || selected.get()
            aria-pressed=move || if selected.get() { "true" } else { "false" }
            on:click=move |_| on_select.run(id)
        >
            <div class="feedback-card__header">
                <span class="feedback-card__rank">{rank}</span>
                <span class="category-badge" style=style>
                    <span class="category-badge__icon">{icon}</span>
                    {category}
                </span>
                <span class=score_class>{score}</span>
            </div>
            <div class="feedback-card__title">{item.title}</div>
            {(!team.is_empty()).then(|| view! { <div class="feedback-card__team">{team}</div> })}
        </button>
    }
}
