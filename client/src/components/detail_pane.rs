//! Full record for the selected feedback item.
//!
//! DESIGN
//! ======
//! The pane follows `selected_id`, not the visible subset: a selection hidden
//! by the search filter keeps showing here. Optional data (provenance,
//! metadata, action plan tiers, raw text) is omitted entirely when absent
//! rather than rendered as "no data".

#[cfg(test)]
#[path = "detail_pane_test.rs"]
mod detail_pane_test;

use feedback::model::ItemMetadata;
use feedback::present::{ScoreTier, category_icon};
use feedback::{FeedbackItem, StepTier, ViewState};
use leptos::prelude::*;

use crate::components::feedback_card::badge_style;

pub const PLACEHOLDER_TEXT: &str = "Select a feedback item to see its forecast and action plan.";

pub fn id_label(item: &FeedbackItem) -> String {
    match item.feedback_id {
        Some(feedback_id) if feedback_id != item.id => format!("#{} (feedback #{feedback_id})", item.id),
        _ => format!("#{}", item.id),
    }
}

pub fn team_label(team: &str) -> Option<String> {
    let team = team.trim();
    (!team.is_empty()).then(|| format!("Assigned to {team}"))
}

/// Action plan tiers to render, or `None` when the item has no plan.
pub fn plan_sections(item: &FeedbackItem) -> Option<Vec<(StepTier, Vec<String>)>> {
    item.action_plan
        .as_ref()
        .map(|plan| plan.sections().map(|(tier, steps)| (tier, steps.to_vec())).collect())
}

/// Label/value rows for item metadata; empty fields are skipped.
pub fn metadata_rows(meta: &ItemMetadata) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();
    if meta.total_mentions > 0 {
        rows.push(("Mentions", meta.total_mentions.to_string()));
    }
    rows.push(("Sentiment", format!("{:.2}", meta.sentiment_score)));
    let text_fields = [("First reported", &meta.first_reported), ("Last updated", &meta.last_updated)];
    for (label, value) in text_fields {
        if !value.trim().is_empty() {
            rows.push((label, value.trim().to_owned()));
        }
    }
    let list_fields = [
        ("Segments", &meta.affected_user_segments),
        ("Regions", &meta.geographic_concentration),
        ("Severity signals", &meta.severity_indicators),
    ];
    for (label, values) in list_fields {
        if !values.is_empty() {
            rows.push((label, values.join(", ")));
        }
    }
    rows
}

#[component]
pub fn DetailPane(view_state: RwSignal<ViewState>) -> impl IntoView {
    let selected = Memo::new(move |_| view_state.with(|v| v.selected_item().cloned()));

    view! {
        <section class="detail-pane">
            {move || match selected.get() {
                Some(item) => view! { <ItemDetail item/> }.into_any(),
                None => view! { <p class="detail-pane__placeholder">{PLACEHOLDER_TEXT}</p> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn ItemDetail(item: FeedbackItem) -> impl IntoView {
    let category = item.display_category().to_owned();
    let style = badge_style(&category);
    let icon = category_icon(&category);
    let score_class = ScoreTier::from_score(item.score).css_class();
    let score = format!("Score {}", item.rounded_score());
    let id = id_label(&item);
    let team = team_label(&item.team);
    let forecast = item.forecast_or_placeholder().to_owned();
    let provenance: Vec<(&'static str, String)> =
        item.provenance().into_iter().map(|(label, value)| (label, value.to_owned())).collect();
    let metadata = item.metadata.as_ref().map(metadata_rows);
    let plan = plan_sections(&item);
    let timeline = item.action_plan.as_ref().and_then(|p| p.timeline()).map(str::to_owned);
    let resources = item.action_plan.as_ref().and_then(|p| p.resources()).map(str::to_owned);
    let raw_text = item.raw_text.clone().filter(|t| !t.trim().is_empty());

    view! {
        <article class="item-detail">
            <header class="item-detail__header">
                <h2 class="item-detail__title">{item.title}</h2>
                <div class="item-detail__badges">
                    <span class="category-badge" style=style>
                        <span class="category-badge__icon">{icon}</span>
                        {category}
                    </span>
                    <span class=score_class>{score}</span>
                    <span class="item-detail__id">{id}</span>
                </div>
                {team.map(|team| view! { <p class="item-detail__team">{team}</p> })}
            </header>

            {(!provenance.is_empty())
                .then(|| {
                    view! {
                        <dl class="item-detail__provenance">
                            {provenance
                                .into_iter()
                                .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                                .collect_view()}
                        </dl>
                    }
                })}

            <section class="item-detail__forecast">
                <h3>"Pre-Mortem Forecast"</h3>
                <p>{forecast}</p>
            </section>

            {plan
                .map(|sections| {
                    view! {
                        <section class="item-detail__plan">
                            <h3>"Action Plan"</h3>
                            {sections
                                .into_iter()
                                .map(|(tier, steps)| {
                                    view! {
                                        <details class=format!("plan-tier plan-tier--{}", tier.key()) open=true>
                                            <summary>{tier.heading()}</summary>
                                            <ul>
                                                {steps.into_iter().map(|step| view! { <li>{step}</li> }).collect_view()}
                                            </ul>
                                        </details>
                                    }
                                })
                                .collect_view()}
                            {timeline
                                .map(|t| view! { <p class="plan-meta"><strong>"Timeline: "</strong>{t}</p> })}
                            {resources
                                .map(|r| view! { <p class="plan-meta"><strong>"Resources: "</strong>{r}</p> })}
                        </section>
                    }
                })}

            {metadata
                .filter(|rows| !rows.is_empty())
                .map(|rows| {
                    view! {
                        <dl class="item-detail__metadata">
                            {rows
                                .into_iter()
                                .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                                .collect_view()}
                        </dl>
                    }
                })}

            {raw_text
                .map(|text| {
                    view! {
                        <section class="item-detail__raw">
                            <h3>"Original Feedback"</h3>
                            <blockquote>{text}</blockquote>
                        </section>
                    }
                })}
        </article>
    }
}
