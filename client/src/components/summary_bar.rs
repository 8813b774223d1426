//! Envelope-level figures above the panes.

#[cfg(test)]
#[path = "summary_bar_test.rs"]
mod summary_bar_test;

use feedback::ViewState;
use feedback::present::format_generated_at;
use feedback::view::EnvelopeSummary;
use leptos::prelude::*;

/// Confidence as a percentage. Values up to 1.0 are treated as fractions.
pub fn confidence_label(confidence: f64) -> String {
    let pct = if confidence <= 1.0 { confidence * 100.0 } else { confidence };
    format!("{pct:.0}%")
}

/// Stat tiles in display order. Optional pipeline fields only when present.
pub fn summary_stats(summary: &EnvelopeSummary) -> Vec<(&'static str, String)> {
    let mut stats = vec![
        ("Total Analyzed", summary.total_analyzed.to_string()),
        ("Prioritized", summary.item_count.to_string()),
    ];
    if !summary.total_risk_estimate.trim().is_empty() {
        stats.push(("Risk Estimate", summary.total_risk_estimate.trim().to_owned()));
    }
    if !summary.generated_at.trim().is_empty() {
        stats.push(("Last Updated", format_generated_at(&summary.generated_at)));
    }
    if let Some(version) = summary.pipeline_version.as_deref().filter(|v| !v.trim().is_empty()) {
        stats.push(("Pipeline", version.to_owned()));
    }
    if let Some(confidence) = summary.confidence {
        stats.push(("Confidence", confidence_label(confidence)));
    }
    stats
}

#[component]
pub fn SummaryBar(view_state: RwSignal<ViewState>) -> impl IntoView {
    let stats = move || view_state.with(|v| v.summary().map(summary_stats).unwrap_or_default());

    view! {
        <div class="summary-bar">
            {move || {
                stats()
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="summary-bar__stat">
                                <span class="summary-bar__value">{value}</span>
                                <span class="summary-bar__label">{label}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
