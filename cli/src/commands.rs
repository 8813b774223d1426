//! Subcommand bodies. Each one works on a loaded `ViewState` and writes to
//! the given output, so the same filter and selection rules as the
//! dashboard apply.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::io::Write;

use feedback::export::visible_items_csv;
use feedback::present::format_generated_at;
use feedback::{FeedbackItem, ItemId, ViewState};

use crate::CliError;

/// `#rank  score  category  title` per visible item, then a count line.
pub fn list(view: &mut ViewState, filter: Option<&str>, out: &mut impl Write) -> Result<(), CliError> {
    if let Some(filter) = filter {
        view.set_filter(filter);
    }
    for item in view.visible_items() {
        writeln!(
            out,
            "#{:<3} {:>5.1}  {:<18}  {}",
            item.rank,
            item.score,
            item.display_category(),
            item.title
        )?;
    }
    writeln!(out, "{} of {} items", view.visible_count(), view.items().len())?;
    if let Some(summary) = view.summary() {
        if !summary.generated_at.trim().is_empty() {
            writeln!(out, "generated {}", format_generated_at(&summary.generated_at))?;
        }
    }
    Ok(())
}

/// Detail of `id`, or of the auto-selected first item.
pub fn show(view: &mut ViewState, id: Option<ItemId>, out: &mut impl Write) -> Result<(), CliError> {
    if let Some(id) = id {
        if !view.select(id) {
            return Err(CliError::UnknownItem(id));
        }
    }
    let item = view.selected_item().ok_or(CliError::NoItems)?;
    out.write_all(detail_text(item).as_bytes())?;
    Ok(())
}

/// CSV of the visible items.
pub fn export(view: &mut ViewState, filter: Option<&str>, out: &mut impl Write) -> Result<(), CliError> {
    if let Some(filter) = filter {
        view.set_filter(filter);
    }
    let csv = visible_items_csv(view)?;
    out.write_all(csv.as_bytes())?;
    Ok(())
}

pub fn detail_text(item: &FeedbackItem) -> String {
    let mut text = format!(
        "{}\n{} | score {} | #{}\n",
        item.title,
        item.display_category(),
        item.rounded_score(),
        item.id
    );
    if !item.team.trim().is_empty() {
        text.push_str(&format!("Team: {}\n", item.team.trim()));
    }
    for (label, value) in item.provenance() {
        text.push_str(&format!("{label}: {value}\n"));
    }
    text.push_str(&format!("\nPre-Mortem Forecast\n{}\n", item.forecast_or_placeholder()));

    if let Some(plan) = &item.action_plan {
        text.push_str("\nAction Plan\n");
        for (tier, steps) in plan.sections() {
            text.push_str(&format!("  {}\n", tier.heading()));
            for step in steps {
                text.push_str(&format!("    - {step}\n"));
            }
        }
        if let Some(timeline) = plan.timeline() {
            text.push_str(&format!("  Timeline: {timeline}\n"));
        }
        if let Some(resources) = plan.resources() {
            text.push_str(&format!("  Resources: {resources}\n"));
        }
    }

    if let Some(raw) = item.raw_text.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        text.push_str(&format!("\nOriginal Feedback\n{raw}\n"));
    }
    text
}
