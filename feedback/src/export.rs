//! CSV export of the currently visible items.
//!
//! The download action exports what the list pane is showing: the filtered
//! subset, in list order. Hidden items (including a hidden selection) are
//! not written.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use crate::present::generated_on;
use crate::view::ViewState;

const HEADER: [&str; 7] = ["rank", "id", "title", "category", "score", "team", "pre_mortem_forecast"];

/// Error returned by [`visible_items_csv`].
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write csv row: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("failed to finish csv output: {0}")]
    Flush(String),
}

/// Render the visible items as CSV with a header row.
///
/// # Errors
///
/// Returns [`ExportError`] if the writer fails; writing into memory only
/// fails on invalid internal state.
pub fn visible_items_csv(view: &ViewState) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for item in view.visible_items() {
        writer.write_record([
            item.rank.to_string().as_str(),
            item.id.to_string().as_str(),
            item.title.as_str(),
            item.display_category(),
            format!("{:.1}", item.score).as_str(),
            item.team.as_str(),
            item.pre_mortem_forecast.as_str(),
        ])?;
    }
    let bytes = writer.into_inner().map_err(|e| ExportError::Flush(e.error().to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// File name for a download, dated by the envelope when possible.
#[must_use]
pub fn export_filename(generated_at: Option<&str>) -> String {
    match generated_at.and_then(generated_on) {
        Some(date) => format!("surf-priorities-{date}.csv"),
        None => "surf-priorities.csv".to_owned(),
    }
}
