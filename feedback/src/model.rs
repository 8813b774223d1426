//! Wire schema for `GET /api/priorities`.
//!
//! DESIGN
//! ======
//! Field names mirror the JSON produced by the prioritization backend,
//! including the one camelCase field (`preMortemForecast`). Everything the
//! dashboard only displays is optional or defaulted so a sparse item still
//! decodes; `id`, `rank`, `title`, and `score` are required.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Stable per-item identifier within one envelope.
pub type ItemId = i64;

/// Category label used when an item arrives without one.
pub const DEFAULT_CATEGORY: &str = "General";

/// Shown in place of an empty pre-mortem forecast.
pub const FORECAST_PLACEHOLDER: &str =
    "No pre-mortem forecast has been generated for this item yet. Review the raw feedback and assign an owner before the risk compounds.";

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single prioritized feedback item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub id: ItemId,
    /// Row id of the raw feedback this item was derived from, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_id: Option<i64>,
    /// 1-based position assigned upstream. Display only; list order wins.
    pub rank: u32,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    pub score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub team: String,
    #[serde(rename = "preMortemForecast", default, deserialize_with = "null_as_default")]
    pub pre_mortem_forecast: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_plan: Option<ActionPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ItemMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
}

impl FeedbackItem {
    /// Category label for badges, falling back to [`DEFAULT_CATEGORY`].
    #[must_use]
    pub fn display_category(&self) -> &str {
        let trimmed = self.category.trim();
        if trimmed.is_empty() { DEFAULT_CATEGORY } else { trimmed }
    }

    /// Score rounded to the nearest integer for card and header display.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn rounded_score(&self) -> i64 {
        self.score.round() as i64
    }

    /// Forecast narrative, or [`FORECAST_PLACEHOLDER`] when it is blank.
    #[must_use]
    pub fn forecast_or_placeholder(&self) -> &str {
        if self.pre_mortem_forecast.trim().is_empty() {
            FORECAST_PLACEHOLDER
        } else {
            &self.pre_mortem_forecast
        }
    }

    /// Case-insensitive substring match against the title.
    ///
    /// `needle_lower` must already be lowercased; an empty needle matches.
    #[must_use]
    pub fn title_matches(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.title.to_lowercase().contains(needle_lower)
    }

    /// Provenance rows that are actually present, in display order.
    ///
    /// `date` falls back to `created_at`. Blank values are skipped, so an
    /// item with no provenance yields an empty list and the detail pane
    /// omits the block.
    #[must_use]
    pub fn provenance(&self) -> Vec<(&'static str, &str)> {
        let date = non_blank(self.date.as_deref()).or_else(|| non_blank(self.created_at.as_deref()));
        [
            ("Reporter", non_blank(self.reporter.as_deref())),
            ("Date", date),
            ("Source", non_blank(self.source.as_deref())),
            ("Impact", non_blank(self.impact.as_deref())),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Horizon of an action-plan step list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepTier {
    Immediate,
    MediumTerm,
    LongTerm,
}

impl StepTier {
    pub const ALL: [Self; 3] = [Self::Immediate, Self::MediumTerm, Self::LongTerm];

    /// Section heading shown in the detail pane.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Immediate => "Immediate Steps",
            Self::MediumTerm => "Medium-Term Steps",
            Self::LongTerm => "Long-Term Steps",
        }
    }

    /// Stable key for element ids and collapse state.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::MediumTerm => "medium-term",
            Self::LongTerm => "long-term",
        }
    }
}

/// Tiered remediation plan attached to an item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPlan {
    #[serde(default, deserialize_with = "null_as_default")]
    pub immediate_steps: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub medium_term_steps: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub long_term_steps: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub estimated_timeline: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub required_resources: String,
}

impl ActionPlan {
    /// Steps for one tier, in source order.
    #[must_use]
    pub fn steps(&self, tier: StepTier) -> &[String] {
        match tier {
            StepTier::Immediate => &self.immediate_steps,
            StepTier::MediumTerm => &self.medium_term_steps,
            StepTier::LongTerm => &self.long_term_steps,
        }
    }

    /// Non-empty tiers only, ordered immediate → long-term.
    pub fn sections(&self) -> impl Iterator<Item = (StepTier, &[String])> {
        StepTier::ALL
            .into_iter()
            .map(|tier| (tier, self.steps(tier)))
            .filter(|(_, steps)| !steps.is_empty())
    }

    #[must_use]
    pub fn timeline(&self) -> Option<&str> {
        non_blank(Some(&self.estimated_timeline))
    }

    #[must_use]
    pub fn resources(&self) -> Option<&str> {
        non_blank(Some(&self.required_resources))
    }
}

/// Aggregate signal about an item, when the pipeline provides it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemMetadata {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_mentions: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sentiment_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_reported: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_updated: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub affected_user_segments: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub geographic_concentration: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub severity_indicators: Vec<String>,
}

/// Pipeline run information attached to an envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    #[serde(default, deserialize_with = "null_as_default")]
    pub analysis_duration_seconds: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub llm_model: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub confidence_score: f64,
}

/// Top-level response of `GET /api/priorities`.
///
/// `items` order is the authoritative rank order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListEnvelope {
    pub items: Vec<FeedbackItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_analyzed: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_risk_estimate: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub generated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_pipeline_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ResponseMetadata>,
}

/// Error body the API is expected (not guaranteed) to send on failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    /// FastAPI-style error text, read when `message` is absent.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub detail: String,
    #[serde(default)]
    pub status: u16,
}

impl ApiErrorBody {
    /// The server-provided explanation: `message`, else `detail`.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        [self.message.trim(), self.detail.trim()].into_iter().find(|m| !m.is_empty())
    }
}
