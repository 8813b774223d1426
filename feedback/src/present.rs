//! Presentation lookups shared by every dashboard surface.
//!
//! The category palette is a fixed table; anything not in it renders gray.

#[cfg(test)]
#[path = "present_test.rs"]
mod present_test;

use chrono::{DateTime, NaiveDateTime};

/// Badge color for categories outside the table.
pub const FALLBACK_CATEGORY_COLOR: &str = "#6c757d";

const CATEGORY_COLORS: &[(&str, &str)] = &[
    ("Bug Fix", "#dc3545"),
    ("Feature Request", "#5856d6"),
    ("UI/UX Improvement", "#9b59b6"),
    ("Performance", "#28a745"),
    ("General", FALLBACK_CATEGORY_COLOR),
];

/// Badge background color for a category label (exact match).
#[must_use]
pub fn category_color(category: &str) -> &'static str {
    CATEGORY_COLORS
        .iter()
        .find(|(name, _)| *name == category)
        .map_or(FALLBACK_CATEGORY_COLOR, |(_, color)| color)
}

/// Glyph prefixed to titles in compact listings.
#[must_use]
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "Bug" | "Bug Fix" => "🐛",
        "Feature" | "Feature Request" => "✨",
        "UX" | "UI/UX Improvement" => "🎨",
        _ => "📝",
    }
}

/// Urgency band used to color score badges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTier {
    Critical,
    High,
    Medium,
    Low,
}

impl ScoreTier {
    /// Classify a score on the 0–10 scale. Scores above 10 are read as a
    /// 0–100 scale and scaled down first.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        let normalized = if score > 10.0 { score / 10.0 } else { score };
        if normalized >= 9.0 {
            Self::Critical
        } else if normalized >= 7.0 {
            Self::High
        } else if normalized >= 5.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// BEM modifier class for the score badge.
    #[must_use]
    pub fn css_class(self) -> String {
        format!("score-badge score-badge--{}", self.label())
    }
}

/// Render an envelope timestamp as `YYYY-MM-DD HH:MM`.
///
/// Accepts RFC 3339 and offset-less ISO 8601; anything else is returned
/// unchanged so the header never hides what the server sent.
#[must_use]
pub fn format_generated_at(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    trimmed.to_owned()
}

/// Date portion of an envelope timestamp, when it parses.
#[must_use]
pub fn generated_on(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.format("%Y-%m-%d").to_string());
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.format("%Y-%m-%d").to_string())
}
