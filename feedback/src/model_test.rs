use super::*;
use serde_json::json;

fn sample_item() -> FeedbackItem {
    serde_json::from_value(json!({
        "id": 7,
        "rank": 1,
        "title": "Payment Processing Failures During Checkout",
        "category": "Bug Fix",
        "score": 95.2,
        "team": "Payment Engineering",
        "preMortemForecast": "If failures persist we lose $487K in 30 days.",
        "action_plan": {
            "immediate_steps": ["Roll back gateway", "Enable fallback processor"],
            "medium_term_steps": [],
            "long_term_steps": ["Multi-vendor redundancy"],
            "estimated_timeline": "2-4 weeks",
            "required_resources": "5 engineers"
        }
    }))
    .expect("item")
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn decodes_camel_case_forecast_field() {
    let item = sample_item();
    assert_eq!(item.pre_mortem_forecast, "If failures persist we lose $487K in 30 days.");
    assert_eq!(item.team, "Payment Engineering");
}

#[test]
fn sparse_item_decodes_with_defaults() {
    let item: FeedbackItem = serde_json::from_value(json!({
        "id": 1,
        "rank": 3,
        "title": "Slow export",
        "score": 4.0
    }))
    .expect("item");
    assert_eq!(item.category, "");
    assert_eq!(item.display_category(), DEFAULT_CATEGORY);
    assert!(item.action_plan.is_none());
    assert!(item.metadata.is_none());
    assert!(item.raw_text.is_none());
    assert_eq!(item.pre_mortem_forecast, "");
}

#[test]
fn explicit_nulls_decode_as_defaults() {
    let item: FeedbackItem = serde_json::from_value(json!({
        "id": 1,
        "rank": 1,
        "title": "Null fields",
        "score": 1.0,
        "category": null,
        "team": null,
        "preMortemForecast": null,
        "action_plan": { "immediate_steps": null }
    }))
    .expect("item");
    assert_eq!(item.display_category(), "General");
    assert_eq!(item.team, "");
    assert_eq!(item.action_plan, Some(ActionPlan::default()));
}

#[test]
fn nulls_in_metadata_and_counts_decode_as_defaults() {
    let envelope: ListEnvelope = serde_json::from_value(json!({
        "items": [{
            "id": 3,
            "rank": 1,
            "title": "Sparse metadata",
            "score": 42.0,
            "metadata": {
                "total_mentions": null,
                "sentiment_score": null,
                "first_reported": null,
                "last_updated": null,
                "affected_user_segments": null,
                "geographic_concentration": null,
                "severity_indicators": null
            }
        }],
        "total_analyzed": null,
        "metadata": {
            "analysis_duration_seconds": null,
            "llm_model": null,
            "confidence_score": null
        }
    }))
    .expect("envelope");
    assert_eq!(envelope.total_analyzed, 0);
    assert_eq!(envelope.items[0].metadata, Some(ItemMetadata::default()));
    assert_eq!(envelope.metadata, Some(ResponseMetadata::default()));
}

#[test]
fn missing_title_is_rejected() {
    let result = serde_json::from_value::<FeedbackItem>(json!({ "id": 1, "rank": 1, "score": 1.0 }));
    assert!(result.is_err());
}

#[test]
fn envelope_decodes_optional_pipeline_metadata() {
    let envelope: ListEnvelope = serde_json::from_value(json!({
        "items": [],
        "total_analyzed": 12,
        "total_risk_estimate": "$150K in potential revenue at risk",
        "generated_at": "2024-01-15T09:45:00Z",
        "agent_pipeline_version": "1.2.0",
        "metadata": { "analysis_duration_seconds": 3.5, "llm_model": "gpt-4o", "confidence_score": 0.87 }
    }))
    .expect("envelope");
    assert_eq!(envelope.total_analyzed, 12);
    assert_eq!(envelope.agent_pipeline_version.as_deref(), Some("1.2.0"));
    let meta = envelope.metadata.expect("metadata");
    assert_eq!(meta.llm_model, "gpt-4o");
    assert!((meta.confidence_score - 0.87).abs() < f64::EPSILON);
}

#[test]
fn serializing_keeps_wire_field_names() {
    let value = serde_json::to_value(sample_item()).expect("json");
    assert!(value.get("preMortemForecast").is_some());
    assert!(value.get("pre_mortem_forecast").is_none());
    assert!(value.get("raw_text").is_none());
}

// =============================================================
// Display helpers
// =============================================================

#[test]
fn rounded_score_rounds_half_away_from_zero() {
    let mut item = sample_item();
    assert_eq!(item.rounded_score(), 95);
    item.score = 87.5;
    assert_eq!(item.rounded_score(), 88);
    item.score = 0.4;
    assert_eq!(item.rounded_score(), 0);
}

#[test]
fn forecast_placeholder_applies_to_blank_text() {
    let mut item = sample_item();
    assert_ne!(item.forecast_or_placeholder(), FORECAST_PLACEHOLDER);
    item.pre_mortem_forecast = "   ".to_owned();
    assert_eq!(item.forecast_or_placeholder(), FORECAST_PLACEHOLDER);
}

#[test]
fn title_matches_is_case_insensitive_substring() {
    let item = sample_item();
    assert!(item.title_matches(""));
    assert!(item.title_matches("checkout"));
    assert!(item.title_matches("processing fail"));
    assert!(!item.title_matches("refund"));
}

#[test]
fn provenance_lists_present_fields_only() {
    let mut item = sample_item();
    assert!(item.provenance().is_empty());

    item.reporter = Some("Grace Hall".to_owned());
    item.created_at = Some("2024-07-22".to_owned());
    item.impact = Some("  ".to_owned());
    assert_eq!(item.provenance(), vec![("Reporter", "Grace Hall"), ("Date", "2024-07-22")]);

    item.date = Some("2024-07-23".to_owned());
    item.source = Some("Support Ticket".to_owned());
    assert_eq!(
        item.provenance(),
        vec![("Reporter", "Grace Hall"), ("Date", "2024-07-23"), ("Source", "Support Ticket")]
    );
}

// =============================================================
// Action plan
// =============================================================

#[test]
fn sections_skip_empty_tiers_and_keep_order() {
    let plan = sample_item().action_plan.expect("plan");
    let tiers: Vec<StepTier> = plan.sections().map(|(tier, _)| tier).collect();
    assert_eq!(tiers, vec![StepTier::Immediate, StepTier::LongTerm]);

    let (_, immediate) = plan.sections().next().expect("first section");
    assert_eq!(immediate, ["Roll back gateway".to_owned(), "Enable fallback processor".to_owned()]);
}

#[test]
fn only_immediate_steps_yield_single_section() {
    let plan = ActionPlan {
        immediate_steps: vec!["Hot-fix timeout handling".to_owned()],
        ..ActionPlan::default()
    };
    let headings: Vec<&str> = plan.sections().map(|(tier, _)| tier.heading()).collect();
    assert_eq!(headings, vec!["Immediate Steps"]);
}

#[test]
fn empty_plan_has_no_sections_or_details() {
    let plan = ActionPlan::default();
    assert_eq!(plan.sections().count(), 0);
    assert!(plan.timeline().is_none());
    assert!(plan.resources().is_none());
}

#[test]
fn step_tier_keys_are_distinct() {
    assert_eq!(StepTier::Immediate.key(), "immediate");
    assert_eq!(StepTier::MediumTerm.key(), "medium-term");
    assert_eq!(StepTier::LongTerm.key(), "long-term");
    assert_eq!(StepTier::MediumTerm.heading(), "Medium-Term Steps");
}
