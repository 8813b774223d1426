use super::*;

fn summary() -> EnvelopeSummary {
    EnvelopeSummary {
        total_analyzed: 1240,
        item_count: 12,
        total_risk_estimate: "$2.1M annual revenue at risk".to_owned(),
        generated_at: "2024-01-15T09:45:00Z".to_owned(),
        pipeline_version: None,
        confidence: None,
    }
}

#[test]
fn confidence_label_scales_fractions() {
    assert_eq!(confidence_label(0.87), "87%");
    assert_eq!(confidence_label(92.0), "92%");
}

#[test]
fn summary_stats_formats_core_fields() {
    assert_eq!(
        summary_stats(&summary()),
        vec![
            ("Total Analyzed", "1240".to_owned()),
            ("Prioritized", "12".to_owned()),
            ("Risk Estimate", "$2.1M annual revenue at risk".to_owned()),
            ("Last Updated", "2024-01-15 09:45".to_owned()),
        ]
    );
}

#[test]
fn summary_stats_appends_pipeline_fields_when_present() {
    let mut summary = summary();
    summary.pipeline_version = Some("v2.3".to_owned());
    summary.confidence = Some(0.5);
    let stats = summary_stats(&summary);
    assert_eq!(stats[stats.len() - 2], ("Pipeline", "v2.3".to_owned()));
    assert_eq!(stats[stats.len() - 1], ("Confidence", "50%".to_owned()));
}

#[test]
fn summary_stats_skip_blank_text_fields() {
    let mut summary = summary();
    summary.total_risk_estimate = " ".to_owned();
    summary.generated_at = String::new();
    assert_eq!(summary_stats(&summary).len(), 2);
}
