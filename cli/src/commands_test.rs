use super::*;
use feedback::ListEnvelope;
use serde_json::json;

fn loaded_view() -> ViewState {
    let envelope: ListEnvelope = serde_json::from_value(json!({
        "items": [
            {
                "id": 10, "rank": 1, "title": "Login button unresponsive on Safari", "category": "Bug Fix",
                "score": 98.0, "team": "Engineering", "preMortemForecast": "Blocked sign-ins.",
                "action_plan": {
                    "immediate_steps": ["Reproduce on Safari 15.2"],
                    "medium_term_steps": [],
                    "long_term_steps": ["Cross-browser CI"],
                    "estimated_timeline": "2-4 weeks"
                },
                "reporter": "Dana", "source": "Zendesk"
            },
            {
                "id": 20, "rank": 2, "title": "Add CSV export", "category": "Feature Request",
                "score": 76.0, "team": "Product", "preMortemForecast": ""
            }
        ],
        "total_analyzed": 150,
        "total_risk_estimate": "$150K",
        "generated_at": "2024-01-15T09:45:00"
    }))
    .unwrap();
    let mut view = ViewState::new();
    let ticket = view.begin_load();
    view.finish_load(ticket, Ok(envelope));
    view
}

fn output(run: impl FnOnce(&mut Vec<u8>) -> Result<(), CliError>) -> String {
    let mut buf = Vec::new();
    run(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn list_prints_rows_and_counts() {
    let mut view = loaded_view();
    let text = output(|out| list(&mut view, None, out));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("#1"));
    assert!(lines[0].contains("Bug Fix"));
    assert!(lines[0].ends_with("Login button unresponsive on Safari"));
    assert_eq!(lines[2], "2 of 2 items");
    assert_eq!(lines[3], "generated 2024-01-15 09:45");
}

#[test]
fn list_applies_case_insensitive_filter() {
    let mut view = loaded_view();
    let text = output(|out| list(&mut view, Some("csv"), out));
    assert!(text.contains("Add CSV export"));
    assert!(!text.contains("Safari"));
    assert!(text.contains("1 of 2 items"));
}

#[test]
fn show_defaults_to_first_item() {
    let mut view = loaded_view();
    let text = output(|out| show(&mut view, None, out));
    assert!(text.starts_with("Login button unresponsive on Safari\n"));
    assert!(text.contains("Reporter: Dana\n"));
    assert!(text.contains("  Immediate Steps\n    - Reproduce on Safari 15.2\n"));
    assert!(!text.contains("Medium-Term Steps"));
    assert!(text.contains("  Long-Term Steps\n"));
    assert!(text.contains("  Timeline: 2-4 weeks\n"));
}

#[test]
fn show_selected_item_without_plan_omits_section() {
    let mut view = loaded_view();
    let text = output(|out| show(&mut view, Some(20), out));
    assert!(text.starts_with("Add CSV export\n"));
    assert!(text.contains(feedback::model::FORECAST_PLACEHOLDER));
    assert!(!text.contains("Action Plan"));
}

#[test]
fn show_unknown_id_is_an_error() {
    let mut view = loaded_view();
    let err = show(&mut view, Some(999), &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CliError::UnknownItem(999)));
    assert_eq!(view.selected_id(), Some(10));
}

#[test]
fn show_with_no_items_is_an_error() {
    let mut view = ViewState::new();
    let ticket = view.begin_load();
    view.finish_load(ticket, Ok(ListEnvelope::default()));
    assert!(matches!(show(&mut view, None, &mut Vec::new()), Err(CliError::NoItems)));
}

#[test]
fn export_writes_visible_rows_only() {
    let mut view = loaded_view();
    let text = output(|out| export(&mut view, Some("login"), out));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "rank,id,title,category,score,team,pre_mortem_forecast");
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("1,10,Login button unresponsive on Safari,Bug Fix,98.0,Engineering,"));
}
