use super::*;
use feedback::ListEnvelope;
use serde_json::json;

fn ready_view() -> ViewState {
    let envelope: ListEnvelope = serde_json::from_value(json!({
        "items": [
            { "id": 1, "rank": 1, "title": "Checkout times out", "category": "Bug Fix", "score": 9.2, "team": "Payments", "preMortemForecast": "Churn" },
            { "id": 2, "rank": 2, "title": "Bulk export", "category": "Feature Request", "score": 7.1, "team": "Data", "preMortemForecast": "Lost deals" }
        ],
        "total_analyzed": 40,
        "total_risk_estimate": "$90K",
        "generated_at": "2024-03-02T08:00:00Z"
    }))
    .expect("envelope");
    let mut view = ViewState::new();
    let ticket = view.begin_load();
    view.finish_load(ticket, Ok(envelope));
    view
}

#[test]
fn count_label_shows_total_when_unfiltered() {
    assert_eq!(count_label(3, 3), "3 items");
    assert_eq!(count_label(1, 1), "1 item");
}

#[test]
fn count_label_shows_visible_of_total_when_filtered() {
    assert_eq!(count_label(1, 3), "1 of 3 items");
    assert_eq!(count_label(0, 2), "0 of 2 items");
}

#[test]
fn prepare_download_names_file_by_generated_date() {
    let (filename, csv) = prepare_download(&ready_view()).expect("download");
    assert_eq!(filename, "surf-priorities-2024-03-02.csv");
    assert_eq!(csv.lines().count(), 3);
}

#[test]
fn prepare_download_only_exports_visible_items() {
    let mut view = ready_view();
    view.set_filter("bulk");
    let (_, csv) = prepare_download(&view).expect("download");
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.contains("Bulk export"));
    assert!(!csv.contains("Checkout times out"));
}

#[test]
fn prepare_download_rejects_empty_visible_set() {
    let mut view = ready_view();
    view.set_filter("no such title");
    assert_eq!(prepare_download(&view).unwrap_err(), "Nothing to export.");
}
