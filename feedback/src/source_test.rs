use super::*;

const BODY: &str = r#"{
    "items": [
        {"id": 1, "rank": 1, "title": "Checkout fails", "category": "Bug Fix", "score": 9.5, "team": "Payments", "preMortemForecast": "Revenue at risk"}
    ],
    "total_analyzed": 1,
    "total_risk_estimate": "$10K",
    "generated_at": "2024-01-15T09:45:00Z"
}"#;

#[test]
fn decode_response_accepts_2xx_envelope() {
    let envelope = decode_response(200, BODY).expect("envelope");
    assert_eq!(envelope.items.len(), 1);
    assert_eq!(envelope.items[0].title, "Checkout fails");
}

#[test]
fn decode_response_maps_non_2xx_to_fetch_failed() {
    let err = decode_response(503, r#"{"error":"unavailable","message":"Pipeline is warming up","status":503}"#)
        .unwrap_err();
    assert_eq!(err, FetchError::FetchFailed { message: "Pipeline is warming up".to_owned() });
}

#[test]
fn decode_envelope_rejects_malformed_json() {
    assert!(matches!(decode_envelope("{\"items\": ["), Err(FetchError::ParseFailed(_))));
}

#[test]
fn decode_envelope_rejects_item_without_title() {
    let body = r#"{"items":[{"id":1,"rank":1,"score":2.0}]}"#;
    assert!(matches!(decode_envelope(body), Err(FetchError::ParseFailed(_))));
}

#[tokio::test]
async fn static_source_replays_outcome() {
    let ok = StaticSource::new(decode_envelope(BODY).expect("envelope"));
    assert_eq!(ok.fetch_feedback().await.expect("ok").items.len(), 1);

    let failing = StaticSource::failing(FetchError::transport("offline"));
    assert!(failing.fetch_feedback().await.is_err());
    assert!(failing.fetch_feedback().await.is_err());
}
