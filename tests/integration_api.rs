//! Integration tests for the REST API feature.

#![cfg(feature = "api")]

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::util::ServiceExt;

use powerplan::api::router;

const PAYLOAD: &str = r#"{
    "load": 910,
    "fuels": {
        "gas(euro/MWh)": 13.4,
        "kerosine(euro/MWh)": 50.8,
        "co2(euro/ton)": 20,
        "wind(%)": 60
    },
    "powerplants": [
        { "name": "gasfiredbig1", "type": "gasfired", "efficiency": 0.53, "pmin": 100, "pmax": 460 },
        { "name": "gasfiredbig2", "type": "gasfired", "efficiency": 0.53, "pmin": 100, "pmax": 460 },
        { "name": "gasfiredsomewhatsmaller", "type": "gasfired", "efficiency": 0.37, "pmin": 40, "pmax": 210 },
        { "name": "tj1", "type": "turbojet", "efficiency": 0.3, "pmin": 0, "pmax": 16 },
        { "name": "windpark1", "type": "windturbine", "efficiency": 1, "pmin": 0, "pmax": 150 },
        { "name": "windpark2", "type": "windturbine", "efficiency": 1, "pmin": 0, "pmax": 36 }
    ]
}"#;

async fn post_plan(body: &str) -> (StatusCode, serde_json::Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/productionplan")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = router().oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn full_payload_returns_merit_order_plan() {
    let (status, json) = post_plan(PAYLOAD).await;
    assert_eq!(status, StatusCode::OK);

    let plan: Vec<(String, f64)> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| (e["name"].as_str().unwrap().to_string(), e["p"].as_f64().unwrap()))
        .collect();
    let names: Vec<&str> = plan.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(
        names,
        [
            "windpark1",
            "windpark2",
            "gasfiredbig1",
            "gasfiredbig2",
            "gasfiredsomewhatsmaller",
            "tj1"
        ]
    );

    let total: f64 = plan.iter().map(|(_, p)| p).sum();
    assert!((total - 910.0).abs() < 0.1, "total {total}");
}

#[tokio::test]
async fn every_entry_carries_only_name_and_p() {
    let (_, json) = post_plan(PAYLOAD).await;
    for entry in json.as_array().unwrap() {
        let keys: Vec<&String> = entry.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2, "unexpected keys: {keys:?}");
    }
}

#[tokio::test]
async fn infeasible_load_reports_manual_intervention() {
    let body = PAYLOAD.replace("\"load\": 910", "\"load\": 90").replace(
        "\"wind(%)\": 60",
        "\"wind(%)\": 0",
    );
    let (status, json) = post_plan(&body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["error"].as_str().unwrap().contains("switched off"));
}

#[tokio::test]
async fn unsupported_type_is_a_bad_request() {
    let body = PAYLOAD.replace("\"turbojet\"", "\"solarfired\"");
    let (status, json) = post_plan(&body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("tj1"));
}

#[tokio::test]
async fn repeated_requests_are_independent() {
    let (_, first) = post_plan(PAYLOAD).await;
    let _ = post_plan(&PAYLOAD.replace("\"load\": 910", "\"load\": 480")).await;
    let (_, again) = post_plan(PAYLOAD).await;
    assert_eq!(first, again);
}
