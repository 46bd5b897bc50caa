//! Request handlers for the API endpoints.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use tracing::{info, warn};

use super::types::{ErrorResponse, MessageResponse};
use crate::payload::Payload;
use crate::plan::error::MANUAL_INTERVENTION_ADVICE;
use crate::plan::{DispatchError, PlanSummary, ProductionPlan, compute_plan};

type ApiError = (StatusCode, Json<ErrorResponse>);

/// `GET /` → 200 + usage hint
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Post a correct payload to /productionplan".to_string(),
    })
}

/// Computes a production plan for the posted payload.
///
/// `POST /productionplan` → 200 + `[{"name", "p"}]`
/// malformed or invalid payload, unknown plant type → 400 + `ErrorResponse`
/// load not reachable in merit order → 422 + `ErrorResponse`
pub async fn production_plan(
    payload: Result<Json<Payload>, JsonRejection>,
) -> Result<Json<ProductionPlan>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!(%rejection, "rejected request body");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(rejection.body_text())),
        )
    })?;

    let errors = payload.validate();
    if !errors.is_empty() {
        warn!(n_errors = errors.len(), "payload failed validation");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "invalid payload".to_string(),
                reason: None,
                details: errors,
            }),
        ));
    }

    let load = payload.load;
    let request = payload.into_request().map_err(dispatch_error)?;
    let plan = compute_plan(&request).map_err(dispatch_error)?;

    let summary = PlanSummary::from_plan(&plan, load);
    info!(
        load,
        total_output = summary.total_output,
        total_cost = summary.total_cost,
        committed_units = summary.committed_units,
        "production plan computed"
    );
    Ok(Json(plan))
}

fn dispatch_error(err: DispatchError) -> ApiError {
    warn!(%err, "production plan failed");
    match err {
        DispatchError::InvalidUnitKind { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(err.to_string())),
        ),
        DispatchError::ManualInterventionRequired { .. } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: MANUAL_INTERVENTION_ADVICE.to_string(),
                reason: Some(err.to_string()),
                details: Vec::new(),
            }),
        ),
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, header};
    use tower::util::ServiceExt;

    use super::*;
    use crate::api::router;

    fn post(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/productionplan")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn root_returns_hint() {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let resp = router().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["message"], "Post a correct payload to /productionplan");
    }

    #[tokio::test]
    async fn baseline_payload_returns_plan() {
        let body = serde_json::to_string(&Payload::baseline()).unwrap();
        let resp = router().oneshot(post(body)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[2]["name"], "gasfiredbig1");
        assert_eq!(entries[2]["p"], 368.4);
    }

    #[tokio::test]
    async fn infeasible_payload_returns_422() {
        let body = serde_json::to_string(&Payload::calm()).unwrap();
        let resp = router().oneshot(post(body)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(resp).await;
        assert_eq!(json["error"], MANUAL_INTERVENTION_ADVICE);
        assert!(json["reason"].as_str().unwrap().contains("gasfiredbig2"));
    }

    #[tokio::test]
    async fn unknown_type_returns_400() {
        let mut payload = Payload::baseline();
        payload.powerplants[0].kind = "solarfired".to_string();
        let resp = router()
            .oneshot(post(serde_json::to_string(&payload).unwrap()))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert!(json["error"].as_str().unwrap().contains("solarfired"));
    }

    #[tokio::test]
    async fn invalid_payload_lists_details() {
        let mut payload = Payload::baseline();
        payload.fuels.wind = 150.0;
        payload.powerplants[0].efficiency = 0.0;
        let resp = router()
            .oneshot(post(serde_json::to_string(&payload).unwrap()))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert_eq!(json["details"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn malformed_json_returns_400() {
        let resp = router()
            .oneshot(post("{\"load\": ".to_string()))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert!(json.get("error").is_some());
    }
}
