use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use kontak_core::DetectionResult;

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub has_contact_info: bool,
}

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/detect", post(detect))
        .route("/v1/check", post(check))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "ok"
}

/// Full detection result: the merged signal plus categorized evidence.
async fn detect(Json(req): Json<ScanRequest>) -> Json<DetectionResult> {
    Json(kontak_core::detect_contact_info(&req.text))
}

/// Boolean pre-check, for callers that only gate on the signal.
async fn check(Json(req): Json<ScanRequest>) -> Json<CheckResponse> {
    let result = kontak_core::detect_contact_info(&req.text);
    tracing::debug!(
        has_contact_info = result.has_contact_info,
        input_len = req.text.len(),
        "pre-check"
    );
    Json(CheckResponse {
        has_contact_info: result.has_contact_info,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn router_round_trips_detect_json() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/v1/detect")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"text":"Call 0917-123-4567 or email test@email.com"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["has_contact_info"], true);
        assert_eq!(json["details"]["phones"][0], "0917-123-4567");
        assert_eq!(json["details"]["emails"][0], "test@email.com");
        assert_eq!(json["details"]["social"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn router_round_trips_check_json() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/v1/check")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"text":"10 years Python experience"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "has_contact_info": false }));
    }

    #[tokio::test]
    async fn router_rejects_malformed_body() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/v1/check")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        // The detector itself never fails; a body that doesn't decode is
        // rejected before it, on axum's 4xx path.
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn detect_returns_categorized_evidence() {
        let Json(result) = detect(Json(ScanRequest {
            text: "Call 0917-123-4567 or email test@email.com".to_string(),
        }))
        .await;

        assert!(result.has_contact_info);
        assert_eq!(result.details.phones, vec!["0917-123-4567"]);
        assert_eq!(result.details.emails, vec!["test@email.com"]);
    }

    #[tokio::test]
    async fn check_returns_signal_only() {
        let Json(resp) = check(Json(ScanRequest {
            text: "10 years Python experience".to_string(),
        }))
        .await;
        assert!(!resp.has_contact_info);

        let Json(resp) = check(Json(ScanRequest {
            text: "DM @johndoe".to_string(),
        }))
        .await;
        assert!(resp.has_contact_info);
    }
}
