//! # API REST
//!
//! REST API implementation for TMR decision support.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Uses `api-shared` for common types and utilities. The REST surface is unauthenticated; the
//! API key only guards gRPC.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{convert, pb, HealthService};
use tmr_core::RecommendationService;

/// Application state shared across REST API handlers.
#[derive(Clone, Default)]
struct AppState {
    recommendation_service: RecommendationService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, recommend, reference, assessment_options),
    components(schemas(
        pb::HealthRes,
        pb::RecommendReq,
        pb::RecommendRes,
        pb::Recommendation,
        pb::ReferenceRes,
        pb::MotorEntryPoint,
        pb::NoteSection,
        pb::AssessmentOptionsRes,
        pb::SubtypeOptions,
        pb::SelectOption,
    ))
)]
pub struct ApiDoc;

/// Builds the REST router with Swagger UI and permissive CORS.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/recommendations", post(recommend))
        .route("/reference", get(reference))
        .route("/assessment/options", get(assessment_options))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(AppState::default())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = pb::HealthRes)
    )
)]
/// Health check endpoint for the REST API.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<pb::HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/recommendations",
    request_body = pb::RecommendReq,
    responses(
        (status = 200, description = "Recommendation for the assessment", body = pb::RecommendRes),
        (status = 400, description = "Malformed assessment payload")
    )
)]
/// Generate a TMR plan from the assessment form.
///
/// Every field is optional. Values outside the known option sets are treated as unset, so an
/// incomplete form yields `complete: false` rather than an error.
///
/// # Errors
/// Returns `400 Bad Request` if the body is not a JSON object of the expected shape.
#[axum::debug_handler]
async fn recommend(
    State(state): State<AppState>,
    payload: Result<Json<pb::RecommendReq>, JsonRejection>,
) -> Result<Json<pb::RecommendRes>, (StatusCode, &'static str)> {
    let Json(req) = payload.map_err(|e| {
        tracing::warn!("Rejected assessment payload: {}", e.body_text());
        (StatusCode::BAD_REQUEST, "Invalid assessment payload")
    })?;

    Ok(Json(convert::recommend(&state.recommendation_service, &req)))
}

#[utoipa::path(
    get,
    path = "/reference",
    responses(
        (status = 200, description = "Motor entry point table and surgical notes", body = pb::ReferenceRes)
    )
)]
/// Static anatomical and technical reference material.
#[axum::debug_handler]
async fn reference(State(_state): State<AppState>) -> Json<pb::ReferenceRes> {
    Json(convert::reference_res())
}

#[utoipa::path(
    get,
    path = "/assessment/options",
    responses(
        (status = 200, description = "Selectable assessment values", body = pb::AssessmentOptionsRes)
    )
)]
#[axum::debug_handler]
async fn assessment_options(State(_state): State<AppState>) -> Json<pb::AssessmentOptionsRes> {
    Json(convert::assessment_options_res())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn send(req: Request<Body>) -> (StatusCode, Value) {
        let res = router().oneshot(req).await.expect("router responds");
        let status = res.status();
        let bytes = res
            .into_body()
            .collect()
            .await
            .expect("body collects")
            .to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/recommendations")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds")
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request builds")
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, json) = send(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["ok"], true);
    }

    #[tokio::test]
    async fn empty_assessment_is_incomplete() {
        let (status, json) = send(post_json("{}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["complete"], false);
        assert!(json["recommendation"].is_null());
        assert_eq!(
            json["headline"],
            "Complete the assessment to see recommendations"
        );
    }

    #[tokio::test]
    async fn ray_thumb_assessment_returns_plan() {
        let body = r#"{
            "amputation_level": "ray",
            "specific_amputation_type": "thumb",
            "pain_status": "existing",
            "comorbidities": ["smoking"]
        }"#;
        let (status, json) = send(post_json(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["complete"], true);
        assert_eq!(json["headline"], "Recommendations for thumb ray amputation");

        let rec = &json["recommendation"];
        assert_eq!(
            rec["surgical_approach"],
            "Extended volar approach with extended carpal tunnel incision"
        );
        let considerations = rec["considerations"].as_array().expect("array");
        assert_eq!(
            considerations.last().and_then(Value::as_str),
            Some("Increased risk of wound complications and potentially diminished nerve regeneration")
        );
    }

    #[tokio::test]
    async fn malformed_payload_is_rejected() {
        let (status, _) = send(post_json("[1, 2, 3]")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn reference_and_options_are_served() {
        let (status, json) = send(get("/reference")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["motor_entry_points"].as_array().map(Vec::len), Some(10));

        let (status, json) = send(get("/assessment/options")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["amputation_levels"].as_array().map(Vec::len), Some(5));
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let (status, json) = send(get("/api-docs/openapi.json")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["paths"]["/recommendations"].is_object());
    }
}
