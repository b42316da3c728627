//! Endpoint tests for POST /travel-plan.
//!
//! These drive the router directly with a mock provider, so no network or
//! API key is needed.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;
use travel_plan_service::config::{GoogleConfig, ModelConfig, TravelPlanConfig};
use travel_plan_service::services::providers::mock::MockTextProvider;
use travel_plan_service::services::providers::TextProvider;
use travel_plan_service::startup::{build_router, AppState};

fn test_config() -> TravelPlanConfig {
    TravelPlanConfig {
        common: service_core::config::Config { port: 0 },
        models: ModelConfig {
            text_model: "gemini-1.5-flash-001".to_string(),
            temperature: 0.0,
        },
        google: GoogleConfig {
            api_key: "test-api-key".to_string(),
        },
    }
}

fn test_app(provider: MockTextProvider) -> Router {
    let state = AppState {
        config: test_config(),
        text_provider: Arc::new(provider) as Arc<dyn TextProvider>,
    };
    build_router(state)
}

fn post_travel_plan(body: Body) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/travel-plan")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body is valid JSON")
}

#[tokio::test]
async fn missing_payload_returns_400() {
    let app = test_app(MockTextProvider::new(true));

    let response = app.oneshot(post_travel_plan(Body::empty())).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "No JSON payload provided");
}

#[tokio::test]
async fn malformed_payload_returns_400() {
    let app = test_app(MockTextProvider::new(true));

    let response = app
        .oneshot(post_travel_plan(Body::from("{not json")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "No JSON payload provided");
}

#[tokio::test]
async fn non_json_content_type_returns_400() {
    let app = test_app(MockTextProvider::new(true));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/travel-plan")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("Mumbai to Goa"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "No JSON payload provided");
}

#[tokio::test]
async fn missing_prompt_returns_400() {
    let app = test_app(MockTextProvider::new(true));

    let payload = json!({ "user_id": "user-1" });
    let response = app
        .oneshot(post_travel_plan(Body::from(payload.to_string())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Input prompt is missing in the request");
}

#[tokio::test]
async fn blank_prompt_returns_400() {
    let app = test_app(MockTextProvider::new(true));

    let payload = json!({ "user_id": "user-1", "prompt": "   " });
    let response = app
        .oneshot(post_travel_plan(Body::from(payload.to_string())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Input prompt is missing in the request");
}

#[tokio::test]
async fn valid_prompt_returns_formatted_itinerary() {
    let app = test_app(MockTextProvider::with_response(
        "Day 1: Overnight train to Goa \n  Day 2: Rent a scooter",
    ));

    let payload = json!({ "user_id": "user-1", "prompt": "Mumbai to Goa in May" });
    let response = app
        .oneshot(post_travel_plan(Body::from(payload.to_string())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body["message"],
        "### Suggested Travel Itinerary\nDay 1: Overnight train to Goa\nDay 2: Rent a scooter"
    );
}

#[tokio::test]
async fn message_is_never_empty_for_valid_prompt() {
    let app = test_app(MockTextProvider::new(true));

    let payload = json!({ "prompt": "Delhi to Jaipur next weekend" });
    let response = app
        .oneshot(post_travel_plan(Body::from(payload.to_string())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let message = body["message"].as_str().expect("message is a string");
    assert!(!message.is_empty());
    assert!(message.starts_with("### Suggested Travel Itinerary"));
}

#[tokio::test]
async fn unconfigured_provider_returns_503() {
    let app = test_app(MockTextProvider::new(false));

    let payload = json!({ "user_id": "user-1", "prompt": "Mumbai to Goa" });
    let response = app
        .oneshot(post_travel_plan(Body::from(payload.to_string())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = test_app(MockTextProvider::new(true));

    let request = Request::builder()
        .method(Method::GET)
        .uri("/get-travel-plan")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Not found");
}
