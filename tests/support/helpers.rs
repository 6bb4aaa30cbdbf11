// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{HeaderName, Request, StatusCode};
use meeting_profile::application::services::ApplicationServices;
use meeting_profile::config::DEFAULT_IDENTITY_HEADER;
use meeting_profile::domain::{meeting::ParticipationRepository, user::UserRepository};
use meeting_profile::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;

pub fn build_test_state(
    user_repo: Arc<dyn UserRepository>,
    participation_repo: Arc<dyn ParticipationRepository>,
) -> HttpState {
    let services = Arc::new(ApplicationServices::new(user_repo, participation_repo));
    HttpState {
        services,
        identity_header: HeaderName::from_static(DEFAULT_IDENTITY_HEADER),
    }
}

pub fn make_test_router(
    user_repo: Arc<dyn UserRepository>,
    participation_repo: Arc<dyn ParticipationRepository>,
) -> axum::Router {
    let state = build_test_state(user_repo, participation_repo);
    build_router(state, &["http://localhost:3000".to_string()])
}

pub fn me_request(user_id: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/api/v1/auth/me");
    if let Some(id) = user_id {
        builder = builder.header(DEFAULT_IDENTITY_HEADER, id);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {}",
        ct
    );
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body");
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    let (status, json) = read_json(resp).await;
    assert_eq!(status, expected_status);
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
}
