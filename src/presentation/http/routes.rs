// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::auth,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::get,
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allow_origin(allowed_origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([state.identity_header.clone()])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router(&state.identity_header))
        .route("/health", get(health))
        .route("/api/v1/auth/me", get(auth::me))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

fn allow_origin(allowed_origins: &[String]) -> AllowOrigin {
    // tower-http panics on a wildcard inside an explicit list.
    if allowed_origins.iter().any(|origin| origin == "*") {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    AllowOrigin::list(origins)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
