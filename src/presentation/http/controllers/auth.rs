// src/presentation/http/controllers/auth.rs
use crate::application::dto::UserProfileDto;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::CurrentUser;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "Profile of the calling user.", body = UserProfileDto),
        (status = 401, description = "Caller identity missing.", body = ErrorResponse),
        (status = 404, description = "No user exists for the caller identity.", body = ErrorResponse),
        (status = 500, description = "Lookup failed.", body = ErrorResponse)
    ),
    security(("identityHeader" = [])),
    tag = "Auth"
)]
pub async fn me(
    Extension(state): Extension<HttpState>,
    CurrentUser(user_id): CurrentUser,
) -> HttpResult<Json<UserProfileDto>> {
    state
        .services
        .user_queries
        .resolve_profile(&user_id)
        .await
        .into_http()
        .map(Json)
}
