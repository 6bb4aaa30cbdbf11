// src/presentation/http/extractors.rs
use crate::{
    application::error::ApplicationError, domain::user::UserId,
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

/// Caller identity forwarded by the upstream authentication layer.
///
/// Token verification happens before requests reach this service; the
/// extractor only reads the verified user id from the configured header.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserId);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let raw = parts
            .headers
            .get(&app_state.identity_header)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(format!(
                    "missing {} header",
                    app_state.identity_header
                )))
            })?;

        let user_id = UserId::new(raw)
            .map_err(|err| HttpError::from_error(ApplicationError::unauthorized(err.to_string())))?;

        Ok(Self(user_id))
    }
}
