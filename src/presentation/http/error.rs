use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::UserNotFound(id) => {
                Self::new(StatusCode::NOT_FOUND, format!("user {id} not found"))
            }
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Infrastructure(msg) => Self::internal(msg),
            ApplicationError::Domain(DomainError::Validation(msg)) => {
                Self::new(StatusCode::BAD_REQUEST, msg)
            }
            ApplicationError::Domain(DomainError::Persistence(msg)) => Self::internal(msg),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn internal(msg: String) -> Self {
        tracing::error!(error = %msg, "request failed");
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error".into(),
        )
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
