// src/application/error.rs
use crate::domain::{errors::DomainError, user::UserId};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("user not found: {0}")]
    UserNotFound(UserId),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn user_not_found(id: &UserId) -> Self {
        Self::UserNotFound(id.clone())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}
