// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use axum::http::HeaderName;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Header the upstream auth layer uses to forward the verified user id.
    pub identity_header: HeaderName,
}
