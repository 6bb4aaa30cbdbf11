// src/presentation/http/openapi.rs
use axum::{Router, http::HeaderName, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, SecurityScheme},
};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::DEFAULT_IDENTITY_HEADER;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::me,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::application::dto::UserProfileDto
        )
    ),
    tags(
        (name = "Auth", description = "Caller identity endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Meeting Profile API",
        description = "Resolves the calling user's profile, including guest meeting recovery",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// OpenAPI document whose security scheme names `identity_header`.
pub fn api_doc(identity_header: &HeaderName) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    let components = doc.components.get_or_insert_with(Components::default);
    components.add_security_scheme(
        "identityHeader",
        SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(identity_header.as_str()))),
    );
    doc
}

pub fn docs_router(identity_header: &HeaderName) -> Router {
    let openapi = api_doc(identity_header);
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = api_doc(&HeaderName::from_static(DEFAULT_IDENTITY_HEADER));
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
