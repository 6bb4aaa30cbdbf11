// src/config.rs
use axum::http::HeaderName;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    database_max_connections: u32,
    allowed_origins: Vec<String>,
    identity_header: HeaderName,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_max_connections() -> u32 {
    16
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

pub const DEFAULT_IDENTITY_HEADER: &str = "x-user-id";

impl AppConfig {
    /// Build configuration from environment variables. `DATABASE_URL` is
    /// required; everything else falls back to a default. Callers load any
    /// `.env` file beforehand.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(0) | Err(_) => {
                    return Err(ConfigError::Invalid(format!(
                        "DATABASE_MAX_CONNECTIONS must be a positive integer, got '{raw}'"
                    )));
                }
                Ok(value) => value,
            },
            None => default_max_connections(),
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(default_allowed_origins);

        let raw_header =
            lookup("IDENTITY_HEADER").unwrap_or_else(|| DEFAULT_IDENTITY_HEADER.to_string());
        let identity_header = HeaderName::from_bytes(raw_header.trim().as_bytes())
            .map_err(|_| ConfigError::Invalid(format!("invalid IDENTITY_HEADER '{raw_header}'")))?;

        Ok(Self {
            database_url,
            listen_addr,
            database_max_connections,
            allowed_origins,
            identity_header,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// Header carrying the caller's user id, set by the upstream auth layer.
    pub fn identity_header(&self) -> &HeaderName {
        &self.identity_header
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| origin.trim_end_matches('/').to_string())
        .collect()
}
