// src/application/queries/users.rs
mod profile;
mod service;

pub use service::UserQueryService;
