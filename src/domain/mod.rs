// src/domain/mod.rs
pub mod errors;
pub mod meeting;
pub mod user;
