// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_participation;
mod postgres_user;

pub use error::{map_sqlx, map_stored_row};
pub use postgres_participation::PostgresParticipationRepository;
pub use postgres_user::PostgresUserRepository;
