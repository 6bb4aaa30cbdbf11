// tests/support/mocks/mod.rs
pub mod participation_repo;
pub mod user_repo;

pub use participation_repo::{FailingParticipationRepo, InMemoryParticipationRepo};
pub use time::fixed_now;
pub use user_repo::InMemoryUserRepo;
