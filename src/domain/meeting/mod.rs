// src/domain/meeting/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Meeting, Participant, Participation};
pub use repository::ParticipationRepository;
pub use value_objects::{MeetingCode, MeetingId, ParticipantId};
