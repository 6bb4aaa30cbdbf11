// src/domain/meeting/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeetingId(String);

impl MeetingId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("meeting id cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Short public code used to rejoin a meeting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeetingCode(String);

impl MeetingCode {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "meeting code cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<MeetingCode> for String {
    fn from(value: MeetingCode) -> Self {
        value.0
    }
}

impl fmt::Display for MeetingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Storage-assigned participant identity. Strictly increasing with insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(i64);

impl ParticipantId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "participant id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ParticipantId> for i64 {
    fn from(value: ParticipantId) -> Self {
        value.0
    }
}
