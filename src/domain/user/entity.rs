// src/domain/user/entity.rs
use crate::domain::user::value_objects::UserId;
use chrono::{DateTime, Utc};

/// How an account came to exist.
///
/// Anonymous accounts are guests created when someone joins a meeting without
/// registering. Their session context is recovered from meeting participation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserKind {
    Registered,
    Anonymous,
}

impl UserKind {
    pub fn from_anonymous_flag(is_anonymous: bool) -> Self {
        if is_anonymous {
            UserKind::Anonymous
        } else {
            UserKind::Registered
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, UserKind::Anonymous)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: Option<String>,
    pub name: Option<String>,
    pub kind: UserKind,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_anonymous(&self) -> bool {
        self.kind.is_anonymous()
    }
}
