// src/domain/meeting/entity.rs
use crate::domain::meeting::value_objects::{MeetingCode, MeetingId, ParticipantId};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
    pub id: MeetingId,
    pub meeting_code: MeetingCode,
}

/// One user's membership in one meeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub user_id: UserId,
    pub meeting_id: Option<MeetingId>,
    pub created_at: DateTime<Utc>,
}

/// A participant row together with the meeting it points at.
///
/// `meeting` is `None` when the referenced meeting row no longer exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participation {
    pub participant: Participant,
    pub meeting: Option<Meeting>,
}

impl Participation {
    pub fn meeting_code(&self) -> Option<&MeetingCode> {
        self.meeting.as_ref().map(|meeting| &meeting.meeting_code)
    }
}
