// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use meeting_profile::domain::meeting::{
    Meeting, MeetingCode, MeetingId, Participant, ParticipantId, Participation,
};
use meeting_profile::domain::user::{User, UserId, UserKind};

use super::mocks::fixed_now;

pub struct UserBuilder {
    id: String,
    email: Option<String>,
    name: Option<String>,
    kind: UserKind,
}

impl UserBuilder {
    pub fn registered(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
            name: None,
            kind: UserKind::Registered,
        }
    }

    pub fn anonymous(id: impl Into<String>) -> Self {
        Self {
            kind: UserKind::Anonymous,
            ..Self::registered(id)
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn build(self) -> User {
        User {
            id: UserId::new(self.id).unwrap(),
            email: self.email,
            name: self.name,
            kind: self.kind,
            created_at: fixed_now(),
        }
    }
}

pub struct ParticipationBuilder {
    id: i64,
    user_id: String,
    meeting_code: Option<String>,
    created_at: DateTime<Utc>,
}

impl ParticipationBuilder {
    pub fn new(id: i64, user_id: impl Into<String>) -> Self {
        Self {
            id,
            user_id: user_id.into(),
            meeting_code: None,
            created_at: fixed_now(),
        }
    }

    /// Link the participation to a meeting with this code.
    pub fn meeting(mut self, code: impl Into<String>) -> Self {
        self.meeting_code = Some(code.into());
        self
    }

    pub fn minutes_after_epoch(mut self, minutes: i64) -> Self {
        self.created_at = fixed_now() + Duration::minutes(minutes);
        self
    }

    pub fn build(self) -> Participation {
        let meeting = self.meeting_code.map(|code| Meeting {
            id: MeetingId::new(format!("meeting-{code}")).unwrap(),
            meeting_code: MeetingCode::new(code).unwrap(),
        });
        let meeting_id = meeting
            .as_ref()
            .map(|meeting| meeting.id.clone())
            .or_else(|| Some(MeetingId::new(format!("deleted-{}", self.id)).unwrap()));

        Participation {
            participant: Participant {
                id: ParticipantId::new(self.id).unwrap(),
                user_id: UserId::new(self.user_id).unwrap(),
                meeting_id,
                created_at: self.created_at,
            },
            meeting,
        }
    }
}
