// src/infrastructure/repositories/postgres_participation.rs
use super::{map_sqlx, map_stored_row};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::meeting::{
    Meeting, MeetingCode, MeetingId, Participant, ParticipantId, Participation,
    ParticipationRepository,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresParticipationRepository {
    pool: PgPool,
}

impl PostgresParticipationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Participant joined with its meeting. The meeting columns are NULL when the
/// participant's meeting no longer resolves.
#[derive(Debug, FromRow)]
struct ParticipationRow {
    id: i64,
    user_id: String,
    meeting_id: Option<String>,
    created_at: DateTime<Utc>,
    joined_meeting_id: Option<String>,
    meeting_code: Option<String>,
}

impl TryFrom<ParticipationRow> for Participation {
    type Error = DomainError;

    fn try_from(row: ParticipationRow) -> Result<Self, Self::Error> {
        let meeting = match (row.joined_meeting_id, row.meeting_code) {
            (Some(id), Some(code)) => match (MeetingId::new(id), MeetingCode::new(code)) {
                (Ok(id), Ok(meeting_code)) => Some(Meeting { id, meeting_code }),
                (Err(err), _) | (_, Err(err)) => {
                    tracing::warn!(
                        participant_id = row.id,
                        error = %err,
                        "ignoring meeting with invalid stored data"
                    );
                    None
                }
            },
            _ => None,
        };

        Ok(Participation {
            participant: Participant {
                id: ParticipantId::new(row.id)?,
                user_id: UserId::new(row.user_id)?,
                meeting_id: row.meeting_id.map(MeetingId::new).transpose()?,
                created_at: row.created_at,
            },
            meeting,
        })
    }
}

#[async_trait]
impl ParticipationRepository for PostgresParticipationRepository {
    async fn find_most_recent_by_user(
        &self,
        user_id: &UserId,
    ) -> DomainResult<Option<Participation>> {
        let row = sqlx::query_as::<_, ParticipationRow>(
            "SELECT p.id, p.user_id, p.meeting_id, p.created_at,
                    m.id AS joined_meeting_id, m.meeting_code
             FROM participants p
             LEFT JOIN meetings m ON m.id = p.meeting_id
             WHERE p.user_id = $1
             ORDER BY p.created_at DESC, p.id DESC
             LIMIT 1",
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Participation::try_from)
            .transpose()
            .map_err(|err| map_stored_row("participation", err))
    }
}
