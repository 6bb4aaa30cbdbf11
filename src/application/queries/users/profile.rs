use super::UserQueryService;
use crate::{
    application::{
        dto::UserProfileDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        meeting::MeetingCode,
        user::{UserId, UserKind},
    },
};

impl UserQueryService {
    /// Resolve the profile behind `user_id`.
    ///
    /// Guests additionally get the code of their latest meeting so the client
    /// can put them back into it after a reload.
    pub async fn resolve_profile(&self, user_id: &UserId) -> ApplicationResult<UserProfileDto> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::user_not_found(user_id))?;

        let meeting_code = match user.kind {
            UserKind::Anonymous => self.recover_guest_meeting_code(&user.id).await?,
            UserKind::Registered => None,
        };

        Ok(UserProfileDto::from_parts(user, meeting_code))
    }

    async fn recover_guest_meeting_code(
        &self,
        user_id: &UserId,
    ) -> ApplicationResult<Option<MeetingCode>> {
        let Some(participation) = self
            .participation_repo
            .find_most_recent_by_user(user_id)
            .await?
        else {
            tracing::debug!(user_id = %user_id, "guest has no meeting participation");
            return Ok(None);
        };

        let meeting_code = participation.meeting_code().cloned();
        if meeting_code.is_none() {
            tracing::warn!(
                user_id = %user_id,
                participant_id = i64::from(participation.participant.id),
                "participation references a missing meeting"
            );
        }

        Ok(meeting_code)
    }
}
