use crate::domain::errors::DomainResult;
use crate::domain::meeting::entity::Participation;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ParticipationRepository: Send + Sync {
    /// Latest participation of `user_id` by `created_at`, ties broken by the
    /// greater participant id.
    async fn find_most_recent_by_user(&self, user_id: &UserId)
    -> DomainResult<Option<Participation>>;
}
