use std::sync::Arc;

use crate::domain::{meeting::ParticipationRepository, user::UserRepository};

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) participation_repo: Arc<dyn ParticipationRepository>,
}

impl UserQueryService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        participation_repo: Arc<dyn ParticipationRepository>,
    ) -> Self {
        Self {
            user_repo,
            participation_repo,
        }
    }
}
