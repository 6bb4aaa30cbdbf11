// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::queries::users::UserQueryService,
    domain::{meeting::ParticipationRepository, user::UserRepository},
};

pub struct ApplicationServices {
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        participation_repo: Arc<dyn ParticipationRepository>,
    ) -> Self {
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&user_repo),
            Arc::clone(&participation_repo),
        ));

        Self { user_queries }
    }
}
