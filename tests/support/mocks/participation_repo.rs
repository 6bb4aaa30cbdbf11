// tests/support/mocks/participation_repo.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use meeting_profile::domain::errors::{DomainError, DomainResult};
use meeting_profile::domain::meeting::{Participation, ParticipationRepository};
use meeting_profile::domain::user::UserId;

#[derive(Default)]
pub struct InMemoryParticipationRepo {
    rows: Mutex<Vec<Participation>>,
    lookups: AtomicUsize,
}

impl InMemoryParticipationRepo {
    pub fn with_rows(rows: impl IntoIterator<Item = Participation>) -> Self {
        Self {
            rows: Mutex::new(rows.into_iter().collect()),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ParticipationRepository for InMemoryParticipationRepo {
    async fn find_most_recent_by_user(
        &self,
        user_id: &UserId,
    ) -> DomainResult<Option<Participation>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        // Same ordering as the SQL lookup: created_at, then participant id.
        let latest = rows
            .iter()
            .filter(|row| &row.participant.user_id == user_id)
            .max_by_key(|row| (row.participant.created_at, row.participant.id))
            .cloned();
        Ok(latest)
    }
}

/// Participation store whose backend is unreachable.
pub struct FailingParticipationRepo;

#[async_trait]
impl ParticipationRepository for FailingParticipationRepo {
    async fn find_most_recent_by_user(
        &self,
        _user_id: &UserId,
    ) -> DomainResult<Option<Participation>> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}
