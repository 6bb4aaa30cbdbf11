// tests/support/mocks/user_repo.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use meeting_profile::domain::errors::DomainResult;
use meeting_profile::domain::user::{User, UserId, UserRepository};

/// User store backed by a map. Counts lookups so tests can assert how many
/// reads a query issued.
#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<HashMap<UserId, User>>,
    lookups: AtomicUsize,
}

impl InMemoryUserRepo {
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let repo = Self::default();
        {
            let mut map = repo.users.lock().unwrap();
            for user in users {
                map.insert(user.id.clone(), user);
            }
        }
        repo
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn find_by_id(&self, id: &UserId) -> DomainResult<Option<User>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let map = self.users.lock().unwrap();
        Ok(map.get(id).cloned())
    }
}
