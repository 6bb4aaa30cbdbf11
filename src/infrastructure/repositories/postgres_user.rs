// src/infrastructure/repositories/postgres_user.rs
use super::{map_sqlx, map_stored_row};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{User, UserId, UserKind, UserRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: String,
    email: Option<String>,
    name: Option<String>,
    is_anonymous: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            email: row.email,
            name: row.name,
            kind: UserKind::from_anonymous_flag(row.is_anonymous),
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: &UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, name, is_anonymous, created_at
             FROM users WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from)
            .transpose()
            .map_err(|err| map_stored_row("user", err))
    }
}
