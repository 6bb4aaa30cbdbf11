use crate::domain::errors::DomainError;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.code() {
            Some(code) => DomainError::Persistence(format!("{} ({code})", db_err.message())),
            None => DomainError::Persistence(db_err.message().to_string()),
        },
        sqlx::Error::PoolTimedOut => {
            DomainError::Persistence("timed out waiting for a database connection".into())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Rows that fail domain validation are corrupt storage, not bad input.
pub fn map_stored_row(entity: &str, err: DomainError) -> DomainError {
    match err {
        DomainError::Validation(msg) => {
            DomainError::Persistence(format!("invalid stored {entity}: {msg}"))
        }
        other => other,
    }
}
