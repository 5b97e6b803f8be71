use thiserror::Error;

/// Failures raised by a storage gateway
///
/// A missing record is never an error; lookups return `Ok(None)` instead.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
