use thiserror::Error;

/// Failures while connecting to, preparing or seeding the store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
    #[error("Invalid database url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: sqlx::Error,
    },
}
