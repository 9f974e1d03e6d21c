use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    /// Required request fields are absent. The message is the user-facing text.
    #[error("Missing fields: {0}")]
    MissingFields(String),

    /// A referenced foreign entity does not exist (maps to 400, not 404).
    #[error("Reference not found: {0}")]
    ReferenceNotFound(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A database failure wrapped with the per-operation user-facing context.
    #[error("{context}: {source}")]
    Database {
        context: String,
        #[source]
        source: RepositoryError,
    },

    #[error("Custom error: {0}")]
    Custom(String),
}

impl ServiceError {
    pub fn database(context: &str, source: RepositoryError) -> Self {
        ServiceError::Database {
            context: context.to_string(),
            source,
        }
    }
}
