use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to run migration on db: {0}")]
    MigrationFailed(String),

    #[error("Failed to connect to db")]
    ConnectionError(#[from] diesel::result::ConnectionError),

    #[error("Unknown database type {0}")]
    UnknownDbType(String),
}
