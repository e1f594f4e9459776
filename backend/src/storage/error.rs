use thiserror::Error;

/// Failure of the underlying storage medium
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("corrupt guess at {location}: {reason}")]
    Corrupt { location: String, reason: String },
}

/// Storage operation that failed, with its cause
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not initialize guess storage: {0}")]
    Initialize(#[source] BackendError),

    #[error("could not save guess: {0}")]
    Write(#[source] BackendError),

    #[error("could not read guesses: {0}")]
    Read(#[source] BackendError),
}
