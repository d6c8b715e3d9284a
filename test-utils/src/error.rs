use sea_orm::DbErr;
use thiserror::Error;

/// Errors raised while preparing a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database or creating a table failed.
    #[error(transparent)]
    Database(#[from] DbErr),
    /// The session store could not be initialized.
    #[error("Failed to initialize session store: {0}")]
    Session(String),
}
