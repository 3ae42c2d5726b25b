//! Error types for the user-profiles subsystem.

use thiserror::Error;

/// Profile subsystem errors, as surfaced to callers of the inbound API.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The referenced avatar does not exist in the catalog.
    #[error("avatar not found")]
    AvatarNotFound,

    /// The calling identity has no row in the user directory.
    #[error("user not found")]
    UserNotFound,

    /// Directory or catalog infrastructure failure.
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Failures of the user directory port.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("directory i/o failure: {0}")]
    Io(String),

    /// A writer panicked while holding the directory lock.
    #[error("directory lock poisoned")]
    LockPoisoned,
}

/// Failures of the avatar catalog port.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    /// A writer panicked while holding the catalog lock.
    #[error("catalog lock poisoned")]
    LockPoisoned,
}

impl From<DirectoryError> for ProfileError {
    fn from(err: DirectoryError) -> Self {
        ProfileError::Storage(err.to_string())
    }
}

impl From<CatalogError> for ProfileError {
    fn from(err: CatalogError) -> Self {
        ProfileError::Storage(err.to_string())
    }
}

/// Result type for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;
