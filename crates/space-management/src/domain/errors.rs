//! # Error Types
//!
//! [`SpaceError`] is the single error surface of the subsystem; every
//! operation on the inbound API fails with exactly one of its variants.
//! The port-level errors ([`RepositoryError`], [`CatalogError`]) are what
//! adapters speak, and they fold into [`SpaceError::Storage`] at the service
//! boundary.

use crate::domain::placement::PlacementViolation;
use crate::domain::value_objects::DimensionsError;
use thiserror::Error;

/// Failures surfaced by space-management operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpaceError {
    /// Input failed structural validation before touching storage.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The referenced space does not exist, or the caller may not see that
    /// it does. Mutations scoped to an owner deliberately return this for
    /// both cases.
    #[error("space not found")]
    SpaceNotFound,

    /// The referenced map template does not exist.
    #[error("map not found")]
    MapNotFound,

    /// The referenced element definition is not in the catalog.
    #[error("element not found")]
    ElementNotFound,

    /// The referenced placed element does not exist.
    #[error("space element not found")]
    SpaceElementNotFound,

    /// The caller exists but does not own the targeted space.
    #[error("unauthorized")]
    Unauthorized,

    /// The requested position violates the boundary rule.
    #[error("point ({x}, {y}) is outside of the boundary {width}x{height}")]
    OutOfBounds {
        /// Requested horizontal position.
        x: i64,
        /// Requested vertical position.
        y: i64,
        /// Width of the rejected-against space.
        width: u32,
        /// Height of the rejected-against space.
        height: u32,
    },

    /// Storage or catalog infrastructure failed, or referential integrity is
    /// broken. Never caused by caller input.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl From<DimensionsError> for SpaceError {
    fn from(err: DimensionsError) -> Self {
        SpaceError::Validation(err.to_string())
    }
}

impl From<PlacementViolation> for SpaceError {
    fn from(violation: PlacementViolation) -> Self {
        match violation {
            PlacementViolation::OutOfBounds {
                x,
                y,
                width,
                height,
            } => SpaceError::OutOfBounds {
                x,
                y,
                width,
                height,
            },
            PlacementViolation::NotOwner => SpaceError::Unauthorized,
        }
    }
}

impl From<RepositoryError> for SpaceError {
    fn from(err: RepositoryError) -> Self {
        SpaceError::Storage(err.to_string())
    }
}

impl From<CatalogError> for SpaceError {
    fn from(err: CatalogError) -> Self {
        SpaceError::Storage(err.to_string())
    }
}

/// Failures reported by [`SpaceRepository`](crate::ports::outbound::SpaceRepository)
/// implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The backing store failed.
    #[error("storage i/o failure: {0}")]
    Io(String),

    /// An interior lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    LockPoisoned,

    /// A row references an entity that is not there.
    #[error("dangling reference: {0}")]
    MissingReference(String),
}

/// Failures reported by catalog ports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog backend failed.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    /// An interior lock was poisoned by a panicking writer.
    #[error("catalog lock poisoned")]
    LockPoisoned,
}

// =============================================================================
// TESTS
// =============================================================================
