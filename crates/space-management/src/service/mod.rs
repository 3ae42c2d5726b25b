//! # Space Manager Service
//!
//! The application service implementing [`SpaceManagementApi`].
//!
//! ## Architecture
//!
//! This service:
//! 1. Implements every operation of the inbound API
//! 2. Enforces ownership and the boundary rule on all mutations
//! 3. Uses dependency injection for storage and both catalogs
//!
//! [`SpaceManagementApi`]: crate::ports::inbound::SpaceManagementApi

mod operations;

use crate::ports::outbound::{ElementCatalog, SpaceRepository, TemplateCatalog};

/// The Space Manager Service.
///
/// Generic over its driven ports so hosts wire production adapters and tests
/// wire the in-memory ones; the operation logic never changes.
pub struct SpaceManagerService<R, M, E>
where
    R: SpaceRepository,
    M: TemplateCatalog,
    E: ElementCatalog,
{
    /// Space and element storage.
    pub(crate) repository: R,
    /// Read-only map template catalog.
    pub(crate) templates: M,
    /// Read-only element definition catalog.
    pub(crate) elements: E,
}

impl<R, M, E> SpaceManagerService<R, M, E>
where
    R: SpaceRepository,
    M: TemplateCatalog,
    E: ElementCatalog,
{
    /// Create a new Space Manager Service with the given dependencies.
    pub fn new(repository: R, templates: M, elements: E) -> Self {
        Self {
            repository,
            templates,
            elements,
        }
    }
}
