//! # Outbound Ports (Driven Ports)
//!
//! Dependencies the space-management service requires its host to provide:
//! the space store itself, and the two read-only catalogs.
//!
//! These are the interfaces this library requires the host application to
//! implement.

use crate::domain::entities::{ElementDefinition, MapTemplate, Space, SpaceElement};
use crate::domain::errors::{CatalogError, RepositoryError};
use async_trait::async_trait;
use shared_types::{ElementId, MapId, SpaceElementId, SpaceId, UserId};

/// A space row to insert. The repository assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSpace {
    /// Display name chosen by the creator.
    pub name: String,
    /// Canvas width.
    pub width: u32,
    /// Canvas height.
    pub height: u32,
    /// The owning user.
    pub creator_id: UserId,
}

/// An element row to insert. The repository assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSpaceElement {
    /// The space this element sits on.
    pub space_id: SpaceId,
    /// The catalog definition this element instantiates.
    pub element_id: ElementId,
    /// Horizontal position (already validated).
    pub x: u32,
    /// Vertical position (already validated).
    pub y: u32,
}

/// Abstract interface for the space store.
///
/// Production: a database-backed adapter in the host application.
/// Testing: [`MemorySpaceRepository`](crate::adapters::MemorySpaceRepository).
///
/// Implementations must keep referential integrity: every stored
/// `SpaceElement` references a live `Space`, and cascade deletion is the
/// repository's job, not the caller's.
#[async_trait]
pub trait SpaceRepository: Send + Sync {
    /// Insert a space row, assigning its id.
    async fn insert_space(&self, space: NewSpace) -> Result<Space, RepositoryError>;

    /// Load a space by id.
    async fn find_space(&self, id: SpaceId) -> Result<Option<Space>, RepositoryError>;

    /// Load a space scoped to `(id, owner)`.
    ///
    /// Returns `None` both when the space does not exist and when it exists
    /// under a different owner; callers cannot tell the two apart.
    async fn find_space_owned_by(
        &self,
        id: SpaceId,
        owner: UserId,
    ) -> Result<Option<Space>, RepositoryError>;

    /// All spaces created by `owner`, in insertion order.
    async fn spaces_created_by(&self, owner: UserId) -> Result<Vec<Space>, RepositoryError>;

    /// Delete a space and every element on it, atomically.
    ///
    /// Returns the number of elements removed. Deleting an absent space is
    /// not an error; it removes nothing and returns 0.
    async fn delete_space_cascade(&self, id: SpaceId) -> Result<u64, RepositoryError>;

    /// Insert a single element row, assigning its id.
    ///
    /// Fails with [`RepositoryError::MissingReference`] if the target space
    /// is gone.
    async fn insert_element(&self, element: NewSpaceElement)
        -> Result<SpaceElement, RepositoryError>;

    /// Load a placed element joined with its parent space.
    async fn find_element_with_space(
        &self,
        id: SpaceElementId,
    ) -> Result<Option<(SpaceElement, Space)>, RepositoryError>;

    /// Delete a single element row. Deleting an absent row is not an error.
    async fn delete_element(&self, id: SpaceElementId) -> Result<(), RepositoryError>;

    /// All elements on `space_id`, in insertion order.
    async fn elements_in_space(
        &self,
        space_id: SpaceId,
    ) -> Result<Vec<SpaceElement>, RepositoryError>;

    /// Open a staged write batch.
    ///
    /// Nothing the batch stages is visible to readers until
    /// [`SpaceWriteBatch::commit`] returns `Ok`.
    async fn begin(&self) -> Result<Box<dyn SpaceWriteBatch>, RepositoryError>;
}

/// A staged multi-row write: the transaction primitive behind atomic
/// template cloning.
///
/// ## Atomicity Guarantee
///
/// Either `commit` applies every staged row, or nothing is applied. Both
/// `commit` and `rollback` consume the batch, so a closed batch cannot be
/// reused.
#[async_trait]
pub trait SpaceWriteBatch: Send {
    /// Stage a space row, assigning its id so element rows can reference it.
    async fn insert_space(&mut self, space: NewSpace) -> Result<Space, RepositoryError>;

    /// Stage a set of element rows. Returns how many were staged.
    async fn insert_elements(
        &mut self,
        elements: Vec<NewSpaceElement>,
    ) -> Result<usize, RepositoryError>;

    /// Apply every staged row.
    async fn commit(self: Box<Self>) -> Result<(), RepositoryError>;

    /// Discard every staged row.
    async fn rollback(self: Box<Self>) -> Result<(), RepositoryError>;
}

/// Read access to the map template catalog.
///
/// Templates are authored by an administrative flow elsewhere; this
/// subsystem only reads them.
#[async_trait]
pub trait TemplateCatalog: Send + Sync {
    /// Load a template by id.
    async fn fetch(&self, id: MapId) -> Result<Option<MapTemplate>, CatalogError>;
}

/// Read access to the element definition catalog.
#[async_trait]
pub trait ElementCatalog: Send + Sync {
    /// Load an element definition by id.
    async fn fetch(&self, id: ElementId) -> Result<Option<ElementDefinition>, CatalogError>;
}
