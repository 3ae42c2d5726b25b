//! # Space Management
//!
//! The Space Management subsystem is the authoritative owner of spaces:
//! user-owned rectangular canvases and the elements placed on them.
//!
//! ## Architecture
//!
//! Every operation takes the caller's resolved [`Identity`](shared_types::Identity)
//! explicitly; nothing below the transport edge reads ambient authentication
//! state. Storage sits behind the [`SpaceRepository`] port, and the two
//! read-only catalogs (templates, element definitions) behind ports of their
//! own:
//!
//! ```text
//!            SpaceManagementApi (inbound)
//!                      │
//!                      ▼
//!            SpaceManagerService<R, M, E>
//!             │            │           │
//!             ▼            ▼           ▼
//!      SpaceRepository  TemplateCatalog  ElementCatalog
//!        (+ write batch)   (read-only)     (read-only)
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Owner-Only Mutation | Only `creator_id` may mutate a space or its elements |
//! | 2 | Boundary Containment | Placements satisfy `0 <= x <= width`, `0 <= y <= height` |
//! | 3 | Atomic Cloning | Template clone writes space + elements all-or-nothing |
//! | 4 | Cascade Delete | Deleting a space removes every element in it |
//! | 5 | No Dangling Elements | Every `SpaceElement` references a live space |
//! | 6 | Public Reads | Space detail requires no identity at all |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Pure domain logic (entities, value objects, placement rules)
//! - `ports/` - Port traits (inbound API, outbound SPI)
//! - `service/` - Application service implementing the API
//! - `adapters/` - In-memory adapters for tests and development
//!
//! ## Usage
//!
//! ```ignore
//! use space_management::{
//!     MemoryElementCatalog, MemorySpaceRepository, MemoryTemplateCatalog,
//!     SpaceManagementApi, SpaceManagerService,
//! };
//!
//! let service = SpaceManagerService::new(
//!     MemorySpaceRepository::new(),
//!     MemoryTemplateCatalog::new(),
//!     MemoryElementCatalog::new(),
//! );
//!
//! // Create a 100x200 space for the caller
//! let space_id = service.create_blank_space(&identity, "my space", "100x200").await?;
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export key types for convenience
pub use domain::entities::{ElementDefinition, MapTemplate, Space, SpaceElement, TemplateElement};
pub use domain::errors::{CatalogError, RepositoryError, SpaceError};
pub use domain::placement::{validate_placement, validate_space_ownership, PlacementViolation};
pub use domain::value_objects::{
    Dimensions, DimensionsError, PlacedElement, PlacementRequest, Position, SpaceDetail,
    SpaceSummary,
};
pub use ports::inbound::SpaceManagementApi;
pub use ports::outbound::{
    ElementCatalog, NewSpace, NewSpaceElement, SpaceRepository, SpaceWriteBatch, TemplateCatalog,
};
pub use service::SpaceManagerService;

// Re-export adapters for tests and development hosts
pub use adapters::{MemoryElementCatalog, MemorySpaceRepository, MemoryTemplateCatalog};
