//! # Domain Layer
//!
//! Pure domain logic: entities, value objects, placement rules, and the
//! subsystem error type. Nothing in this module performs I/O.

pub mod entities;
pub mod errors;
pub mod placement;
pub mod value_objects;

pub use entities::{ElementDefinition, MapTemplate, Space, SpaceElement, TemplateElement};
pub use errors::{CatalogError, RepositoryError, SpaceError};
pub use placement::{validate_placement, validate_space_ownership, PlacementViolation};
pub use value_objects::{
    Dimensions, DimensionsError, PlacedElement, PlacementRequest, Position, SpaceDetail,
    SpaceSummary,
};
