//! # Core Domain Entities
//!
//! The persistent entities of the space-management subsystem.
//!
//! ## Clusters
//!
//! - **Owned state**: [`Space`], [`SpaceElement`]
//! - **Catalog state** (read-only here): [`MapTemplate`], [`TemplateElement`],
//!   [`ElementDefinition`]
//!
//! Catalog entities are authored by an administrative flow elsewhere; this
//! subsystem only ever reads them.

use crate::domain::value_objects::Dimensions;
use serde::{Deserialize, Serialize};
use shared_types::{ElementId, MapId, SpaceElementId, SpaceId, UserId};

/// A user-owned rectangular canvas.
///
/// The far edge is part of the canvas: a point at exactly `(width, height)`
/// is in bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    /// Unique id, assigned by the repository at insert.
    pub id: SpaceId,
    /// Display name chosen by the creator.
    pub name: String,
    /// Canvas width.
    pub width: u32,
    /// Canvas height.
    pub height: u32,
    /// Optional preview image URL.
    pub thumbnail: Option<String>,
    /// The owning user. Only this user may mutate the space.
    pub creator_id: UserId,
}

impl Space {
    /// Returns the canvas dimensions as a value object.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }

    /// Returns true if `user_id` owns this space.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.creator_id == user_id
    }
}

/// One element instance placed on a space.
///
/// Placement state is the pair `(x, y)`; everything else about the element
/// (sprite, size, walkability) lives in the catalog's [`ElementDefinition`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceElement {
    /// Unique id, assigned by the repository at insert.
    pub id: SpaceElementId,
    /// The space this element sits on.
    pub space_id: SpaceId,
    /// The catalog definition this element instantiates.
    pub element_id: ElementId,
    /// Horizontal position, `0..=space.width`.
    pub x: u32,
    /// Vertical position, `0..=space.height`.
    pub y: u32,
}

/// A catalog definition an element instance points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementDefinition {
    /// Unique catalog id.
    pub id: ElementId,
    /// Sprite URL.
    pub image_url: String,
    /// Rendered width.
    pub width: u32,
    /// Rendered height.
    pub height: u32,
    /// Whether avatars can walk through this element.
    #[serde(rename = "static")]
    pub is_static: bool,
}

/// A reusable blueprint for creating pre-populated spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapTemplate {
    /// Unique catalog id.
    pub id: MapId,
    /// Template display name.
    pub name: String,
    /// Width of spaces cloned from this template.
    pub width: u32,
    /// Height of spaces cloned from this template.
    pub height: u32,
    /// Element placements copied verbatim into each clone.
    pub elements: Vec<TemplateElement>,
}

/// One pre-placed element inside a template.
///
/// Coordinates are trusted catalog data; cloning copies them without
/// re-validating against the template bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateElement {
    /// The catalog definition to instantiate.
    pub element_id: ElementId,
    /// Horizontal position within the template.
    pub x: u32,
    /// Vertical position within the template.
    pub y: u32,
}

// =============================================================================
// TESTS
// =============================================================================
