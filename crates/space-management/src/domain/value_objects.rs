//! # Value Objects
//!
//! Validated values and read models for the space-management subsystem.
//!
//! [`Dimensions`] owns the `"WxH"` wire format in both directions: parsing
//! for blank-space creation, rendering for the list/detail read models.

use crate::domain::entities::{ElementDefinition, Space};
use serde::{Deserialize, Serialize};
use shared_types::{ElementId, SpaceElementId, SpaceId};
use std::fmt;
use thiserror::Error;

/// Rejected `"WxH"` dimension input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionsError {
    /// Not exactly two fields joined by a single lowercase `x`.
    #[error("dimensions must look like \"200x300\"")]
    Malformed,
    /// A field is not a base-10 unsigned integer (or does not fit in `u32`).
    #[error("dimension {field} is not a number")]
    NotANumber {
        /// Which field failed: `"width"` or `"height"`.
        field: &'static str,
    },
    /// A field parsed as zero; spaces must have positive area.
    #[error("dimension {field} must be positive")]
    Zero {
        /// Which field was zero: `"width"` or `"height"`.
        field: &'static str,
    },
}

/// The size of a rectangular canvas.
///
/// Wire format is `"WxH"` with both fields positive, e.g. `"100x200"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Canvas width.
    pub width: u32,
    /// Canvas height.
    pub height: u32,
}

impl Dimensions {
    /// Parses a `"WxH"` string.
    ///
    /// Parsing is strict: exactly two base-10 `u32` fields joined by a single
    /// lowercase `x`, each greater than zero. No whitespace, no partial
    /// parses.
    pub fn parse(input: &str) -> Result<Self, DimensionsError> {
        let mut parts = input.split('x');
        let (raw_width, raw_height) = match (parts.next(), parts.next(), parts.next()) {
            (Some(w), Some(h), None) => (w, h),
            _ => return Err(DimensionsError::Malformed),
        };

        let width = Self::parse_field(raw_width, "width")?;
        let height = Self::parse_field(raw_height, "height")?;
        Ok(Self { width, height })
    }

    fn parse_field(raw: &str, field: &'static str) -> Result<u32, DimensionsError> {
        let value = raw
            .parse::<u32>()
            .map_err(|_| DimensionsError::NotANumber { field })?;
        if value == 0 {
            return Err(DimensionsError::Zero { field });
        }
        Ok(value)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A validated in-bounds position on a specific space.
///
/// Produced only by [`validate_placement`](crate::domain::placement::validate_placement);
/// holding one is proof the boundary rule passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Horizontal position.
    pub x: u32,
    /// Vertical position.
    pub y: u32,
}

/// A request to place one element on a space.
///
/// Coordinates are signed on the request surface so that negative input is
/// representable and rejected by the boundary rule, not mangled at the
/// deserialization edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRequest {
    /// The target space.
    pub space_id: SpaceId,
    /// The catalog definition to instantiate.
    pub element_id: ElementId,
    /// Requested horizontal position.
    pub x: i64,
    /// Requested vertical position.
    pub y: i64,
}

/// One row of the caller's space listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceSummary {
    /// The space id.
    pub id: SpaceId,
    /// Display name.
    pub name: String,
    /// Optional preview image URL.
    pub thumbnail: Option<String>,
    /// Canvas size rendered as `"WxH"`.
    pub dimensions: String,
}

impl From<&Space> for SpaceSummary {
    fn from(space: &Space) -> Self {
        Self {
            id: space.id,
            name: space.name.clone(),
            thumbnail: space.thumbnail.clone(),
            dimensions: space.dimensions().to_string(),
        }
    }
}

/// The public rendering payload for one space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceDetail {
    /// Canvas size rendered as `"WxH"`.
    pub dimensions: String,
    /// Every element on the space, joined with its catalog definition.
    pub elements: Vec<PlacedElement>,
}

/// One placed element joined with its catalog definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedElement {
    /// The placement instance id (what removal takes).
    pub id: SpaceElementId,
    /// The catalog definition, embedded for rendering.
    pub element: ElementDefinition,
    /// Horizontal position.
    pub x: u32,
    /// Vertical position.
    pub y: u32,
}

// =============================================================================
// TESTS
// =============================================================================
