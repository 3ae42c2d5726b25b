//! # Placement Rules
//!
//! The pure validation rules every element mutation passes through:
//! boundary containment and space ownership. No I/O, no clock, no ids:
//! callers load the [`Space`] and hand it in.
//!
//! ## The Boundary Rule
//!
//! A point is out of bounds iff
//! `x < 0 || y < 0 || x > width || y > height`.
//!
//! The comparison is strictly-greater on the far edge: `(width, height)`
//! itself is a legal position. Rendering clients rely on that, so the
//! predicate must not be "tidied" into `x >= width`.

use crate::domain::entities::Space;
use crate::domain::value_objects::Position;
use shared_types::Identity;
use thiserror::Error;

/// A rejected placement mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementViolation {
    /// The point falls outside of the space's boundary.
    #[error("point ({x}, {y}) is outside of the boundary {width}x{height}")]
    OutOfBounds {
        /// Requested horizontal position.
        x: i64,
        /// Requested vertical position.
        y: i64,
        /// Width of the space the point was checked against.
        width: u32,
        /// Height of the space the point was checked against.
        height: u32,
    },

    /// The caller does not own the space.
    #[error("caller does not own the space")]
    NotOwner,
}

/// Checks the boundary rule for a requested position on `space`.
///
/// Returns the admitted [`Position`] on success; holding one is proof the
/// point is inside `0..=width` x `0..=height`.
pub fn validate_placement(space: &Space, x: i64, y: i64) -> Result<Position, PlacementViolation> {
    if x < 0 || y < 0 || x > i64::from(space.width) || y > i64::from(space.height) {
        return Err(PlacementViolation::OutOfBounds {
            x,
            y,
            width: space.width,
            height: space.height,
        });
    }

    // In 0..=width and 0..=height, so the narrowing is exact.
    Ok(Position {
        x: x as u32,
        y: y as u32,
    })
}

/// Checks that `identity` owns `space`.
///
/// Ownership is the only thing that gates mutations; an operator role does
/// not bypass it.
pub fn validate_space_ownership(
    space: &Space,
    identity: &Identity,
) -> Result<(), PlacementViolation> {
    if !space.is_owned_by(identity.user_id) {
        return Err(PlacementViolation::NotOwner);
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
