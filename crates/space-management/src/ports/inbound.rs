//! # Inbound Ports (Driving Ports)
//!
//! The primary API of the Space Management subsystem: everything a transport
//! edge (HTTP handler, admin tool, test harness) may ask this subsystem to
//! do.
//!
//! Identity is explicit on every operation that needs one. The lone
//! exception is [`get_space_detail`](SpaceManagementApi::get_space_detail),
//! which is a public read.

use crate::domain::errors::SpaceError;
use crate::domain::value_objects::{PlacementRequest, SpaceDetail, SpaceSummary};
use async_trait::async_trait;
use shared_types::{Identity, MapId, SpaceElementId, SpaceId};

/// Primary API for the Space Management subsystem.
///
/// Implementations must enforce all domain invariants; callers get exactly
/// one [`SpaceError`] variant per failure.
#[async_trait]
pub trait SpaceManagementApi: Send + Sync {
    /// Create an empty space owned by the caller.
    ///
    /// `dimensions` is the `"WxH"` wire format, e.g. `"100x200"`.
    ///
    /// ## Errors
    ///
    /// - `Validation`: `dimensions` is not a well-formed positive `"WxH"` pair
    /// - `Storage`: the repository failed
    async fn create_blank_space(
        &self,
        identity: &Identity,
        name: &str,
        dimensions: &str,
    ) -> Result<SpaceId, SpaceError>;

    /// Create a space owned by the caller by cloning a map template.
    ///
    /// The new space takes its size from the template and its name from the
    /// caller; every template element is copied verbatim.
    ///
    /// ## Atomicity
    ///
    /// The space row and all element rows commit together or not at all. A
    /// failure part-way through leaves no trace of the space.
    ///
    /// ## Errors
    ///
    /// - `MapNotFound`: no template with this id
    /// - `Storage`: the repository or template catalog failed
    async fn create_space_from_template(
        &self,
        identity: &Identity,
        name: &str,
        map_id: MapId,
    ) -> Result<SpaceId, SpaceError>;

    /// Delete a space the caller owns, cascading to its elements.
    ///
    /// ## Errors
    ///
    /// - `SpaceNotFound`: no space with this id
    /// - `Unauthorized`: the space exists but the caller does not own it
    /// - `Storage`: the repository failed
    async fn delete_space(&self, identity: &Identity, space_id: SpaceId)
        -> Result<(), SpaceError>;

    /// List every space the caller owns, in insertion order.
    ///
    /// ## Errors
    ///
    /// - `Storage`: the repository failed
    async fn list_owned_spaces(&self, identity: &Identity)
        -> Result<Vec<SpaceSummary>, SpaceError>;

    /// Fetch the public rendering payload for a space.
    ///
    /// Takes no identity: anyone who can name a space may render it.
    ///
    /// ## Errors
    ///
    /// - `SpaceNotFound`: no space with this id
    /// - `Storage`: the repository failed, or an element row references a
    ///   definition missing from the catalog
    async fn get_space_detail(&self, space_id: SpaceId) -> Result<SpaceDetail, SpaceError>;

    /// Place one element on a space the caller owns.
    ///
    /// The space is loaded scoped to `(space_id, caller)`: a missing space
    /// and somebody else's space are indistinguishable to the caller, both
    /// fail `SpaceNotFound`. The boundary rule runs only after that check.
    ///
    /// ## Errors
    ///
    /// - `SpaceNotFound`: no such space owned by the caller
    /// - `OutOfBounds`: the requested point violates the boundary rule
    /// - `ElementNotFound`: the element definition is not in the catalog
    /// - `Storage`: the repository or element catalog failed
    async fn add_element(
        &self,
        identity: &Identity,
        request: PlacementRequest,
    ) -> Result<SpaceElementId, SpaceError>;

    /// Remove one placed element from a space the caller owns.
    ///
    /// ## Errors
    ///
    /// - `SpaceElementNotFound`: no placed element with this id
    /// - `Unauthorized`: the element's space belongs to somebody else
    /// - `Storage`: the repository failed
    async fn remove_element(
        &self,
        identity: &Identity,
        space_element_id: SpaceElementId,
    ) -> Result<(), SpaceError>;
}
