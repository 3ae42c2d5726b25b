//! # Entity Identifiers
//!
//! Uuid-backed newtype ids for every persistent entity. Each id kind is a
//! distinct type so a `SpaceId` can never be passed where a `UserId` is
//! expected; the compiler enforces what a raw string column cannot.
//!
//! Ids are assigned by the storage adapters at insert time (v4 uuids), never
//! by services.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Defines a uuid-backed entity id newtype with the standard trait surface.
macro_rules! entity_id {
    ($(#[$docs:meta])* $name:ident) => {
        $(#[$docs])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Wraps an existing uuid.
            pub const fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Mints a fresh random (v4) id.
            ///
            /// Only storage adapters should call this; services receive ids,
            /// they do not invent them.
            pub fn generate() -> Self {
                Self(Uuid::new_v4())
            }

            /// Returns the underlying uuid.
            pub const fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::from_str(s).map(Self)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

entity_id! {
    /// Identifies a user account.
    ///
    /// Accounts are created by an external signup flow; this subsystem only
    /// ever references them.
    UserId
}

entity_id! {
    /// Identifies a space (a user-owned rectangular canvas).
    SpaceId
}

entity_id! {
    /// Identifies one placed element instance inside a space.
    SpaceElementId
}

entity_id! {
    /// Identifies an element definition in the shared catalog.
    ElementId
}

entity_id! {
    /// Identifies a map template in the template catalog.
    MapId
}

entity_id! {
    /// Identifies an avatar definition in the avatar catalog.
    AvatarId
}

// =============================================================================
// TESTS
// =============================================================================
