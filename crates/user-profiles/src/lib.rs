//! # user-profiles
//!
//! Avatar assignment and avatar metadata lookups for Habitat users.
//!
//! ## Overview
//!
//! This subsystem provides:
//! - **Avatar assignment**: the one mutation Habitat performs on a user
//!   record, gated on the avatar existing in the catalog
//! - **Bulk metadata reads**: resolve many user ids to their avatar image
//!   urls in a single call, for presence-style consumers
//!
//! ## Architecture
//!
//! ```text
//!                 ┌────────────────────┐
//!  ProfileApi ──→ │   ProfileService   │ ──→ UserDirectory (user rows)
//!   (inbound)     │                    │ ──→ AvatarCatalog (read-only)
//!                 └────────────────────┘
//! ```
//!
//! Reads are public; the avatar mutation applies only to the calling
//! identity's own record, so no cross-user authorization exists here.
//!
//! ## Example
//!
//! ```rust,ignore
//! use user_profiles::{MemoryAvatarCatalog, MemoryUserDirectory, ProfileService};
//! use user_profiles::ports::inbound::ProfileApi;
//!
//! let service = ProfileService::new(directory, avatars);
//!
//! service.update_avatar(&identity, avatar_id).await?;
//! let metadata = service.avatar_metadata(&[identity.user_id]).await?;
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use adapters::{MemoryAvatarCatalog, MemoryUserDirectory};
pub use domain::{AvatarDefinition, AvatarMetadata, UserRecord};
pub use error::{CatalogError, DirectoryError, ProfileError};
pub use ports::inbound::ProfileApi;
pub use ports::outbound::{AvatarCatalog, UserDirectory};
pub use service::ProfileService;
