//! # Shared Types Crate
//!
//! This crate contains the entity identifiers and the caller identity model
//! shared by every Habitat subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Opaque Identifiers**: Entity ids are uuid-backed newtypes; no subsystem
//!   may treat one id kind as another.
//! - **Explicit Identity**: Operations never read ambient authentication
//!   state; the resolved [`Identity`] is passed as a value.

pub mod identity;
pub mod ids;

pub use identity::*;
pub use ids::*;
