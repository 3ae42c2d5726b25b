//! # Adapters
//!
//! In-memory implementations of the outbound ports, used by unit tests, the
//! integration suite, and development hosts. Production deployments provide
//! database-backed implementations of the same traits.

pub mod memory_catalog;
pub mod memory_repository;

pub use memory_catalog::{MemoryElementCatalog, MemoryTemplateCatalog};
pub use memory_repository::MemorySpaceRepository;
