//! In-memory reference adapters for the profile ports.

pub mod memory_avatars;
pub mod memory_directory;

pub use memory_avatars::MemoryAvatarCatalog;
pub use memory_directory::MemoryUserDirectory;
