//! In-memory avatar catalog.

use crate::domain::AvatarDefinition;
use crate::error::CatalogError;
use crate::ports::outbound::AvatarCatalog;
use async_trait::async_trait;
use shared_types::AvatarId;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory [`AvatarCatalog`].
#[derive(Debug, Clone, Default)]
pub struct MemoryAvatarCatalog {
    avatars: Arc<RwLock<HashMap<AvatarId, AvatarDefinition>>>,
}

impl MemoryAvatarCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) an avatar, keyed by its id.
    pub fn publish(&self, definition: AvatarDefinition) {
        if let Ok(mut avatars) = self.avatars.write() {
            avatars.insert(definition.id, definition);
        }
    }
}

#[async_trait]
impl AvatarCatalog for MemoryAvatarCatalog {
    async fn fetch(&self, avatar_id: AvatarId) -> Result<Option<AvatarDefinition>, CatalogError> {
        let avatars = self.avatars.read().map_err(|_| CatalogError::LockPoisoned)?;
        Ok(avatars.get(&avatar_id).cloned())
    }
}

// =============================================================================
// TESTS
// =============================================================================
