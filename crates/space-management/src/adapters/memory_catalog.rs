//! # In-Memory Catalogs
//!
//! Reference implementations of the read-only catalog ports. Tests and
//! development hosts seed them with [`publish`](MemoryTemplateCatalog::publish);
//! production reads the catalogs the administrative flow maintains.

use crate::domain::entities::{ElementDefinition, MapTemplate};
use crate::domain::errors::CatalogError;
use crate::ports::outbound::{ElementCatalog, TemplateCatalog};
use async_trait::async_trait;
use shared_types::{ElementId, MapId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory [`TemplateCatalog`].
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplateCatalog {
    templates: Arc<RwLock<HashMap<MapId, MapTemplate>>>,
}

impl MemoryTemplateCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a template, keyed by its id.
    pub fn publish(&self, template: MapTemplate) {
        if let Ok(mut templates) = self.templates.write() {
            templates.insert(template.id, template);
        }
    }
}

#[async_trait]
impl TemplateCatalog for MemoryTemplateCatalog {
    async fn fetch(&self, id: MapId) -> Result<Option<MapTemplate>, CatalogError> {
        let templates = self
            .templates
            .read()
            .map_err(|_| CatalogError::LockPoisoned)?;
        Ok(templates.get(&id).cloned())
    }
}

/// In-memory [`ElementCatalog`].
#[derive(Debug, Clone, Default)]
pub struct MemoryElementCatalog {
    definitions: Arc<RwLock<HashMap<ElementId, ElementDefinition>>>,
}

impl MemoryElementCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a definition, keyed by its id.
    pub fn publish(&self, definition: ElementDefinition) {
        if let Ok(mut definitions) = self.definitions.write() {
            definitions.insert(definition.id, definition);
        }
    }
}

#[async_trait]
impl ElementCatalog for MemoryElementCatalog {
    async fn fetch(&self, id: ElementId) -> Result<Option<ElementDefinition>, CatalogError> {
        let definitions = self
            .definitions
            .read()
            .map_err(|_| CatalogError::LockPoisoned)?;
        Ok(definitions.get(&id).cloned())
    }
}

// =============================================================================
// TESTS
// =============================================================================
