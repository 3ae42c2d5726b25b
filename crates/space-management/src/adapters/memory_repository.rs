//! # In-Memory Space Repository
//!
//! Reference implementation of [`SpaceRepository`] over plain row vectors.
//! Rows keep insertion order, so listing operations are observably ordered
//! the way production databases order unsorted scans of append-only tables.
//!
//! The adapter is `Clone` (handles share one table set), and it carries
//! controllable fault injection so tests can force bulk-insert and commit
//! failures without a real database.

use crate::domain::entities::{Space, SpaceElement};
use crate::domain::errors::RepositoryError;
use crate::ports::outbound::{NewSpace, NewSpaceElement, SpaceRepository, SpaceWriteBatch};
use async_trait::async_trait;
use shared_types::{SpaceElementId, SpaceId, UserId};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// One-shot fault switches for failure-path tests.
#[derive(Debug, Default)]
struct FaultPlan {
    /// Fail the next bulk element insert after staging this many rows.
    fail_element_insert_after: Option<usize>,
    /// Refuse the next batch commit.
    fail_next_commit: bool,
}

/// The shared row store.
#[derive(Debug, Default)]
struct Tables {
    spaces: Vec<Space>,
    elements: Vec<SpaceElement>,
    faults: FaultPlan,
}

/// In-memory [`SpaceRepository`] for tests and development.
#[derive(Debug, Clone, Default)]
pub struct MemorySpaceRepository {
    tables: Arc<RwLock<Tables>>,
}

impl MemorySpaceRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a one-shot fault: the next bulk element insert stages at most
    /// `after` rows and then fails.
    pub fn inject_element_insert_failure(&self, after: usize) {
        if let Ok(mut tables) = self.tables.write() {
            tables.faults.fail_element_insert_after = Some(after);
        }
    }

    /// Arms a one-shot fault: the next batch commit is refused and applies
    /// nothing.
    pub fn inject_commit_failure(&self) {
        if let Ok(mut tables) = self.tables.write() {
            tables.faults.fail_next_commit = true;
        }
    }

    /// Number of committed space rows.
    pub fn space_count(&self) -> usize {
        self.tables.read().map(|t| t.spaces.len()).unwrap_or(0)
    }

    /// Number of committed element rows.
    pub fn element_count(&self) -> usize {
        self.tables.read().map(|t| t.elements.len()).unwrap_or(0)
    }

    fn read_tables(&self) -> Result<RwLockReadGuard<'_, Tables>, RepositoryError> {
        self.tables
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)
    }

    fn write_tables(&self) -> Result<RwLockWriteGuard<'_, Tables>, RepositoryError> {
        self.tables
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)
    }
}

/// Builds a space row from an insert request, assigning the id.
fn new_space_row(space: NewSpace) -> Space {
    Space {
        id: SpaceId::generate(),
        name: space.name,
        width: space.width,
        height: space.height,
        thumbnail: None,
        creator_id: space.creator_id,
    }
}

/// Builds an element row from an insert request, assigning the id.
fn new_element_row(element: NewSpaceElement) -> SpaceElement {
    SpaceElement {
        id: SpaceElementId::generate(),
        space_id: element.space_id,
        element_id: element.element_id,
        x: element.x,
        y: element.y,
    }
}

#[async_trait]
impl SpaceRepository for MemorySpaceRepository {
    async fn insert_space(&self, space: NewSpace) -> Result<Space, RepositoryError> {
        let mut tables = self.write_tables()?;
        let row = new_space_row(space);
        tables.spaces.push(row.clone());
        Ok(row)
    }

    async fn find_space(&self, id: SpaceId) -> Result<Option<Space>, RepositoryError> {
        let tables = self.read_tables()?;
        Ok(tables.spaces.iter().find(|s| s.id == id).cloned())
    }

    async fn find_space_owned_by(
        &self,
        id: SpaceId,
        owner: UserId,
    ) -> Result<Option<Space>, RepositoryError> {
        let tables = self.read_tables()?;
        Ok(tables
            .spaces
            .iter()
            .find(|s| s.id == id && s.creator_id == owner)
            .cloned())
    }

    async fn spaces_created_by(&self, owner: UserId) -> Result<Vec<Space>, RepositoryError> {
        let tables = self.read_tables()?;
        Ok(tables
            .spaces
            .iter()
            .filter(|s| s.creator_id == owner)
            .cloned()
            .collect())
    }

    async fn delete_space_cascade(&self, id: SpaceId) -> Result<u64, RepositoryError> {
        let mut tables = self.write_tables()?;
        tables.spaces.retain(|s| s.id != id);
        let before = tables.elements.len();
        tables.elements.retain(|e| e.space_id != id);
        Ok((before - tables.elements.len()) as u64)
    }

    async fn insert_element(
        &self,
        element: NewSpaceElement,
    ) -> Result<SpaceElement, RepositoryError> {
        let mut tables = self.write_tables()?;
        if !tables.spaces.iter().any(|s| s.id == element.space_id) {
            return Err(RepositoryError::MissingReference(format!(
                "space {} is not present",
                element.space_id
            )));
        }
        let row = new_element_row(element);
        tables.elements.push(row.clone());
        Ok(row)
    }

    async fn find_element_with_space(
        &self,
        id: SpaceElementId,
    ) -> Result<Option<(SpaceElement, Space)>, RepositoryError> {
        let tables = self.read_tables()?;
        let Some(element) = tables.elements.iter().find(|e| e.id == id).cloned() else {
            return Ok(None);
        };
        let space = tables
            .spaces
            .iter()
            .find(|s| s.id == element.space_id)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::MissingReference(format!(
                    "element {} references missing space {}",
                    element.id, element.space_id
                ))
            })?;
        Ok(Some((element, space)))
    }

    async fn delete_element(&self, id: SpaceElementId) -> Result<(), RepositoryError> {
        let mut tables = self.write_tables()?;
        tables.elements.retain(|e| e.id != id);
        Ok(())
    }

    async fn elements_in_space(
        &self,
        space_id: SpaceId,
    ) -> Result<Vec<SpaceElement>, RepositoryError> {
        let tables = self.read_tables()?;
        Ok(tables
            .elements
            .iter()
            .filter(|e| e.space_id == space_id)
            .cloned()
            .collect())
    }

    async fn begin(&self) -> Result<Box<dyn SpaceWriteBatch>, RepositoryError> {
        Ok(Box::new(MemoryWriteBatch {
            tables: Arc::clone(&self.tables),
            staged_spaces: Vec::new(),
            staged_elements: Vec::new(),
        }))
    }
}

/// A staged batch against a [`MemorySpaceRepository`].
///
/// Rows are staged locally and only touch the shared tables at commit, under
/// one write lock, so readers never observe a half-applied batch.
struct MemoryWriteBatch {
    tables: Arc<RwLock<Tables>>,
    staged_spaces: Vec<Space>,
    staged_elements: Vec<SpaceElement>,
}

#[async_trait]
impl SpaceWriteBatch for MemoryWriteBatch {
    async fn insert_space(&mut self, space: NewSpace) -> Result<Space, RepositoryError> {
        let row = new_space_row(space);
        self.staged_spaces.push(row.clone());
        Ok(row)
    }

    async fn insert_elements(
        &mut self,
        elements: Vec<NewSpaceElement>,
    ) -> Result<usize, RepositoryError> {
        let armed = {
            let mut tables = self
                .tables
                .write()
                .map_err(|_| RepositoryError::LockPoisoned)?;
            tables.faults.fail_element_insert_after.take()
        };

        if let Some(after) = armed {
            // Mimic a bulk insert dying mid-statement: part of the batch is
            // staged, then the store errors out.
            for element in elements.into_iter().take(after) {
                self.staged_elements.push(new_element_row(element));
            }
            return Err(RepositoryError::Io(format!(
                "element bulk insert failed after {after} rows"
            )));
        }

        let count = elements.len();
        for element in elements {
            self.staged_elements.push(new_element_row(element));
        }
        Ok(count)
    }

    async fn commit(self: Box<Self>) -> Result<(), RepositoryError> {
        let MemoryWriteBatch {
            tables,
            staged_spaces,
            staged_elements,
        } = *self;

        let mut guard = tables.write().map_err(|_| RepositoryError::LockPoisoned)?;
        if guard.faults.fail_next_commit {
            guard.faults.fail_next_commit = false;
            return Err(RepositoryError::Io(
                "transaction commit refused".to_string(),
            ));
        }
        guard.spaces.extend(staged_spaces);
        guard.elements.extend(staged_elements);
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), RepositoryError> {
        tracing::debug!(
            "[spaces] rolled back staged batch ({} spaces, {} elements)",
            self.staged_spaces.len(),
            self.staged_elements.len()
        );
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
