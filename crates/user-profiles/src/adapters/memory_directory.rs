//! In-memory user directory.
//!
//! Rows live in a vector so bulk reads come back in provisioning order, the
//! way database-backed directories return them.

use crate::domain::UserRecord;
use crate::error::DirectoryError;
use crate::ports::outbound::UserDirectory;
use async_trait::async_trait;
use shared_types::{AvatarId, UserId};
use std::sync::{Arc, RwLock};

/// In-memory [`UserDirectory`]. Cloning shares the underlying rows, so a
/// test can keep a handle and assert on state after driving the service.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserDirectory {
    users: Arc<RwLock<Vec<UserRecord>>>,
}

impl MemoryUserDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provisions a user with no avatar and returns the new id.
    pub fn seed_user(&self) -> UserId {
        let id = UserId::generate();
        if let Ok(mut users) = self.users.write() {
            users.push(UserRecord {
                id,
                avatar_id: None,
            });
        }
        id
    }

    /// The avatar currently assigned to `user_id`, if the user exists.
    pub fn avatar_of(&self, user_id: UserId) -> Option<Option<AvatarId>> {
        let users = self.users.read().ok()?;
        users.iter().find(|u| u.id == user_id).map(|u| u.avatar_id)
    }
}

#[async_trait]
impl UserDirectory for MemoryUserDirectory {
    async fn assign_avatar(
        &self,
        user_id: UserId,
        avatar_id: AvatarId,
    ) -> Result<bool, DirectoryError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| DirectoryError::LockPoisoned)?;
        match users.iter_mut().find(|u| u.id == user_id) {
            Some(user) => {
                user.avatar_id = Some(avatar_id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn avatars_for(
        &self,
        user_ids: &[UserId],
    ) -> Result<Vec<(UserId, Option<AvatarId>)>, DirectoryError> {
        let users = self
            .users
            .read()
            .map_err(|_| DirectoryError::LockPoisoned)?;
        Ok(users
            .iter()
            .filter(|u| user_ids.contains(&u.id))
            .map(|u| (u.id, u.avatar_id))
            .collect())
    }
}

// =============================================================================
// TESTS
// =============================================================================
