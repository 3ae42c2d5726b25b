//! Outbound ports: driven-side contracts the profile service depends on.

use crate::domain::AvatarDefinition;
use crate::error::{CatalogError, DirectoryError};
use async_trait::async_trait;
use shared_types::{AvatarId, UserId};

/// Store of user rows. Users are provisioned by the registration flow; this
/// subsystem only ever touches the avatar reference.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Writes `avatar_id` onto the user's row. Returns `false` when the
    /// directory has no such user (no row was written).
    async fn assign_avatar(
        &self,
        user_id: UserId,
        avatar_id: AvatarId,
    ) -> Result<bool, DirectoryError>;

    /// Returns `(user_id, avatar_id)` for every requested user the directory
    /// knows, in directory order. Unknown ids are simply absent.
    async fn avatars_for(
        &self,
        user_ids: &[UserId],
    ) -> Result<Vec<(UserId, Option<AvatarId>)>, DirectoryError>;
}

/// Read-only avatar catalog.
#[async_trait]
pub trait AvatarCatalog: Send + Sync {
    async fn fetch(&self, avatar_id: AvatarId) -> Result<Option<AvatarDefinition>, CatalogError>;
}
