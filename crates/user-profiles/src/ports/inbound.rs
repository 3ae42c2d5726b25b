//! Inbound port: the profile API exposed to the transport layer.

use crate::domain::AvatarMetadata;
use crate::error::ProfileResult;
use async_trait::async_trait;
use shared_types::{AvatarId, Identity, UserId};

/// Driving port for profile operations.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Assigns `avatar_id` to the calling user's own record.
    ///
    /// ## Errors
    /// - [`ProfileError::AvatarNotFound`](crate::error::ProfileError::AvatarNotFound)
    ///   if the avatar is not in the catalog
    /// - [`ProfileError::UserNotFound`](crate::error::ProfileError::UserNotFound)
    ///   if the directory has no row for the caller
    async fn update_avatar(&self, identity: &Identity, avatar_id: AvatarId) -> ProfileResult<()>;

    /// Resolves avatar image urls for a batch of users. Public read, no
    /// identity required.
    ///
    /// Unknown user ids are omitted from the result; known users without an
    /// assigned avatar appear with `avatar_image_url: None`. Order follows
    /// the directory, not the request.
    async fn avatar_metadata(&self, user_ids: &[UserId]) -> ProfileResult<Vec<AvatarMetadata>>;
}
