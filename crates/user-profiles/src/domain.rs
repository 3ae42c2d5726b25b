//! Domain types for the user-profiles subsystem.

use serde::{Deserialize, Serialize};
use shared_types::{AvatarId, UserId};

/// A user row as the profile subsystem sees it. Users are created elsewhere;
/// the only field this subsystem ever writes is `avatar_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    /// The currently assigned avatar, if any.
    pub avatar_id: Option<AvatarId>,
}

/// A catalog-defined avatar. Read-only to this subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarDefinition {
    pub id: AvatarId,
    pub image_url: String,
    pub name: String,
}

/// One entry of a bulk metadata read: a user and the image url of their
/// assigned avatar, `None` when no avatar is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarMetadata {
    pub user_id: UserId,
    pub avatar_image_url: Option<String>,
}
