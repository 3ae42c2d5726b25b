//! Profile application service.

use crate::domain::AvatarMetadata;
use crate::error::{ProfileError, ProfileResult};
use crate::ports::inbound::ProfileApi;
use crate::ports::outbound::{AvatarCatalog, UserDirectory};
use async_trait::async_trait;
use shared_types::{AvatarId, Identity, UserId};

/// Orchestrates profile operations over the directory and the avatar catalog.
///
/// Generic over its driven ports so tests can wire in-memory doubles.
pub struct ProfileService<D, A>
where
    D: UserDirectory,
    A: AvatarCatalog,
{
    directory: D,
    avatars: A,
}

impl<D, A> ProfileService<D, A>
where
    D: UserDirectory,
    A: AvatarCatalog,
{
    pub fn new(directory: D, avatars: A) -> Self {
        Self { directory, avatars }
    }
}

#[async_trait]
impl<D, A> ProfileApi for ProfileService<D, A>
where
    D: UserDirectory,
    A: AvatarCatalog,
{
    async fn update_avatar(&self, identity: &Identity, avatar_id: AvatarId) -> ProfileResult<()> {
        self.avatars
            .fetch(avatar_id)
            .await?
            .ok_or(ProfileError::AvatarNotFound)?;

        let updated = self
            .directory
            .assign_avatar(identity.user_id, avatar_id)
            .await?;
        if !updated {
            return Err(ProfileError::UserNotFound);
        }

        tracing::info!(
            "[profiles] 🎭 user {} now wears avatar {}",
            identity.user_id,
            avatar_id
        );
        Ok(())
    }

    async fn avatar_metadata(&self, user_ids: &[UserId]) -> ProfileResult<Vec<AvatarMetadata>> {
        let rows = self.directory.avatars_for(user_ids).await?;

        let mut metadata = Vec::with_capacity(rows.len());
        for (user_id, assigned) in rows {
            let avatar_image_url = match assigned {
                None => None,
                Some(avatar_id) => {
                    // An assigned avatar missing from the catalog is broken
                    // integrity, not a bad request.
                    let definition =
                        self.avatars.fetch(avatar_id).await?.ok_or_else(|| {
                            ProfileError::Storage(format!(
                                "avatar {avatar_id} assigned to user {user_id} is missing from the catalog"
                            ))
                        })?;
                    Some(definition.image_url)
                }
            };
            metadata.push(AvatarMetadata {
                user_id,
                avatar_image_url,
            });
        }
        Ok(metadata)
    }
}

// =============================================================================
// TESTS
// =============================================================================
