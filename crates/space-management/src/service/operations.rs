//! Implementation of [`SpaceManagementApi`] for [`SpaceManagerService`].

use super::SpaceManagerService;
use crate::domain::errors::SpaceError;
use crate::domain::placement::{validate_placement, validate_space_ownership};
use crate::domain::value_objects::{
    Dimensions, PlacedElement, PlacementRequest, SpaceDetail, SpaceSummary,
};
use crate::ports::inbound::SpaceManagementApi;
use crate::ports::outbound::{
    ElementCatalog, NewSpace, NewSpaceElement, SpaceRepository, SpaceWriteBatch, TemplateCatalog,
};
use async_trait::async_trait;
use shared_types::{Identity, MapId, SpaceElementId, SpaceId};

/// Rolls back a failed batch. The original failure is what callers see; a
/// rollback failure on top of it only gets logged.
async fn abort_batch(batch: Box<dyn SpaceWriteBatch>) {
    if let Err(rollback_err) = batch.rollback().await {
        tracing::warn!("[spaces] rollback after failed clone also failed: {rollback_err}");
    }
}

#[async_trait]
impl<R, M, E> SpaceManagementApi for SpaceManagerService<R, M, E>
where
    R: SpaceRepository,
    M: TemplateCatalog,
    E: ElementCatalog,
{
    async fn create_blank_space(
        &self,
        identity: &Identity,
        name: &str,
        dimensions: &str,
    ) -> Result<SpaceId, SpaceError> {
        let dimensions = Dimensions::parse(dimensions)?;

        let space = self
            .repository
            .insert_space(NewSpace {
                name: name.to_string(),
                width: dimensions.width,
                height: dimensions.height,
                creator_id: identity.user_id,
            })
            .await?;

        tracing::info!(
            "[spaces] 📦 created blank space {} ({}) for user {}",
            space.id,
            dimensions,
            identity.user_id
        );
        Ok(space.id)
    }

    async fn create_space_from_template(
        &self,
        identity: &Identity,
        name: &str,
        map_id: MapId,
    ) -> Result<SpaceId, SpaceError> {
        let template = self
            .templates
            .fetch(map_id)
            .await?
            .ok_or(SpaceError::MapNotFound)?;

        let mut batch = self.repository.begin().await?;

        let space = match batch
            .insert_space(NewSpace {
                name: name.to_string(),
                width: template.width,
                height: template.height,
                creator_id: identity.user_id,
            })
            .await
        {
            Ok(space) => space,
            Err(err) => {
                abort_batch(batch).await;
                return Err(err.into());
            }
        };

        // Template placements are copied verbatim; they are trusted catalog
        // data and are not re-validated here.
        let placements: Vec<NewSpaceElement> = template
            .elements
            .iter()
            .map(|e| NewSpaceElement {
                space_id: space.id,
                element_id: e.element_id,
                x: e.x,
                y: e.y,
            })
            .collect();
        let element_count = placements.len();

        if let Err(err) = batch.insert_elements(placements).await {
            abort_batch(batch).await;
            return Err(err.into());
        }

        batch.commit().await?;

        tracing::info!(
            "[spaces] 📦 cloned template {} into space {} ({} elements) for user {}",
            map_id,
            space.id,
            element_count,
            identity.user_id
        );
        Ok(space.id)
    }

    async fn delete_space(
        &self,
        identity: &Identity,
        space_id: SpaceId,
    ) -> Result<(), SpaceError> {
        let space = self
            .repository
            .find_space(space_id)
            .await?
            .ok_or(SpaceError::SpaceNotFound)?;

        if let Err(violation) = validate_space_ownership(&space, identity) {
            tracing::warn!(
                "[spaces] user {} denied deleting space {} owned by {}",
                identity.user_id,
                space_id,
                space.creator_id
            );
            return Err(violation.into());
        }

        let removed = self.repository.delete_space_cascade(space_id).await?;
        tracing::info!(
            "[spaces] 🧹 deleted space {} ({} elements cascaded)",
            space_id,
            removed
        );
        Ok(())
    }

    async fn list_owned_spaces(
        &self,
        identity: &Identity,
    ) -> Result<Vec<SpaceSummary>, SpaceError> {
        let spaces = self.repository.spaces_created_by(identity.user_id).await?;
        Ok(spaces.iter().map(SpaceSummary::from).collect())
    }

    async fn get_space_detail(&self, space_id: SpaceId) -> Result<SpaceDetail, SpaceError> {
        let space = self
            .repository
            .find_space(space_id)
            .await?
            .ok_or(SpaceError::SpaceNotFound)?;

        let rows = self.repository.elements_in_space(space_id).await?;
        let mut elements = Vec::with_capacity(rows.len());
        for row in rows {
            // A placed element without a catalog definition is broken
            // integrity, not a bad request.
            let definition = self.elements.fetch(row.element_id).await?.ok_or_else(|| {
                SpaceError::Storage(format!(
                    "element {} on space {} is missing from the catalog",
                    row.element_id, space_id
                ))
            })?;
            elements.push(PlacedElement {
                id: row.id,
                element: definition,
                x: row.x,
                y: row.y,
            });
        }

        Ok(SpaceDetail {
            dimensions: space.dimensions().to_string(),
            elements,
        })
    }

    async fn add_element(
        &self,
        identity: &Identity,
        request: PlacementRequest,
    ) -> Result<SpaceElementId, SpaceError> {
        // Owner-scoped load: a missing space and somebody else's space are
        // the same answer.
        let space = self
            .repository
            .find_space_owned_by(request.space_id, identity.user_id)
            .await?
            .ok_or(SpaceError::SpaceNotFound)?;

        let position = validate_placement(&space, request.x, request.y)?;

        self.elements
            .fetch(request.element_id)
            .await?
            .ok_or(SpaceError::ElementNotFound)?;

        let element = self
            .repository
            .insert_element(NewSpaceElement {
                space_id: space.id,
                element_id: request.element_id,
                x: position.x,
                y: position.y,
            })
            .await?;

        tracing::debug!(
            "[spaces] placed element {} at ({}, {}) on space {}",
            element.id,
            position.x,
            position.y,
            space.id
        );
        Ok(element.id)
    }

    async fn remove_element(
        &self,
        identity: &Identity,
        space_element_id: SpaceElementId,
    ) -> Result<(), SpaceError> {
        let (element, space) = self
            .repository
            .find_element_with_space(space_element_id)
            .await?
            .ok_or(SpaceError::SpaceElementNotFound)?;

        if let Err(violation) = validate_space_ownership(&space, identity) {
            tracing::warn!(
                "[spaces] user {} denied removing element {} from space {} owned by {}",
                identity.user_id,
                space_element_id,
                space.id,
                space.creator_id
            );
            return Err(violation.into());
        }

        self.repository.delete_element(element.id).await?;
        tracing::debug!(
            "[spaces] removed element {} from space {}",
            element.id,
            space.id
        );
        Ok(())
    }
}
