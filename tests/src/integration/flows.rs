//! # Integration Test Flows
//!
//! Tests that shared-types, space-management, and user-profiles work together
//! correctly through their public ports.
//!
//! ## Flows Tested:
//!
//! 1. **Credential resolution → Space Manager**: a token resolves to an
//!    identity which drives every space operation
//! 2. **Space lifecycle**: blank creation, template cloning, placement,
//!    detail reads, removal, deletion
//! 3. **Profile surface**: avatar assignment and bulk metadata reads
//! 4. **Port-level failures**: catalog outages surface as storage errors

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};

    use shared_types::{
        AvatarId, CredentialError, CredentialResolver, ElementId, Identity, MapId, Role,
        StaticTokenDirectory, UserId,
    };

    use space_management::{
        ElementDefinition, MapTemplate, MemoryElementCatalog, MemorySpaceRepository,
        MemoryTemplateCatalog, PlacementRequest, SpaceError, SpaceManagementApi,
        SpaceManagerService, TemplateElement,
    };

    use user_profiles::{
        AvatarDefinition, MemoryAvatarCatalog, MemoryUserDirectory, ProfileApi, ProfileService,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    type TestSpaceService =
        SpaceManagerService<MemorySpaceRepository, MemoryTemplateCatalog, MemoryElementCatalog>;

    struct SpaceStack {
        service: TestSpaceService,
        repository: MemorySpaceRepository,
        templates: MemoryTemplateCatalog,
        elements: MemoryElementCatalog,
    }

    fn make_space_stack() -> SpaceStack {
        crate::init_test_logging();
        let repository = MemorySpaceRepository::new();
        let templates = MemoryTemplateCatalog::new();
        let elements = MemoryElementCatalog::new();
        SpaceStack {
            service: SpaceManagerService::new(
                repository.clone(),
                templates.clone(),
                elements.clone(),
            ),
            repository,
            templates,
            elements,
        }
    }

    /// A credential directory with one known token for `user_id`.
    fn make_credentials(token: &str, user_id: UserId) -> StaticTokenDirectory {
        let directory = StaticTokenDirectory::new();
        directory.register(token, Identity::new(user_id, Role::User));
        directory
    }

    fn publish_element(stack: &SpaceStack) -> ElementId {
        let id = ElementId::generate();
        stack.elements.publish(ElementDefinition {
            id,
            image_url: format!("https://cdn.habitat.dev/elements/{id}.png"),
            width: 1,
            height: 1,
            is_static: false,
        });
        id
    }

    /// Template catalog that is down. Stands in for a catalog backend outage.
    struct FailingTemplateCatalog;

    #[async_trait::async_trait]
    impl space_management::TemplateCatalog for FailingTemplateCatalog {
        async fn fetch(
            &self,
            _id: MapId,
        ) -> Result<Option<MapTemplate>, space_management::CatalogError> {
            Err(space_management::CatalogError::Unavailable(
                "template catalog connection refused".to_string(),
            ))
        }
    }

    // =============================================================================
    // INTEGRATION TESTS: CREDENTIALS → SPACE MANAGER
    // =============================================================================

    /// Test the full lifecycle: token → identity → create, clone, place,
    /// read, remove, delete.
    #[tokio::test]
    async fn test_full_space_lifecycle_from_token() {
        let stack = make_space_stack();
        let user_id = UserId::generate();
        let credentials = make_credentials("session-abc123", user_id);

        // Resolve the caller the way the transport layer would.
        let identity = credentials.resolve("session-abc123").await.unwrap();
        assert_eq!(identity.user_id, user_id);

        // Create a blank space and place an element in it.
        let space_id = stack
            .service
            .create_blank_space(&identity, "Headquarters", "300x150")
            .await
            .unwrap();
        let element_id = publish_element(&stack);
        let placed = stack
            .service
            .add_element(
                &identity,
                PlacementRequest {
                    space_id,
                    element_id,
                    x: 12,
                    y: 34,
                },
            )
            .await
            .unwrap();

        // The listing and the public detail read both see it.
        let summaries = stack.service.list_owned_spaces(&identity).await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].name, "Headquarters");
        assert_eq!(summaries[0].dimensions, "300x150");

        let detail = stack.service.get_space_detail(space_id).await.unwrap();
        assert_eq!(detail.dimensions, "300x150");
        assert_eq!(detail.elements.len(), 1);
        assert_eq!(detail.elements[0].id, placed);

        // Remove the element, then the space.
        stack.service.remove_element(&identity, placed).await.unwrap();
        stack.service.delete_space(&identity, space_id).await.unwrap();

        assert!(stack.service.list_owned_spaces(&identity).await.unwrap().is_empty());
        assert_eq!(stack.repository.space_count(), 0);
        assert_eq!(stack.repository.element_count(), 0);
    }

    /// Test that an unknown token never reaches the space manager.
    #[tokio::test]
    async fn test_unknown_token_is_rejected_before_any_operation() {
        let credentials = make_credentials("session-abc123", UserId::generate());

        let result = credentials.resolve("session-forged").await;

        assert!(matches!(result, Err(CredentialError::Unauthenticated)));
    }

    // =============================================================================
    // INTEGRATION TESTS: TEMPLATE CLONING
    // =============================================================================

    /// Clone an 800x600 template holding elements at (10,20) and (790,590),
    /// then read the detail back.
    #[tokio::test]
    async fn test_clone_template_and_read_detail() {
        let stack = make_space_stack();
        let identity = Identity::new(UserId::generate(), Role::User);

        let first = publish_element(&stack);
        let second = publish_element(&stack);
        let template = MapTemplate {
            id: MapId::generate(),
            name: "Conference Hall".to_string(),
            width: 800,
            height: 600,
            elements: vec![
                TemplateElement {
                    element_id: first,
                    x: 10,
                    y: 20,
                },
                TemplateElement {
                    element_id: second,
                    x: 790,
                    y: 590,
                },
            ],
        };
        stack.templates.publish(template.clone());

        let space_id = stack
            .service
            .create_space_from_template(&identity, "Room", template.id)
            .await
            .unwrap();

        let detail = stack.service.get_space_detail(space_id).await.unwrap();
        assert_eq!(detail.dimensions, "800x600");
        assert_eq!(detail.elements.len(), 2);
        assert_eq!((detail.elements[0].x, detail.elements[0].y), (10, 20));
        assert_eq!((detail.elements[1].x, detail.elements[1].y), (790, 590));
        assert_eq!(detail.elements[0].element.id, first);
        assert_eq!(detail.elements[1].element.id, second);
    }

    /// Test that a catalog outage surfaces as a storage error, not a panic
    /// or a silent NotFound.
    #[tokio::test]
    async fn test_template_catalog_outage_surfaces_as_storage_error() {
        let service = SpaceManagerService::new(
            MemorySpaceRepository::new(),
            FailingTemplateCatalog,
            MemoryElementCatalog::new(),
        );
        let identity = Identity::new(UserId::generate(), Role::User);

        let result = service
            .create_space_from_template(&identity, "Room", MapId::generate())
            .await;

        assert!(matches!(result, Err(SpaceError::Storage(_))));
    }

    // =============================================================================
    // INTEGRATION TESTS: PLACEMENT UNDER LOAD
    // =============================================================================

    /// Test a burst of randomized in-bounds placements; every one must land.
    #[tokio::test]
    async fn test_randomized_in_bounds_placements_all_land() {
        let stack = make_space_stack();
        let identity = Identity::new(UserId::generate(), Role::User);
        let space_id = stack
            .service
            .create_blank_space(&identity, "Plaza", "640x480")
            .await
            .unwrap();
        let element_id = publish_element(&stack);

        let mut rng = rand::rngs::StdRng::seed_from_u64(0xB0A7);
        for _ in 0..25 {
            let x = rng.gen_range(0..=640);
            let y = rng.gen_range(0..=480);
            stack
                .service
                .add_element(
                    &identity,
                    PlacementRequest {
                        space_id,
                        element_id,
                        x,
                        y,
                    },
                )
                .await
                .unwrap();
        }

        assert_eq!(stack.repository.element_count(), 25);
        let detail = stack.service.get_space_detail(space_id).await.unwrap();
        assert_eq!(detail.elements.len(), 25);
    }

    // =============================================================================
    // INTEGRATION TESTS: PROFILE SURFACE
    // =============================================================================

    /// Test avatar assignment followed by the bulk metadata read a presence
    /// consumer would issue.
    #[tokio::test]
    async fn test_avatar_assignment_and_bulk_metadata() {
        let directory = MemoryUserDirectory::new();
        let avatars = MemoryAvatarCatalog::new();
        let service = ProfileService::new(directory.clone(), avatars.clone());

        let dressed = Identity::new(directory.seed_user(), Role::User);
        let undressed_id = directory.seed_user();
        let avatar = AvatarDefinition {
            id: AvatarId::generate(),
            image_url: "https://cdn.habitat.dev/avatars/penguin.png".to_string(),
            name: "Penguin".to_string(),
        };
        avatars.publish(avatar.clone());

        service.update_avatar(&dressed, avatar.id).await.unwrap();

        let metadata = service
            .avatar_metadata(&[dressed.user_id, undressed_id, UserId::generate()])
            .await
            .unwrap();

        assert_eq!(metadata.len(), 2);
        assert_eq!(
            metadata[0].avatar_image_url.as_deref(),
            Some(avatar.image_url.as_str())
        );
        assert_eq!(metadata[1].avatar_image_url, None);
    }

    /// Test that space ownership and profile identity agree on the same user.
    #[tokio::test]
    async fn test_same_identity_spans_spaces_and_profiles() {
        let stack = make_space_stack();
        let directory = MemoryUserDirectory::new();
        let avatars = MemoryAvatarCatalog::new();
        let profiles = ProfileService::new(directory.clone(), avatars.clone());

        let identity = Identity::new(directory.seed_user(), Role::User);
        let avatar = AvatarDefinition {
            id: AvatarId::generate(),
            image_url: "https://cdn.habitat.dev/avatars/robot.png".to_string(),
            name: "Robot".to_string(),
        };
        avatars.publish(avatar.clone());

        profiles.update_avatar(&identity, avatar.id).await.unwrap();
        let space_id = stack
            .service
            .create_blank_space(&identity, "My Corner", "50x50")
            .await
            .unwrap();

        let summaries = stack.service.list_owned_spaces(&identity).await.unwrap();
        let metadata = profiles
            .avatar_metadata(&[identity.user_id])
            .await
            .unwrap();

        assert_eq!(summaries[0].id, space_id);
        assert_eq!(metadata[0].user_id, identity.user_id);
    }
}
