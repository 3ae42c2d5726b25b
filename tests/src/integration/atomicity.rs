//! # Transactional Guarantee Tests
//!
//! Exercises the two hard-consistency promises of the space subsystem through
//! its public API, with a repository handle held on the side to observe row
//! counts directly:
//!
//! 1. **Clone atomicity**: cloning a template either persists the space and
//!    every element, or nothing at all
//! 2. **Cascade deletes**: deleting a space removes all of its elements in
//!    the same stroke

#[cfg(test)]
mod tests {
    use shared_types::{ElementId, Identity, MapId, Role, UserId};
    use space_management::{
        ElementDefinition, MapTemplate, MemoryElementCatalog, MemorySpaceRepository,
        MemoryTemplateCatalog, SpaceError, SpaceManagementApi, SpaceManagerService,
        TemplateElement,
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

    /// Publishes a 200x200 template with `element_count` placements on a
    /// diagonal, each backed by a published element definition.
    fn publish_template(stack: &SpaceStack, element_count: usize) -> MapTemplate {
        let mut elements = Vec::with_capacity(element_count);
        for i in 0..element_count {
            let element_id = ElementId::generate();
            stack.elements.publish(ElementDefinition {
                id: element_id,
                image_url: format!("https://cdn.habitat.dev/elements/{element_id}.png"),
                width: 1,
                height: 1,
                is_static: false,
            });
            elements.push(TemplateElement {
                element_id,
                x: i as u32,
                y: i as u32,
            });
        }
        let template = MapTemplate {
            id: MapId::generate(),
            name: "Diagonal Garden".to_string(),
            width: 200,
            height: 200,
            elements,
        };
        stack.templates.publish(template.clone());
        template
    }

    fn make_user() -> Identity {
        Identity::new(UserId::generate(), Role::User)
    }

    // =============================================================================
    // CLONE ATOMICITY
    // =============================================================================

    /// A failure partway through the bulk element insert must leave zero
    /// rows, never a space with a partial element set.
    #[tokio::test]
    async fn test_partial_clone_failure_leaves_no_rows() {
        let stack = make_space_stack();
        let alice = make_user();
        let template = publish_template(&stack, 5);

        // Die after 2 of the 5 element rows.
        stack.repository.inject_element_insert_failure(2);
        let result = stack
            .service
            .create_space_from_template(&alice, "Garden", template.id)
            .await;

        assert!(matches!(result, Err(SpaceError::Storage(_))));
        assert_eq!(stack.repository.space_count(), 0);
        assert_eq!(stack.repository.element_count(), 0);
        // A reader sees no trace either.
        assert!(stack
            .service
            .list_owned_spaces(&alice)
            .await
            .unwrap()
            .is_empty());
    }

    /// A commit-time failure must behave exactly like a mid-write failure,
    /// and the fault being transient means a retry lands cleanly.
    #[tokio::test]
    async fn test_commit_failure_leaves_no_rows_and_retry_lands() {
        let stack = make_space_stack();
        let alice = make_user();
        let template = publish_template(&stack, 3);

        stack.repository.inject_commit_failure();
        let result = stack
            .service
            .create_space_from_template(&alice, "Garden", template.id)
            .await;

        assert!(matches!(result, Err(SpaceError::Storage(_))));
        assert_eq!(stack.repository.space_count(), 0);
        assert_eq!(stack.repository.element_count(), 0);

        let space_id = stack
            .service
            .create_space_from_template(&alice, "Garden", template.id)
            .await
            .unwrap();

        assert_eq!(stack.repository.space_count(), 1);
        assert_eq!(stack.repository.element_count(), 3);
        let detail = stack.service.get_space_detail(space_id).await.unwrap();
        assert_eq!(detail.elements.len(), 3);
    }

    /// Clones by different callers run concurrently against the same
    /// template without coordinating; both must land in full.
    #[tokio::test]
    async fn test_concurrent_clones_are_independent() {
        let stack = make_space_stack();
        let alice = make_user();
        let bob = make_user();
        let template = publish_template(&stack, 4);

        let (left, right) = tokio::join!(
            stack
                .service
                .create_space_from_template(&alice, "Alice's Garden", template.id),
            stack
                .service
                .create_space_from_template(&bob, "Bob's Garden", template.id),
        );

        let left = left.unwrap();
        let right = right.unwrap();
        assert_ne!(left, right);
        assert_eq!(stack.repository.space_count(), 2);
        assert_eq!(stack.repository.element_count(), 8);
    }

    // =============================================================================
    // CASCADE DELETES
    // =============================================================================

    /// Deleting a space wipes its elements; their ids stop resolving.
    #[tokio::test]
    async fn test_cascade_delete_wipes_elements() {
        let stack = make_space_stack();
        let alice = make_user();
        let template = publish_template(&stack, 4);
        let space_id = stack
            .service
            .create_space_from_template(&alice, "Garden", template.id)
            .await
            .unwrap();
        let detail = stack.service.get_space_detail(space_id).await.unwrap();
        let former_ids: Vec<_> = detail.elements.iter().map(|e| e.id).collect();
        assert_eq!(former_ids.len(), 4);

        stack.service.delete_space(&alice, space_id).await.unwrap();

        assert_eq!(stack.repository.space_count(), 0);
        assert_eq!(stack.repository.element_count(), 0);
        for id in former_ids {
            let result = stack.service.remove_element(&alice, id).await;
            assert!(matches!(result, Err(SpaceError::SpaceElementNotFound)));
        }
    }

    /// A denied delete must not touch anything.
    #[tokio::test]
    async fn test_denied_delete_preserves_space_and_elements() {
        let stack = make_space_stack();
        let alice = make_user();
        let mallory = make_user();
        let template = publish_template(&stack, 3);
        let space_id = stack
            .service
            .create_space_from_template(&alice, "Garden", template.id)
            .await
            .unwrap();

        let result = stack.service.delete_space(&mallory, space_id).await;

        assert!(matches!(result, Err(SpaceError::Unauthorized)));
        assert_eq!(stack.repository.space_count(), 1);
        assert_eq!(stack.repository.element_count(), 3);
        let detail = stack.service.get_space_detail(space_id).await.unwrap();
        assert_eq!(detail.elements.len(), 3);
    }
}
