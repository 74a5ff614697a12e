//! API Module Tests
//!
//! Validates controller preconditions, outcome mapping, and update semantics.
//!
//! ## Test Scopes
//! - **Validation**: Non-positive identifiers, path/body mismatch ordering.
//! - **CRUD flows**: Create/update/patch/delete against a seeded fixture.
//! - **Boundary**: The fault-injection operation and the problem document.

#[cfg(test)]
mod tests {
    use crate::api::controller::PizzaController;
    use crate::api::error::ApiError;
    use crate::api::protocol::{pizza_location, ProblemResponse};
    use crate::service::pizza_service::PizzaService;
    use crate::store::memory::PizzaStore;
    use crate::store::types::{Pizza, PizzaPatch};
    use std::sync::Arc;

    fn controller_with(pizzas: Vec<Pizza>, next_id: i64) -> PizzaController {
        let store = Arc::new(PizzaStore::with_records(pizzas, next_id));
        PizzaController::new(PizzaService::new(store))
    }

    fn seeded_controller() -> PizzaController {
        let store = Arc::new(PizzaStore::seeded());
        PizzaController::new(PizzaService::new(store))
    }

    fn pizza(id: i64, name: &str, gluten_free: bool) -> Pizza {
        Pizza {
            id,
            name: Some(name.to_string()),
            is_gluten_free: gluten_free,
        }
    }

    // ============================================================
    // GET VALIDATION
    // ============================================================

    #[tokio::test]
    async fn test_get_zero_id_is_bad_input() {
        let controller = seeded_controller();

        let result = controller.get(0).await;
        assert!(matches!(result, Err(ApiError::BadInput)));
    }

    #[tokio::test]
    async fn test_get_negative_id_is_bad_input() {
        let controller = seeded_controller();

        let result = controller.get(-7).await;
        assert!(matches!(result, Err(ApiError::BadInput)));
    }

    #[tokio::test]
    async fn test_get_missing_positive_id_is_not_found() {
        let controller = seeded_controller();

        let result = controller.get(300).await;
        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_existing_id_returns_record() {
        let controller = seeded_controller();

        let pizza = controller.get(1).await.unwrap();
        assert_eq!(pizza.id, 1);
        assert_eq!(pizza.name.as_deref(), Some("Classic Italian"));
        assert!(!pizza.is_gluten_free);
    }

    #[tokio::test]
    async fn test_get_all_returns_seeded_menu() {
        let controller = seeded_controller();

        let all = controller.get_all().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[1].id, 2);
    }

    // ============================================================
    // CREATE
    // ============================================================

    #[tokio::test]
    async fn test_create_assigns_sequential_ids_from_seed() {
        let controller = seeded_controller();

        let first = controller
            .create(pizza(0, "Test1", true))
            .await
            .unwrap();
        let second = controller
            .create(pizza(0, "Test2", false))
            .await
            .unwrap();

        assert_eq!(first.pizza.id, 3);
        assert_eq!(first.pizza.name.as_deref(), Some("Test1"));
        assert!(first.pizza.is_gluten_free);

        assert_eq!(second.pizza.id, 4);
        assert_eq!(second.pizza.name.as_deref(), Some("Test2"));
        assert!(!second.pizza.is_gluten_free);

        assert_eq!(second.pizza.id, first.pizza.id + 1);
    }

    #[tokio::test]
    async fn test_create_ignores_client_supplied_id() {
        let controller = controller_with(vec![], 1);

        let created = controller
            .create(pizza(500, "Liar", false))
            .await
            .unwrap();

        assert_eq!(created.pizza.id, 1);
    }

    #[tokio::test]
    async fn test_create_location_points_back_at_record() {
        let controller = seeded_controller();

        let created = controller.create(pizza(0, "Findable", true)).await.unwrap();
        assert_eq!(created.location, pizza_location(created.pizza.id));
        assert_eq!(created.location, "/pizzas/3");

        // The reference resolves: a get on that id returns the same record
        let fetched = controller.get(created.pizza.id).await.unwrap();
        assert_eq!(fetched, created.pizza);
    }

    #[tokio::test]
    async fn test_n_creates_yield_n_distinct_increasing_ids() {
        let controller = controller_with(vec![], 1);

        let mut previous = 0;
        for i in 0..20 {
            // Supplied ids are all over the place and all ignored
            let created = controller
                .create(pizza(1000 - i, &format!("P{}", i), i % 2 == 0))
                .await
                .unwrap();
            assert!(
                created.pizza.id > previous,
                "Id {} should exceed every previously assigned id",
                created.pizza.id
            );
            previous = created.pizza.id;
        }
    }

    // ============================================================
    // UPDATE (FULL REPLACE)
    // ============================================================

    #[tokio::test]
    async fn test_update_zero_id_is_bad_input() {
        let controller = seeded_controller();

        let result = controller.update(0, pizza(0, "X", false)).await;
        assert!(matches!(result, Err(ApiError::BadInput)));
    }

    #[tokio::test]
    async fn test_update_mismatched_ids_is_bad_input() {
        let controller = seeded_controller();

        // Path id exists, body id differs
        let result = controller.update(1, pizza(2, "X", false)).await;
        assert!(matches!(result, Err(ApiError::BadInput)));
    }

    #[tokio::test]
    async fn test_update_mismatch_wins_over_missing_record() {
        let controller = seeded_controller();

        // Neither 40 nor 41 exists; the mismatch check still fires first
        let result = controller.update(40, pizza(41, "X", false)).await;
        assert!(matches!(result, Err(ApiError::BadInput)));
    }

    #[tokio::test]
    async fn test_update_missing_record_is_not_found() {
        let controller = seeded_controller();

        let result = controller.update(50, pizza(50, "Ghost", false)).await;
        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let controller = controller_with(vec![pizza(10, "pineapple", true)], 11);

        controller
            .update(10, pizza(10, "pineapplesausage", false))
            .await
            .unwrap();

        let fetched = controller.get(10).await.unwrap();
        assert_eq!(fetched.name.as_deref(), Some("pineapplesausage"));
        assert!(!fetched.is_gluten_free);
    }

    // ============================================================
    // PATCH (PARTIAL UPDATE)
    // ============================================================

    #[tokio::test]
    async fn test_patch_invalid_id_is_bad_input() {
        let controller = seeded_controller();

        let result = controller.patch(-1, PizzaPatch::default()).await;
        assert!(matches!(result, Err(ApiError::BadInput)));
    }

    #[tokio::test]
    async fn test_patch_missing_record_is_not_found() {
        let controller = seeded_controller();

        let result = controller
            .patch(
                99,
                PizzaPatch {
                    name: Some("Nobody".to_string()),
                    is_gluten_free: None,
                },
            )
            .await;
        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn test_patch_preserves_unspecified_fields() {
        let controller = seeded_controller();

        // Flip only the flag on "Classic Italian"
        controller
            .patch(
                1,
                PizzaPatch {
                    name: None,
                    is_gluten_free: Some(true),
                },
            )
            .await
            .unwrap();

        let fetched = controller.get(1).await.unwrap();
        assert_eq!(fetched.name.as_deref(), Some("Classic Italian"));
        assert!(fetched.is_gluten_free);
    }

    #[tokio::test]
    async fn test_patch_changes_specified_fields() {
        let controller = seeded_controller();

        controller
            .patch(
                2,
                PizzaPatch {
                    name: Some("Super Veggie".to_string()),
                    is_gluten_free: None,
                },
            )
            .await
            .unwrap();

        let fetched = controller.get(2).await.unwrap();
        assert_eq!(fetched.name.as_deref(), Some("Super Veggie"));
        assert!(fetched.is_gluten_free, "Flag must retain its pre-patch value");
    }

    // ============================================================
    // DELETE
    // ============================================================

    #[tokio::test]
    async fn test_delete_invalid_id_is_bad_input() {
        let controller = seeded_controller();

        let result = controller.delete(0).await;
        assert!(matches!(result, Err(ApiError::BadInput)));
    }

    #[tokio::test]
    async fn test_delete_missing_record_is_not_found() {
        let controller = seeded_controller();

        let result = controller.delete(123).await;
        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let controller = controller_with(vec![pizza(10, "Doomed", false)], 11);

        controller.delete(10).await.unwrap();

        let result = controller.get(10).await;
        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_leaves_other_records_intact() {
        let controller = seeded_controller();

        controller.delete(1).await.unwrap();

        let all = controller.get_all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, 2);
    }

    // ============================================================
    // BOUNDARY / FAULT INJECTION
    // ============================================================

    #[tokio::test]
    async fn test_error_demo_always_yields_unhandled() {
        let controller = seeded_controller();

        // Valid and invalid ids alike: the operation fails unconditionally
        for id in [-1, 0, 1, 300] {
            let result = controller.error_demo(id).await;
            match result {
                Err(ApiError::Unhandled(_)) => {}
                other => panic!("Expected Unhandled, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_expected_errors_are_flagged_as_expected() {
        assert!(ApiError::BadInput.is_expected());
        assert!(ApiError::NotFound.is_expected());
        assert!(!ApiError::Unhandled(anyhow::anyhow!("boom")).is_expected());
    }

    #[test]
    fn test_problem_response_leaks_nothing() {
        let problem = ProblemResponse::internal();
        let body = serde_json::to_string(&problem).unwrap();

        assert_eq!(problem.status, 500);
        assert!(!body.contains("demonstration fault"));
    }
}
