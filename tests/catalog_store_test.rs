mod common;

use sea_orm::{EntityTrait, PaginatorTrait};

use program_advisor::errors::ServiceError;
use program_advisor::types::db::{category, program, InterestLevel};

use common::{admin_actor, setup_app, student_actor};

#[tokio::test]
async fn test_add_program_round_trips_through_any_name_case() {
    let app = setup_app().await;
    let admin = admin_actor(&app).await;

    let cat = app
        .catalog_store
        .add_category(&admin, "Finance", "Money things")
        .await
        .expect("Failed to add category");

    let created = app
        .catalog_store
        .add_program(&admin, "Corporate Finance", cat.id, 5000.0, 3.0, InterestLevel::High, 3.5)
        .await
        .expect("Failed to add program");

    for variant in ["Corporate Finance", "corporate finance", "CORPORATE FINANCE"] {
        let found = app
            .catalog_store
            .find_program_by_name(variant)
            .await
            .expect("Lookup errored")
            .expect("Program not found");

        assert_eq!(found.id, created.id);
        assert_eq!(found.name, "Corporate Finance");
        assert_eq!(found.category_id, cat.id);
        assert_eq!(found.min_salary, 5000.0);
        assert_eq!(found.min_previous_gpa, 3.0);
        assert_eq!(found.interest_level, InterestLevel::High);
        assert_eq!(found.post_degree_gpa, 3.5);
    }
}

#[tokio::test]
async fn test_duplicate_category_name_is_a_conflict() {
    let app = setup_app().await;
    let admin = admin_actor(&app).await;

    app.catalog_store
        .add_category(&admin, "Finance", "")
        .await
        .expect("Failed to add category");

    // no application pre-check here: the unique index itself fires
    let result = app.catalog_store.add_category(&admin, "FINANCE", "").await;

    assert!(matches!(result, Err(ServiceError::Conflict(_))));
}

#[tokio::test]
async fn test_duplicate_program_name_is_a_conflict_across_categories() {
    let app = setup_app().await;
    let admin = admin_actor(&app).await;

    let finance = app.catalog_store.add_category(&admin, "Finance", "").await.unwrap();
    let marketing = app.catalog_store.add_category(&admin, "Marketing", "").await.unwrap();

    app.catalog_store
        .add_program(&admin, "Analytics", finance.id, 5000.0, 3.0, InterestLevel::High, 3.5)
        .await
        .expect("Failed to add program");

    let result = app
        .catalog_store
        .add_program(&admin, "analytics", marketing.id, 6000.0, 2.0, InterestLevel::Low, 3.0)
        .await;

    match result {
        Err(ServiceError::Conflict(message)) => assert_eq!(message, "Program already exists."),
        other => panic!("Expected Conflict, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_admin_actor_cannot_mutate_and_rows_are_untouched() {
    let app = setup_app().await;
    let admin = admin_actor(&app).await;
    let student = student_actor(&app).await;

    let cat = app.catalog_store.add_category(&admin, "Finance", "").await.unwrap();
    let prog = app
        .catalog_store
        .add_program(&admin, "Corporate Finance", cat.id, 5000.0, 3.0, InterestLevel::High, 3.5)
        .await
        .unwrap();

    let add_category = app.catalog_store.add_category(&student, "Marketing", "").await;
    assert!(matches!(add_category, Err(ServiceError::Authorization(_))));

    let add_program = app
        .catalog_store
        .add_program(&student, "Brand Management", cat.id, 5000.0, 3.0, InterestLevel::Low, 3.0)
        .await;
    assert!(matches!(add_program, Err(ServiceError::Authorization(_))));

    let update = app
        .catalog_store
        .update_program(&student, prog.id, "Renamed", cat.id, 5000.0, 3.0, InterestLevel::Low, 3.0)
        .await;
    assert!(matches!(update, Err(ServiceError::Authorization(_))));

    let delete_program = app.catalog_store.delete_program(&student, prog.id).await;
    assert!(matches!(delete_program, Err(ServiceError::Authorization(_))));

    let delete_category = app.catalog_store.delete_category(&student, cat.id).await;
    assert!(matches!(delete_category, Err(ServiceError::Authorization(_))));

    let categories = category::Entity::find().count(&app.db).await.unwrap();
    let programs = program::Entity::find().count(&app.db).await.unwrap();
    assert_eq!(categories, 1);
    assert_eq!(programs, 1);

    let unchanged = app.catalog_store.find_program_by_id(prog.id).await.unwrap().unwrap();
    assert_eq!(unchanged.name, "Corporate Finance");
}

#[tokio::test]
async fn test_update_program_rejects_rename_onto_another_program() {
    let app = setup_app().await;
    let admin = admin_actor(&app).await;

    let cat = app.catalog_store.add_category(&admin, "Finance", "").await.unwrap();
    app.catalog_store
        .add_program(&admin, "Corporate Finance", cat.id, 5000.0, 3.0, InterestLevel::High, 3.5)
        .await
        .unwrap();
    let second = app
        .catalog_store
        .add_program(&admin, "Investment Banking", cat.id, 5500.0, 3.0, InterestLevel::High, 3.5)
        .await
        .unwrap();

    let result = app
        .catalog_store
        .update_program(
            &admin,
            second.id,
            "corporate finance",
            cat.id,
            5500.0,
            3.0,
            InterestLevel::High,
            3.5,
        )
        .await;

    match result {
        Err(ServiceError::Conflict(message)) => assert_eq!(message, "Program already exists."),
        other => panic!("Expected Conflict, got {:?}", other),
    }
}

#[tokio::test]
async fn test_update_program_keeping_its_own_name_is_allowed() {
    let app = setup_app().await;
    let admin = admin_actor(&app).await;

    let cat = app.catalog_store.add_category(&admin, "Finance", "").await.unwrap();
    let prog = app
        .catalog_store
        .add_program(&admin, "Corporate Finance", cat.id, 5000.0, 3.0, InterestLevel::High, 3.5)
        .await
        .unwrap();

    app.catalog_store
        .update_program(
            &admin,
            prog.id,
            "Corporate Finance",
            cat.id,
            5600.0,
            2.8,
            InterestLevel::VeryHigh,
            3.8,
        )
        .await
        .expect("Update should succeed");

    let updated = app.catalog_store.find_program_by_id(prog.id).await.unwrap().unwrap();
    assert_eq!(updated.min_salary, 5600.0);
    assert_eq!(updated.min_previous_gpa, 2.8);
    assert_eq!(updated.interest_level, InterestLevel::VeryHigh);
    assert_eq!(updated.post_degree_gpa, 3.8);
}

#[tokio::test]
async fn test_update_of_a_vanished_program_is_not_found() {
    let app = setup_app().await;
    let admin = admin_actor(&app).await;

    let cat = app.catalog_store.add_category(&admin, "Finance", "").await.unwrap();

    let result = app
        .catalog_store
        .update_program(&admin, 999, "Ghost", cat.id, 5000.0, 3.0, InterestLevel::Low, 3.0)
        .await;

    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_program_of_absent_id_is_a_no_op() {
    let app = setup_app().await;
    let admin = admin_actor(&app).await;

    app.catalog_store
        .delete_program(&admin, 999)
        .await
        .expect("Delete of an absent id should not fail");
}

#[tokio::test]
async fn test_deleting_a_category_cascades_to_its_programs() {
    let app = setup_app().await;
    let admin = admin_actor(&app).await;

    let finance = app.catalog_store.add_category(&admin, "Finance", "").await.unwrap();
    let marketing = app.catalog_store.add_category(&admin, "Marketing", "").await.unwrap();

    app.catalog_store
        .add_program(&admin, "Corporate Finance", finance.id, 5000.0, 3.0, InterestLevel::High, 3.5)
        .await
        .unwrap();
    app.catalog_store
        .add_program(&admin, "Investment Banking", finance.id, 5500.0, 3.0, InterestLevel::High, 3.5)
        .await
        .unwrap();
    let survivor = app
        .catalog_store
        .add_program(&admin, "Digital Marketing", marketing.id, 5500.0, 2.5, InterestLevel::VeryHigh, 3.0)
        .await
        .unwrap();

    app.catalog_store
        .delete_category(&admin, finance.id)
        .await
        .expect("Failed to delete category");

    let remaining = app.catalog_store.list_programs().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, survivor.id);
}

#[tokio::test]
async fn test_listings_are_sorted_by_name_ascending() {
    let app = setup_app().await;
    let admin = admin_actor(&app).await;

    let ops = app.catalog_store.add_category(&admin, "Operations", "").await.unwrap();
    app.catalog_store.add_category(&admin, "Accounting", "").await.unwrap();
    app.catalog_store.add_category(&admin, "Marketing", "").await.unwrap();

    app.catalog_store
        .add_program(&admin, "Supply Chain Management", ops.id, 6200.0, 3.5, InterestLevel::High, 3.7)
        .await
        .unwrap();
    app.catalog_store
        .add_program(&admin, "Operations Management", ops.id, 5800.0, 3.5, InterestLevel::High, 3.6)
        .await
        .unwrap();

    let categories: Vec<String> = app
        .catalog_store
        .list_categories()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(categories, vec!["Accounting", "Marketing", "Operations"]);

    let programs: Vec<String> = app
        .catalog_store
        .list_programs()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(programs, vec!["Operations Management", "Supply Chain Management"]);
}
