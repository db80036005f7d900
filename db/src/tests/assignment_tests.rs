use crate::models::assignment::Model as AssignmentModel;
use crate::test_utils::setup_test_db;

#[tokio::test]
async fn create_and_fetch_roundtrip() {
    let db = setup_test_db().await;

    let created = AssignmentModel::create(
        &db,
        Some("Calculus worksheet".to_string()),
        Some("https://img.example.com/calc.png".to_string()),
        Some(60),
        Some("Chain rule drills".to_string()),
        Some("hard".to_string()),
        Some("2025-08-01".to_string()),
        Some("alice@example.com".to_string()),
    )
    .await
    .expect("Failed to create assignment");

    let fetched = AssignmentModel::get_by_id(&db, created.id)
        .await
        .expect("Failed to fetch assignment")
        .expect("Assignment should exist");

    assert_eq!(fetched.title.as_deref(), Some("Calculus worksheet"));
    assert_eq!(fetched.marks, Some(60));
    assert_eq!(fetched.difficulty_level.as_deref(), Some("hard"));
    assert_eq!(fetched.email.as_deref(), Some("alice@example.com"));
}

#[tokio::test]
async fn create_accepts_partial_payloads() {
    let db = setup_test_db().await;

    let created = AssignmentModel::create(
        &db,
        Some("Untitled draft".to_string()),
        None,
        None,
        None,
        None,
        None,
        None,
    )
    .await
    .expect("Failed to create assignment");

    assert_eq!(created.title.as_deref(), Some("Untitled draft"));
    assert_eq!(created.marks, None);
    assert_eq!(created.email, None);
}

#[tokio::test]
async fn get_all_returns_every_row() {
    let db = setup_test_db().await;

    for title in ["One", "Two", "Three"] {
        AssignmentModel::create(
            &db,
            Some(title.to_string()),
            None,
            None,
            None,
            None,
            None,
            Some("alice@example.com".to_string()),
        )
        .await
        .expect("Failed to create assignment");
    }

    let all = AssignmentModel::get_all(&db)
        .await
        .expect("Failed to list assignments");
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn get_by_id_missing_returns_none() {
    let db = setup_test_db().await;

    let fetched = AssignmentModel::get_by_id(&db, 999)
        .await
        .expect("Lookup itself should succeed");
    assert!(fetched.is_none());
}

#[tokio::test]
async fn update_replaces_every_column() {
    let db = setup_test_db().await;

    let created = AssignmentModel::create(
        &db,
        Some("Old title".to_string()),
        Some("https://img.example.com/old.png".to_string()),
        Some(40),
        Some("Old description".to_string()),
        Some("easy".to_string()),
        Some("2025-07-01".to_string()),
        Some("alice@example.com".to_string()),
    )
    .await
    .expect("Failed to create assignment");

    let updated = AssignmentModel::update(
        &db,
        created.id,
        Some("New title".to_string()),
        None,
        Some(55),
        None,
        Some("medium".to_string()),
        Some("2025-07-15".to_string()),
        Some("alice@example.com".to_string()),
    )
    .await
    .expect("Failed to update assignment");

    assert_eq!(updated.title.as_deref(), Some("New title"));
    assert_eq!(updated.marks, Some(55));
    // Omitted fields are cleared, not preserved.
    assert_eq!(updated.thumbnail_url, None);
    assert_eq!(updated.description, None);
}

#[tokio::test]
async fn update_missing_row_errors() {
    let db = setup_test_db().await;

    let result = AssignmentModel::update(
        &db,
        42,
        Some("Ghost".to_string()),
        None,
        None,
        None,
        None,
        None,
        None,
    )
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn delete_reports_rows_affected() {
    let db = setup_test_db().await;

    let created = AssignmentModel::create(
        &db,
        Some("To delete".to_string()),
        None,
        None,
        None,
        None,
        None,
        Some("alice@example.com".to_string()),
    )
    .await
    .expect("Failed to create assignment");

    let deleted = AssignmentModel::delete(&db, created.id)
        .await
        .expect("Failed to delete assignment");
    assert_eq!(deleted, 1);

    let deleted_again = AssignmentModel::delete(&db, created.id)
        .await
        .expect("Second delete should still succeed");
    assert_eq!(deleted_again, 0);
}
