//! Integration tests for the denormalized project bookkeeping.
//!
//! Exercises the repository layer against a real database to verify that:
//! - Appending an item bumps `item_count` and sets the thumbnail if absent
//! - Deleting one of several items decrements `item_count` by exactly 1
//! - Deleting the thumbnail repoints it at the newest surviving item
//! - Deleting the last item removes the project row with it
//! - Listings come back newest first, without image bytes

use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use profashion_db::models::gallery_item::GalleryItem;
use profashion_db::repositories::gallery_item_repo::{DeleteOutcome, GalleryItemRepo};
use profashion_db::repositories::project_repo::ProjectRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_item(project_id: Uuid, pose_id: &str, seconds_offset: i64) -> GalleryItem {
    GalleryItem {
        id: Uuid::new_v4(),
        project_id,
        pose_id: pose_id.to_string(),
        mime_type: "image/jpeg".to_string(),
        image_data: vec![0xFF, 0xD8, 0xFF],
        created_at: Utc::now() + Duration::seconds(seconds_offset),
    }
}

async fn seed_project(pool: &PgPool) -> Uuid {
    let project_id = Uuid::new_v4();
    ProjectRepo::create(pool, project_id, Utc::now()).await.unwrap();
    project_id
}

// ---------------------------------------------------------------------------
// Test: append bumps item_count and sets the thumbnail once
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_append_bumps_count_and_keeps_first_thumbnail(pool: PgPool) {
    let project_id = seed_project(&pool).await;

    let first = new_item(project_id, "A1", 0);
    let second = new_item(project_id, "A3", 1);
    GalleryItemRepo::append(&pool, &first).await.unwrap();
    GalleryItemRepo::append(&pool, &second).await.unwrap();

    let project = ProjectRepo::find_by_id(&pool, project_id)
        .await
        .unwrap()
        .expect("project should exist");
    assert_eq!(project.item_count, 2);
    assert_eq!(
        project.thumbnail_item_id,
        Some(first.id),
        "thumbnail should stay on the first appended item"
    );
}

// ---------------------------------------------------------------------------
// Test: project creation is idempotent across batches
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_repeated_project_create_preserves_count(pool: PgPool) {
    let project_id = seed_project(&pool).await;
    GalleryItemRepo::append(&pool, &new_item(project_id, "B2", 0))
        .await
        .unwrap();

    // A second batch targeting the same project re-issues the create.
    ProjectRepo::create(&pool, project_id, Utc::now()).await.unwrap();

    let project = ProjectRepo::find_by_id(&pool, project_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(project.item_count, 1, "re-create must not reset the count");
}

// ---------------------------------------------------------------------------
// Test: deleting one of several items decrements the count by one
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_one_of_several_decrements_count(pool: PgPool) {
    let project_id = seed_project(&pool).await;
    let first = new_item(project_id, "A1", 0);
    let second = new_item(project_id, "A3", 1);
    let third = new_item(project_id, "B2", 2);
    for item in [&first, &second, &third] {
        GalleryItemRepo::append(&pool, item).await.unwrap();
    }

    let outcome = GalleryItemRepo::delete(&pool, project_id, second.id)
        .await
        .unwrap();
    assert_eq!(outcome, DeleteOutcome::Deleted);

    let project = ProjectRepo::find_by_id(&pool, project_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(project.item_count, 2);
    assert_eq!(
        project.thumbnail_item_id,
        Some(first.id),
        "deleting a non-thumbnail item must leave the thumbnail alone"
    );
}

// ---------------------------------------------------------------------------
// Test: deleting the thumbnail repoints it at the newest survivor
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_deleting_thumbnail_repoints_to_newest_survivor(pool: PgPool) {
    let project_id = seed_project(&pool).await;
    let first = new_item(project_id, "A1", 0);
    let second = new_item(project_id, "A3", 1);
    let third = new_item(project_id, "B2", 2);
    for item in [&first, &second, &third] {
        GalleryItemRepo::append(&pool, item).await.unwrap();
    }

    // `first` is the thumbnail; the FK nulls it on delete and the repo
    // must pick the newest remaining item, not leave it dangling.
    let outcome = GalleryItemRepo::delete(&pool, project_id, first.id)
        .await
        .unwrap();
    assert_eq!(outcome, DeleteOutcome::Deleted);

    let project = ProjectRepo::find_by_id(&pool, project_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(project.item_count, 2);
    assert_eq!(project.thumbnail_item_id, Some(third.id));
}

// ---------------------------------------------------------------------------
// Test: deleting the last item removes the project
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_deleting_last_item_removes_project(pool: PgPool) {
    let project_id = seed_project(&pool).await;
    let only = new_item(project_id, "A1", 0);
    GalleryItemRepo::append(&pool, &only).await.unwrap();

    let outcome = GalleryItemRepo::delete(&pool, project_id, only.id)
        .await
        .unwrap();
    assert_eq!(outcome, DeleteOutcome::ProjectRemoved);

    assert!(
        ProjectRepo::find_by_id(&pool, project_id)
            .await
            .unwrap()
            .is_none(),
        "project row should be gone with its last item"
    );
    assert!(
        GalleryItemRepo::find_by_id(&pool, only.id)
            .await
            .unwrap()
            .is_none()
    );
}

// ---------------------------------------------------------------------------
// Test: deleting an unknown item changes nothing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_unknown_item_is_not_found(pool: PgPool) {
    let project_id = seed_project(&pool).await;
    GalleryItemRepo::append(&pool, &new_item(project_id, "A1", 0))
        .await
        .unwrap();

    let outcome = GalleryItemRepo::delete(&pool, project_id, Uuid::new_v4())
        .await
        .unwrap();
    assert_eq!(outcome, DeleteOutcome::NotFound);

    let project = ProjectRepo::find_by_id(&pool, project_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(project.item_count, 1);
}

// ---------------------------------------------------------------------------
// Test: listings are newest first and byte-free
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_listings_are_newest_first(pool: PgPool) {
    let project_id = seed_project(&pool).await;
    let older = new_item(project_id, "A1", 0);
    let newer = new_item(project_id, "A3", 5);
    GalleryItemRepo::append(&pool, &older).await.unwrap();
    GalleryItemRepo::append(&pool, &newer).await.unwrap();

    let scoped = GalleryItemRepo::list_for_project(&pool, project_id)
        .await
        .unwrap();
    assert_eq!(
        scoped.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![newer.id, older.id]
    );

    let all = GalleryItemRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.first().map(|s| s.id), Some(newer.id));
}
