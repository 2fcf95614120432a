//! Repository for the `gallery_items` table.
//!
//! Writes keep the project row in sync inside the same transaction: the
//! item count is denormalized onto `projects` and the thumbnail always
//! points at a live item.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::gallery_item::{GalleryItem, GalleryItemSummary};

/// Column list for gallery_items queries, bytes included.
const COLUMNS: &str = "id, project_id, pose_id, mime_type, image_data, created_at";

/// Column list for listings, bytes excluded.
const SUMMARY_COLUMNS: &str = "id, project_id, pose_id, mime_type, created_at";

/// Outcome of deleting a gallery item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// No item with that id under that project.
    NotFound,
    /// Item removed; the project still has other items.
    Deleted,
    /// Item was the last one, so the project was removed with it.
    ProjectRemoved,
}

/// Provides operations for gallery items.
pub struct GalleryItemRepo;

impl GalleryItemRepo {
    /// Append an item to its project atomically: insert the row, bump the
    /// project's item count, and set the thumbnail if the project has none.
    pub async fn append(pool: &PgPool, item: &GalleryItem) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "INSERT INTO gallery_items
                (id, project_id, pose_id, mime_type, image_data, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(item.id)
        .bind(item.project_id)
        .bind(&item.pose_id)
        .bind(&item.mime_type)
        .bind(&item.image_data)
        .bind(item.created_at)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE projects SET
                item_count = item_count + 1,
                thumbnail_item_id = COALESCE(thumbnail_item_id, $1)
             WHERE id = $2",
        )
        .bind(item.id)
        .bind(item.project_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await
    }

    /// Find an item by its primary key, bytes included.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<GalleryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery_items WHERE id = $1");
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's items, newest first, without image bytes.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: Uuid,
    ) -> Result<Vec<GalleryItemSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM gallery_items
             WHERE project_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, GalleryItemSummary>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List every item across all projects, newest first, without image
    /// bytes. Backs the flat library view.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<GalleryItemSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM gallery_items ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, GalleryItemSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// Delete an item, keeping the project row consistent.
    ///
    /// Removing the last item removes the project too. Otherwise the item
    /// count is decremented and, when the deleted item was the thumbnail,
    /// the thumbnail is repointed at the newest surviving item.
    pub async fn delete(
        pool: &PgPool,
        project_id: Uuid,
        item_id: Uuid,
    ) -> Result<DeleteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let deleted = sqlx::query(
            "DELETE FROM gallery_items WHERE id = $1 AND project_id = $2",
        )
        .bind(item_id)
        .bind(project_id)
        .execute(&mut *tx)
        .await?;

        if deleted.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(DeleteOutcome::NotFound);
        }

        let remaining: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM gallery_items WHERE project_id = $1",
        )
        .bind(project_id)
        .fetch_one(&mut *tx)
        .await?;

        if remaining == 0 {
            sqlx::query("DELETE FROM projects WHERE id = $1")
                .bind(project_id)
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;
            return Ok(DeleteOutcome::ProjectRemoved);
        }

        // The FK already nulled the thumbnail if it pointed at the deleted
        // item; repoint it at the newest surviving item in that case.
        sqlx::query(
            "UPDATE projects SET
                item_count = $1,
                thumbnail_item_id = COALESCE(
                    thumbnail_item_id,
                    (SELECT id FROM gallery_items
                     WHERE project_id = $2
                     ORDER BY created_at DESC
                     LIMIT 1)
                )
             WHERE id = $2",
        )
        .bind(remaining as i32)
        .bind(project_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(DeleteOutcome::Deleted)
    }
}
