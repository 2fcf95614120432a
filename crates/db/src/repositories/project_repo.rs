//! Repository for the `projects` table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::project::Project;

/// Column list for projects queries.
const COLUMNS: &str = "id, created_at, item_count, thumbnail_item_id";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a project row if it does not exist yet. Idempotent: the
    /// coordinator calls this once per batch, and several batches may
    /// target the same project.
    pub async fn create(
        pool: &PgPool,
        id: Uuid,
        created_at: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO projects (id, created_at, item_count)
             VALUES ($1, $2, 0)
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(id)
        .bind(created_at)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Find a project by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Delete a project and, via cascade, all of its items.
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
