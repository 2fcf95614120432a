//! Persistence seam for generated images.
//!
//! The pipeline appends finished images through this trait without knowing
//! the backing store; the Postgres implementation lives in the db crate and
//! tests swap in an in-memory one.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A finished image ready to be appended to a project.
#[derive(Debug, Clone)]
pub struct NewGalleryItem {
    pub id: Uuid,
    pub project_id: Uuid,
    pub pose_id: String,
    pub mime_type: String,
    pub image_data: Vec<u8>,
    pub created_at: DateTime<Utc>,
}

/// Opaque storage failure; the pipeline only reports it, never branches on it.
#[derive(Debug, thiserror::Error)]
#[error("Storage error: {0}")]
pub struct StoreError(pub String);

/// Write side of the gallery, as seen by the generation pipeline.
#[async_trait]
pub trait GalleryStore: Send + Sync {
    /// Ensure the project row exists. Idempotent.
    async fn create_project(
        &self,
        project_id: Uuid,
        created_at: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    /// Append one item atomically: insert the row, bump the project's item
    /// count, and set the thumbnail if the project has none yet.
    async fn append_item(&self, item: NewGalleryItem) -> Result<(), StoreError>;
}
