//! Postgres implementation of the pipeline's gallery store seam.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use profashion_core::store::{GalleryStore, NewGalleryItem, StoreError};

use crate::models::gallery_item::GalleryItem;
use crate::repositories::gallery_item_repo::GalleryItemRepo;
use crate::repositories::project_repo::ProjectRepo;

/// Gallery store backed by the Postgres pool.
#[derive(Clone)]
pub struct PgGalleryStore {
    pool: PgPool,
}

impl PgGalleryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GalleryStore for PgGalleryStore {
    async fn create_project(
        &self,
        project_id: Uuid,
        created_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        ProjectRepo::create(&self.pool, project_id, created_at)
            .await
            .map_err(|err| StoreError(err.to_string()))
    }

    async fn append_item(&self, item: NewGalleryItem) -> Result<(), StoreError> {
        let row = GalleryItem {
            id: item.id,
            project_id: item.project_id,
            pose_id: item.pose_id,
            mime_type: item.mime_type,
            image_data: item.image_data,
            created_at: item.created_at,
        };
        GalleryItemRepo::append(&self.pool, &row)
            .await
            .map_err(|err| StoreError(err.to_string()))
    }
}
