//! Gallery item rows.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A generated image, bytes included.
#[derive(Debug, Clone, FromRow)]
pub struct GalleryItem {
    pub id: Uuid,
    pub project_id: Uuid,
    pub pose_id: String,
    pub mime_type: String,
    pub image_data: Vec<u8>,
    pub created_at: DateTime<Utc>,
}

/// Listing view of a gallery item. Excludes the image bytes so project
/// listings stay cheap; clients fetch bytes per item.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryItemSummary {
    pub id: Uuid,
    pub project_id: Uuid,
    pub pose_id: String,
    pub mime_type: String,
    pub created_at: DateTime<Utc>,
}
