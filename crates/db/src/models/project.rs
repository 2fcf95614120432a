//! Project rows.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A project: one gallery of generated images.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    /// Denormalized count, maintained transactionally with item writes.
    pub item_count: i32,
    /// Item whose image serves as the project thumbnail.
    pub thumbnail_item_id: Option<Uuid>,
}
