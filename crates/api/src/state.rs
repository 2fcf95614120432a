use std::sync::Arc;

use sqlx::PgPool;

use profashion_events::EventBus;
use profashion_pipeline::BatchCoordinator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: PgPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Batch coordinator running the generation pipeline.
    pub coordinator: Arc<BatchCoordinator>,
    /// Event bus carrying batch progress events.
    pub event_bus: Arc<EventBus>,
}
