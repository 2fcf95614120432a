//! Read-only catalog endpoints backing the selection UI.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use profashion_core::catalog::{BuiltInBackground, BuiltInModel, BUILT_IN_BACKGROUNDS, BUILT_IN_MODELS};
use profashion_core::poses::{Pose, POSES};
use profashion_core::shot::{ShotType, ALL_SHOT_TYPES};

use crate::state::AppState;

/// GET /api/v1/poses -- the full pose catalog.
async fn list_poses() -> Json<&'static [Pose]> {
    Json(POSES)
}

/// GET /api/v1/models -- built-in model references.
async fn list_models() -> Json<&'static [BuiltInModel]> {
    Json(BUILT_IN_MODELS)
}

/// GET /api/v1/backgrounds -- built-in scene backgrounds.
async fn list_backgrounds() -> Json<&'static [BuiltInBackground]> {
    Json(BUILT_IN_BACKGROUNDS)
}

/// Shot type catalog entry.
#[derive(Serialize)]
struct ShotTypeEntry {
    id: ShotType,
    label: &'static str,
    description: &'static str,
}

/// GET /api/v1/shot-types -- available shot compositions.
async fn list_shot_types() -> Json<Vec<ShotTypeEntry>> {
    Json(
        ALL_SHOT_TYPES
            .iter()
            .map(|&shot| ShotTypeEntry {
                id: shot,
                label: shot.label(),
                description: shot.description(),
            })
            .collect(),
    )
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/poses", get(list_poses))
        .route("/models", get(list_models))
        .route("/backgrounds", get(list_backgrounds))
        .route("/shot-types", get(list_shot_types))
}
