//! Route definitions for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use uuid::Uuid;

use profashion_core::CoreError;
use profashion_db::models::gallery_item::GalleryItemSummary;
use profashion_db::models::project::Project;
use profashion_db::repositories::gallery_item_repo::GalleryItemRepo;
use profashion_db::repositories::project_repo::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/projects -- all projects, newest first.
async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    Ok(Json(ProjectRepo::list(&state.pool).await?))
}

/// A project with its item listing (no image bytes).
#[derive(Serialize)]
struct ProjectDetail {
    #[serde(flatten)]
    project: Project,
    items: Vec<GalleryItemSummary>,
}

/// GET /api/v1/projects/{id} -- project with item summaries, newest first.
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ProjectDetail>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Project", id }))?;
    let items = GalleryItemRepo::list_for_project(&state.pool, id).await?;
    Ok(Json(ProjectDetail { project, items }))
}

/// DELETE /api/v1/projects/{id} -- remove a project and all of its images.
async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Project", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /            -> list
/// GET    /{id}        -> get_by_id
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/{id}", get(get_by_id).delete(delete))
}
