//! Gallery item routes, nested under `/projects/{project_id}/items`.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete as delete_route, get};
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;

use profashion_core::CoreError;
use profashion_db::models::gallery_item::GalleryItemSummary;
use profashion_db::repositories::gallery_item_repo::{DeleteOutcome, GalleryItemRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LibraryQuery {
    project_id: Option<Uuid>,
}

/// GET /api/v1/gallery[?project_id=] -- item summaries, newest first, across
/// all projects or scoped to one. Backs the flat library view; bytes come
/// from the per-item image route.
pub async fn library(
    State(state): State<AppState>,
    Query(query): Query<LibraryQuery>,
) -> AppResult<Json<Vec<GalleryItemSummary>>> {
    let items = match query.project_id {
        Some(project_id) => GalleryItemRepo::list_for_project(&state.pool, project_id).await?,
        None => GalleryItemRepo::list_all(&state.pool).await?,
    };
    Ok(Json(items))
}

/// GET /api/v1/projects/{project_id}/items/{id}/image -- raw image bytes
/// with the stored content type.
async fn image(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(Uuid, Uuid)>,
) -> AppResult<Response> {
    let item = GalleryItemRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|item| item.project_id == project_id)
        .ok_or(AppError::Core(CoreError::NotFound { entity: "GalleryItem", id }))?;

    Ok((
        [(header::CONTENT_TYPE, item.mime_type)],
        item.image_data,
    )
        .into_response())
}

/// DELETE /api/v1/projects/{project_id}/items/{id}
///
/// Deleting the last item of a project deletes the project too; the
/// response distinguishes the two so clients can drop the project row.
async fn delete(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(Uuid, Uuid)>,
) -> AppResult<Response> {
    match GalleryItemRepo::delete(&state.pool, project_id, id).await? {
        DeleteOutcome::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "GalleryItem",
            id,
        })),
        DeleteOutcome::Deleted => Ok(StatusCode::NO_CONTENT.into_response()),
        DeleteOutcome::ProjectRemoved => Ok((
            StatusCode::OK,
            Json(serde_json::json!({ "project_removed": true })),
        )
            .into_response()),
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", delete_route(delete))
        .route("/{id}/image", get(image))
}
