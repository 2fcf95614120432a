//! Batch submission and progress.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use uuid::Uuid;

use profashion_core::config::{ConfigDraft, ImageSource, UploadedImage};
use profashion_core::shot::ShotType;
use profashion_core::CoreError;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/batches
///
/// Accepts a multipart form describing one batch:
///
/// - `garments`: repeated image file field (1-5)
/// - `model` file or `model_id` text (built-in catalog id)
/// - `background` file or `background_id` text
/// - `pose_ids`: comma-separated pose ids (1-6)
/// - `shot_type`: `full_body` | `upper_body` | `lower_body`
/// - `gender`, `ethnicity`: optional text
/// - `project_id`: optional UUID to append to an existing project
///
/// Incomplete configurations get a 400 listing every missing input, in the
/// order the selection workflow presents them. Accepted batches return 202
/// immediately; progress flows through the events endpoint.
async fn submit(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Response> {
    let mut draft = ConfigDraft::default();
    let mut project_id: Option<Uuid> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "garments" => {
                let file_name = field.file_name().unwrap_or("garment.jpg").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                draft.garments.push(UploadedImage {
                    file_name,
                    bytes: bytes.to_vec(),
                });
            }
            "model" => {
                let file_name = field.file_name().unwrap_or("model.jpg").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                draft.model = Some(ImageSource::Upload(UploadedImage {
                    file_name,
                    bytes: bytes.to_vec(),
                }));
            }
            "model_id" => {
                let id = text(field).await?;
                draft.model = Some(ImageSource::BuiltIn { id });
            }
            "background" => {
                let file_name = field.file_name().unwrap_or("background.jpg").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                draft.background = Some(ImageSource::Upload(UploadedImage {
                    file_name,
                    bytes: bytes.to_vec(),
                }));
            }
            "background_id" => {
                let id = text(field).await?;
                draft.background = Some(ImageSource::BuiltIn { id });
            }
            "pose_ids" => {
                draft.pose_ids.extend(parse_pose_ids(&text(field).await?));
            }
            "shot_type" => {
                let raw = text(field).await?;
                draft.shot_type = Some(ShotType::parse(&raw).ok_or_else(|| {
                    AppError::BadRequest(format!("Unknown shot type: {raw}"))
                })?);
            }
            "gender" => draft.gender = Some(text(field).await?),
            "ethnicity" => draft.ethnicity = Some(text(field).await?),
            "project_id" => {
                let raw = text(field).await?;
                let id = raw
                    .parse()
                    .map_err(|_| AppError::BadRequest(format!("Invalid project id: {raw}")))?;
                project_id = Some(id);
            }
            other => {
                return Err(AppError::BadRequest(format!("Unexpected field: {other}")));
            }
        }
    }

    let missing = draft.missing_inputs();
    if !missing.is_empty() {
        let body = json!({
            "error": "Configuration incomplete",
            "code": "MISSING_INPUTS",
            "missing": missing,
        });
        return Ok((StatusCode::BAD_REQUEST, Json(body)).into_response());
    }

    let config = draft.freeze()?;
    let batch = state.coordinator.run_batch(config, project_id).await?;
    Ok((StatusCode::ACCEPTED, Json(batch)).into_response())
}

/// GET /api/v1/batches/{id} -- progress snapshot for a running or
/// recently finished batch. The registry is in-memory, so snapshots do
/// not survive a restart.
async fn progress(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Response> {
    let snapshot = state
        .coordinator
        .snapshot(id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Batch", id }))?;
    Ok(Json(snapshot).into_response())
}

async fn text(field: axum::extract::multipart::Field<'_>) -> AppResult<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

/// Split a comma-separated pose id list, dropping empty segments.
fn parse_pose_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(submit))
        .route("/{id}", get(progress))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pose_ids_split_on_commas_and_trim() {
        assert_eq!(parse_pose_ids("A1, A3 ,B2"), vec!["A1", "A3", "B2"]);
    }

    #[test]
    fn empty_segments_are_dropped() {
        assert_eq!(parse_pose_ids("A1,,B2,"), vec!["A1", "B2"]);
        assert!(parse_pose_ids("").is_empty());
    }
}
