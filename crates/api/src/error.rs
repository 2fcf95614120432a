use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use profashion_core::CoreError;
use profashion_imaging::ImagingError;
use profashion_pipeline::PipelineError;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain and pipeline errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `profashion_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An error from the generation pipeline.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Pipeline errors ---
            AppError::Pipeline(pipeline) => classify_pipeline_error(pipeline),

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a pipeline error into an HTTP status, error code, and message.
///
/// Caller-supplied problems (bad ids, unusable uploads) are 4xx; trouble
/// reaching upstream services is 502; anything else is 500.
fn classify_pipeline_error(err: &PipelineError) -> (StatusCode, &'static str, String) {
    match err {
        PipelineError::Invalid(core) => {
            (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", core.to_string())
        }
        PipelineError::UnknownAsset { .. } | PipelineError::UnknownPose(_) => {
            (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
        }
        PipelineError::Imaging(ImagingError::Unprocessable(msg)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "UNPROCESSABLE_IMAGE",
            msg.clone(),
        ),
        PipelineError::AssetFetch(_) | PipelineError::Capability(_) => {
            tracing::error!(error = %err, "Upstream failure");
            (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                "An upstream service failed".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Pipeline error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
