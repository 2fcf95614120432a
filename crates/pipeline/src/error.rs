//! Errors from the generation pipeline.

use profashion_core::store::StoreError;
use profashion_core::CoreError;
use profashion_gemini::GeminiError;
use profashion_imaging::ImagingError;

/// Errors from asset resolution, generation and storage.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A pose id that passed validation no longer resolves. Should not
    /// happen with a frozen config.
    #[error("Pose {0} not found")]
    UnknownPose(String),

    /// A built-in catalog id did not resolve.
    #[error("Unknown built-in {kind}: {id}")]
    UnknownAsset { kind: &'static str, id: String },

    /// Fetching a built-in reference asset failed.
    #[error("Failed to fetch reference asset: {0}")]
    AssetFetch(#[from] reqwest::Error),

    /// The model responded without any inline image.
    #[error("No image generated.")]
    NoImageProduced,

    /// Strict mode only: the final attempt's image failed verification.
    #[error("Generated image rejected by verification: {0}")]
    VerificationRejected(String),

    /// A single generation request exceeded the configured deadline.
    #[error("Generation request timed out")]
    Timeout,

    #[error(transparent)]
    Capability(#[from] GeminiError),

    #[error(transparent)]
    Imaging(#[from] ImagingError),

    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
