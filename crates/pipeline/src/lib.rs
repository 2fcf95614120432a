//! Batch generation pipeline.
//!
//! Turns a frozen [`GenerationConfig`](profashion_core::config::GenerationConfig)
//! into stored gallery images: reference assets are resolved and normalized,
//! garment faces are masked, and each selected pose runs through the
//! generate-verify-retry loop concurrently. Progress is published on the
//! event bus and tracked in an in-memory batch registry.

pub mod assets;
pub mod batch;
pub mod error;
pub mod orchestrator;
pub mod redact;

pub use assets::AssetResolver;
pub use batch::{BatchCoordinator, BatchRef, BatchState, PoseResult};
pub use error::PipelineError;
pub use orchestrator::{GenerationOptions, Orchestrator, PreparedInputs};
