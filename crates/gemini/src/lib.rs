//! Client for the Gemini generateContent REST API.
//!
//! Two models are in play: the image model renders the fashion photographs,
//! the analysis model handles the cheap JSON tasks (face detection and the
//! post-generation quality checks). The pipeline depends on the
//! [`VisionCapability`] trait rather than the concrete client so tests can
//! substitute a mock.

pub mod analysis;
pub mod capability;
pub mod client;
pub mod types;

pub use analysis::{detect_face, verify_identity, verify_lighting, FaceDetection, Verdict};
pub use capability::VisionCapability;
pub use client::{GeminiClient, GeminiConfig, GeminiError};
pub use types::{first_image, InlineData, Part};
