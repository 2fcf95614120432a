//! Generate-verify-retry loop for a single pose.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use profashion_core::config::GenerationConfig;
use profashion_core::consistency::ConsistencyProfile;
use profashion_core::poses::find_pose;
use profashion_core::prompt::{build_generation_prompt, PromptInputs};
use profashion_gemini::{
    first_image, verify_identity, verify_lighting, Part, VisionCapability,
};
use profashion_imaging::EncodedImage;

use crate::assets::AssetResolver;
use crate::error::PipelineError;
use crate::redact::redact_face_if_present;

/// Knobs for the per-pose generation loop.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    /// Upper bound on generation attempts per pose.
    pub max_attempts: u32,
    /// When set, the final attempt's image is also verified and a failing
    /// verdict rejects the pose instead of shipping the image anyway.
    pub strict_final_verification: bool,
    /// Deadline for one generation request. `None` disables the timeout.
    pub request_timeout: Option<Duration>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            strict_final_verification: false,
            request_timeout: None,
        }
    }
}

/// Resolved and pre-processed inputs, shared by every pose of a batch.
///
/// Prepared once per batch so face masking and asset fetching are not
/// repeated per pose.
#[derive(Debug, Clone)]
pub struct PreparedInputs {
    pub model: EncodedImage,
    pub background: Option<EncodedImage>,
    /// Garments in upload order, faces already masked.
    pub garments: Vec<EncodedImage>,
}

/// Runs the generation loop for individual poses.
pub struct Orchestrator {
    capability: Arc<dyn VisionCapability>,
    resolver: AssetResolver,
    options: GenerationOptions,
}

impl Orchestrator {
    pub fn new(
        capability: Arc<dyn VisionCapability>,
        resolver: AssetResolver,
        options: GenerationOptions,
    ) -> Self {
        Self {
            capability,
            resolver,
            options,
        }
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Resolve and pre-process all visual inputs of a batch.
    pub async fn prepare_inputs(
        &self,
        config: &GenerationConfig,
    ) -> Result<PreparedInputs, PipelineError> {
        let model = self.resolver.resolve_model(&config.model).await?;

        let background = match &config.background {
            Some(source) => Some(self.resolver.resolve_background(source).await?),
            None => None,
        };

        let mut garments = Vec::with_capacity(config.garments.len());
        for upload in &config.garments {
            let normalized = self.resolver.resolve_garment(upload)?;
            garments.push(redact_face_if_present(self.capability.as_ref(), normalized).await);
        }

        Ok(PreparedInputs {
            model,
            background,
            garments,
        })
    }

    /// Generate one pose, retrying once on a failed verification.
    ///
    /// Verification runs after every non-final attempt; both checks fail
    /// open, so only an explicit failing verdict triggers the retry with
    /// corrective feedback appended to the prompt. The final attempt ships
    /// unverified unless strict mode is on.
    pub async fn generate_pose(
        &self,
        config: &GenerationConfig,
        inputs: &PreparedInputs,
        profile: &ConsistencyProfile,
        pose_id: &str,
    ) -> Result<EncodedImage, PipelineError> {
        let pose = find_pose(pose_id).ok_or_else(|| PipelineError::UnknownPose(pose_id.to_string()))?;

        let mut corrective = String::new();
        let mut attempt = 0;

        loop {
            attempt += 1;
            debug!(pose_id, attempt, "starting generation attempt");

            let prompt = build_generation_prompt(&PromptInputs {
                pose,
                shot_type: config.shot_type,
                consistency: profile,
                gender: config.gender.as_deref(),
                ethnicity: config.ethnicity.as_deref(),
                corrective: &corrective,
            });

            let mut parts = vec![Part::text(prompt), Part::image(&inputs.model)];
            parts.extend(inputs.garments.iter().map(Part::image));
            if let Some(background) = &inputs.background {
                parts.push(Part::image(background));
            }

            let response_parts = self.request_image(parts).await?;
            let image = first_image(&response_parts).ok_or(PipelineError::NoImageProduced)?;

            let is_final = attempt >= self.options.max_attempts;
            if is_final && !self.options.strict_final_verification {
                return Ok(image);
            }

            let (lighting, identity) = tokio::join!(
                verify_lighting(self.capability.as_ref(), &image),
                verify_identity(self.capability.as_ref(), &inputs.model, &image),
            );

            if lighting.pass && identity.pass {
                info!(pose_id, attempt, "generation verified");
                return Ok(image);
            }

            let mut issues = String::new();
            if !identity.pass {
                issues.push_str("Wrong Identity. ");
            }
            if !lighting.pass {
                issues.push_str("Bad Lighting. ");
            }

            if is_final {
                return Err(PipelineError::VerificationRejected(issues.trim_end().to_string()));
            }

            warn!(pose_id, attempt, issues = %issues.trim_end(), "verification failed, retrying");
            corrective = format!("\nFIX ISSUES: {issues}");
        }
    }

    async fn request_image(&self, parts: Vec<Part>) -> Result<Vec<Part>, PipelineError> {
        match self.options.request_timeout {
            Some(deadline) => {
                tokio::time::timeout(deadline, self.capability.generate_image(parts))
                    .await
                    .map_err(|_| PipelineError::Timeout)?
                    .map_err(PipelineError::from)
            }
            None => self
                .capability
                .generate_image(parts)
                .await
                .map_err(PipelineError::from),
        }
    }
}
