//! Batch configuration: draft accumulation, validation, and the frozen
//! snapshot handed to the pipeline.
//!
//! The snapshot is taken at submit time; later edits to the draft (e.g.
//! clearing the garment list for the next batch) must not affect in-flight
//! requests, so [`GenerationConfig`] owns its data outright.

use crate::error::CoreError;
use crate::poses::{self, MAX_POSES_PER_BATCH};
use crate::shot::ShotType;

/// Maximum number of garment images per batch.
pub const MAX_GARMENTS_PER_BATCH: usize = 5;

/// An image uploaded by the user, kept as raw bytes until normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    /// Original file name; used for mime-type inference on raw fallback.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// A visual input: a built-in catalog entry or an uploaded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    BuiltIn { id: String },
    Upload(UploadedImage),
}

/// Mutable configuration accumulated by the submission workflow.
///
/// Everything is optional here; [`missing_inputs`](Self::missing_inputs)
/// backs the generate gate and [`freeze`](Self::freeze) produces the
/// immutable snapshot.
#[derive(Debug, Clone, Default)]
pub struct ConfigDraft {
    pub model: Option<ImageSource>,
    pub background: Option<ImageSource>,
    pub garments: Vec<UploadedImage>,
    pub pose_ids: Vec<String>,
    pub shot_type: Option<ShotType>,
    pub gender: Option<String>,
    pub ethnicity: Option<String>,
}

impl ConfigDraft {
    /// User-facing report of what still blocks generation.
    ///
    /// Messages match the original submission gate wording.
    pub fn missing_inputs(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.garments.is_empty() {
            missing.push("Upload garment photos");
        }
        if self.model.is_none() {
            missing.push("Select or upload a model");
        }
        if self.background.is_none() {
            missing.push("Select a scene background");
        }
        if self.pose_ids.is_empty() {
            missing.push("Select shooting poses");
        }
        if self.shot_type.is_none() {
            missing.push("Select shot composition");
        }
        missing
    }

    /// Freeze the draft into an immutable [`GenerationConfig`] snapshot.
    ///
    /// Requires a model, at least one garment, 1–6 known pose ids, and a
    /// shot type. The background stays optional at this level: the
    /// submission surface enforces it via [`missing_inputs`](Self::missing_inputs),
    /// but the orchestrator itself treats an absent background as valid.
    pub fn freeze(self) -> Result<GenerationConfig, CoreError> {
        let model = self.model.ok_or_else(|| {
            CoreError::Validation("Select or upload a model".to_string())
        })?;
        let shot_type = self.shot_type.ok_or_else(|| {
            CoreError::Validation("Select shot composition".to_string())
        })?;

        if self.garments.is_empty() {
            return Err(CoreError::Validation(
                "Upload garment photos".to_string(),
            ));
        }
        if self.garments.len() > MAX_GARMENTS_PER_BATCH {
            return Err(CoreError::Validation(format!(
                "At most {MAX_GARMENTS_PER_BATCH} garment photos per batch"
            )));
        }
        if self.pose_ids.is_empty() {
            return Err(CoreError::Validation(
                "Select shooting poses".to_string(),
            ));
        }
        if self.pose_ids.len() > MAX_POSES_PER_BATCH {
            return Err(CoreError::Validation(format!(
                "At most {MAX_POSES_PER_BATCH} poses per batch"
            )));
        }
        for id in &self.pose_ids {
            if poses::find_pose(id).is_none() {
                return Err(CoreError::Validation(format!("Unknown pose: {id}")));
            }
        }

        Ok(GenerationConfig {
            model,
            background: self.background,
            garments: self.garments,
            pose_ids: self.pose_ids,
            shot_type,
            gender: self.gender,
            ethnicity: self.ethnicity,
        })
    }
}

/// Immutable batch configuration snapshot.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub model: ImageSource,
    /// Absent is valid: the model then invents a neutral studio backdrop.
    pub background: Option<ImageSource>,
    /// Ordered, 1–5 entries, duplicates allowed.
    pub garments: Vec<UploadedImage>,
    /// 1–6 known pose ids.
    pub pose_ids: Vec<String>,
    pub shot_type: ShotType,
    pub gender: Option<String>,
    pub ethnicity: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn garment() -> UploadedImage {
        UploadedImage {
            file_name: "dress.jpg".to_string(),
            bytes: vec![1, 2, 3],
        }
    }

    fn complete_draft() -> ConfigDraft {
        ConfigDraft {
            model: Some(ImageSource::BuiltIn { id: "f1".to_string() }),
            background: Some(ImageSource::BuiltIn { id: "s1".to_string() }),
            garments: vec![garment()],
            pose_ids: vec!["A1".to_string()],
            shot_type: Some(ShotType::FullBody),
            gender: None,
            ethnicity: None,
        }
    }

    #[test]
    fn empty_draft_reports_all_five_inputs() {
        let missing = ConfigDraft::default().missing_inputs();
        assert_eq!(missing.len(), 5);
        assert_eq!(missing[0], "Upload garment photos");
    }

    #[test]
    fn complete_draft_reports_nothing_missing() {
        assert!(complete_draft().missing_inputs().is_empty());
    }

    #[test]
    fn freeze_complete_draft() {
        let config = complete_draft().freeze().expect("should freeze");
        assert_eq!(config.pose_ids, vec!["A1"]);
        assert_eq!(config.shot_type, ShotType::FullBody);
    }

    #[test]
    fn freeze_without_model_rejected() {
        let mut draft = complete_draft();
        draft.model = None;
        assert!(draft.freeze().is_err());
    }

    #[test]
    fn freeze_without_background_is_allowed() {
        let mut draft = complete_draft();
        draft.background = None;
        assert!(draft.freeze().is_ok());
    }

    #[test]
    fn freeze_rejects_too_many_garments() {
        let mut draft = complete_draft();
        draft.garments = (0..MAX_GARMENTS_PER_BATCH + 1).map(|_| garment()).collect();
        assert!(draft.freeze().is_err());
    }

    #[test]
    fn freeze_rejects_too_many_poses() {
        let mut draft = complete_draft();
        draft.pose_ids = (1..=7).map(|i| format!("A{i}")).collect();
        assert!(draft.freeze().is_err());
    }

    #[test]
    fn freeze_rejects_unknown_pose() {
        let mut draft = complete_draft();
        draft.pose_ids = vec!["Z9".to_string()];
        let err = draft.freeze().unwrap_err();
        assert!(err.to_string().contains("Unknown pose"));
    }

    #[test]
    fn frozen_snapshot_is_independent_of_the_draft() {
        let mut draft = complete_draft();
        let config = draft.clone().freeze().expect("should freeze");
        draft.garments.clear();
        assert_eq!(config.garments.len(), 1);
    }
}
