//! Framing instruction selection.
//!
//! Every generation request carries exactly one framing instruction.
//! Detail ("B") poses always force the macro instruction; full-scene ("A")
//! poses use the shot type the user selected, each with an explicit
//! exclusion rule so the model does not drift outside the crop.

use crate::shot::{PoseCategory, ShotType};

/// Forced framing for detail poses, regardless of the selected shot type.
pub const FRAMING_MACRO: &str = "MANDATORY FRAMING: MACRO / DETAIL SHOT. \
    Focus EXCLUSIVELY on the specific body part or garment detail described. CROPPING OK.";

pub const FRAMING_FULL_BODY: &str = "CRITICAL FRAMING: FULL BODY SHOT. \
    The ENTIRE subject from HEAD TO TOE must be visible. \
    Leave headroom and footroom. DO NOT CROP FEET.";

pub const FRAMING_UPPER_BODY: &str = "CRITICAL FRAMING: UPPER BODY SHOT. \
    Frame from the HIPS/WAIST UP to the head. \
    FOCUS on torso and face. DO NOT show legs.";

pub const FRAMING_LOWER_BODY: &str = "CRITICAL FRAMING: LOWER BODY SHOT. \
    Frame from the WAIST DOWN to the feet. \
    FOCUS on pants/skirt/shoes. DO NOT show head/shoulders.";

/// Select the mandatory framing instruction for one pose request.
pub fn framing_instruction(category: PoseCategory, shot_type: ShotType) -> &'static str {
    match category {
        PoseCategory::Detail => FRAMING_MACRO,
        PoseCategory::FullScene => match shot_type {
            ShotType::FullBody => FRAMING_FULL_BODY,
            ShotType::UpperBody => FRAMING_UPPER_BODY,
            ShotType::LowerBody => FRAMING_LOWER_BODY,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_scene_uses_selected_shot_type() {
        assert_eq!(
            framing_instruction(PoseCategory::FullScene, ShotType::FullBody),
            FRAMING_FULL_BODY,
        );
        assert_eq!(
            framing_instruction(PoseCategory::FullScene, ShotType::UpperBody),
            FRAMING_UPPER_BODY,
        );
        assert_eq!(
            framing_instruction(PoseCategory::FullScene, ShotType::LowerBody),
            FRAMING_LOWER_BODY,
        );
    }

    #[test]
    fn detail_pose_overrides_every_shot_type() {
        for &shot in crate::shot::ALL_SHOT_TYPES {
            assert_eq!(
                framing_instruction(PoseCategory::Detail, shot),
                FRAMING_MACRO,
            );
        }
    }

    #[test]
    fn upper_body_excludes_legs() {
        assert!(FRAMING_UPPER_BODY.contains("DO NOT show legs"));
    }
}
