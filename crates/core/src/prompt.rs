//! Generation prompt assembly.
//!
//! One text prompt per pose request, built from the pose description, the
//! framing instruction, the batch consistency profile and the fixed camera
//! settings. The adaptive skirt/dress block is always present; the model
//! applies it conditionally when the garment warrants it.

use serde_json::{json, Value};

use crate::consistency::ConsistencyProfile;
use crate::framing::framing_instruction;
use crate::poses::Pose;
use crate::shot::ShotType;

/// Placeholder used when the operator left gender or ethnicity unset.
pub const AUTO_DETECT: &str = "Auto-detect";

/// Global negative prompt appended to every generation request.
pub const NEGATIVE_PROMPT: &str = "low quality, ugly, distorted face, \
    floating limbs, pasted on, sticker look, grey box on face, blurred face, \
    flat lighting, no shadows, mismatched lighting, chromatic aberration, \
    cartoonish, bad composition.";

/// Fixed camera settings block, with gender and ethnicity merged in.
pub fn camera_settings(gender: Option<&str>, ethnicity: Option<&str>) -> Value {
    json!({
        "image_type": "Studio Photography",
        "lens": "85mm Portrait Lens",
        "aperture": "f/2.8",
        "focus": "Sharp focus on subject",
        "depth_of_field": "Shallow depth of field with blurred background",
        "build": "Natural athletic build",
        "pose": "Confident and relaxed posture",
        "lighting": {
            "type": "Professional Studio Lighting",
            "key_light": "Softbox main light (front)",
            "fill_light": "Soft fill light",
            "rim_light": "Subtle rim light",
            "shadows": "Soft and natural",
            "skin_tones": "Accurate and lifelike",
            "realism": "High",
            "look": "Fashion Magazine Portrait",
            "color_grading": "Neutral and balanced",
            "no_filters": true
        },
        "quality": {
            "resolution": "8K",
            "detail_level": "Ultra-high",
            "noise": "None"
        },
        "constraints": [
            "Focus entirely on subject",
            "No motion blur",
            "No over-processing",
            "No cartoon style",
            "No distorted anatomy"
        ],
        "Size": [
            "1:1",
            "Highest Resolution"
        ],
        "gender": gender.unwrap_or(AUTO_DETECT),
        "race": ethnicity.unwrap_or(AUTO_DETECT),
    })
}

/// Everything the prompt builder needs for one pose request.
#[derive(Debug, Clone, Copy)]
pub struct PromptInputs<'a> {
    pub pose: &'a Pose,
    pub shot_type: ShotType,
    pub consistency: &'a ConsistencyProfile,
    pub gender: Option<&'a str>,
    pub ethnicity: Option<&'a str>,
    /// Corrective feedback from a failed verification round, empty on the
    /// first attempt.
    pub corrective: &'a str,
}

/// Build the full text prompt for one generation request.
pub fn build_generation_prompt(inputs: &PromptInputs<'_>) -> String {
    let framing = framing_instruction(inputs.pose.category, inputs.shot_type);
    let settings = camera_settings(inputs.gender, inputs.ethnicity);

    format!(
        "Role: Senior Fashion Photographer & High-End Retoucher.\n\
         Task: Generate a hyper-realistic fashion photograph with flawless compositing.\n\
         \n\
         INPUTS:\n\
         - Model: Preserve identity (face, skin, body type) from the model image provided.\n\
         \x20 **CRITICAL**: DO NOT use the face from the garment image (it has been masked out). \
         Use the explicit Model image.\n\
         - Garments: Maintain texture and details.\n\
         - Background: Match lighting to the background image.\n\
         \n\
         COMPOSITION:\n\
         - Framing: {framing}\n\
         - Pose Name: {title}\n\
         - POSE DESCRIPTION (STRICTLY FOLLOW THIS): {description}\n\
         \n\
         LIGHTING & INTEGRATION (CRITICAL):\n\
         - LIGHTING MATCH: Analyze the background's light source (direction, temperature, softness) \
         and apply the EXACT same lighting to the model's face and body.\n\
         - SHADOWS: Cast realistic, contact-grounding shadows on the floor/ground. \
         The model MUST NOT look floating.\n\
         - REFLECTIONS: If the environment is reflective, show subtle reflections of the model.\n\
         - AMBIENT OCCLUSION: Add natural darkening in crevices and where the model touches the environment.\n\
         - COLOR GRADING: Harmonize the skin tones and garment colors with the background's \
         ambient color palette.\n\
         \n\
         ADAPTIVE LOGIC (HIGHEST PRIORITY):\n\
         1. SKIRT/DRESS DETECTION: IF the garment provided is a SKIRT or DRESS:\n\
         \x20\x20 - POSE OVERRIDE: IF the requested pose implies \"hands in pockets\", \
         CHANGE IT to \"Hands on hips/waist (Akimbo)\". Skirts do not have pockets.\n\
         \x20\x20 - SHOES: The model MUST wear elegant High Heels.\n\
         \x20\x20 - SHOE COLOR: The High Heels MUST match the color palette of the skirt/dress.\n\
         \n\
         BATCH CONSISTENCY (UNIFORM STYLING):\n\
         {consistency}\n\
         \n\
         NEGATIVE PROMPT:\n\
         {negative}\n\
         \n\
         {corrective}\n\
         \n\
         SETTINGS:\n\
         {settings}",
        framing = framing,
        title = inputs.pose.title,
        description = inputs.pose.description,
        consistency = inputs.consistency.to_prompt(),
        negative = NEGATIVE_PROMPT,
        corrective = inputs.corrective,
        settings = settings,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consistency::{FOOTWEAR_OPTIONS, HANDBAG_OPTIONS, JEWELRY_OPTIONS};
    use crate::framing::{FRAMING_FULL_BODY, FRAMING_MACRO};
    use crate::poses::find_pose;

    fn profile() -> ConsistencyProfile {
        ConsistencyProfile {
            jewelry: JEWELRY_OPTIONS[0].to_string(),
            footwear: FOOTWEAR_OPTIONS[0].to_string(),
            handbag: HANDBAG_OPTIONS[0].to_string(),
        }
    }

    fn inputs<'a>(pose_id: &str, consistency: &'a ConsistencyProfile) -> PromptInputs<'a> {
        PromptInputs {
            pose: find_pose(pose_id).expect("known pose"),
            shot_type: ShotType::FullBody,
            consistency,
            gender: None,
            ethnicity: None,
            corrective: "",
        }
    }

    #[test]
    fn full_scene_pose_carries_shot_framing() {
        let profile = profile();
        let prompt = build_generation_prompt(&inputs("A1", &profile));
        assert!(prompt.contains(FRAMING_FULL_BODY));
        assert!(!prompt.contains(FRAMING_MACRO));
    }

    #[test]
    fn detail_pose_carries_macro_framing() {
        let profile = profile();
        let prompt = build_generation_prompt(&inputs("B2", &profile));
        assert!(prompt.contains(FRAMING_MACRO));
    }

    #[test]
    fn skirt_logic_is_always_present() {
        let profile = profile();
        let prompt = build_generation_prompt(&inputs("A1", &profile));
        assert!(prompt.contains("SKIRT/DRESS DETECTION"));
        assert!(prompt.contains("Hands on hips/waist (Akimbo)"));
    }

    #[test]
    fn corrective_feedback_appears_verbatim() {
        let profile = profile();
        let mut i = inputs("A1", &profile);
        i.corrective = "FIX ISSUES: Wrong Identity. Bad Lighting. ";
        let prompt = build_generation_prompt(&i);
        assert!(prompt.contains("FIX ISSUES: Wrong Identity. Bad Lighting."));
    }

    #[test]
    fn settings_default_to_auto_detect() {
        let settings = camera_settings(None, None);
        assert_eq!(settings["gender"], AUTO_DETECT);
        assert_eq!(settings["race"], AUTO_DETECT);
        assert_eq!(settings["lens"], "85mm Portrait Lens");
    }

    #[test]
    fn settings_carry_explicit_attributes() {
        let settings = camera_settings(Some("Female"), Some("Latina"));
        assert_eq!(settings["gender"], "Female");
        assert_eq!(settings["race"], "Latina");
    }

    #[test]
    fn prompt_contains_consistency_and_negative_blocks() {
        let profile = profile();
        let prompt = build_generation_prompt(&inputs("A3", &profile));
        assert!(prompt.contains("UNIFORM BATCH STYLE GUIDE"));
        assert!(prompt.contains(JEWELRY_OPTIONS[0]));
        assert!(prompt.contains("NEGATIVE PROMPT"));
        assert!(prompt.contains("grey box on face"));
    }
}
