//! Shot composition and pose category enums.

use serde::{Deserialize, Serialize};

/// Crop/composition rule chosen by the user for full-scene poses.
///
/// Detail poses (category B) ignore the selection — see
/// [`crate::framing::framing_instruction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotType {
    FullBody,
    UpperBody,
    LowerBody,
}

/// All shot types, in catalog display order.
pub const ALL_SHOT_TYPES: &[ShotType] = &[
    ShotType::FullBody,
    ShotType::UpperBody,
    ShotType::LowerBody,
];

impl ShotType {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::FullBody => "Full Body",
            Self::UpperBody => "Upper Body",
            Self::LowerBody => "Lower Body",
        }
    }

    /// Short description shown next to the label in the selector.
    pub fn description(self) -> &'static str {
        match self {
            Self::FullBody => "Head to toe",
            Self::UpperBody => "Waist up",
            Self::LowerBody => "Waist down",
        }
    }

    /// Parse the snake_case wire form (`full_body`, `upper_body`, `lower_body`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "full_body" => Some(Self::FullBody),
            "upper_body" => Some(Self::UpperBody),
            "lower_body" => Some(Self::LowerBody),
            _ => None,
        }
    }
}

/// Catalog classification of a pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoseCategory {
    /// Full-scene composition ("A" poses) — framing follows the user's shot type.
    #[serde(rename = "A")]
    FullScene,
    /// Macro/detail shot ("B" poses) — framing is always forced to macro.
    #[serde(rename = "B")]
    Detail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_all_shot_types() {
        for &shot in ALL_SHOT_TYPES {
            let wire = serde_json::to_value(shot).unwrap();
            let parsed = ShotType::parse(wire.as_str().unwrap());
            assert_eq!(parsed, Some(shot));
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(ShotType::parse("waist_up"), None);
    }

    #[test]
    fn pose_category_serializes_as_letter() {
        assert_eq!(
            serde_json::to_value(PoseCategory::Detail).unwrap(),
            serde_json::json!("B"),
        );
    }
}
