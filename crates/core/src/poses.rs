//! Static pose catalog.
//!
//! Read-only reference data. Each entry's `description` is injected
//! verbatim into the generation prompt as a hard constraint; `usage` is
//! guidance surfaced in the pose selector.

use serde::Serialize;

use crate::shot::PoseCategory;

/// Maximum number of poses selectable for one batch.
pub const MAX_POSES_PER_BATCH: usize = 6;

/// One pose catalog entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Pose {
    pub id: &'static str,
    pub category: PoseCategory,
    pub title: &'static str,
    /// Natural-language body-position constraint, used verbatim in the prompt.
    pub description: &'static str,
    /// When to use this pose.
    pub usage: &'static str,
    /// Preview image shown in the selector.
    pub reference_url: &'static str,
}

/// Look up a pose by its catalog id.
pub fn find_pose(id: &str) -> Option<&'static Pose> {
    POSES.iter().find(|p| p.id == id)
}

/// The full pose catalog: A1–A20 full-scene poses, B1–B8 detail shots.
pub const POSES: &[Pose] = &[
    Pose {
        id: "A1",
        category: PoseCategory::FullScene,
        title: "The Classic Contrapposto",
        description: "Model stands facing forward, weight fully on the right leg, right hip slightly pushed out. Left leg relaxed, knee slightly bent, toe lightly touching the ground. Both arms hang naturally at the sides, shoulders relaxed and thrown back.",
        usage: "Universal pose. Best for showcasing the natural drape and silhouette of long coats, dresses, or suits.",
        reference_url: "/poses/a1.jpg",
    },
    Pose {
        id: "A2",
        category: PoseCategory::FullScene,
        title: "Mid-Stride Walking",
        description: "Capturing a walking moment. Right leg takes a large step forward, heel touching ground, leg straight; Left leg behind, toe pushing off, knee bent. Body weight on the front foot. Arms swing naturally (Left arm forward, Right arm back).",
        usage: "Showcasing pants fit, skirt flow/draping, and dynamic folds of jackets in motion.",
        reference_url: "/poses/a2.jpg",
    },
    Pose {
        id: "A3",
        category: PoseCategory::FullScene,
        title: "The Over-the-Shoulder Back View",
        description: "Model stands with back to camera. Head turned to the back right (even if no face, head angle must turn). Right shoulder slightly dropped, left hand hangs naturally, right hand lightly rests on the right waist.",
        usage: "Specifically for showcasing back designs, back prints, or jacket rear cuts.",
        reference_url: "https://picsum.photos/400/600?random=103&grayscale",
    },
    Pose {
        id: "A4",
        category: PoseCategory::FullScene,
        title: "The 3/4 Turn",
        description: "Body rotated about 45 degrees relative to the camera. Weight on the back leg, front leg slightly crossed in front of the back leg. The arm facing the camera hangs naturally, the other hand can be lightly placed behind the back.",
        usage: "Very slimming angle, excellent for showing side lines and layering hierarchy.",
        reference_url: "https://picsum.photos/400/600?random=104&grayscale",
    },
    Pose {
        id: "A5",
        category: PoseCategory::FullScene,
        title: "One Hand in Pocket Casual",
        description: "Standing frontally or slightly to the side. Weight shifted to one side. One hand heavily casually tucked into trousers or jacket pocket, thumb exposed. The other arm relaxed naturally.",
        usage: "Showcasing trousers pocket design, jacket casualness, while emphasizing the waistline position.",
        reference_url: "https://picsum.photos/400/600?random=105&grayscale",
    },
    Pose {
        id: "A6",
        category: PoseCategory::FullScene,
        title: "Arms Crossed Texture Focus",
        description: "Stable stance, feet shoulder-width apart. Arms crossed loosely in front of chest (do not hug too tight to avoid hiding too much cloth). Head tilted slightly.",
        usage: "Focuses visual attention on the chest and sleeves, suitable for showing knitwear texture, cuff details, or top patterns.",
        reference_url: "https://picsum.photos/400/600?random=106&grayscale",
    },
    Pose {
        id: "A7",
        category: PoseCategory::FullScene,
        title: "The Elegant Seated Pose",
        description: "Model seated on a sleek GUNDE-style folding chair. Back straight, right leg elegantly crossed over left knee. Hands lightly folded on thighs.",
        usage: "Showcasing skirt length and sitting effect, or knee lines of pants and shoe coordination when seated.",
        reference_url: "https://picsum.photos/400/600?random=107&grayscale",
    },
    Pose {
        id: "A8",
        category: PoseCategory::FullScene,
        title: "The Detail Touch",
        description: "Standing base, one hand raised to lightly touch the opposite collar, lapel edge, or adjusting the other hands cuff. Movement should be gentle, like a frozen moment.",
        usage: "Forces viewer gaze to specific craftsmanship details (collar shape, cufflinks, material).",
        reference_url: "https://picsum.photos/400/600?random=108&grayscale",
    },
    Pose {
        id: "A9",
        category: PoseCategory::FullScene,
        title: "The Strong A-Stance",
        description: "Feet placed slightly wider than shoulders, standing firmly on the ground, legs straight. Hands hang naturally at sides. Body straight and powerful.",
        usage: "Suitable for street wear, loose fit pants, or voluminous jackets to show presence/aura.",
        reference_url: "https://picsum.photos/400/600?random=109&grayscale",
    },
    Pose {
        id: "A10",
        category: PoseCategory::FullScene,
        title: "The Wall Lean",
        description: "Model leans lightly with one shoulder and back against an invisible wall. The leaning leg bends slightly to support body, outer leg stretches straight and crosses in front. Outer arm hangs naturally, leaning arm can bend slightly.",
        usage: "Creates a casual, lazy fashion feel, allowing clothes to stack folds naturally, appearing more lifestyle-oriented.",
        reference_url: "https://picsum.photos/400/600?random=110&grayscale",
    },
    Pose {
        id: "A11",
        category: PoseCategory::FullScene,
        title: "Double Hands on Hips Power",
        description: "Feet shoulder-width apart, standing firmly. Both hands on waist sides, elbows flaring out. Torso remains straight and confident.",
        usage: "Emphasizes waistline and belt accessories, and displays a confident, strong aura. Suitable for suits or workwear.",
        reference_url: "https://picsum.photos/400/600?random=111&grayscale",
    },
    Pose {
        id: "A12",
        category: PoseCategory::FullScene,
        title: "The High Stool Perch",
        description: "Model is not fully seated, but perching on the edge of a high Hee bar stool. One leg straight with toe touching ground, the other leg slightly bent resting on the chair bar. Hands casually on thigh.",
        usage: "Creates a lighter, more dynamic atmosphere than a full sit. Good for showing trouser leg drape and shoes.",
        reference_url: "https://picsum.photos/400/600?random=112&grayscale",
    },
    Pose {
        id: "A13",
        category: PoseCategory::FullScene,
        title: "The Jacket Sling Stride",
        description: "In a mid-stride walking state. One hand is bent back hooking a jacket casually over the same shoulder. The other hand swings naturally.",
        usage: "Showcasing layered styling, especially the combination of inner wear vs outer jacket.",
        reference_url: "https://picsum.photos/400/600?random=113&grayscale",
    },
    Pose {
        id: "A14",
        category: PoseCategory::FullScene,
        title: "Upward Stretched Crossed Stance",
        description: "Legs tightly crossed (scissor legs). Torso leans back slightly and extends to one side. Right hand raised high above head, palm hovering in front of face; Left arm hangs naturally. Head tilted back significanty, gazing upward.",
        usage: "Showcasing suit structural sense, slim straight trouser fit, and high-fashion coolness.",
        reference_url: "https://picsum.photos/400/600?random=114&grayscale",
    },
    Pose {
        id: "A15",
        category: PoseCategory::FullScene,
        title: "The Street Groove Freeze",
        description: "Legs in a Cross-step stance, weight shifting flexibly. Upper body twists slightly, Right hand raised above head, Left hand extended horizontally to side. Head turned to left, eyes looking down.",
        usage: "Perfect for Streetwears casual coolness. Suitable for showing loose fit of Hoodies and sweatpants.",
        reference_url: "https://picsum.photos/400/600?random=115&grayscale",
    },
    Pose {
        id: "A16",
        category: PoseCategory::FullScene,
        title: "The Head-On Power Stride",
        description: "Capturing the dynamic moment of walking straight towards the lens. Weight on the back foot, front heel just touching the ground, toe slightly turned up. Hands in trouser pockets, exhibiting a momentum of walking against the wind. Head straight, eyes looking firmly at the lens.",
        usage: "Showing strong confident aura. Presents internal structure of jackets and layered wear.",
        reference_url: "https://picsum.photos/400/600?random=116&grayscale",
    },
    Pose {
        id: "A17",
        category: PoseCategory::FullScene,
        title: "The Luxe Floor Lounge",
        description: "Sitting casually on floor. One leg extended forward, other leg bent at knee. Upper body leans back, one hand behind supporting body on ground, other arm resting on bent knee.",
        usage: "Conveying a lazy, luxurious casual attitude. Suitable for premium knitwear or comfort fit pants.",
        reference_url: "https://picsum.photos/400/600?random=117&grayscale",
    },
    Pose {
        id: "A18",
        category: PoseCategory::FullScene,
        title: "The Joyful Suspension",
        description: "Both toes lightly tap the ground, floating feel. Knees naturally bent together, body weight sinking in Z shape. Arms spread to sides (Left high Right low). Head lowered, looking at feet, with a smile.",
        usage: "Excellent for showing Mobility and comfort. Highlights stretch of bottom fabrics.",
        reference_url: "https://picsum.photos/400/600?random=118&grayscale",
    },
    Pose {
        id: "A19",
        category: PoseCategory::FullScene,
        title: "Mid-Air Stride Suspension",
        description: "Vertical jump at peak. Upper body straight, frontal. Right leg lifted high, thigh parallel to ground, knee bent 90 degrees and rotated inward; Left leg vertical downwards, toe pointed down.",
        usage: "Showing suit activity space in large movements and dynamic tie movement.",
        reference_url: "https://picsum.photos/400/600?random=119&grayscale",
    },
    Pose {
        id: "A20",
        category: PoseCategory::FullScene,
        title: "Dynamic Back-Kick Leap",
        description: "Front visible to camera. Right foot toe supports weight; Left foot kicks back significantly, calf folded backwards and upwards. Upper body straight. Right hand bent in front to clavicle, Left hand extends back.",
        usage: "Focus on showing drape of Pleated Trousers in motion. NO SIDE PROFILE.",
        reference_url: "https://picsum.photos/400/600?random=120&grayscale",
    },
    Pose {
        id: "B1",
        category: PoseCategory::Detail,
        title: "Neckline Detail",
        description: "Macro shot focusing on collar construction and stitching.",
        usage: "Showcases neckline craftsmanship.",
        reference_url: "https://picsum.photos/400/400?random=201&blur=2",
    },
    Pose {
        id: "B2",
        category: PoseCategory::Detail,
        title: "Cuff/Wrist Detail",
        description: "Close-up of forearm and wrist showing cuff buttons or fabric weave.",
        usage: "Showcases sleeve and fabric texture.",
        reference_url: "https://picsum.photos/400/400?random=202&blur=2",
    },
    Pose {
        id: "B3",
        category: PoseCategory::Detail,
        title: "Waistline/Pocket Close-up",
        description: "Focus on belt loops, waist buttons, or pocket seam details.",
        usage: "Showcases waist construction.",
        reference_url: "https://picsum.photos/400/400?random=203&blur=2",
    },
    Pose {
        id: "B4",
        category: PoseCategory::Detail,
        title: "Button/Placket Macro",
        description: "High-detail shot of garment fasteners and button material.",
        usage: "Showcases hardware and closure details.",
        reference_url: "https://picsum.photos/400/400?random=204&blur=2",
    },
    Pose {
        id: "B5",
        category: PoseCategory::Detail,
        title: "Back Yoke Detail",
        description: "Focus on upper back shoulder seams and yoke construction.",
        usage: "Showcases back tailoring.",
        reference_url: "https://picsum.photos/400/400?random=205&blur=2",
    },
    Pose {
        id: "B6",
        category: PoseCategory::Detail,
        title: "Fabric Texture/Fold",
        description: "Macro shot of natural fabric draping and material weave.",
        usage: "Showcases premium material quality.",
        reference_url: "https://picsum.photos/400/400?random=206&blur=2",
    },
    Pose {
        id: "B7",
        category: PoseCategory::Detail,
        title: "Upper Body Pocket Hand",
        description: "Waist-up shot showing hand casually in jacket pocket.",
        usage: "Natural lifestyle detail of upper body garments.",
        reference_url: "https://picsum.photos/400/400?random=207&blur=2",
    },
    Pose {
        id: "B8",
        category: PoseCategory::Detail,
        title: "Lower Body Pocket Hand",
        description: "Waist-down shot showing hand in trouser pocket.",
        usage: "Natural lifestyle detail of lower body garments.",
        reference_url: "https://picsum.photos/400/400?random=208&blur=2",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_all_poses() {
        let full_scene = POSES
            .iter()
            .filter(|p| p.category == PoseCategory::FullScene)
            .count();
        let detail = POSES
            .iter()
            .filter(|p| p.category == PoseCategory::Detail)
            .count();
        assert_eq!(full_scene, 20);
        assert_eq!(detail, 8);
    }

    #[test]
    fn pose_ids_are_unique() {
        let mut ids: Vec<&str> = POSES.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), POSES.len());
    }

    #[test]
    fn find_pose_by_id() {
        let pose = find_pose("A3").expect("A3 should exist");
        assert_eq!(pose.title, "The Over-the-Shoulder Back View");
        assert_eq!(pose.category, PoseCategory::FullScene);
    }

    #[test]
    fn find_pose_unknown_id() {
        assert!(find_pose("C1").is_none());
    }

    #[test]
    fn descriptions_are_non_empty() {
        for pose in POSES {
            assert!(!pose.description.is_empty(), "pose {} lacks a description", pose.id);
            assert!(!pose.usage.is_empty(), "pose {} lacks usage guidance", pose.id);
        }
    }
}
