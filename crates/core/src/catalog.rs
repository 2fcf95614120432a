//! Built-in model and background catalogs.
//!
//! Read-only reference data backing the model and scene selectors. The
//! `url` fields point at hosted reference assets that the pipeline fetches
//! and normalizes when a built-in entry is selected.

use serde::Serialize;

/// A built-in fashion model reference image.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BuiltInModel {
    pub id: &'static str,
    pub gender: &'static str,
    pub label: &'static str,
    pub url: &'static str,
}

/// A built-in scene background.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BuiltInBackground {
    pub id: &'static str,
    pub category: &'static str,
    pub label: &'static str,
    pub url: &'static str,
}

/// Look up a built-in model by id.
pub fn find_model(id: &str) -> Option<&'static BuiltInModel> {
    BUILT_IN_MODELS.iter().find(|m| m.id == id)
}

/// Look up a built-in background by id.
pub fn find_background(id: &str) -> Option<&'static BuiltInBackground> {
    BUILT_IN_BACKGROUNDS.iter().find(|b| b.id == id)
}

pub const BUILT_IN_MODELS: &[BuiltInModel] = &[
    BuiltInModel { id: "f1", gender: "Female", label: "Asian Female (Light Skin)", url: "https://picsum.photos/400/600?random=301" },
    BuiltInModel { id: "f2", gender: "Female", label: "Caucasian Female (Blonde)", url: "https://picsum.photos/400/600?random=302" },
    BuiltInModel { id: "f3", gender: "Female", label: "African Female (Natural)", url: "https://picsum.photos/400/600?random=303" },
    BuiltInModel { id: "f4", gender: "Female", label: "Latina Female", url: "https://picsum.photos/400/600?random=304" },
    BuiltInModel { id: "f5", gender: "Female", label: "Southeast Asian Female", url: "https://picsum.photos/400/600?random=305" },
    BuiltInModel { id: "f6", gender: "Female", label: "Middle Eastern Female", url: "https://picsum.photos/400/600?random=306" },
    BuiltInModel { id: "f7", gender: "Female", label: "Redhead Caucasian Female", url: "https://picsum.photos/400/600?random=307" },
    BuiltInModel { id: "f8", gender: "Female", label: "East Asian Female (Bob Cut)", url: "https://picsum.photos/400/600?random=308" },
    BuiltInModel { id: "f9", gender: "Female", label: "Black Female (Braids)", url: "https://picsum.photos/400/600?random=309" },
    BuiltInModel { id: "f10", gender: "Female", label: "Senior Caucasian Female", url: "https://picsum.photos/400/600?random=310" },
    BuiltInModel { id: "m1", gender: "Male", label: "Caucasian Male (Stubble)", url: "/models/m1.jpg" },
    BuiltInModel { id: "m2", gender: "Male", label: "Asian Male (Clean Shaven)", url: "https://picsum.photos/400/600?random=312" },
    BuiltInModel { id: "m3", gender: "Male", label: "Black Male (Fade Cut)", url: "https://picsum.photos/400/600?random=313" },
    BuiltInModel { id: "m4", gender: "Male", label: "Latino Male", url: "https://picsum.photos/400/600?random=314" },
    BuiltInModel { id: "m5", gender: "Male", label: "Middle Eastern Male (Beard)", url: "https://picsum.photos/400/600?random=315" },
    BuiltInModel { id: "m6", gender: "Male", label: "South Asian Male", url: "https://picsum.photos/400/600?random=316" },
    BuiltInModel { id: "m7", gender: "Male", label: "Caucasian Male (Long Hair)", url: "https://picsum.photos/400/600?random=317" },
    BuiltInModel { id: "m8", gender: "Male", label: "East Asian Male (Street)", url: "https://picsum.photos/400/600?random=318" },
    BuiltInModel { id: "m9", gender: "Male", label: "Senior Asian Male", url: "https://picsum.photos/400/600?random=319" },
    BuiltInModel { id: "m10", gender: "Male", label: "Black Male (Dreads)", url: "https://picsum.photos/400/600?random=320" },
];

pub const BUILT_IN_BACKGROUNDS: &[BuiltInBackground] = &[
    BuiltInBackground { id: "s1", category: "Studio", label: "Infinite Grey", url: "https://picsum.photos/800/800?random=501" },
    BuiltInBackground { id: "s2", category: "Studio", label: "Pure White Cyclorama", url: "https://picsum.photos/800/800?random=502" },
    BuiltInBackground { id: "s3", category: "Studio", label: "Textured Canvas (Brown)", url: "https://picsum.photos/800/800?random=503" },
    BuiltInBackground { id: "s4", category: "Studio", label: "Dark Mood Concrete", url: "https://picsum.photos/800/800?random=504" },
    BuiltInBackground { id: "s5", category: "Studio", label: "Gradient Blue", url: "https://picsum.photos/800/800?random=505" },
    BuiltInBackground { id: "s6", category: "Studio", label: "Warm Beige Wall", url: "https://picsum.photos/800/800?random=506" },
    BuiltInBackground { id: "s7", category: "Studio", label: "Industrial Loft Brick", url: "https://picsum.photos/800/800?random=507" },
    BuiltInBackground { id: "s8", category: "Studio", label: "Abstract Light Shadow", url: "https://picsum.photos/800/800?random=508" },
    BuiltInBackground { id: "s9", category: "Studio", label: "Pastel Pink Studio", url: "https://picsum.photos/800/800?random=509" },
    BuiltInBackground { id: "s10", category: "Studio", label: "Black Velvet", url: "https://picsum.photos/800/800?random=510" },
    BuiltInBackground { id: "o1", category: "Outdoor", label: "NYC Street Corner", url: "https://picsum.photos/800/800?random=601" },
    BuiltInBackground { id: "o2", category: "Outdoor", label: "Parisian Cafe Exterior", url: "https://picsum.photos/800/800?random=602" },
    BuiltInBackground { id: "o3", category: "Outdoor", label: "Modern Glass Architecture", url: "https://picsum.photos/800/800?random=603" },
    BuiltInBackground { id: "o4", category: "Outdoor", label: "Concrete Skate Park", url: "https://picsum.photos/800/800?random=604" },
    BuiltInBackground { id: "o5", category: "Outdoor", label: "Rooftop at Sunset", url: "https://picsum.photos/800/800?random=605" },
    BuiltInBackground { id: "o6", category: "Outdoor", label: "Graffiti Alleyway", url: "https://picsum.photos/800/800?random=606" },
    BuiltInBackground { id: "o7", category: "Outdoor", label: "Luxury Storefront", url: "https://picsum.photos/800/800?random=607" },
    BuiltInBackground { id: "o8", category: "Outdoor", label: "Subway Station Platform", url: "https://picsum.photos/800/800?random=608" },
    BuiltInBackground { id: "o9", category: "Outdoor", label: "Old European Cobblestone", url: "https://picsum.photos/800/800?random=609" },
    BuiltInBackground { id: "o10", category: "Outdoor", label: "City Bridge Walkway", url: "https://picsum.photos/800/800?random=610" },
    BuiltInBackground { id: "w1", category: "Wilderness", label: "Desert Dunes", url: "https://picsum.photos/800/800?random=701" },
    BuiltInBackground { id: "w2", category: "Wilderness", label: "Forest Clearing", url: "https://picsum.photos/800/800?random=702" },
    BuiltInBackground { id: "w3", category: "Wilderness", label: "Rocky Beach Coast", url: "https://picsum.photos/800/800?random=703" },
    BuiltInBackground { id: "w4", category: "Wilderness", label: "Mountain Peak Snow", url: "https://picsum.photos/800/800?random=704" },
    BuiltInBackground { id: "w5", category: "Wilderness", label: "Tropical Jungle", url: "https://picsum.photos/800/800?random=705" },
    BuiltInBackground { id: "w6", category: "Wilderness", label: "Open Grass Field", url: "https://picsum.photos/800/800?random=706" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_ids_are_unique() {
        let mut ids: Vec<&str> = BUILT_IN_MODELS.iter().map(|m| m.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), BUILT_IN_MODELS.len());
    }

    #[test]
    fn background_ids_are_unique() {
        let mut ids: Vec<&str> = BUILT_IN_BACKGROUNDS.iter().map(|b| b.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), BUILT_IN_BACKGROUNDS.len());
    }

    #[test]
    fn find_known_entries() {
        assert_eq!(find_model("f1").map(|m| m.gender), Some("Female"));
        assert_eq!(find_background("s1").map(|b| b.label), Some("Infinite Grey"));
    }

    #[test]
    fn find_unknown_entries() {
        assert!(find_model("x1").is_none());
        assert!(find_background("x1").is_none());
    }
}
