//! Study features inferred from review text

use serde::{Deserialize, Serialize};

/// A study-amenity signal found in reviews
///
/// Declaration order is the fixed enumeration order used everywhere
/// features are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Wifi,
    Laptop,
    Outlets,
    Seating,
    Quiet,
}

impl Feature {
    /// All features in enumeration order
    pub const ALL: [Feature; 5] = [
        Feature::Wifi,
        Feature::Laptop,
        Feature::Outlets,
        Feature::Seating,
        Feature::Quiet,
    ];

    /// Internal name (matches the serialized form)
    pub fn name(&self) -> &'static str {
        match self {
            Feature::Wifi => "wifi",
            Feature::Laptop => "laptop",
            Feature::Outlets => "outlets",
            Feature::Seating => "seating",
            Feature::Quiet => "quiet",
        }
    }

    /// Human-readable label for cards
    pub fn label(&self) -> &'static str {
        match self {
            Feature::Wifi => "WiFi",
            Feature::Laptop => "Laptop-friendly",
            Feature::Outlets => "Outlets",
            Feature::Seating => "Good seating",
            Feature::Quiet => "Quiet atmosphere",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
