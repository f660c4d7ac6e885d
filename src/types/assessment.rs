//! Study assessment: score + feature set

use serde::Serialize;
use crate::types::Feature;

/// Result of analyzing a cafe's reviews
///
/// Features are kept in enumeration order without duplicates, and the
/// score is always their count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StudyAssessment {
    score: u8,
    features: Vec<Feature>,
}

impl StudyAssessment {
    /// Assessment with no features
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from any feature list, normalizing order and duplicates
    pub fn from_features<I>(features: I) -> Self
    where
        I: IntoIterator<Item = Feature>,
    {
        let found: Vec<Feature> = features.into_iter().collect();
        let features: Vec<Feature> = Feature::ALL
            .into_iter()
            .filter(|f| found.contains(f))
            .collect();

        Self {
            score: features.len() as u8,
            features,
        }
    }

    /// Number of distinct features present (0-5)
    pub fn score(&self) -> u8 {
        self.score
    }

    /// Present features in enumeration order
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn has(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    /// Count of present features other than wifi
    pub fn non_wifi_count(&self) -> usize {
        self.features.iter().filter(|f| **f != Feature::Wifi).count()
    }
}
