//! Badge derivation
//!
//! Decision table, first match wins:
//! - WiFi + at least one other feature → GREAT
//! - WiFi only → GOOD
//! - no WiFi, 2+ features → GOOD
//! - no WiFi, 1 feature → INCONCLUSIVE
//! - nothing → INCONCLUSIVE

use crate::types::{BadgeLevel, BadgeReason, Feature, StudyAssessment, StudyBadge};

/// Text shown when no feature was detected
pub const NO_FEATURES_TEXT: &str = "No features detected";

/// Derive the card badge from an assessment
pub fn derive_badge(assessment: &StudyAssessment) -> StudyBadge {
    let (level, reason) = decide(
        assessment.has(Feature::Wifi),
        assessment.non_wifi_count(),
        assessment.score(),
    );

    let labels: Vec<String> = assessment
        .features()
        .iter()
        .map(|f| f.label().to_string())
        .collect();

    let detected = if labels.is_empty() {
        NO_FEATURES_TEXT.to_string()
    } else {
        labels.join(", ")
    };

    StudyBadge {
        level,
        reason,
        message: reason.description().to_string(),
        labels,
        detected,
    }
}

/// The decision table itself
fn decide(has_wifi: bool, other_count: usize, score: u8) -> (BadgeLevel, BadgeReason) {
    if has_wifi && other_count >= 1 {
        (BadgeLevel::Great, BadgeReason::WifiPlusOther)
    } else if has_wifi {
        (BadgeLevel::Good, BadgeReason::WifiOnly)
    } else if score >= 2 {
        (BadgeLevel::Good, BadgeReason::MultipleFeatures)
    } else if score == 1 {
        (BadgeLevel::Inconclusive, BadgeReason::LimitedInfo)
    } else {
        (BadgeLevel::Inconclusive, BadgeReason::NoInfo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn badge_for(features: &[Feature]) -> StudyBadge {
        derive_badge(&StudyAssessment::from_features(features.iter().copied()))
    }

    #[test]
    fn test_wifi_plus_other_is_great() {
        let badge = badge_for(&[Feature::Wifi, Feature::Quiet]);
        assert_eq!(badge.level, BadgeLevel::Great);
        assert_eq!(badge.message, "WiFi + other features");
        assert_eq!(badge.labels, vec!["WiFi", "Quiet atmosphere"]);
        assert_eq!(badge.detected, "WiFi, Quiet atmosphere");
    }

    #[test]
    fn test_wifi_only_is_good() {
        let badge = badge_for(&[Feature::Wifi]);
        assert_eq!(badge.level, BadgeLevel::Good);
        assert_eq!(badge.reason, BadgeReason::WifiOnly);
        assert_eq!(badge.message, "WiFi mentioned in reviews");
    }

    #[test]
    fn test_multiple_without_wifi_is_good() {
        let badge = badge_for(&[Feature::Outlets, Feature::Seating, Feature::Quiet]);
        assert_eq!(badge.level, BadgeLevel::Good);
        assert_eq!(badge.message, "Multiple study features");
    }

    #[test]
    fn test_single_non_wifi_is_inconclusive() {
        let badge = badge_for(&[Feature::Seating]);
        assert_eq!(badge.level, BadgeLevel::Inconclusive);
        assert_eq!(badge.message, "Limited info in reviews");
        assert_eq!(badge.detected, "Good seating");
    }

    #[test]
    fn test_nothing_is_inconclusive() {
        let badge = badge_for(&[]);
        assert_eq!(badge.level, BadgeLevel::Inconclusive);
        assert_eq!(badge.reason, BadgeReason::NoInfo);
        assert_eq!(badge.message, "No study info in reviews");
        assert!(badge.labels.is_empty());
        assert_eq!(badge.detected, NO_FEATURES_TEXT);
    }

    #[test]
    fn test_table_is_exhaustive() {
        // Every subset of the five features lands on exactly one row
        for mask in 0u8..32 {
            let features: Vec<Feature> = Feature::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << *i) != 0)
                .map(|(_, f)| f)
                .collect();
            let assessment = StudyAssessment::from_features(features.iter().copied());
            let badge = derive_badge(&assessment);

            let has_wifi = features.contains(&Feature::Wifi);
            let expected = match (has_wifi, features.len()) {
                (true, n) if n >= 2 => BadgeLevel::Great,
                (true, _) => BadgeLevel::Good,
                (false, n) if n >= 2 => BadgeLevel::Good,
                _ => BadgeLevel::Inconclusive,
            };
            assert_eq!(badge.level, expected, "features: {:?}", features);
        }
    }
}
