//! Study badge: qualitative label derived from an assessment

use serde::{Deserialize, Serialize};

/// Qualitative study-friendliness level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeLevel {
    Great,
    Good,
    Inconclusive,
}

impl BadgeLevel {
    /// Card headline
    pub fn headline(&self) -> &'static str {
        match self {
            BadgeLevel::Great => "Great study spot",
            BadgeLevel::Good => "Good study spot",
            BadgeLevel::Inconclusive => "Inconclusive study spot",
        }
    }

    /// CSS-style class name, also used in parseable output
    pub fn class_name(&self) -> &'static str {
        match self {
            BadgeLevel::Great => "great",
            BadgeLevel::Good => "good",
            BadgeLevel::Inconclusive => "inconclusive",
        }
    }
}

impl std::fmt::Display for BadgeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BadgeLevel::Great => "GREAT",
            BadgeLevel::Good => "GOOD",
            BadgeLevel::Inconclusive => "INCONCLUSIVE",
        };
        write!(f, "{}", name)
    }
}

/// Why a badge was given, one per row of the decision table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeReason {
    /// WiFi plus at least one other feature
    WifiPlusOther,
    /// WiFi is the only feature
    WifiOnly,
    /// Two or more features, none of them WiFi
    MultipleFeatures,
    /// Exactly one non-WiFi feature
    LimitedInfo,
    /// Nothing detected
    NoInfo,
}

impl BadgeReason {
    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::WifiPlusOther => "WiFi + other features",
            Self::WifiOnly => "WiFi mentioned in reviews",
            Self::MultipleFeatures => "Multiple study features",
            Self::LimitedInfo => "Limited info in reviews",
            Self::NoInfo => "No study info in reviews",
        }
    }
}

impl std::fmt::Display for BadgeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Badge shown on a cafe card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyBadge {
    pub level: BadgeLevel,
    pub reason: BadgeReason,
    /// Human-readable reason
    pub message: String,
    /// Display labels of the detected features
    pub labels: Vec<String>,
    /// Labels joined for display, or "No features detected"
    pub detected: String,
}

impl StudyBadge {
    /// One line for terminal cards, e.g. `Great study spot (WiFi + other features)`
    pub fn summary(&self) -> String {
        format!("{} ({})", self.level.headline(), self.message)
    }
}
