//! Normalized cafe record and its card rendering
//!
//! `CafeRecord` is also the saved-cafe snapshot shape: it serializes with
//! the camelCase field names the saved list has always used.

use colored::Colorize;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{Coordinates, Feature, StudyAssessment, StudyBadge, BadgeLevel};
use crate::{PLACEHOLDER_PHOTO_URL, UNKNOWN_CAFE_NAME};

/// Place rating, or "N/A" when the place has none
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Rating {
    Stars(f64),
    #[default]
    NotAvailable,
}

impl From<Option<f64>> for Rating {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(stars) if stars.is_finite() => Rating::Stars(stars),
            _ => Rating::NotAvailable,
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::Stars(stars) => write!(f, "{}", stars),
            Rating::NotAvailable => write!(f, "N/A"),
        }
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Rating::Stars(stars) => serializer.serialize_f64(*stars),
            Rating::NotAvailable => serializer.serialize_str("N/A"),
        }
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawRating {
            Number(f64),
            Text(serde::de::IgnoredAny),
        }

        // Anything that is not a number ("N/A", null, junk) reads as unrated
        Ok(match Option::<RawRating>::deserialize(deserializer)? {
            Some(RawRating::Number(stars)) => Rating::from(Some(stars)),
            Some(RawRating::Text(_)) | None => Rating::NotAvailable,
        })
    }
}

/// Normalized per-cafe record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CafeRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default = "unknown_cafe_name")]
    pub name: String,
    #[serde(default)]
    pub rating: Rating,
    /// Formatted distance, e.g. "2.3 mi" or "< 0.1 mi"
    #[serde(default)]
    pub distance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f64>,
    #[serde(default)]
    pub maps_uri: String,
    #[serde(default = "placeholder_photo")]
    pub photo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_name: Option<String>,
    /// Today's hours
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinates>,
    #[serde(default)]
    pub study_score: u8,
    #[serde(default)]
    pub study_features: Vec<Feature>,
}

fn unknown_cafe_name() -> String {
    UNKNOWN_CAFE_NAME.to_string()
}

fn placeholder_photo() -> String {
    PLACEHOLDER_PHOTO_URL.to_string()
}

impl CafeRecord {
    /// Assessment rebuilt from the stored features
    pub fn assessment(&self) -> StudyAssessment {
        StudyAssessment::from_features(self.study_features.iter().copied())
    }

    /// Whether the photo is still the placeholder
    pub fn has_placeholder_photo(&self) -> bool {
        self.photo == PLACEHOLDER_PHOTO_URL
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self, badge: &StudyBadge) -> String {
        let mut lines = vec![
            format!("☕ {}", self.name.bold()),
            format!("   ⭐ Rating: {}", self.rating),
        ];

        if let Some(open) = self.open_now {
            let status = if open { "Open now".green() } else { "Closed".red() };
            lines.push(format!("   {}", status));
        }
        if let Some(hours) = &self.hours {
            lines.push(format!("   🕐 {}", hours));
        }
        if let Some(distance) = &self.distance {
            lines.push(format!("   📍 {} away", distance));
        }

        let headline = match badge.level {
            BadgeLevel::Great => badge.summary().green().bold(),
            BadgeLevel::Good => badge.summary().yellow().bold(),
            BadgeLevel::Inconclusive => badge.summary().bright_black(),
        };
        lines.push(format!("   📚 {}", headline));
        lines.push(format!("      {}", badge.detected.dimmed()));

        if !self.maps_uri.is_empty() {
            lines.push(format!("   🗺  {}", self.maps_uri.underline()));
        }

        lines.join("\n")
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self, badge: &StudyBadge) -> String {
        format!(
            "id={} | name={} | rating={} | distance={} | hours={} | study={} | score={} | features={}",
            self.id,
            self.name,
            self.rating,
            self.distance.as_deref().unwrap_or("-"),
            self.hours.as_deref().unwrap_or("-"),
            badge.level.class_name(),
            self.study_score,
            self.study_features
                .iter()
                .map(Feature::name)
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

/// A cafe record paired with its badge, as served by the API
#[derive(Debug, Clone, Serialize)]
pub struct CafeView {
    #[serde(flatten)]
    pub cafe: CafeRecord,
    pub badge: StudyBadge,
}
