//! Place result adapter: raw place → normalized cafe record

use chrono::Weekday;

use crate::core::classifier::StudyClassifier;
use crate::core::distance::{distance_between, format_distance};
use crate::core::hours::today_hours;
use crate::core::badge::derive_badge;
use crate::types::{CafeRecord, CafeView, Coordinates, Place, Rating, StudyAssessment};
use crate::{PLACEHOLDER_PHOTO_URL, UNKNOWN_CAFE_NAME};

/// Builds cafe records from search results
#[derive(Debug, Clone, Default)]
pub struct CafeAdapter {
    classifier: StudyClassifier,
}

impl CafeAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adapter using a specific classifier
    pub fn with_classifier(classifier: StudyClassifier) -> Self {
        Self { classifier }
    }

    /// Adapt one place for a user at `user` on weekday `today`
    pub fn adapt(&self, place: &Place, user: Option<Coordinates>, today: Weekday) -> CafeRecord {
        let distance = distance_between(user, place.coordinates());
        let hours = place
            .current_opening_hours
            .as_ref()
            .and_then(|h| today_hours(h, today));
        let assessment = self.classifier.classify_place(place);

        assemble(place, distance, hours, &assessment)
    }

    /// Adapt a batch, keeping the search order
    pub fn adapt_all(&self, places: &[Place], user: Option<Coordinates>, today: Weekday) -> Vec<CafeRecord> {
        places.iter().map(|p| self.adapt(p, user, today)).collect()
    }

    /// Adapt a batch and attach badges
    pub fn views(&self, places: &[Place], user: Option<Coordinates>, today: Weekday) -> Vec<CafeView> {
        self.adapt_all(places, user, today)
            .into_iter()
            .map(|cafe| {
                let badge = derive_badge(&cafe.assessment());
                CafeView { cafe, badge }
            })
            .collect()
    }
}

/// Combine place identity with already-computed distance, hours and study data
pub fn assemble(
    place: &Place,
    distance_miles: Option<f64>,
    hours: Option<String>,
    assessment: &StudyAssessment,
) -> CafeRecord {
    CafeRecord {
        id: place.id.clone().unwrap_or_default(),
        name: place
            .name()
            .filter(|n| !n.is_empty())
            .unwrap_or(UNKNOWN_CAFE_NAME)
            .to_string(),
        rating: Rating::from(place.rating),
        distance: distance_miles.map(format_distance),
        distance_miles,
        maps_uri: place.google_maps_uri.clone().unwrap_or_default(),
        photo: PLACEHOLDER_PHOTO_URL.to_string(),
        photo_name: place.first_photo_name().map(str::to_string),
        hours,
        open_now: place.current_opening_hours.as_ref().and_then(|h| h.open_now),
        address: place.formatted_address.clone(),
        location: place.coordinates(),
        study_score: assessment.score(),
        study_features: assessment.features().to_vec(),
    }
}
