//! Core types for Studyspot

mod feature;
mod assessment;
mod badge;
mod place;
mod cafe;

pub use feature::Feature;
pub use assessment::StudyAssessment;
pub use badge::{BadgeLevel, BadgeReason, StudyBadge};
pub use place::{
    Coordinates, LatLng, LocalizedText, NearbySearchResponse, OpeningHours, Period, Place,
    PlacePhoto, PlaceReview, TimePoint,
};
pub use cafe::{CafeRecord, CafeView, Rating};
