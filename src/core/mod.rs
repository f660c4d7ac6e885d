//! Core modules for Studyspot

pub mod classifier;
pub mod badge;
pub mod distance;
pub mod hours;
pub mod adapter;
pub mod store;
pub mod deck;
pub mod config;
pub mod error;
pub mod places;
pub mod api;

pub use classifier::{classify, StudyClassifier, FEATURE_TRIGGERS};
pub use badge::{derive_badge, NO_FEATURES_TEXT};
pub use distance::{distance_between, distance_miles, format_distance};
pub use hours::{format_time, today_hours, today_hours_local};
pub use adapter::{assemble, CafeAdapter};
pub use store::{
    cache_location, cached_location, CachedLocation, FileStore, KeyValueStore, MemoryStore,
    SaveOutcome, SavedCafes, StoreError,
};
pub use deck::{Swipe, SwipeDeck, SwipeOutcome};
pub use config::{ProxyConfig, SearchDefaults};
pub use error::ProxyError;
pub use places::{NearbyRequest, PlacesClient};
pub use api::{create_router, run_server};
