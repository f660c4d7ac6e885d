//! Studyspot: nearby cafe discovery with review-based study scoring
//!
//! The pure core (classifier, badge, distance, hours, adapter) lives in
//! [`core`] next to the Places proxy and local persistence. Wire and record
//! types live in [`types`].

pub mod core;
pub mod types;

// =============================================================================
// GEOMETRY
// =============================================================================

/// Earth radius used by the haversine distance (miles)
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Distances below this render as "< 0.1 mi"
pub const NEARBY_DISTANCE_MILES: f64 = 0.1;

// =============================================================================
// SEARCH DEFAULTS
// =============================================================================

/// Nearby search radius (meters)
pub const DEFAULT_RADIUS_METERS: f64 = 1500.0;

/// Maximum places requested per search
pub const DEFAULT_MAX_RESULTS: u32 = 20;

/// Place types filtered out of nearby search when exclusion is on
pub const EXCLUDED_PLACE_TYPES: [&str; 3] = ["museum", "art_gallery", "tourist_attraction"];

/// Width requested for place photos (pixels)
pub const PHOTO_MAX_WIDTH_PX: u32 = 600;

/// Places API root
pub const PLACES_BASE_URL: &str = "https://places.googleapis.com";

/// Fields requested from nearby search
pub const NEARBY_FIELD_MASK: &str = "places.displayName,places.id,places.rating,places.formattedAddress,places.googleMapsUri,places.photos,places.currentOpeningHours,places.location,places.reviews";

// =============================================================================
// PRESENTATION
// =============================================================================

/// Image shown until a real photo URL is resolved
pub const PLACEHOLDER_PHOTO_URL: &str = "https://via.placeholder.com/250x150?text=No+Image";

/// Name used when a place has no display name
pub const UNKNOWN_CAFE_NAME: &str = "Unknown cafe";

// =============================================================================
// PERSISTENCE
// =============================================================================

/// Store key of the saved-cafes list
pub const SAVED_CAFES_KEY: &str = "savedCafes";

/// Store key of the last known location
pub const CACHED_LOCATION_KEY: &str = "cachedLocation";

/// How long a cached location stays usable (10 minutes)
pub const LOCATION_CACHE_MS: i64 = 10 * 60 * 1000;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
