//! Great-circle distance between coordinates (haversine)

use crate::types::Coordinates;
use crate::{EARTH_RADIUS_MILES, NEARBY_DISTANCE_MILES};

/// Distance in miles between two points given in degrees
pub fn distance_miles(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Distance from the user to a place, when both positions are usable
///
/// Zero or missing components mean "unknown position", not the equator.
pub fn distance_between(user: Option<Coordinates>, place: Option<Coordinates>) -> Option<f64> {
    match (user, place) {
        (Some(u), Some(p)) if u.is_usable() && p.is_usable() => {
            Some(distance_miles(u.lat, u.lng, p.lat, p.lng))
        }
        _ => None,
    }
}

/// Card text for a distance: "< 0.1 mi" or one decimal, e.g. "2.3 mi"
pub fn format_distance(miles: f64) -> String {
    if miles < NEARBY_DISTANCE_MILES {
        "< 0.1 mi".to_string()
    } else {
        format!("{:.1} mi", miles)
    }
}
