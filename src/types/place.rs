//! Places API record shapes
//!
//! Every field is optional and `null` is accepted anywhere, including list
//! fields. Absence degrades to the documented fallbacks in the adapter.

use serde::{Deserialize, Deserializer, Serialize};

/// Response of a nearby search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbySearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub places: Vec<Place>,
}

/// One raw place result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: Option<LocalizedText>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub google_maps_uri: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub photos: Vec<PlacePhoto>,
    #[serde(default)]
    pub current_opening_hours: Option<OpeningHours>,
    #[serde(default)]
    pub location: Option<LatLng>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reviews: Vec<PlaceReview>,
}

impl Place {
    /// Display name text, if any
    pub fn name(&self) -> Option<&str> {
        self.display_name.as_ref().and_then(|n| n.text.as_deref())
    }

    /// Reference of the first photo
    pub fn first_photo_name(&self) -> Option<&str> {
        self.photos.first().and_then(|p| p.name.as_deref())
    }

    /// Review bodies; missing text reads as ""
    pub fn review_texts(&self) -> impl Iterator<Item = &str> {
        self.reviews.iter().map(PlaceReview::body)
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.location.as_ref().and_then(LatLng::coordinates)
    }
}

/// `{ text }` wrapper used for names and review bodies
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlacePhoto {
    /// Photo resource name, e.g. `places/abc/photos/xyz`
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaceReview {
    #[serde(default)]
    pub text: Option<LocalizedText>,
}

impl PlaceReview {
    /// Review body, "" when missing
    pub fn body(&self) -> &str {
        self.text
            .as_ref()
            .and_then(|t| t.text.as_deref())
            .unwrap_or("")
    }
}

/// Current opening hours block
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    #[serde(default)]
    pub open_now: Option<bool>,
    /// Precomputed lines like "Monday: 7:00 AM – 6:00 PM"
    #[serde(default)]
    pub weekday_descriptions: Option<Vec<String>>,
    #[serde(default)]
    pub periods: Option<Vec<Period>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Period {
    #[serde(default)]
    pub open: Option<TimePoint>,
    #[serde(default)]
    pub close: Option<TimePoint>,
}

/// Weekday (0 = Sunday) and time of day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePoint {
    #[serde(default)]
    pub day: Option<u8>,
    #[serde(default)]
    pub hour: Option<u8>,
    #[serde(default)]
    pub minute: Option<u8>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LatLng {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl LatLng {
    /// Both components, if present
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
            _ => None,
        }
    }
}

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Usable for distance: finite and non-zero in both components
    pub fn is_usable(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite() && self.lat != 0.0 && self.lng != 0.0
    }
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_parses() {
        let place: Place = serde_json::from_str("{}").unwrap();
        assert!(place.id.is_none());
        assert!(place.name().is_none());
        assert!(place.reviews.is_empty());
        assert!(place.coordinates().is_none());
    }

    #[test]
    fn test_nulls_tolerated() {
        let place: Place = serde_json::from_str(
            r#"{"id": null, "photos": null, "reviews": null, "location": {"latitude": null}}"#,
        )
        .unwrap();
        assert!(place.photos.is_empty());
        assert!(place.reviews.is_empty());
        assert!(place.coordinates().is_none());
    }

    #[test]
    fn test_review_without_text_reads_empty() {
        let place: Place = serde_json::from_str(
            r#"{"reviews": [{}, {"text": {}}, {"text": {"text": "quiet"}}]}"#,
        )
        .unwrap();
        let texts: Vec<&str> = place.review_texts().collect();
        assert_eq!(texts, vec!["", "", "quiet"]);
    }

    #[test]
    fn test_full_place_parses() {
        let json = r#"{
            "id": "abc",
            "displayName": {"text": "Bean There", "languageCode": "en"},
            "rating": 4.6,
            "googleMapsUri": "https://maps.google.com/?cid=1",
            "photos": [{"name": "places/abc/photos/p1"}, {"name": "places/abc/photos/p2"}],
            "currentOpeningHours": {"openNow": true, "periods": [
                {"open": {"day": 1, "hour": 8, "minute": 0}, "close": {"day": 1, "hour": 18, "minute": 0}}
            ]},
            "location": {"latitude": 40.7, "longitude": -74.0}
        }"#;
        let place: Place = serde_json::from_str(json).unwrap();
        assert_eq!(place.name(), Some("Bean There"));
        assert_eq!(place.first_photo_name(), Some("places/abc/photos/p1"));
        assert_eq!(place.coordinates(), Some(Coordinates::new(40.7, -74.0)));
        let hours = place.current_opening_hours.unwrap();
        assert_eq!(hours.open_now, Some(true));
        assert_eq!(hours.periods.unwrap().len(), 1);
    }

    #[test]
    fn test_zero_coordinates_not_usable() {
        assert!(!Coordinates::new(0.0, -74.0).is_usable());
        assert!(!Coordinates::new(40.7, 0.0).is_usable());
        assert!(!Coordinates::new(f64::NAN, 1.0).is_usable());
        assert!(Coordinates::new(40.7, -74.0).is_usable());
    }
}
