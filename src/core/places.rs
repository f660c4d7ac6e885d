//! Places API client
//!
//! Injects the API key server-side and returns upstream JSON untouched.
//! Non-success answers become `ProxyError::Upstream` carrying the status
//! and body so callers can pass them through.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::config::ProxyConfig;
use crate::core::error::ProxyError;
use crate::types::NearbySearchResponse;
use crate::NEARBY_FIELD_MASK;

/// Nearby search request, as sent by clients
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyRequest {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub max_results: Option<u32>,
}

impl NearbyRequest {
    pub fn at(lat: f64, lng: f64) -> Self {
        Self {
            lat: Some(lat),
            lng: Some(lng),
            ..Self::default()
        }
    }

    /// Both coordinates, present and non-zero
    pub fn coordinates(&self) -> Result<(f64, f64), ProxyError> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) if lat != 0.0 && lng != 0.0 && lat.is_finite() && lng.is_finite() => {
                Ok((lat, lng))
            }
            _ => Err(ProxyError::MissingCoordinates),
        }
    }
}

// Upstream request body for places:searchNearby

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchNearbyBody {
    included_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    excluded_types: Option<Vec<String>>,
    max_result_count: u32,
    location_restriction: LocationRestriction,
}

#[derive(Debug, Serialize)]
struct LocationRestriction {
    circle: Circle,
}

#[derive(Debug, Serialize)]
struct Circle {
    center: Center,
    radius: f64,
}

#[derive(Debug, Serialize)]
struct Center {
    latitude: f64,
    longitude: f64,
}

/// HTTP client for the Places API
#[derive(Debug, Clone)]
pub struct PlacesClient {
    http: reqwest::Client,
    config: ProxyConfig,
}

impl PlacesClient {
    pub fn new(config: ProxyConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    fn api_key(&self) -> Result<&str, ProxyError> {
        self.config.api_key.as_deref().ok_or(ProxyError::MissingApiKey)
    }

    /// Nearby cafes around the request's coordinates, raw upstream JSON
    pub async fn search_nearby(&self, request: &NearbyRequest) -> Result<Value, ProxyError> {
        let api_key = self.api_key()?;
        let (lat, lng) = request.coordinates()?;
        let search = &self.config.search;

        let body = SearchNearbyBody {
            included_types: vec!["cafe".to_string()],
            excluded_types: search.excluded_types(),
            max_result_count: request.max_results.unwrap_or(search.max_results),
            location_restriction: LocationRestriction {
                circle: Circle {
                    center: Center { latitude: lat, longitude: lng },
                    radius: request.radius.unwrap_or(search.radius_meters),
                },
            },
        };

        let url = format!("{}/v1/places:searchNearby", self.config.places_base_url);
        let response = self
            .http
            .post(&url)
            .header("X-Goog-Api-Key", api_key)
            .header("X-Goog-FieldMask", NEARBY_FIELD_MASK)
            .json(&body)
            .send()
            .await
            .map_err(ProxyError::NearbyFetch)?;

        let status = response.status();
        let data: Value = response.json().await.map_err(ProxyError::NearbyFetch)?;

        if !status.is_success() {
            log::error!("Google API error: {} {}", status.as_u16(), data);
            return Err(ProxyError::Upstream { status: status.as_u16(), body: data });
        }

        Ok(data)
    }

    /// Nearby search parsed into place records
    pub async fn nearby_places(&self, request: &NearbyRequest) -> Result<NearbySearchResponse, ProxyError> {
        let data = self.search_nearby(request).await?;
        serde_json::from_value(data).map_err(ProxyError::UnexpectedResponse)
    }

    /// Photo media lookup, raw upstream JSON (`{name, photoUri}`)
    pub async fn photo_media(&self, name: &str) -> Result<Value, ProxyError> {
        let api_key = self.api_key()?;
        let name = validate_photo_name(name)?;

        let url = format!(
            "{}/v1/{}/media?maxWidthPx={}&skipHttpRedirect=true",
            self.config.places_base_url, name, self.config.search.photo_max_width
        );
        let response = self
            .http
            .get(&url)
            .header("X-Goog-Api-Key", api_key)
            .send()
            .await
            .map_err(ProxyError::PhotoFetch)?;

        let status = response.status();
        let data: Value = response.json().await.map_err(ProxyError::PhotoFetch)?;

        if !status.is_success() {
            log::error!("Photo API error: {} {}", status.as_u16(), data);
            return Err(ProxyError::Upstream { status: status.as_u16(), body: data });
        }

        Ok(data)
    }

    /// Resolved photo URL, or `None` when anything goes wrong
    pub async fn photo_uri(&self, name: &str) -> Option<String> {
        match self.photo_media(name).await {
            Ok(data) => data.get("photoUri").and_then(Value::as_str).map(str::to_string),
            Err(e) => {
                log::warn!("Photo lookup for {} failed: {}", name, e);
                None
            }
        }
    }
}

/// Photo names are Places resource paths: `places/<id>/photos/<ref>`
fn validate_photo_name(name: &str) -> Result<&str, ProxyError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ProxyError::MissingPhotoName);
    }
    let bad = !name.starts_with("places/")
        || name.contains("..")
        || name.contains(['?', '#', '&', '\\']);
    if bad {
        return Err(ProxyError::InvalidPhotoName);
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SearchDefaults;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_coordinates_required() {
        assert!(NearbyRequest::default().coordinates().is_err());
        assert!(NearbyRequest::at(0.0, -74.0).coordinates().is_err());
        assert_eq!(NearbyRequest::at(40.0, -74.0).coordinates().unwrap(), (40.0, -74.0));
    }

    #[test]
    fn test_request_field_names() {
        let req: NearbyRequest =
            serde_json::from_str(r#"{"lat": 1.5, "lng": 2.5, "radius": 3500, "maxResults": 5}"#).unwrap();
        assert_eq!(req.radius, Some(3500.0));
        assert_eq!(req.max_results, Some(5));
    }

    #[test]
    fn test_search_body_shape() {
        let search = SearchDefaults::default();
        let body = SearchNearbyBody {
            included_types: vec!["cafe".to_string()],
            excluded_types: search.excluded_types(),
            max_result_count: 20,
            location_restriction: LocationRestriction {
                circle: Circle {
                    center: Center { latitude: 1.0, longitude: 2.0 },
                    radius: 1500.0,
                },
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "includedTypes": ["cafe"],
                "excludedTypes": ["museum", "art_gallery", "tourist_attraction"],
                "maxResultCount": 20,
                "locationRestriction": {
                    "circle": {"center": {"latitude": 1.0, "longitude": 2.0}, "radius": 1500.0}
                }
            })
        );
    }

    #[test]
    fn test_photo_name_validation() {
        assert!(matches!(validate_photo_name(""), Err(ProxyError::MissingPhotoName)));
        assert!(matches!(validate_photo_name("foo/bar"), Err(ProxyError::InvalidPhotoName)));
        assert!(matches!(validate_photo_name("places/../x"), Err(ProxyError::InvalidPhotoName)));
        assert!(matches!(validate_photo_name("places/a/photos/b?x=1"), Err(ProxyError::InvalidPhotoName)));
        assert_eq!(validate_photo_name("places/a/photos/b").unwrap(), "places/a/photos/b");
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        let client = PlacesClient::new(ProxyConfig::default());
        let err = client.search_nearby(&NearbyRequest::at(1.0, 2.0)).await.unwrap_err();
        assert!(matches!(err, ProxyError::MissingApiKey));
    }
}
