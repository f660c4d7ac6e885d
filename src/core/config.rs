//! Proxy and search configuration

use crate::{
    DEFAULT_MAX_RESULTS, DEFAULT_RADIUS_METERS, EXCLUDED_PLACE_TYPES, PHOTO_MAX_WIDTH_PX,
    PLACES_BASE_URL,
};

/// Search parameters applied when a request does not set them
#[derive(Debug, Clone, PartialEq)]
pub struct SearchDefaults {
    pub radius_meters: f64,
    pub max_results: u32,
    /// Drop museums, galleries and tourist attractions from results
    pub exclude_non_cafes: bool,
    pub photo_max_width: u32,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            radius_meters: DEFAULT_RADIUS_METERS,
            max_results: DEFAULT_MAX_RESULTS,
            exclude_non_cafes: true,
            photo_max_width: PHOTO_MAX_WIDTH_PX,
        }
    }
}

impl SearchDefaults {
    /// Place types to exclude, if exclusion is on
    pub fn excluded_types(&self) -> Option<Vec<String>> {
        self.exclude_non_cafes
            .then(|| EXCLUDED_PLACE_TYPES.iter().map(|t| t.to_string()).collect())
    }
}

/// Everything the proxy needs to talk to the Places API
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Places API key; requests fail with a configuration error without it
    pub api_key: Option<String>,
    /// Places API root, without trailing slash
    pub places_base_url: String,
    pub search: SearchDefaults,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            places_base_url: PLACES_BASE_URL.to_string(),
            search: SearchDefaults::default(),
        }
    }
}

impl ProxyConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.places_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_search(mut self, search: SearchDefaults) -> Self {
        self.search = search;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProxyConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.places_base_url, "https://places.googleapis.com");
        assert_eq!(config.search.radius_meters, 1500.0);
        assert_eq!(config.search.max_results, 20);
        assert_eq!(config.search.photo_max_width, 600);
    }

    #[test]
    fn test_blank_key_is_missing() {
        assert!(ProxyConfig::new(Some("  ".into())).api_key.is_none());
        assert_eq!(ProxyConfig::new(Some("k".into())).api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let config = ProxyConfig::default().with_base_url("http://127.0.0.1:9000/");
        assert_eq!(config.places_base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_excluded_types_toggle() {
        let mut search = SearchDefaults::default();
        assert_eq!(
            search.excluded_types(),
            Some(vec!["museum".to_string(), "art_gallery".to_string(), "tourist_attraction".to_string()])
        );
        search.exclude_non_cafes = false;
        assert_eq!(search.excluded_types(), None);
    }
}
