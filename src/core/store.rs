//! Local persistence: key-value store, saved cafes, location cache
//!
//! Values are JSON strings. The saved list and the location cache only
//! talk to the `KeyValueStore` trait, so any medium can back them.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{CafeRecord, Coordinates};
use crate::{CACHED_LOCATION_KEY, LOCATION_CACHE_MS, SAVED_CAFES_KEY};

/// Store failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("stored value for '{key}' is not valid JSON: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid store key '{0}'")]
    InvalidKey(String),
}

/// String key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(path, value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// SAVED CAFES
// =============================================================================

/// Result of saving a cafe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    AlreadySaved,
}

/// Saved-cafe list kept under one store key
#[derive(Debug)]
pub struct SavedCafes<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SavedCafes<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Saved cafes in the order they were saved
    pub fn list(&self) -> Result<Vec<CafeRecord>, StoreError> {
        match self.store.get(SAVED_CAFES_KEY)? {
            Some(json) => serde_json::from_str(&json).map_err(|source| StoreError::Corrupt {
                key: SAVED_CAFES_KEY.to_string(),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    pub fn contains(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.list()?.iter().any(|c| c.id == id))
    }

    /// Append a snapshot of `cafe` unless one with the same id is saved
    pub fn save(&mut self, cafe: &CafeRecord) -> Result<SaveOutcome, StoreError> {
        let mut saved = self.list()?;
        if saved.iter().any(|c| c.id == cafe.id) {
            return Ok(SaveOutcome::AlreadySaved);
        }
        saved.push(cafe.clone());
        self.write(&saved)?;
        Ok(SaveOutcome::Saved)
    }

    /// Remove every saved cafe with `id`; returns whether anything was removed
    pub fn remove(&mut self, id: &str) -> Result<bool, StoreError> {
        let mut saved = self.list()?;
        let before = saved.len();
        saved.retain(|c| c.id != id);
        if saved.len() == before {
            return Ok(false);
        }
        self.write(&saved)?;
        Ok(true)
    }

    fn write(&mut self, saved: &[CafeRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string(saved).map_err(|source| StoreError::Corrupt {
            key: SAVED_CAFES_KEY.to_string(),
            source,
        })?;
        self.store.set(SAVED_CAFES_KEY, &json)
    }
}

// =============================================================================
// LOCATION CACHE
// =============================================================================

/// Last known location with its capture time (ms since epoch)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CachedLocation {
    pub lat: f64,
    pub lng: f64,
    pub timestamp: i64,
}

impl CachedLocation {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }

    /// Still usable at `now_ms`
    pub fn is_fresh(&self, now_ms: i64) -> bool {
        now_ms.saturating_sub(self.timestamp) < LOCATION_CACHE_MS
    }
}

/// Remember a location captured at `now_ms`
pub fn cache_location<S: KeyValueStore>(
    store: &mut S,
    coords: Coordinates,
    now_ms: i64,
) -> Result<(), StoreError> {
    let cached = CachedLocation {
        lat: coords.lat,
        lng: coords.lng,
        timestamp: now_ms,
    };
    let json = serde_json::to_string(&cached).map_err(|source| StoreError::Corrupt {
        key: CACHED_LOCATION_KEY.to_string(),
        source,
    })?;
    store.set(CACHED_LOCATION_KEY, &json)
}

/// Cached location if it is still fresh at `now_ms`
///
/// An unreadable cache entry counts as no cache.
pub fn cached_location<S: KeyValueStore>(
    store: &S,
    now_ms: i64,
) -> Result<Option<Coordinates>, StoreError> {
    let Some(json) = store.get(CACHED_LOCATION_KEY)? else {
        return Ok(None);
    };
    let cached = serde_json::from_str::<CachedLocation>(&json).ok();
    Ok(cached
        .filter(|c| c.is_fresh(now_ms))
        .map(|c| c.coordinates()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Feature, Rating};
    use pretty_assertions::assert_eq;

    fn cafe(id: &str) -> CafeRecord {
        CafeRecord {
            id: id.to_string(),
            name: format!("Cafe {}", id),
            rating: Rating::Stars(4.0),
            distance: None,
            distance_miles: None,
            maps_uri: String::new(),
            photo: crate::PLACEHOLDER_PHOTO_URL.to_string(),
            photo_name: None,
            hours: None,
            open_now: None,
            address: None,
            location: None,
            study_score: 1,
            study_features: vec![Feature::Wifi],
        }
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_save_dedupes_by_id() {
        let mut saved = SavedCafes::new(MemoryStore::new());
        assert_eq!(saved.save(&cafe("a")).unwrap(), SaveOutcome::Saved);
        assert_eq!(saved.save(&cafe("b")).unwrap(), SaveOutcome::Saved);
        assert_eq!(saved.save(&cafe("a")).unwrap(), SaveOutcome::AlreadySaved);

        let ids: Vec<String> = saved.list().unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_remove() {
        let mut saved = SavedCafes::new(MemoryStore::new());
        saved.save(&cafe("a")).unwrap();
        saved.save(&cafe("b")).unwrap();

        assert!(saved.remove("a").unwrap());
        assert!(!saved.remove("a").unwrap());
        assert!(!saved.contains("a").unwrap());
        assert!(saved.contains("b").unwrap());
    }

    #[test]
    fn test_snapshot_does_not_follow_source() {
        let mut saved = SavedCafes::new(MemoryStore::new());
        let mut original = cafe("a");
        saved.save(&original).unwrap();
        original.name = "Renamed".to_string();

        assert_eq!(saved.list().unwrap()[0].name, "Cafe a");
    }

    #[test]
    fn test_corrupt_list_is_an_error() {
        let mut store = MemoryStore::new();
        store.set(SAVED_CAFES_KEY, "not json").unwrap();
        let saved = SavedCafes::new(store);
        assert!(matches!(saved.list(), Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn test_location_cache_freshness() {
        let mut store = MemoryStore::new();
        let here = Coordinates::new(40.0, -74.0);
        cache_location(&mut store, here, 1_000).unwrap();

        assert_eq!(cached_location(&store, 1_000).unwrap(), Some(here));
        assert_eq!(cached_location(&store, 1_000 + LOCATION_CACHE_MS - 1).unwrap(), Some(here));
        assert_eq!(cached_location(&store, 1_000 + LOCATION_CACHE_MS).unwrap(), None);
    }

    #[test]
    fn test_location_cache_extreme_timestamp() {
        let mut store = MemoryStore::new();
        store
            .set(CACHED_LOCATION_KEY, &format!(r#"{{"lat":1.0,"lng":2.0,"timestamp":{}}}"#, i64::MIN))
            .unwrap();
        assert_eq!(cached_location(&store, i64::MAX).unwrap(), None);
        assert!(!CachedLocation { lat: 1.0, lng: 2.0, timestamp: i64::MIN }.is_fresh(0));
    }

    #[test]
    fn test_location_cache_missing_or_garbled() {
        let mut store = MemoryStore::new();
        assert_eq!(cached_location(&store, 0).unwrap(), None);
        store.set(CACHED_LOCATION_KEY, "{}").unwrap();
        assert_eq!(cached_location(&store, 0).unwrap(), None);
    }
}
