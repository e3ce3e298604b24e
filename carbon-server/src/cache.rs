//! Caching layer for location search.
//!
//! People retype the same handful of place names while filling in an
//! itinerary, and every remote lookup costs quota. Results are cached per
//! normalized query (trimmed, lowercased) for a fixed TTL. Failed lookups
//! are not cached.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::geocode::{GeocodeError, Geocoder, Place};

/// Cached search result.
type PlacesEntry = Arc<Vec<Place>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 1000,
        }
    }
}

/// Cache key for a free-text query.
fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Geocoder with caching.
///
/// Wraps a `Geocoder` and caches successful search responses.
pub struct CachedGeocoder {
    geocoder: Geocoder,
    places: MokaCache<String, PlacesEntry>,
}

impl CachedGeocoder {
    /// Create a new cached geocoder.
    pub fn new(geocoder: Geocoder, config: &CacheConfig) -> Self {
        let places = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { geocoder, places }
    }

    /// Search for places, using the cache if available.
    pub async fn search(&self, query: &str) -> Result<PlacesEntry, GeocodeError> {
        let key = normalize_query(query);
        if key.is_empty() {
            return Ok(Arc::new(Vec::new()));
        }

        if let Some(cached) = self.places.get(&key).await {
            trace!(query = %key, "location search cache hit");
            return Ok(cached);
        }

        let entry = Arc::new(self.geocoder.search(query).await?);
        self.places.insert(key, entry.clone()).await;

        Ok(entry)
    }

    /// Access the underlying geocoder for operations that bypass cache.
    pub fn geocoder(&self) -> &Geocoder {
        &self.geocoder
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.places.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.places.invalidate_all();
    }
}
