//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedGeocoder;
use crate::store::MemoryStore;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Itinerary and segment records
    pub store: Arc<MemoryStore>,

    /// Cached location search
    pub geocoder: Arc<CachedGeocoder>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: MemoryStore, geocoder: CachedGeocoder) -> Self {
        Self {
            store: Arc::new(store),
            geocoder: Arc::new(geocoder),
        }
    }
}
