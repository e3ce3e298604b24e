//! Location search provider.
//!
//! Turns free-text place names into `(address, "lat,lng")` candidates
//! for the itinerary form. The coordinate strings are passed on verbatim;
//! the emissions engine validates them when the itinerary is submitted.
//!
//! Without an API key a mock provider answers every query with a sample
//! location so the rest of the service still works.

mod client;
mod error;
mod mock;

use serde::Serialize;

pub use client::{GeocodeConfig, GoogleGeocoder};
pub use error::GeocodeError;
pub use mock::{MockGeocoder, SAMPLE_COORDINATES};

/// A candidate location returned by a search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    /// Display address
    pub address: String,
    /// `"lat,lng"` in degrees
    pub coordinates: String,
}

/// The configured location search backend.
#[derive(Debug, Clone)]
pub enum Geocoder {
    Google(GoogleGeocoder),
    Mock(MockGeocoder),
}

impl Geocoder {
    /// Use Google when an API key is available, the mock otherwise.
    pub fn from_api_key(
        api_key: Option<&str>,
        base_url: &str,
        timeout_secs: u64,
    ) -> Result<Self, GeocodeError> {
        match api_key.map(str::trim).filter(|k| !k.is_empty()) {
            Some(key) => {
                let config = GeocodeConfig::new(key)
                    .with_base_url(base_url)
                    .with_timeout(timeout_secs);
                Ok(Geocoder::Google(GoogleGeocoder::new(config)?))
            }
            None => Ok(Geocoder::Mock(MockGeocoder)),
        }
    }

    /// Search for places. Blank queries return no places.
    pub async fn search(&self, query: &str) -> Result<Vec<Place>, GeocodeError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        match self {
            Geocoder::Google(client) => client.search(query).await,
            Geocoder::Mock(mock) => Ok(mock.search(query)),
        }
    }

    /// Whether this is the development mock.
    pub fn is_mock(&self) -> bool {
        matches!(self, Geocoder::Mock(_))
    }
}
