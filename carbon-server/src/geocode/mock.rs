//! Mock location search for development without an API key.

use super::Place;

/// Coordinates every mock result points at (central New Delhi).
pub const SAMPLE_COORDINATES: &str = "28.6139,77.2090";

/// Location search that answers every query with one sample place.
///
/// Lets the form and submission flow be exercised end to end without
/// geocoding credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockGeocoder;

impl MockGeocoder {
    /// Return a single sample place named after the query.
    pub fn search(&self, query: &str) -> Vec<Place> {
        vec![Place {
            address: format!("{query} (Sample Location)"),
            coordinates: SAMPLE_COORDINATES.to_string(),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinate;

    #[test]
    fn names_place_after_query() {
        let places = MockGeocoder.search("Mumbai");
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].address, "Mumbai (Sample Location)");
        assert_eq!(places[0].coordinates, SAMPLE_COORDINATES);
    }

    #[test]
    fn sample_coordinates_are_valid() {
        assert!(Coordinate::parse(SAMPLE_COORDINATES).is_ok());
    }
}
