//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::geocode::Place;
use crate::itinerary::ItineraryDetails;

/// Default number of location search results.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Maximum number of location search results.
pub const MAX_SEARCH_LIMIT: usize = 50;

/// Request to search for locations.
#[derive(Debug, Deserialize)]
pub struct LocationSearchRequest {
    /// Free-text query
    #[serde(default)]
    pub q: String,

    /// Maximum number of results
    pub limit: Option<usize>,
}

impl LocationSearchRequest {
    /// Requested limit, defaulted and capped.
    pub fn effective_limit(&self) -> usize {
        self.limit
            .unwrap_or(DEFAULT_SEARCH_LIMIT)
            .min(MAX_SEARCH_LIMIT)
    }
}

/// Response for location search.
#[derive(Debug, Serialize)]
pub struct LocationSearchResponse {
    /// Matching places
    pub places: Vec<Place>,
}

/// Response for a created itinerary.
#[derive(Debug, Serialize)]
pub struct CreateItineraryResponse {
    #[serde(flatten)]
    pub details: ItineraryDetails,

    /// Confirmation for the form
    pub message: String,
}

impl CreateItineraryResponse {
    pub fn new(details: ItineraryDetails) -> Self {
        Self {
            details,
            message: "Itinerary created successfully".to_string(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emissions::EmissionsByMode;
    use crate::store::ItineraryRecord;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn search_limit_defaults_and_caps() {
        let req = LocationSearchRequest {
            q: "Delhi".into(),
            limit: None,
        };
        assert_eq!(req.effective_limit(), 10);

        let req = LocationSearchRequest {
            q: "Delhi".into(),
            limit: Some(500),
        };
        assert_eq!(req.effective_limit(), 50);

        let req = LocationSearchRequest {
            q: "Delhi".into(),
            limit: Some(3),
        };
        assert_eq!(req.effective_limit(), 3);
    }

    #[test]
    fn create_response_shape() {
        let details = ItineraryDetails {
            itinerary: ItineraryRecord {
                id: 1,
                traveler_name: "Asha Rao".into(),
                base_location: "delhi".into(),
                travel_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
                multiple_transport: true,
                total_emissions: 12.5,
                created_at: Utc::now(),
            },
            segments: vec![],
            emissions_by_mode: EmissionsByMode::default(),
        };

        let json = serde_json::to_value(CreateItineraryResponse::new(details)).unwrap();
        assert_eq!(json["message"], "Itinerary created successfully");
        assert_eq!(json["totalEmissions"], 12.5);
        assert_eq!(json["multipleTransport"], true);
        assert!(json["emissionsByMode"].is_object());
    }

    #[test]
    fn place_serializes_fields() {
        let response = LocationSearchResponse {
            places: vec![Place {
                address: "Pune (Sample Location)".into(),
                coordinates: "28.6139,77.2090".into(),
            }],
        };
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["places"][0]["address"], "Pune (Sample Location)");
        assert_eq!(json["places"][0]["coordinates"], "28.6139,77.2090");
    }
}
