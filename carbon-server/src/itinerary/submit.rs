//! Running submissions through the engine and the store.

use serde::Serialize;
use tracing::info;

use crate::emissions::{EmissionsByMode, ItineraryEstimate, aggregate, estimate_itinerary};
use crate::store::{ItineraryRecord, ItineraryStore, NewItinerary, NewSegment, SegmentRecord};

use super::error::SubmitError;
use super::request::{SubmitItinerary, validate};

/// A stored itinerary with its segments and per-mode breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDetails {
    #[serde(flatten)]
    pub itinerary: ItineraryRecord,
    pub segments: Vec<SegmentRecord>,
    pub emissions_by_mode: EmissionsByMode,
}

/// Validate and estimate a submission without storing anything.
pub fn preview(request: &SubmitItinerary) -> Result<ItineraryEstimate, SubmitError> {
    let validated = validate(request)?;
    Ok(estimate_itinerary(&validated.inputs())?)
}

/// Validate, estimate and store a submission.
///
/// Every segment is estimated before the first write, so an invalid
/// segment anywhere leaves the store untouched.
pub async fn submit<S: ItineraryStore>(
    store: &S,
    request: &SubmitItinerary,
) -> Result<ItineraryDetails, SubmitError> {
    let validated = validate(request)?;
    let estimate = estimate_itinerary(&validated.inputs())?;
    let total = estimate.summary.total_emissions;

    let itinerary = store
        .create_itinerary(NewItinerary {
            traveler_name: validated.traveler_name.to_string(),
            base_location: validated.base_location.to_string(),
            travel_date: validated.travel_date,
            multiple_transport: validated.multiple_transport,
            total_emissions: 0.0,
        })
        .await;

    let mut segments = Vec::with_capacity(estimate.segments.len());
    for (submitted, computed) in validated.segments.iter().zip(&estimate.segments) {
        let record = store
            .create_segment(NewSegment {
                itinerary_id: itinerary.id,
                segment_order: computed.segment_order,
                transport_mode: computed.transport_mode,
                from_location: submitted.from_location.trim().to_string(),
                from_coordinates: submitted.from_coordinates.trim().to_string(),
                to_location: submitted.to_location.trim().to_string(),
                to_coordinates: submitted.to_coordinates.trim().to_string(),
                distance: computed.distance,
                emissions: computed.emissions,
            })
            .await?;
        segments.push(record);
    }

    store.update_itinerary_emissions(itinerary.id, total).await?;

    info!(
        id = itinerary.id,
        segments = segments.len(),
        total_emissions_kg = total,
        "itinerary created"
    );

    Ok(ItineraryDetails {
        itinerary: ItineraryRecord {
            total_emissions: total,
            ..itinerary
        },
        segments,
        emissions_by_mode: estimate.summary.emissions_by_mode,
    })
}

/// Load a stored itinerary with its segments.
///
/// The per-mode breakdown is recomputed from the stored segments.
pub async fn load<S: ItineraryStore>(store: &S, id: u64) -> Result<ItineraryDetails, SubmitError> {
    let itinerary = store
        .get_itinerary(id)
        .await
        .ok_or(SubmitError::NotFound(id))?;
    let segments = store.get_segments_by_itinerary_id(id).await;
    let summary = aggregate(segments.iter().map(|s| (s.transport_mode, s.emissions)));

    Ok(ItineraryDetails {
        itinerary,
        segments,
        emissions_by_mode: summary.emissions_by_mode,
    })
}

#[cfg(test)]
mod tests {
    use super::super::request::fixtures::*;
    use super::*;
    use crate::domain::TransportMode;
    use crate::emissions::EstimateError;
    use crate::store::MemoryStore;

    fn approx(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected} ± {tolerance}, got {actual}"
        );
    }

    #[tokio::test]
    async fn single_car_segment() {
        let store = MemoryStore::new();
        let req = request(vec![segment("car", DELHI, MUMBAI)]);

        let details = submit(&store, &req).await.unwrap();

        assert_eq!(details.itinerary.id, 1);
        approx(details.itinerary.total_emissions, 229.62, 0.1);
        approx(details.emissions_by_mode.car, 229.62, 0.1);
        assert_eq!(details.emissions_by_mode.air, 0.0);

        assert_eq!(details.segments.len(), 1);
        let seg = &details.segments[0];
        assert_eq!(seg.itinerary_id, 1);
        assert_eq!(seg.segment_order.get(), 1);
        assert_eq!(seg.transport_mode, TransportMode::Car);
        approx(seg.distance, 1148.09, 0.5);
        approx(seg.emissions, 229.62, 0.1);
    }

    #[tokio::test]
    async fn stored_total_matches_computed() {
        let store = MemoryStore::new();
        let req = request(vec![
            segment("car", DELHI, MUMBAI),
            segment("air", MUMBAI, BANGALORE),
        ]);

        let details = submit(&store, &req).await.unwrap();
        approx(details.itinerary.total_emissions, 356.42, 0.2);
        approx(details.emissions_by_mode.car, 229.62, 0.1);
        approx(details.emissions_by_mode.air, 126.80, 0.1);

        let stored = store.get_itinerary(details.itinerary.id).await.unwrap();
        assert_eq!(stored.total_emissions, details.itinerary.total_emissions);

        let segments = store.get_segments_by_itinerary_id(stored.id).await;
        let orders: Vec<_> = segments.iter().map(|s| s.segment_order.get()).collect();
        assert_eq!(orders, vec![1, 2]);
        let sum: f64 = segments.iter().map(|s| s.emissions).sum();
        approx(sum, stored.total_emissions, 1e-9);
    }

    #[tokio::test]
    async fn too_many_segments_writes_nothing() {
        let store = MemoryStore::new();
        let req = request(vec![segment("car", DELHI, MUMBAI); 6]);

        let err = submit(&store, &req).await.unwrap_err();
        assert_eq!(err, SubmitError::SegmentCountViolation { count: 6 });
        assert_eq!(store.itinerary_count().await, 0);
        assert_eq!(store.segment_count().await, 0);
    }

    #[tokio::test]
    async fn invalid_coordinate_writes_nothing() {
        let store = MemoryStore::new();
        let req = request(vec![
            segment("car", DELHI, MUMBAI),
            segment("train", MUMBAI, "not a place"),
            segment("bus", BANGALORE, DELHI),
        ]);

        let err = submit(&store, &req).await.unwrap_err();
        assert!(matches!(
            err,
            SubmitError::Estimate(EstimateError::InvalidCoordinate { .. })
        ));
        assert!(err.is_validation());
        assert_eq!(store.itinerary_count().await, 0);
        assert_eq!(store.segment_count().await, 0);
    }

    #[tokio::test]
    async fn invalid_mode_rejected() {
        let store = MemoryStore::new();
        let req = request(vec![segment("hovercraft", DELHI, MUMBAI)]);

        let err = submit(&store, &req).await.unwrap_err();
        assert!(matches!(
            err,
            SubmitError::Estimate(EstimateError::InvalidMode { .. })
        ));
        assert_eq!(store.itinerary_count().await, 0);
    }

    #[tokio::test]
    async fn load_roundtrip() {
        let store = MemoryStore::new();
        let req = request(vec![
            segment("train", DELHI, MUMBAI),
            segment("bike", MUMBAI, BANGALORE),
        ]);
        let created = submit(&store, &req).await.unwrap();

        let loaded = load(&store, created.itinerary.id).await.unwrap();
        assert_eq!(loaded, created);
        assert_eq!(loaded.emissions_by_mode.bike, 0.0);
        approx(loaded.emissions_by_mode.sum(), loaded.itinerary.total_emissions, 1e-9);
    }

    #[tokio::test]
    async fn load_missing() {
        let store = MemoryStore::new();
        assert_eq!(load(&store, 9).await.unwrap_err(), SubmitError::NotFound(9));
    }

    #[test]
    fn preview_computes_without_store() {
        let req = request(vec![
            segment("car", DELHI, MUMBAI),
            segment("air", MUMBAI, BANGALORE),
        ]);
        let estimate = preview(&req).unwrap();
        approx(estimate.summary.total_emissions, 356.42, 0.2);
        assert_eq!(estimate.segments.len(), 2);
    }

    #[test]
    fn preview_validates_count() {
        let req = request(vec![]);
        assert_eq!(
            preview(&req).unwrap_err(),
            SubmitError::SegmentCountViolation { count: 0 }
        );
    }

    #[test]
    fn details_serialize_flat() {
        let details = ItineraryDetails {
            itinerary: ItineraryRecord {
                id: 4,
                traveler_name: "Asha Rao".into(),
                base_location: "delhi".into(),
                travel_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
                multiple_transport: false,
                total_emissions: 5.0,
                created_at: chrono::Utc::now(),
            },
            segments: vec![],
            emissions_by_mode: EmissionsByMode::default(),
        };
        let json = serde_json::to_value(&details).unwrap();

        assert_eq!(json["id"], 4);
        assert_eq!(json["travelerName"], "Asha Rao");
        assert_eq!(json["travelDate"], "2024-03-15");
        assert_eq!(json["totalEmissions"], 5.0);
        assert!(json["createdAt"].is_string());
        assert!(json["segments"].as_array().unwrap().is_empty());
        assert_eq!(json["emissionsByMode"]["train"], 0.0);
    }
}
