//! Stored record types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::{SegmentOrder, TransportMode};

/// Fields needed to create an itinerary record.
#[derive(Debug, Clone)]
pub struct NewItinerary {
    pub traveler_name: String,
    pub base_location: String,
    pub travel_date: NaiveDate,
    pub multiple_transport: bool,
    pub total_emissions: f64,
}

/// A stored itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryRecord {
    pub id: u64,
    pub traveler_name: String,
    pub base_location: String,
    pub travel_date: NaiveDate,
    pub multiple_transport: bool,
    /// kg CO2 over all segments
    pub total_emissions: f64,
    pub created_at: DateTime<Utc>,
}

/// Fields needed to create a segment record.
#[derive(Debug, Clone)]
pub struct NewSegment {
    pub itinerary_id: u64,
    pub segment_order: SegmentOrder,
    pub transport_mode: TransportMode,
    pub from_location: String,
    pub from_coordinates: String,
    pub to_location: String,
    pub to_coordinates: String,
    pub distance: f64,
    pub emissions: f64,
}

/// A stored segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentRecord {
    pub id: u64,
    pub itinerary_id: u64,
    pub segment_order: SegmentOrder,
    pub transport_mode: TransportMode,
    pub from_location: String,
    pub from_coordinates: String,
    pub to_location: String,
    pub to_coordinates: String,
    /// km
    pub distance: f64,
    /// kg CO2
    pub emissions: f64,
}

impl SegmentRecord {
    pub(crate) fn from_new(id: u64, new: NewSegment) -> Self {
        Self {
            id,
            itinerary_id: new.itinerary_id,
            segment_order: new.segment_order,
            transport_mode: new.transport_mode,
            from_location: new.from_location,
            from_coordinates: new.from_coordinates,
            to_location: new.to_location,
            to_coordinates: new.to_coordinates,
            distance: new.distance,
            emissions: new.emissions,
        }
    }
}
