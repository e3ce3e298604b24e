//! Turning submitted segment strings into computed segments.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::domain::{
    Coordinate, InvalidCoordinate, InvalidMode, InvalidSegmentOrder, SegmentOrder, TransportMode,
};

use super::aggregate::{EmissionsSummary, aggregate};
use super::distance::distance_km;
use super::model::emissions_kg;

/// Which end of a segment a coordinate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    From,
    To,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::From => f.write_str("origin"),
            Endpoint::To => f.write_str("destination"),
        }
    }
}

/// Errors from estimating an itinerary's segments.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    /// Mode label outside the closed mode set
    #[error("segment {order}: {source}")]
    InvalidMode {
        order: SegmentOrder,
        source: InvalidMode,
    },

    /// Coordinate string that doesn't describe a point
    #[error("segment {order} {endpoint}: {source}")]
    InvalidCoordinate {
        order: SegmentOrder,
        endpoint: Endpoint,
        source: InvalidCoordinate,
    },

    /// More segments than an itinerary may hold
    #[error("{0}")]
    TooManySegments(#[from] InvalidSegmentOrder),
}

/// Raw strings describing one segment, as submitted.
#[derive(Debug, Clone, Copy)]
pub struct SegmentInput<'a> {
    pub transport_mode: &'a str,
    pub from_coordinates: &'a str,
    pub to_coordinates: &'a str,
}

/// A segment with its distance and emissions computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatedSegment {
    pub segment_order: SegmentOrder,
    pub transport_mode: TransportMode,
    #[serde(serialize_with = "serialize_coordinate")]
    pub from: Coordinate,
    #[serde(serialize_with = "serialize_coordinate")]
    pub to: Coordinate,
    /// Great-circle distance in km.
    pub distance: f64,
    /// kg CO2.
    pub emissions: f64,
}

fn serialize_coordinate<S: serde::Serializer>(c: &Coordinate, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(c)
}

/// Computed segments of an itinerary and their aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryEstimate {
    pub segments: Vec<EstimatedSegment>,
    #[serde(flatten)]
    pub summary: EmissionsSummary,
}

/// Parse and compute a single segment.
pub fn estimate_segment(
    order: SegmentOrder,
    input: &SegmentInput<'_>,
) -> Result<EstimatedSegment, EstimateError> {
    let mode = TransportMode::parse(input.transport_mode)
        .map_err(|source| EstimateError::InvalidMode { order, source })?;

    let from = Coordinate::parse(input.from_coordinates).map_err(|source| {
        EstimateError::InvalidCoordinate {
            order,
            endpoint: Endpoint::From,
            source,
        }
    })?;
    let to = Coordinate::parse(input.to_coordinates).map_err(|source| {
        EstimateError::InvalidCoordinate {
            order,
            endpoint: Endpoint::To,
            source,
        }
    })?;

    let distance = distance_km(&from, &to);
    let emissions = emissions_kg(mode, distance);

    debug!(
        segment = order.get(),
        mode = %mode,
        distance_km = distance,
        emissions_kg = emissions,
        "estimated segment"
    );

    Ok(EstimatedSegment {
        segment_order: order,
        transport_mode: mode,
        from,
        to,
        distance,
        emissions,
    })
}

/// Estimate every segment in submission order, then aggregate.
///
/// Segments are numbered 1, 2, ... in the order given. The first invalid
/// segment aborts the whole estimate.
pub fn estimate_itinerary(inputs: &[SegmentInput<'_>]) -> Result<ItineraryEstimate, EstimateError> {
    let segments = inputs
        .iter()
        .enumerate()
        .map(|(i, input)| estimate_segment(SegmentOrder::from_index(i)?, input))
        .collect::<Result<Vec<_>, _>>()?;

    let summary = aggregate(segments.iter().map(|s| (s.transport_mode, s.emissions)));

    Ok(ItineraryEstimate { segments, summary })
}
