//! Carbon emissions estimation engine.
//!
//! This module answers: "how much CO2 does this itinerary emit?"
//!
//! Each segment's great-circle distance is computed with the haversine
//! formula, multiplied by a fixed per-mode emission factor, and the
//! segments are then summed into an itinerary total and a per-mode
//! breakdown. Everything here is pure and synchronous.

mod aggregate;
mod distance;
mod estimate;
mod model;

pub use aggregate::{EmissionsByMode, EmissionsSummary, aggregate};
pub use distance::{EARTH_RADIUS_KM, distance_km, haversine_km};
pub use estimate::{
    Endpoint, EstimateError, EstimatedSegment, ItineraryEstimate, SegmentInput, estimate_itinerary,
    estimate_segment,
};
pub use model::{emissions_kg, emissions_kg_for_label};
