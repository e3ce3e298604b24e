//! Itinerary persistence.
//!
//! The store holds two record kinds, itineraries and their segments, and
//! is the only place computed emissions are written to. The emissions
//! engine never talks to it directly; the submission pipeline does.

mod error;
mod memory;
mod records;

use std::future::Future;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use records::{ItineraryRecord, NewItinerary, NewSegment, SegmentRecord};

/// Storage operations the submission pipeline and read endpoints rely on.
pub trait ItineraryStore: Send + Sync {
    /// Insert an itinerary, assigning it a fresh id.
    fn create_itinerary(&self, new: NewItinerary) -> impl Future<Output = ItineraryRecord> + Send;

    /// Insert a segment of an existing itinerary, assigning it a fresh id.
    fn create_segment(
        &self,
        new: NewSegment,
    ) -> impl Future<Output = Result<SegmentRecord, StoreError>> + Send;

    /// Overwrite an itinerary's total emissions.
    fn update_itinerary_emissions(
        &self,
        id: u64,
        total: f64,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn get_itinerary(&self, id: u64) -> impl Future<Output = Option<ItineraryRecord>> + Send;

    /// Segments of one itinerary, sorted by segment order.
    fn get_segments_by_itinerary_id(
        &self,
        itinerary_id: u64,
    ) -> impl Future<Output = Vec<SegmentRecord>> + Send;

    /// All itineraries, sorted by id.
    fn get_all_itineraries(&self) -> impl Future<Output = Vec<ItineraryRecord>> + Send;
}
