//! In-memory itinerary store.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use super::ItineraryStore;
use super::error::StoreError;
use super::records::{ItineraryRecord, NewItinerary, NewSegment, SegmentRecord};

#[derive(Debug)]
struct Tables {
    itineraries: BTreeMap<u64, ItineraryRecord>,
    segments: BTreeMap<u64, SegmentRecord>,
    next_itinerary_id: u64,
    next_segment_id: u64,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            itineraries: BTreeMap::new(),
            segments: BTreeMap::new(),
            next_itinerary_id: 1,
            next_segment_id: 1,
        }
    }
}

/// Thread-safe in-memory store.
///
/// Ids are handed out sequentially per record kind, starting at 1.
/// Cloning shares the underlying tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored itineraries.
    pub async fn itinerary_count(&self) -> usize {
        self.inner.read().await.itineraries.len()
    }

    /// Number of stored segments across all itineraries.
    pub async fn segment_count(&self) -> usize {
        self.inner.read().await.segments.len()
    }
}

impl ItineraryStore for MemoryStore {
    async fn create_itinerary(&self, new: NewItinerary) -> ItineraryRecord {
        let mut tables = self.inner.write().await;
        let id = tables.next_itinerary_id;
        tables.next_itinerary_id += 1;

        let record = ItineraryRecord {
            id,
            traveler_name: new.traveler_name,
            base_location: new.base_location,
            travel_date: new.travel_date,
            multiple_transport: new.multiple_transport,
            total_emissions: new.total_emissions,
            created_at: Utc::now(),
        };
        tables.itineraries.insert(id, record.clone());
        record
    }

    async fn create_segment(&self, new: NewSegment) -> Result<SegmentRecord, StoreError> {
        let mut tables = self.inner.write().await;
        if !tables.itineraries.contains_key(&new.itinerary_id) {
            return Err(StoreError::ItineraryNotFound(new.itinerary_id));
        }

        let id = tables.next_segment_id;
        tables.next_segment_id += 1;

        let record = SegmentRecord::from_new(id, new);
        tables.segments.insert(id, record.clone());
        Ok(record)
    }

    async fn update_itinerary_emissions(&self, id: u64, total: f64) -> Result<(), StoreError> {
        let mut tables = self.inner.write().await;
        let itinerary = tables
            .itineraries
            .get_mut(&id)
            .ok_or(StoreError::ItineraryNotFound(id))?;
        itinerary.total_emissions = total;
        Ok(())
    }

    async fn get_itinerary(&self, id: u64) -> Option<ItineraryRecord> {
        self.inner.read().await.itineraries.get(&id).cloned()
    }

    async fn get_segments_by_itinerary_id(&self, itinerary_id: u64) -> Vec<SegmentRecord> {
        let tables = self.inner.read().await;
        let mut segments: Vec<SegmentRecord> = tables
            .segments
            .values()
            .filter(|s| s.itinerary_id == itinerary_id)
            .cloned()
            .collect();
        segments.sort_by_key(|s| s.segment_order);
        segments
    }

    async fn get_all_itineraries(&self) -> Vec<ItineraryRecord> {
        self.inner.read().await.itineraries.values().cloned().collect()
    }
}
