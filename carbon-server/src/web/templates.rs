//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::TransportMode;
use crate::itinerary::ItineraryDetails;
use crate::store::{ItineraryRecord, SegmentRecord};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page listing recorded itineraries.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub itineraries: Vec<ItinerarySummaryView>,
}

/// Single itinerary with segments and per-mode breakdown.
#[derive(Template)]
#[template(path = "itinerary.html")]
pub struct ItineraryTemplate {
    pub itinerary: ItineraryView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Format kilograms or kilometres to one decimal place.
fn one_decimal(value: f64) -> String {
    format!("{value:.1}")
}

/// One row of the itinerary list.
#[derive(Debug, Clone)]
pub struct ItinerarySummaryView {
    pub id: u64,
    pub traveler_name: String,
    pub travel_date: String,
    pub total_emissions: String,
}

impl ItinerarySummaryView {
    /// Create from a stored itinerary.
    pub fn from_record(record: &ItineraryRecord) -> Self {
        Self {
            id: record.id,
            traveler_name: record.traveler_name.clone(),
            travel_date: record.travel_date.format("%Y-%m-%d").to_string(),
            total_emissions: one_decimal(record.total_emissions),
        }
    }
}

/// Itinerary view model for templates.
#[derive(Debug, Clone)]
pub struct ItineraryView {
    pub id: u64,
    pub traveler_name: String,
    pub base_location: String,
    pub travel_date: String,
    pub total_emissions: String,
    pub segments: Vec<SegmentView>,
    pub modes: Vec<ModeView>,
}

impl ItineraryView {
    /// Create from stored details.
    pub fn from_details(details: &ItineraryDetails) -> Self {
        let record = &details.itinerary;
        let total = record.total_emissions;

        let modes = TransportMode::ALL
            .into_iter()
            .map(|mode| {
                let kg = details.emissions_by_mode.get(mode);
                ModeView {
                    label: mode.label().to_string(),
                    emissions: one_decimal(kg),
                    share_percent: if total > 0.0 {
                        (kg / total * 100.0).round() as u32
                    } else {
                        0
                    },
                }
            })
            .collect();

        Self {
            id: record.id,
            traveler_name: record.traveler_name.clone(),
            base_location: record.base_location.clone(),
            travel_date: record.travel_date.format("%Y-%m-%d").to_string(),
            total_emissions: one_decimal(total),
            segments: details.segments.iter().map(SegmentView::from_record).collect(),
            modes,
        }
    }
}

/// Segment view model for templates.
#[derive(Debug, Clone)]
pub struct SegmentView {
    pub order: usize,
    pub mode: String,
    pub from_location: String,
    pub to_location: String,
    pub distance: String,
    pub emissions: String,
}

impl SegmentView {
    /// Create from a stored segment.
    pub fn from_record(record: &SegmentRecord) -> Self {
        Self {
            order: record.segment_order.get(),
            mode: record.transport_mode.label().to_string(),
            from_location: record.from_location.clone(),
            to_location: record.to_location.clone(),
            distance: one_decimal(record.distance),
            emissions: one_decimal(record.emissions),
        }
    }
}

/// Per-mode emissions row.
#[derive(Debug, Clone)]
pub struct ModeView {
    pub label: String,
    pub emissions: String,
    /// Share of the itinerary total, rounded
    pub share_percent: u32,
}

impl ModeView {
    /// Whether this mode contributed any emissions.
    pub fn is_used(&self) -> bool {
        self.emissions != "0.0"
    }
}
