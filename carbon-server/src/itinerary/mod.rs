//! Itinerary submission.
//!
//! Sits between the HTTP layer and the emissions engine: checks the
//! submission boundary (segment count, required fields, travel date),
//! runs the engine over every segment, and only then writes the
//! itinerary and its segments through the store.

mod error;
mod request;
mod submit;

pub use error::SubmitError;
pub use request::{SegmentSubmission, SubmitItinerary, ValidatedItinerary, validate};
pub use submit::{ItineraryDetails, load, preview, submit};
