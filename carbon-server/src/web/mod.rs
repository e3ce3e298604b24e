//! Web layer for the carbon estimator.
//!
//! Provides HTTP endpoints for location search and itinerary submission,
//! plus server-rendered pages for browsing stored itineraries.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
