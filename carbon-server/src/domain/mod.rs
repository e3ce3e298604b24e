//! Domain types for the carbon estimator.
//!
//! This module contains the validated value types that the emissions engine
//! works on. All types enforce their invariants at construction time, so code
//! that receives these types can trust their validity.

mod coordinate;
mod mode;
mod order;

pub use coordinate::{Coordinate, InvalidCoordinate};
pub use mode::{InvalidMode, TransportMode};
pub use order::{InvalidSegmentOrder, MAX_SEGMENTS, SegmentOrder};
