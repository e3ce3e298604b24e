//! Submission error types.

use crate::domain::MAX_SEGMENTS;
use crate::emissions::EstimateError;
use crate::store::StoreError;

/// Errors from submitting or loading an itinerary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    /// Fewer than one or more than the maximum number of segments
    #[error("itinerary must have between 1 and {MAX_SEGMENTS} segments, got {count}")]
    SegmentCountViolation { count: usize },

    /// A required text field is empty
    #[error("{field} is required")]
    MissingField { field: String },

    /// Travel date isn't an ISO calendar date
    #[error("invalid travel date {input:?}: expected YYYY-MM-DD")]
    InvalidTravelDate { input: String },

    /// A segment couldn't be estimated
    #[error(transparent)]
    Estimate(#[from] EstimateError),

    /// No itinerary with this id
    #[error("itinerary {0} not found")]
    NotFound(u64),

    /// The store rejected a write
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl SubmitError {
    /// Whether the caller sent something invalid, as opposed to a failure
    /// on our side.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SubmitError::SegmentCountViolation { .. }
                | SubmitError::MissingField { .. }
                | SubmitError::InvalidTravelDate { .. }
                | SubmitError::Estimate(_)
        )
    }
}
