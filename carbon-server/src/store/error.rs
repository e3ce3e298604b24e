//! Store error types.

/// Errors from the itinerary store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No itinerary with this id
    #[error("itinerary {0} not found")]
    ItineraryNotFound(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StoreError::ItineraryNotFound(42);
        assert_eq!(err.to_string(), "itinerary 42 not found");
    }
}
