//! Segment position within an itinerary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Most segments an itinerary may hold.
pub const MAX_SEGMENTS: usize = 5;

/// Error returned when a segment position falls outside `1..=MAX_SEGMENTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid segment order {0}: must be between 1 and {MAX_SEGMENTS}")]
pub struct InvalidSegmentOrder(pub usize);

/// 1-based position of a segment within its itinerary.
///
/// # Examples
///
/// ```
/// use carbon_server::domain::SegmentOrder;
///
/// let first = SegmentOrder::from_index(0).unwrap();
/// assert_eq!(first.get(), 1);
///
/// assert!(SegmentOrder::new(0).is_err());
/// assert!(SegmentOrder::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct SegmentOrder(u8);

impl SegmentOrder {
    /// Create from a 1-based position.
    pub fn new(order: usize) -> Result<Self, InvalidSegmentOrder> {
        if (1..=MAX_SEGMENTS).contains(&order) {
            Ok(SegmentOrder(order as u8))
        } else {
            Err(InvalidSegmentOrder(order))
        }
    }

    /// Create from a 0-based index into the submitted segment list.
    pub fn from_index(index: usize) -> Result<Self, InvalidSegmentOrder> {
        Self::new(index + 1)
    }

    /// The 1-based position.
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for SegmentOrder {
    type Error = InvalidSegmentOrder;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SegmentOrder> for usize {
    fn from(order: SegmentOrder) -> usize {
        order.get()
    }
}

impl fmt::Display for SegmentOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_range() {
        for n in 1..=MAX_SEGMENTS {
            assert_eq!(SegmentOrder::new(n).unwrap().get(), n);
        }
    }

    #[test]
    fn reject_out_of_range() {
        assert_eq!(SegmentOrder::new(0), Err(InvalidSegmentOrder(0)));
        assert_eq!(SegmentOrder::new(6), Err(InvalidSegmentOrder(6)));
    }

    #[test]
    fn from_index_is_one_based() {
        assert_eq!(SegmentOrder::from_index(0).unwrap().get(), 1);
        assert_eq!(SegmentOrder::from_index(4).unwrap().get(), 5);
        assert!(SegmentOrder::from_index(5).is_err());
    }

    #[test]
    fn ordering() {
        let a = SegmentOrder::new(1).unwrap();
        let b = SegmentOrder::new(3).unwrap();
        assert!(a < b);
    }

    #[test]
    fn serde_as_number() {
        let order = SegmentOrder::new(2).unwrap();
        assert_eq!(serde_json::to_string(&order).unwrap(), "2");
        assert_eq!(serde_json::from_str::<SegmentOrder>("4").unwrap().get(), 4);
        assert!(serde_json::from_str::<SegmentOrder>("9").is_err());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            InvalidSegmentOrder(7).to_string(),
            "invalid segment order 7: must be between 1 and 5"
        );
    }
}
