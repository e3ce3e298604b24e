//! Transport mode type and its emission factor table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing a transport mode label outside the enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid transport mode {0:?}: expected one of car, train, air, bus, bike")]
pub struct InvalidMode(pub String);

/// A way of travelling one segment of an itinerary.
///
/// The set of modes is closed: every mode has exactly one emission factor,
/// and labels that are not listed here cannot be turned into a mode.
///
/// # Examples
///
/// ```
/// use carbon_server::domain::TransportMode;
///
/// let mode = TransportMode::parse("train").unwrap();
/// assert_eq!(mode, TransportMode::Train);
/// assert_eq!(mode.emission_factor(), 0.05);
///
/// assert!(TransportMode::parse("boat").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Car,
    Train,
    Air,
    Bus,
    Bike,
}

impl TransportMode {
    /// Every mode, in display order.
    pub const ALL: [TransportMode; 5] = [
        TransportMode::Car,
        TransportMode::Train,
        TransportMode::Air,
        TransportMode::Bus,
        TransportMode::Bike,
    ];

    /// Parse a lowercase mode label.
    pub fn parse(s: &str) -> Result<Self, InvalidMode> {
        match s {
            "car" => Ok(TransportMode::Car),
            "train" => Ok(TransportMode::Train),
            "air" => Ok(TransportMode::Air),
            "bus" => Ok(TransportMode::Bus),
            "bike" => Ok(TransportMode::Bike),
            other => Err(InvalidMode(other.to_string())),
        }
    }

    /// Emitted kg CO2 per km travelled.
    pub const fn emission_factor(self) -> f64 {
        match self {
            TransportMode::Car => 0.2,
            TransportMode::Train => 0.05,
            TransportMode::Air => 0.15,
            TransportMode::Bus => 0.08,
            TransportMode::Bike => 0.0,
        }
    }

    /// The lowercase label used on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            TransportMode::Car => "car",
            TransportMode::Train => "train",
            TransportMode::Air => "air",
            TransportMode::Bus => "bus",
            TransportMode::Bike => "bike",
        }
    }

    /// Human-readable label for pages.
    pub const fn label(self) -> &'static str {
        match self {
            TransportMode::Car => "Car",
            TransportMode::Train => "Train",
            TransportMode::Air => "Air",
            TransportMode::Bus => "Bus",
            TransportMode::Bike => "Bike",
        }
    }
}

impl FromStr for TransportMode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
