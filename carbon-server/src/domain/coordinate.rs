//! Geographic coordinate type.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid coordinate string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate {input:?}: {reason}")]
pub struct InvalidCoordinate {
    input: String,
    reason: &'static str,
}

impl InvalidCoordinate {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }

    /// Why the input was rejected.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// A validated (latitude, longitude) pair in degrees.
///
/// Latitude is always within [-90, 90] and longitude within [-180, 180],
/// and both are finite. Location search results hand coordinates around
/// as `"lat,lng"` strings, which is also the format `parse` accepts and
/// `Display` produces.
///
/// # Examples
///
/// ```
/// use carbon_server::domain::Coordinate;
///
/// let delhi = Coordinate::parse("28.6139,77.2090").unwrap();
/// assert_eq!(delhi.latitude(), 28.6139);
/// assert_eq!(delhi.longitude(), 77.2090);
///
/// // Whitespace around components is fine
/// assert!(Coordinate::parse(" 19.0760 , 72.8777 ").is_ok());
///
/// // Missing component, junk, or out of range is rejected
/// assert!(Coordinate::parse("28.6139").is_err());
/// assert!(Coordinate::parse("north,east").is_err());
/// assert!(Coordinate::parse("91.0,0.0").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from degrees, checking ranges.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        Self::checked(latitude, longitude).map_err(|reason| {
            InvalidCoordinate::new(&format!("{latitude},{longitude}"), reason)
        })
    }

    /// Parse a `"lat,lng"` string.
    pub fn parse(s: &str) -> Result<Self, InvalidCoordinate> {
        let mut parts = s.split(',');

        let (Some(lat), Some(lng), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(InvalidCoordinate::new(
                s,
                "expected two comma-separated numbers",
            ));
        };

        let latitude = parse_component(s, lat)?;
        let longitude = parse_component(s, lng)?;

        Self::checked(latitude, longitude).map_err(|reason| InvalidCoordinate::new(s, reason))
    }

    fn checked(latitude: f64, longitude: f64) -> Result<Self, &'static str> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err("components must be finite numbers");
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err("latitude must be between -90 and 90");
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err("longitude must be between -180 and 180");
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

fn parse_component(input: &str, component: &str) -> Result<f64, InvalidCoordinate> {
    let trimmed = component.trim();
    if trimmed.is_empty() {
        return Err(InvalidCoordinate::new(input, "missing component"));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| InvalidCoordinate::new(input, "components must be numbers"))
}

impl FromStr for Coordinate {
    type Err = InvalidCoordinate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}
