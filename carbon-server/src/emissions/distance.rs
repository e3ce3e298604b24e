//! Great-circle distance between two coordinates.

use crate::domain::Coordinate;

/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two points given in degrees.
///
/// Inputs must be finite. The intermediate haversine term is clamped into
/// [0, 1] so rounding near antipodal points or the poles can never produce
/// NaN from the square roots.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let sin_lat = (d_lat / 2.0).sin();
    let sin_lon = (d_lon / 2.0).sin();

    let a = sin_lat * sin_lat + lat1.to_radians().cos() * lat2.to_radians().cos() * sin_lon * sin_lon;
    let a = a.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Distance in kilometres between two validated coordinates.
pub fn distance_km(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_km(
        from.latitude(),
        from.longitude(),
        to.latitude(),
        to.longitude(),
    )
}
