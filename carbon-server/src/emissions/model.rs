//! Per-mode emission factors applied to distances.

use crate::domain::{InvalidMode, TransportMode};

/// Emissions in kg CO2 for travelling `distance_km` by `mode`.
///
/// Linear in distance. Modes with a zero factor always give exactly zero.
pub fn emissions_kg(mode: TransportMode, distance_km: f64) -> f64 {
    let factor = mode.emission_factor();
    if factor == 0.0 {
        return 0.0;
    }
    distance_km * factor
}

/// Emissions for a raw mode label, rejecting labels outside the mode set.
pub fn emissions_kg_for_label(mode: &str, distance_km: f64) -> Result<f64, InvalidMode> {
    let mode = TransportMode::parse(mode)?;
    Ok(emissions_kg(mode, distance_km))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn mode() -> impl Strategy<Value = TransportMode> {
        proptest::sample::select(TransportMode::ALL.to_vec())
    }

    proptest! {
        /// Cycling never emits anything, however far
        #[test]
        fn bike_is_always_zero(distance in 0.0f64..1e7) {
            prop_assert_eq!(emissions_kg(TransportMode::Bike, distance), 0.0);
        }

        /// Emissions are never negative for non-negative distances
        #[test]
        fn non_negative(m in mode(), distance in 0.0f64..1e7) {
            prop_assert!(emissions_kg(m, distance) >= 0.0);
        }

        /// Doubling the distance doubles the emissions
        #[test]
        fn linear_in_distance(m in mode(), distance in 0.0f64..1e6) {
            let single = emissions_kg(m, distance);
            let double = emissions_kg(m, distance * 2.0);
            prop_assert!((double - 2.0 * single).abs() <= 1e-9 * double.max(1.0));
        }

        /// Labels outside the mode set are rejected
        #[test]
        fn unknown_labels_rejected(label in "[a-z]{1,10}".prop_filter(
            "not a known mode",
            |s| TransportMode::parse(s).is_err(),
        )) {
            prop_assert!(emissions_kg_for_label(&label, 10.0).is_err());
        }
    }
}
