//! Itinerary-level totals and per-mode breakdown.

use serde::{Deserialize, Serialize};

use crate::domain::TransportMode;

/// Emissions in kg CO2 summed per transport mode.
///
/// Always holds an entry for every mode; modes an itinerary doesn't use
/// stay at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionsByMode {
    pub car: f64,
    pub train: f64,
    pub air: f64,
    pub bus: f64,
    pub bike: f64,
}

impl EmissionsByMode {
    /// Emissions recorded for `mode`.
    pub fn get(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Car => self.car,
            TransportMode::Train => self.train,
            TransportMode::Air => self.air,
            TransportMode::Bus => self.bus,
            TransportMode::Bike => self.bike,
        }
    }

    fn slot(&mut self, mode: TransportMode) -> &mut f64 {
        match mode {
            TransportMode::Car => &mut self.car,
            TransportMode::Train => &mut self.train,
            TransportMode::Air => &mut self.air,
            TransportMode::Bus => &mut self.bus,
            TransportMode::Bike => &mut self.bike,
        }
    }

    /// Add `kg` to the running sum for `mode`.
    pub fn add(&mut self, mode: TransportMode, kg: f64) {
        *self.slot(mode) += kg;
    }

    /// `(mode, kg)` pairs for every mode, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (TransportMode, f64)> + '_ {
        TransportMode::ALL.into_iter().map(|m| (m, self.get(m)))
    }

    /// Sum over all modes.
    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, kg)| kg).sum()
    }
}

/// Aggregated emissions for a whole itinerary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionsSummary {
    pub total_emissions: f64,
    pub emissions_by_mode: EmissionsByMode,
}

/// Aggregate `(mode, kg)` pairs of individual segments.
///
/// Grouping is by mode, so the order segments arrive in only affects
/// floating-point rounding.
pub fn aggregate<I>(segments: I) -> EmissionsSummary
where
    I: IntoIterator<Item = (TransportMode, f64)>,
{
    let mut summary = EmissionsSummary::default();
    for (mode, kg) in segments {
        summary.emissions_by_mode.add(mode, kg);
        summary.total_emissions += kg;
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_all_zero() {
        let summary = aggregate(std::iter::empty());
        assert_eq!(summary.total_emissions, 0.0);
        for (_, kg) in summary.emissions_by_mode.iter() {
            assert_eq!(kg, 0.0);
        }
    }

    #[test]
    fn single_segment() {
        let summary = aggregate([(TransportMode::Car, 231.0)]);
        assert_eq!(summary.total_emissions, 231.0);
        assert_eq!(summary.emissions_by_mode.car, 231.0);
        assert_eq!(summary.emissions_by_mode.train, 0.0);
        assert_eq!(summary.emissions_by_mode.air, 0.0);
        assert_eq!(summary.emissions_by_mode.bus, 0.0);
        assert_eq!(summary.emissions_by_mode.bike, 0.0);
    }

    #[test]
    fn groups_by_mode() {
        let summary = aggregate([
            (TransportMode::Car, 10.0),
            (TransportMode::Air, 50.0),
            (TransportMode::Car, 5.0),
            (TransportMode::Bike, 0.0),
            (TransportMode::Train, 2.5),
        ]);

        assert_eq!(summary.emissions_by_mode.car, 15.0);
        assert_eq!(summary.emissions_by_mode.air, 50.0);
        assert_eq!(summary.emissions_by_mode.train, 2.5);
        assert_eq!(summary.emissions_by_mode.bus, 0.0);
        assert_eq!(summary.emissions_by_mode.bike, 0.0);
        assert_eq!(summary.total_emissions, 67.5);
        assert_eq!(summary.emissions_by_mode.sum(), 67.5);
    }

    #[test]
    fn get_matches_fields() {
        let mut by_mode = EmissionsByMode::default();
        by_mode.add(TransportMode::Bus, 8.0);
        by_mode.add(TransportMode::Bus, 1.0);
        assert_eq!(by_mode.get(TransportMode::Bus), 9.0);
        assert_eq!(by_mode.bus, 9.0);
    }

    #[test]
    fn iter_covers_every_mode_in_order() {
        let modes: Vec<_> = EmissionsByMode::default().iter().map(|(m, _)| m).collect();
        assert_eq!(modes, TransportMode::ALL.to_vec());
    }

    #[test]
    fn serializes_every_mode() {
        let summary = aggregate([(TransportMode::Air, 126.0)]);
        let json = serde_json::to_value(summary).unwrap();

        assert_eq!(json["totalEmissions"], 126.0);
        let by_mode = json["emissionsByMode"].as_object().unwrap();
        assert_eq!(by_mode.len(), 5);
        assert_eq!(by_mode["air"], 126.0);
        assert_eq!(by_mode["car"], 0.0);
        assert_eq!(by_mode["bike"], 0.0);
    }
}
