use uom::si::f64::{Ratio, TemperatureInterval, Velocity};

use crate::support::units::{celsius_delta, meters_per_second, percent};

/// Thresholds of the recommendation rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationConfig {
    /// Air speed below which more ventilation is recommended under heat stress.
    pub ventilation_floor: Velocity,

    /// Air speed above which drafts are flagged under cold stress.
    pub cold_draft_ceiling: Velocity,

    /// Radiant minus air temperature above which radiant load is flagged.
    pub radiant_excess: TemperatureInterval,

    /// Air temperature reduction above which an explicit cooling target is given.
    pub air_temperature_drop: TemperatureInterval,

    /// Emit cold-draft and heating recommendations.
    ///
    /// Turned off for campaigns that only address heat stress.
    pub enable_cold_recommendations: bool,

    /// Metabolic rate (met) below which activity measures are suggested.
    pub low_activity: Option<f64>,

    /// Relative humidity above which dehumidification is suggested.
    pub high_humidity: Option<Ratio>,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            ventilation_floor: meters_per_second(0.2),
            cold_draft_ceiling: meters_per_second(1.0),
            radiant_excess: celsius_delta(2.0),
            air_temperature_drop: celsius_delta(1.0),
            enable_cold_recommendations: true,
            low_activity: Some(1.2),
            high_humidity: Some(percent(70.0)),
        }
    }
}
