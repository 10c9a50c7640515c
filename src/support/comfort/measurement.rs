use uom::si::f64::{Ratio, ThermodynamicTemperature, Velocity};

use crate::support::units::{
    celsius, meters_per_second, percent, to_celsius, to_meters_per_second, to_percent,
};

/// The six canonical inputs of the PMV/PPD model.
///
/// Metabolic rate is in `met` and clothing insulation in `clo`
/// (see [`crate::support::units`] for their SI equivalents).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Dry-bulb air temperature.
    pub tdb: ThermodynamicTemperature,

    /// Mean radiant temperature.
    pub tr: ThermodynamicTemperature,

    /// Relative air speed.
    pub vr: Velocity,

    /// Relative humidity.
    pub rh: Ratio,

    /// Metabolic rate, met.
    pub met: f64,

    /// Clothing insulation, clo.
    pub clo: f64,
}

impl Measurement {
    /// Creates a measurement from plain numbers in °C, m/s, %, met and clo.
    #[must_use]
    pub fn new(tdb: f64, tr: f64, vr: f64, rh: f64, met: f64, clo: f64) -> Self {
        Self {
            tdb: celsius(tdb),
            tr: celsius(tr),
            vr: meters_per_second(vr),
            rh: percent(rh),
            met,
            clo,
        }
    }

    /// Dry-bulb temperature in °C.
    #[must_use]
    pub fn tdb_celsius(&self) -> f64 {
        to_celsius(self.tdb)
    }

    /// Mean radiant temperature in °C.
    #[must_use]
    pub fn tr_celsius(&self) -> f64 {
        to_celsius(self.tr)
    }

    /// Relative air speed in m/s.
    #[must_use]
    pub fn vr_meters_per_second(&self) -> f64 {
        to_meters_per_second(self.vr)
    }

    /// Relative humidity in %.
    #[must_use]
    pub fn rh_percent(&self) -> f64 {
        to_percent(self.rh)
    }

    /// Returns a copy with both temperatures replaced (°C).
    #[must_use]
    pub fn with_temperatures(self, tdb: f64, tr: f64) -> Self {
        Self {
            tdb: celsius(tdb),
            tr: celsius(tr),
            ..self
        }
    }

    /// Returns a copy with the air speed replaced (m/s).
    #[must_use]
    pub fn with_air_speed(self, vr: f64) -> Self {
        Self {
            vr: meters_per_second(vr),
            ..self
        }
    }
}
