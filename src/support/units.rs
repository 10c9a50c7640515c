//! Unit helpers for thermal comfort inputs.
//!
//! This crate uses [`uom`] for physical quantities (temperature, air speed,
//! relative humidity). Metabolic rate and clothing insulation are expressed in
//! the conventional comfort units `met` and `clo`, which [`uom`] doesn't
//! provide, so they are carried as plain `f64` values with the SI conversion
//! factors defined here.
//!
//! The comfort equations are written in degrees Celsius, so the helpers below
//! construct and read quantities in the units the equations expect:
//!
//! ```
//! use twine_comfort::support::units::{celsius, to_celsius};
//!
//! let t = celsius(22.5);
//! assert!((to_celsius(t) - 22.5).abs() < 1e-12);
//! ```

use uom::si::{
    f64::{Ratio, TemperatureInterval, ThermodynamicTemperature, Velocity},
    ratio::percent as ratio_percent,
    temperature_interval::degree_celsius as delta_celsius,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

/// Metabolic heat flux of one `met`, W/m².
pub const WATTS_PER_SQUARE_METER_PER_MET: f64 = 58.15;

/// Thermal insulance of one `clo`, m²·K/W.
pub const SQUARE_METER_KELVIN_PER_WATT_PER_CLO: f64 = 0.155;

/// Creates an absolute temperature from degrees Celsius.
#[must_use]
pub fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

/// Reads an absolute temperature in degrees Celsius.
#[must_use]
pub fn to_celsius(temperature: ThermodynamicTemperature) -> f64 {
    temperature.get::<degree_celsius>()
}

/// Creates a temperature interval from a Celsius difference.
#[must_use]
pub fn celsius_delta(value: f64) -> TemperatureInterval {
    TemperatureInterval::new::<delta_celsius>(value)
}

/// Reads a temperature interval as a Celsius difference.
#[must_use]
pub fn to_celsius_delta(interval: TemperatureInterval) -> f64 {
    interval.get::<delta_celsius>()
}

/// Creates an air speed from meters per second.
#[must_use]
pub fn meters_per_second(value: f64) -> Velocity {
    Velocity::new::<meter_per_second>(value)
}

/// Reads an air speed in meters per second.
#[must_use]
pub fn to_meters_per_second(speed: Velocity) -> f64 {
    speed.get::<meter_per_second>()
}

/// Creates a relative humidity from a percentage.
#[must_use]
pub fn percent(value: f64) -> Ratio {
    Ratio::new::<ratio_percent>(value)
}

/// Reads a relative humidity as a percentage.
#[must_use]
pub fn to_percent(ratio: Ratio) -> f64 {
    ratio.get::<ratio_percent>()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        ratio::ratio, temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::kelvin,
    };

    #[test]
    fn celsius_roundtrip_through_kelvin() {
        let t = celsius(25.0);
        assert_relative_eq!(t.get::<kelvin>(), 298.15, epsilon = 1e-12);
        assert_relative_eq!(to_celsius(t), 25.0, epsilon = 1e-12);
    }

    #[test]
    fn celsius_interval_matches_kelvin_interval() {
        let dt = celsius_delta(2.5);
        assert_relative_eq!(dt.get::<delta_kelvin>(), 2.5, epsilon = 1e-12);
        assert_relative_eq!(to_celsius_delta(dt), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn humidity_percent_is_a_ratio() {
        let rh = percent(52.0);
        assert_relative_eq!(rh.get::<ratio>(), 0.52, epsilon = 1e-12);
        assert_relative_eq!(to_percent(rh), 52.0, epsilon = 1e-12);
    }

    #[test]
    fn air_speed_in_meters_per_second() {
        assert_relative_eq!(to_meters_per_second(meters_per_second(0.26)), 0.26);
    }
}
