use thiserror::Error;
use uom::si::f64::{TemperatureInterval, ThermodynamicTemperature, Velocity};

use crate::support::{
    comfort::COMFORT_BAND,
    units::{
        celsius, celsius_delta, meters_per_second, to_celsius, to_celsius_delta,
        to_meters_per_second,
    },
};

use crate::models::comfort::core::RootFindConfig;

/// How the controller moves the two temperatures each iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Move air and radiant temperature together toward the joint candidate.
    #[default]
    Joint,

    /// Move one temperature per iteration toward the average of its
    /// single-variable candidate and the joint candidate.
    ///
    /// The first iteration picks the temperature furthest from its own
    /// candidate; later iterations alternate.
    Alternating,
}

/// Air speed corrections applied before iterating.
///
/// Moving air helps when it is hot and hurts when it is cold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VentilationPolicy {
    /// Minimum air speed under heat stress (`pmv > 1`).
    pub heat_floor: Velocity,

    /// Maximum air speed under cold stress (`pmv < -1`).
    pub cold_ceiling: Velocity,
}

impl Default for VentilationPolicy {
    fn default() -> Self {
        Self {
            heat_floor: meters_per_second(0.2),
            cold_ceiling: meters_per_second(1.0),
        }
    }
}

impl VentilationPolicy {
    /// Returns the air speed (m/s) to use for a measurement with the given PMV.
    #[must_use]
    pub fn apply(&self, pmv: f64, vr: f64) -> f64 {
        let floor = to_meters_per_second(self.heat_floor);
        let ceiling = to_meters_per_second(self.cold_ceiling);

        if pmv > COMFORT_BAND && vr < floor {
            floor
        } else if pmv < -COMFORT_BAND && vr > ceiling {
            ceiling
        } else {
            vr
        }
    }
}

/// Configuration of the iterative comfort adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjusterConfig {
    /// Maximum number of adjustment iterations.
    pub max_iters: usize,

    /// Lowest temperature the search may propose.
    pub min_temp: ThermodynamicTemperature,

    /// Highest temperature the search may propose.
    pub max_temp: ThermodynamicTemperature,

    /// Largest change of either temperature in one iteration.
    pub max_step: TemperatureInterval,

    /// Temperature change below which the adjustment is considered stalled.
    pub temp_tol: TemperatureInterval,

    /// PMV change below which the adjustment is considered stalled.
    pub pmv_tol: f64,

    /// Distance to the target PMV that counts as reached.
    pub target_tol: f64,

    /// Air speed correction, or `None` to keep the measured air speed.
    pub ventilation: Option<VentilationPolicy>,

    /// Update strategy.
    pub strategy: Strategy,

    /// Temperature search settings.
    pub root: RootFindConfig,
}

impl Default for AdjusterConfig {
    /// Recommended settings: 20 iterations, search within 10-50 °C, steps of
    /// at most 2 °C.
    fn default() -> Self {
        Self {
            max_iters: 20,
            min_temp: celsius(10.0),
            max_temp: celsius(50.0),
            max_step: celsius_delta(2.0),
            temp_tol: celsius_delta(0.01),
            pmv_tol: 0.001,
            target_tol: 0.01,
            ventilation: Some(VentilationPolicy::default()),
            strategy: Strategy::Joint,
            root: RootFindConfig::default(),
        }
    }
}

impl AdjusterConfig {
    /// Small steps within the usual indoor working range of 18-28 °C.
    #[must_use]
    pub fn gradual() -> Self {
        Self {
            max_iters: 30,
            min_temp: celsius(18.0),
            max_temp: celsius(28.0),
            max_step: celsius_delta(0.25),
            ..Self::default()
        }
    }

    /// Checks that the configuration describes a usable search.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iters == 0 {
            return Err(ConfigError::NoIterations);
        }
        if self.root.max_iters == 0 {
            return Err(ConfigError::NoSearchIterations);
        }

        let (min, max) = self.bounds_celsius();
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ConfigError::Bounds { min, max });
        }

        for (setting, value) in [
            ("max_step", to_celsius_delta(self.max_step)),
            ("temp_tol", to_celsius_delta(self.temp_tol)),
            ("pmv_tol", self.pmv_tol),
            ("target_tol", self.target_tol),
            ("root.temp_tol", to_celsius_delta(self.root.temp_tol)),
            ("root.pmv_tol", self.root.pmv_tol),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { setting, value });
            }
        }

        if let Some(policy) = self.ventilation {
            for (setting, value) in [
                ("heat_floor", to_meters_per_second(policy.heat_floor)),
                ("cold_ceiling", to_meters_per_second(policy.cold_ceiling)),
            ] {
                if !(value.is_finite() && value >= 0.0) {
                    return Err(ConfigError::AirSpeed { setting, value });
                }
            }
        }

        Ok(())
    }

    pub(super) fn bounds_celsius(&self) -> (f64, f64) {
        (to_celsius(self.min_temp), to_celsius(self.max_temp))
    }
}

/// Invalid adjustment configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// `max_iters` is zero.
    #[error("max_iters must be at least 1")]
    NoIterations,

    /// `root.max_iters` is zero.
    #[error("root.max_iters must be at least 1")]
    NoSearchIterations,

    /// Temperature bounds are not finite or not increasing.
    #[error("temperature bounds must be finite with min < max, got [{min}, {max}] °C")]
    Bounds {
        /// Lower bound, °C.
        min: f64,
        /// Upper bound, °C.
        max: f64,
    },

    /// A step or tolerance is zero, negative, or not finite.
    #[error("{setting} must be positive, got {value}")]
    NotPositive {
        /// Name of the setting.
        setting: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// A ventilation air speed is negative or not finite.
    #[error("{setting} must be a non-negative air speed, got {value} m/s")]
    AirSpeed {
        /// Name of the setting.
        setting: &'static str,
        /// Rejected value, m/s.
        value: f64,
    },
}
