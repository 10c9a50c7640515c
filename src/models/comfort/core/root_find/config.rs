use twine_solvers::equation::bisection;
use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

/// Solver configuration for the temperature search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootFindConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the searched temperature.
    pub temp_tol: TemperatureInterval,

    /// Absolute tolerance on the PMV residual (achieved - target).
    pub pmv_tol: f64,
}

impl Default for RootFindConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(0.01),
            pmv_tol: 1e-9,
        }
    }
}

impl RootFindConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.pmv_tol,
        }
    }
}
