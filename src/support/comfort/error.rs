use thiserror::Error;

/// Errors returned by the PMV/PPD evaluator.
///
/// Applicability ranges of the standard are not enforced; only inputs that
/// make the heat balance physically meaningless are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvaluateError {
    /// An input is NaN or infinite.
    #[error("{input} is not finite")]
    NonFinite {
        /// Name of the offending input.
        input: &'static str,
    },

    /// Relative humidity outside `[0, 100] %`.
    #[error("relative humidity must be within 0-100 %, got {rh}")]
    Humidity {
        /// Rejected relative humidity, %.
        rh: f64,
    },

    /// Negative relative air speed.
    #[error("air speed must not be negative, got {vr} m/s")]
    AirSpeed {
        /// Rejected air speed, m/s.
        vr: f64,
    },

    /// Zero or negative metabolic rate.
    #[error("metabolic rate must be positive, got {met} met")]
    MetabolicRate {
        /// Rejected metabolic rate, met.
        met: f64,
    },

    /// Negative clothing insulation.
    #[error("clothing insulation must not be negative, got {clo} clo")]
    Clothing {
        /// Rejected clothing insulation, clo.
        clo: f64,
    },

    /// The clothing surface temperature iteration did not settle.
    #[error("clothing surface temperature did not converge after {iters} iterations")]
    ClothingTemperature {
        /// Iterations performed.
        iters: usize,
    },
}
