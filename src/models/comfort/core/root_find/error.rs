use thiserror::Error;
use twine_solvers::equation::bisection;

use crate::support::comfort::EvaluateError;

/// Errors that can occur while searching for a target-PMV temperature.
#[derive(Debug, Error)]
pub enum RootFindError {
    /// The bracket is empty, inverted, or not finite.
    ///
    /// Detected before any evaluation takes place.
    #[error("invalid bracket: lo={lo} must be finite and below hi={hi}")]
    InvalidBracket {
        /// Lower temperature bound, °C.
        lo: f64,
        /// Upper temperature bound, °C.
        hi: f64,
    },

    /// The PMV residual has the same sign at both ends of the bracket.
    #[error("no sign change over [{lo}, {hi}]: residuals {residual_lo} and {residual_hi}")]
    NoSignChange {
        /// Lower temperature bound, °C.
        lo: f64,
        /// Upper temperature bound, °C.
        hi: f64,
        /// PMV residual at `lo`.
        residual_lo: f64,
        /// PMV residual at `hi`.
        residual_hi: f64,
    },

    /// The evaluator rejected a bracket endpoint.
    #[error("evaluator failed at {temperature} °C")]
    Evaluate {
        /// Temperature being evaluated, °C.
        temperature: f64,

        /// Underlying evaluator error.
        #[source]
        source: EvaluateError,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual}")]
    MaxIters {
        /// Best PMV residual achieved.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
