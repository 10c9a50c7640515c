//! Bracketed search for the temperature that produces a target PMV.
//!
//! The non-swept inputs (air speed, humidity, metabolic rate, clothing and,
//! for single-variable searches, the held temperature) come from a base
//! [`Measurement`]. The search runs bisection on `pmv(x) - target` over a
//! caller-supplied bracket `[lo, hi]` in °C.

mod config;
mod error;
mod problem;

pub use config::RootFindConfig;
pub use error::RootFindError;
pub use problem::Sweep;

use tracing::trace;
use twine_solvers::equation::bisection;

use crate::support::comfort::{Measurement, evaluate};

use problem::{PointModel, SweepProblem};

/// Finds `x` such that `tdb == tr == x` yields `target_pmv`.
///
/// # Errors
///
/// Returns [`RootFindError::InvalidBracket`] without evaluating anything if
/// `lo >= hi`, [`RootFindError::NoSignChange`] if the bracket does not
/// straddle the target, or a solver error otherwise.
pub fn solve_joint(
    base: &Measurement,
    target_pmv: f64,
    bracket: [f64; 2],
    config: &RootFindConfig,
) -> Result<f64, RootFindError> {
    solve(base, Sweep::Joint, target_pmv, bracket, config)
}

/// Finds the value of a single temperature that yields `target_pmv`,
/// holding the other temperature at its value in `base`.
///
/// `sweep` selects the free temperature and must be [`Sweep::DryBulb`] or
/// [`Sweep::Radiant`]; [`Sweep::Joint`] behaves like [`solve_joint`].
///
/// # Errors
///
/// Same conditions as [`solve_joint`].
pub fn solve_single(
    base: &Measurement,
    sweep: Sweep,
    target_pmv: f64,
    bracket: [f64; 2],
    config: &RootFindConfig,
) -> Result<f64, RootFindError> {
    solve(base, sweep, target_pmv, bracket, config)
}

fn solve(
    base: &Measurement,
    sweep: Sweep,
    target_pmv: f64,
    [lo, hi]: [f64; 2],
    config: &RootFindConfig,
) -> Result<f64, RootFindError> {
    if !lo.is_finite() || !hi.is_finite() || lo >= hi {
        return Err(RootFindError::InvalidBracket { lo, hi });
    }

    let problem = SweepProblem::new(*base, sweep, target_pmv);

    let residual_at = |x: f64| {
        evaluate(&problem.at(x))
            .map(|index| problem.residual(&index))
            .map_err(|source| RootFindError::Evaluate {
                temperature: x,
                source,
            })
    };

    let residual_lo = residual_at(lo)?;
    if residual_lo == 0.0 {
        return Ok(lo);
    }
    let residual_hi = residual_at(hi)?;
    if residual_hi == 0.0 {
        return Ok(hi);
    }

    if residual_lo.signum() == residual_hi.signum() {
        return Err(RootFindError::NoSignChange {
            lo,
            hi,
            residual_lo,
            residual_hi,
        });
    }

    let solution = bisection::solve(
        &PointModel,
        &problem,
        [lo, hi],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| -> Option<bisection::Action> {
            if event.result().is_err() {
                trace!(?sweep, "evaluator rejected a point inside the bracket");
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(RootFindError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    Ok(sweep.read(&solution.snapshot.output.measurement))
}
