//! Iterative adjustment of air and radiant temperature toward the comfort band.
//!
//! Each iteration brackets the direction of travel (down to the lower bound
//! when cooling, up to the upper bound when heating), finds the joint
//! temperature that yields the target PMV, and moves part of the way there.
//! The fraction moved is given by [`damping_factor`] and each temperature
//! change is capped at [`AdjusterConfig::max_step`].

mod config;
mod damping;
mod error;
mod history;

pub use config::{AdjusterConfig, ConfigError, Strategy, VentilationPolicy};
pub use damping::damping_factor;
pub use error::AdjustError;
pub use history::{Adjustment, AdjustmentStep, Anomaly, Termination};

use tracing::{debug, warn};

use crate::support::{
    comfort::{COMFORT_BAND, ComfortIndex, Measurement, evaluate},
    units::to_celsius_delta,
};

use super::root_find::{RootFindError, Sweep, solve_joint, solve_single};

/// Magnitude of the PMV aimed for when starting outside the comfort band.
const BAND_EDGE_TARGET: f64 = 0.99;

/// PMV the controller aims for, given the PMV of the measurement.
///
/// Outside the comfort band the target sits just inside the nearer edge;
/// inside the band the initial PMV is its own target.
#[must_use]
pub fn target_pmv(initial_pmv: f64) -> f64 {
    if initial_pmv < -COMFORT_BAND {
        -BAND_EDGE_TARGET
    } else if initial_pmv > COMFORT_BAND {
        BAND_EDGE_TARGET
    } else {
        initial_pmv
    }
}

/// Adjusts the temperatures (and possibly the air speed) of a measurement
/// until its PMV lies within the comfort band.
///
/// Problems inside the loop (a bracket without a root, a failed search, an
/// evaluation failure after an update) are recovered, logged and recorded
/// in the returned history rather than returned as errors.
///
/// # Errors
///
/// Returns [`AdjustError::Config`] if `config` is invalid and
/// [`AdjustError::InvalidMeasurement`] if the measurement cannot be evaluated.
pub fn adjust(
    measurement: &Measurement,
    config: &AdjusterConfig,
) -> Result<Adjustment, AdjustError> {
    config.validate()?;

    let initial = evaluate(measurement).map_err(AdjustError::InvalidMeasurement)?;
    let target = target_pmv(initial.pmv);

    if initial.is_comfortable() {
        debug!(pmv = initial.pmv, "measurement already within the comfort band");
        return Ok(Adjustment {
            measured: *measurement,
            initial,
            target_pmv: target,
            adjusted: *measurement,
            index: Some(initial),
            history: Vec::new(),
            termination: Termination::AlreadyComfortable,
        });
    }

    let mut current = match config.ventilation {
        Some(policy) => measurement.with_air_speed(
            policy.apply(initial.pmv, measurement.vr_meters_per_second()),
        ),
        None => *measurement,
    };

    let mut controller = Controller {
        config,
        target,
        last_swept: None,
    };
    let mut history = Vec::new();
    let mut termination = Termination::MaxIterations;

    for iteration in 1..=config.max_iters {
        let index = match evaluate(&current) {
            Ok(index) => index,
            Err(error) => {
                warn!(iteration, %error, "current conditions could not be evaluated");
                termination = Termination::EvaluatorFailed;
                break;
            }
        };

        if index.is_comfortable() || (index.pmv - target).abs() <= config.target_tol {
            termination = Termination::Converged;
            break;
        }

        let step = controller.step(iteration, &current, index);
        let previous = current;
        current = current.with_temperatures(step.tdb_celsius(), step.tr_celsius());
        let updated = step.index;
        let bracket_invalid = step
            .anomalies
            .iter()
            .any(|anomaly| matches!(anomaly, Anomaly::BracketInvalid { .. }));
        history.push(step);

        if bracket_invalid {
            termination = Termination::BracketInvalid;
            break;
        }

        if updated.is_some_and(|updated| updated.is_comfortable()) {
            termination = Termination::Converged;
            break;
        }

        let temp_tol = to_celsius_delta(config.temp_tol);
        let moved_tdb = (current.tdb_celsius() - previous.tdb_celsius()).abs();
        let moved_tr = (current.tr_celsius() - previous.tr_celsius()).abs();
        let pmv_stalled =
            updated.is_some_and(|updated| (updated.pmv - index.pmv).abs() < config.pmv_tol);

        if (moved_tdb < temp_tol && moved_tr < temp_tol) || pmv_stalled {
            debug!(iteration, moved_tdb, moved_tr, "adjustment stalled");
            termination = Termination::Stalled;
            break;
        }
    }

    let index = evaluate(&current).ok();

    Ok(Adjustment {
        measured: *measurement,
        initial,
        target_pmv: target,
        adjusted: current,
        index,
        history,
        termination,
    })
}

/// Per-run state of the adjustment loop.
struct Controller<'a> {
    config: &'a AdjusterConfig,
    target: f64,
    last_swept: Option<Sweep>,
}

impl Controller<'_> {
    /// Performs one update of `current`, whose index is `index`.
    fn step(
        &mut self,
        iteration: usize,
        current: &Measurement,
        index: ComfortIndex,
    ) -> AdjustmentStep {
        let [lo, hi] = self.bracket(current, index.pmv);

        if lo >= hi {
            warn!(iteration, lo, hi, "no room left within the temperature bounds");
            return AdjustmentStep {
                iteration,
                tdb: current.tdb,
                tr: current.tr,
                vr: current.vr,
                index: Some(index),
                anomalies: vec![Anomaly::BracketInvalid { lo, hi }],
            };
        }

        let factor = damping_factor(index.pmv - self.target);
        let mut anomalies = Vec::new();
        let joint = self.joint_candidate(current, [lo, hi], &mut anomalies);

        let tdb = current.tdb_celsius();
        let tr = current.tr_celsius();

        let (new_tdb, new_tr) = match self.config.strategy {
            Strategy::Joint => (self.toward(tdb, joint, factor), self.toward(tr, joint, factor)),
            Strategy::Alternating => {
                let (sweep, single) = match self.last_swept {
                    None => {
                        let single_tdb =
                            self.single_candidate(current, Sweep::DryBulb, [lo, hi], &mut anomalies);
                        let single_tr =
                            self.single_candidate(current, Sweep::Radiant, [lo, hi], &mut anomalies);
                        if (single_tdb - tdb).abs() >= (single_tr - tr).abs() {
                            (Sweep::DryBulb, single_tdb)
                        } else {
                            (Sweep::Radiant, single_tr)
                        }
                    }
                    Some(Sweep::DryBulb) => (
                        Sweep::Radiant,
                        self.single_candidate(current, Sweep::Radiant, [lo, hi], &mut anomalies),
                    ),
                    Some(_) => (
                        Sweep::DryBulb,
                        self.single_candidate(current, Sweep::DryBulb, [lo, hi], &mut anomalies),
                    ),
                };
                self.last_swept = Some(sweep);

                let goal = 0.5 * (single + joint);
                match sweep {
                    Sweep::Radiant => (tdb, self.toward(tr, goal, factor)),
                    _ => (self.toward(tdb, goal, factor), tr),
                }
            }
        };

        let next = current.with_temperatures(new_tdb, new_tr);
        let updated = match evaluate(&next) {
            Ok(updated) => Some(updated),
            Err(error) => {
                warn!(iteration, %error, "adjusted conditions could not be evaluated");
                anomalies.push(Anomaly::EvaluatorFailed(error));
                None
            }
        };

        debug!(
            iteration,
            tdb = new_tdb,
            tr = new_tr,
            vr = current.vr_meters_per_second(),
            factor,
            candidate = joint,
            pmv = ?updated.map(|updated| updated.pmv),
            "adjustment step"
        );

        AdjustmentStep {
            iteration,
            tdb: next.tdb,
            tr: next.tr,
            vr: next.vr,
            index: updated,
            anomalies,
        }
    }

    /// Search interval in the direction the temperatures must move, °C.
    fn bracket(&self, current: &Measurement, pmv: f64) -> [f64; 2] {
        let (min, max) = self.config.bounds_celsius();
        let tdb = current.tdb_celsius();
        let tr = current.tr_celsius();

        if self.target < pmv {
            [min, tdb.max(tr)]
        } else {
            [tdb.min(tr), max]
        }
    }

    /// Damped move from `from` toward `to`, capped at the maximum step.
    fn toward(&self, from: f64, to: f64, factor: f64) -> f64 {
        let max_step = to_celsius_delta(self.config.max_step);
        from + (factor * (to - from)).clamp(-max_step, max_step)
    }

    fn joint_candidate(
        &self,
        current: &Measurement,
        bracket: [f64; 2],
        anomalies: &mut Vec<Anomaly>,
    ) -> f64 {
        match solve_joint(current, self.target, bracket, &self.config.root) {
            Ok(x) => x,
            Err(error) => {
                let fallback = 0.5 * (current.tdb_celsius() + current.tr_celsius());
                warn!(%error, fallback, "joint temperature search failed, using the midpoint");
                anomalies.push(match error {
                    RootFindError::NoSignChange { .. } => Anomaly::NoSignChange { fallback },
                    other => Anomaly::SolverFailed {
                        fallback,
                        reason: other.to_string(),
                    },
                });
                fallback
            }
        }
    }

    fn single_candidate(
        &self,
        current: &Measurement,
        sweep: Sweep,
        bracket: [f64; 2],
        anomalies: &mut Vec<Anomaly>,
    ) -> f64 {
        solve_single(current, sweep, self.target, bracket, &self.config.root).unwrap_or_else(
            |error| {
                warn!(?sweep, %error, "single temperature search failed, keeping the current value");
                anomalies.push(Anomaly::SingleSolveFailed {
                    sweep,
                    reason: error.to_string(),
                });
                sweep.read(current)
            },
        )
    }
}
