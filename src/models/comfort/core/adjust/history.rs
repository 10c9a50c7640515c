//! Audit trail of an adjustment run.

use uom::si::f64::{ThermodynamicTemperature, Velocity};

use crate::{
    models::comfort::core::Sweep,
    support::{
        comfort::{ComfortIndex, EvaluateError, Measurement},
        units::{to_celsius, to_meters_per_second},
    },
};

/// A recovered problem within one iteration.
#[derive(Debug, Clone, PartialEq)]
pub enum Anomaly {
    /// The joint search bracket did not straddle the target PMV;
    /// the mean of the current temperatures was used instead.
    NoSignChange {
        /// Fallback candidate, °C.
        fallback: f64,
    },

    /// The joint search failed for another reason; the mean of the current
    /// temperatures was used instead.
    SolverFailed {
        /// Fallback candidate, °C.
        fallback: f64,
        /// Solver error message.
        reason: String,
    },

    /// A single-temperature search failed; the current value was kept as its candidate.
    SingleSolveFailed {
        /// Temperature that was searched.
        sweep: Sweep,
        /// Solver error message.
        reason: String,
    },

    /// The directional search bracket was empty, so no update was possible.
    BracketInvalid {
        /// Lower bound, °C.
        lo: f64,
        /// Upper bound, °C.
        hi: f64,
    },

    /// The index could not be recomputed after the update.
    EvaluatorFailed(EvaluateError),
}

/// One row of the adjustment history.
///
/// Temperatures and air speed are the values after this iteration's update.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustmentStep {
    /// Iteration number, starting at 1.
    pub iteration: usize,

    /// Adjusted dry-bulb temperature.
    pub tdb: ThermodynamicTemperature,

    /// Adjusted mean radiant temperature.
    pub tr: ThermodynamicTemperature,

    /// Air speed used in this iteration.
    pub vr: Velocity,

    /// Index at the adjusted conditions, or `None` if it could not be computed.
    pub index: Option<ComfortIndex>,

    /// Problems recovered from during this iteration.
    pub anomalies: Vec<Anomaly>,
}

impl AdjustmentStep {
    /// Adjusted dry-bulb temperature in °C.
    #[must_use]
    pub fn tdb_celsius(&self) -> f64 {
        to_celsius(self.tdb)
    }

    /// Adjusted mean radiant temperature in °C.
    #[must_use]
    pub fn tr_celsius(&self) -> f64 {
        to_celsius(self.tr)
    }

    /// Air speed in m/s.
    #[must_use]
    pub fn vr_meters_per_second(&self) -> f64 {
        to_meters_per_second(self.vr)
    }

    /// PMV at the adjusted conditions, if computed.
    #[must_use]
    pub fn pmv(&self) -> Option<f64> {
        self.index.map(|index| index.pmv)
    }
}

/// Why the adjustment loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The measurement was already in the comfort band; nothing was adjusted.
    AlreadyComfortable,

    /// The PMV reached the comfort band or the target.
    Converged,

    /// Temperatures or PMV stopped changing before reaching the band.
    Stalled,

    /// The iteration budget ran out.
    MaxIterations,

    /// No valid search bracket remained within the temperature bounds.
    BracketInvalid,

    /// The current conditions could no longer be evaluated.
    EvaluatorFailed,
}

/// Result of one adjustment run.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment {
    /// The measurement as supplied.
    pub measured: Measurement,

    /// Index of the measurement as supplied.
    pub initial: ComfortIndex,

    /// PMV the controller aimed for.
    pub target_pmv: f64,

    /// Final conditions: adjusted temperatures and air speed.
    pub adjusted: Measurement,

    /// Index at the final conditions, if it could be computed.
    pub index: Option<ComfortIndex>,

    /// One entry per iteration, in order.
    pub history: Vec<AdjustmentStep>,

    /// Why the loop stopped.
    pub termination: Termination,
}

impl Adjustment {
    /// Returns `true` if the final conditions are in the comfort band.
    #[must_use]
    pub fn is_comfortable(&self) -> bool {
        self.index.is_some_and(|index| index.is_comfortable())
    }

    /// All anomalies across the history, in order.
    pub fn anomalies(&self) -> impl Iterator<Item = &Anomaly> {
        self.history.iter().flat_map(|step| step.anomalies.iter())
    }
}
