//! Problem formulation for the target-PMV temperature search.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};

use crate::support::comfort::{ComfortIndex, EvaluateError, Measurement, evaluate};

/// Which temperature the search varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    /// Air and radiant temperature move together (`tdb == tr == x`).
    Joint,
    /// Only the dry-bulb temperature varies; the radiant temperature is held.
    DryBulb,
    /// Only the radiant temperature varies; the dry-bulb temperature is held.
    Radiant,
}

impl Sweep {
    /// Places `x` (°C) into the swept temperature(s) of `base`.
    pub(crate) fn apply(self, base: &Measurement, x: f64) -> Measurement {
        match self {
            Self::Joint => base.with_temperatures(x, x),
            Self::DryBulb => base.with_temperatures(x, base.tr_celsius()),
            Self::Radiant => base.with_temperatures(base.tdb_celsius(), x),
        }
    }

    /// Reads the swept temperature (°C) back out of a measurement.
    pub(crate) fn read(self, measurement: &Measurement) -> f64 {
        match self {
            Self::Joint | Self::DryBulb => measurement.tdb_celsius(),
            Self::Radiant => measurement.tr_celsius(),
        }
    }
}

/// Evaluated point of the search.
#[derive(Debug, Clone, Copy)]
pub(super) struct Point {
    pub(super) measurement: Measurement,
    pub(super) index: ComfortIndex,
}

/// Model adapter that keeps the evaluated measurement alongside its index.
pub(super) struct PointModel;

impl Model for PointModel {
    type Input = Measurement;
    type Output = Point;
    type Error = EvaluateError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(Point {
            measurement: *input,
            index: evaluate(input)?,
        })
    }
}

/// Equation problem driving PMV to a target by varying one sweep variable.
///
/// Computes the residual as `pmv - target_pmv`.
pub(super) struct SweepProblem {
    base: Measurement,
    sweep: Sweep,
    target_pmv: f64,
}

impl SweepProblem {
    pub(super) fn new(base: Measurement, sweep: Sweep, target_pmv: f64) -> Self {
        Self {
            base,
            sweep,
            target_pmv,
        }
    }

    pub(super) fn at(&self, x: f64) -> Measurement {
        self.sweep.apply(&self.base, x)
    }

    pub(super) fn residual(&self, index: &ComfortIndex) -> f64 {
        index.pmv - self.target_pmv
    }
}

impl EquationProblem<1> for SweepProblem {
    type Input = Measurement;
    type Output = Point;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(self.at(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([self.residual(&output.index)])
    }
}
