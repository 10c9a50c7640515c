//! Thermal comfort indices (PMV/PPD) per ISO 7730:2005.
//!
//! [`evaluate`] computes the Predicted Mean Vote and Predicted Percentage
//! Dissatisfied for a [`Measurement`] using the Fanger heat balance in its
//! 2005 revision. Inputs outside the standard's applicability ranges are
//! evaluated as-is rather than clamped, so iterative callers see the true
//! PMV response; only physically meaningless inputs are rejected with an
//! [`EvaluateError`].
//!
//! ```
//! use twine_comfort::support::comfort::{Measurement, evaluate};
//!
//! let index = evaluate(&Measurement::new(22.0, 22.0, 0.1, 60.0, 1.2, 0.5)).unwrap();
//! assert!((index.pmv + 0.75).abs() < 0.01);
//! assert!(index.is_comfortable());
//! ```
//!
//! [`Iso7730`] wraps the same calculation as a [`twine_core::Model`] so it can
//! be driven by Twine solvers.
//!
//! [`assess_area`] gives the regulatory verdict for an area with one or more
//! measurements, and [`reassess`] recomputes stored indices in bulk.

mod area;
mod error;
mod index;
mod iso7730;
mod measurement;
pub mod reassess;

pub use area::{AreaError, Assessment, DEFAULT_CLO, DEFAULT_MET, assess_area};
pub use error::EvaluateError;
pub use index::{COMFORT_BAND, ComfortIndex, Compliance, in_comfort_band, ppd};
pub use measurement::Measurement;

use twine_core::Model;

/// Evaluates PMV and PPD for a measurement.
///
/// # Errors
///
/// Returns an [`EvaluateError`] if an input is not finite or physically invalid
/// (humidity outside 0-100 %, negative air speed or clothing, non-positive
/// metabolic rate), or if the clothing surface temperature does not converge.
pub fn evaluate(measurement: &Measurement) -> Result<ComfortIndex, EvaluateError> {
    iso7730::evaluate(measurement)
}

/// The ISO 7730:2005 PMV/PPD model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Iso7730;

impl Model for Iso7730 {
    type Input = Measurement;
    type Output = ComfortIndex;
    type Error = EvaluateError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        evaluate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn model_adapter_matches_function() {
        let m = Measurement::new(27.0, 27.0, 0.3, 60.0, 1.2, 0.5);
        assert_eq!(Iso7730.call(&m), evaluate(&m));
    }

    proptest! {
        #[test]
        fn ppd_grows_with_pmv_magnitude(
            tdb in 12.0..36.0_f64,
            dt in -4.0..4.0_f64,
            vr in 0.0..1.0_f64,
            rh in 10.0..90.0_f64,
            met in 0.8..2.5_f64,
            clo in 0.0..1.5_f64,
            shift in 0.5..4.0_f64,
        ) {
            let a = evaluate(&Measurement::new(tdb, tdb + dt, vr, rh, met, clo)).unwrap();
            let b = evaluate(&Measurement::new(tdb + shift, tdb + dt + shift, vr, rh, met, clo))
                .unwrap();

            let (low, high) = if a.pmv.abs() <= b.pmv.abs() { (a, b) } else { (b, a) };
            prop_assert!(low.ppd <= high.ppd + 1e-9);
            prop_assert!((5.0 - 1e-9..=100.0).contains(&low.ppd));
        }
    }
}
