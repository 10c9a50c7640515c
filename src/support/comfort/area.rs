use thiserror::Error;
use tracing::debug;

use super::{ComfortIndex, Compliance, Measurement, evaluate};

/// Metabolic rate assumed when an area records none, met.
pub const DEFAULT_MET: f64 = 1.1;

/// Clothing insulation assumed when an area records none, clo.
pub const DEFAULT_CLO: f64 = 0.5;

/// Comfort verdict for one area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    /// Conditions that were evaluated, averaged over the area's measurements.
    pub conditions: Measurement,

    /// Index of the averaged conditions, or `None` if they could not be evaluated.
    pub index: Option<ComfortIndex>,

    /// Regulatory verdict; non-compliant whenever `index` is `None`.
    pub compliance: Compliance,
}

/// The area assessment could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AreaError {
    /// No measurements were supplied.
    #[error("an area needs at least one measurement")]
    Empty,
}

/// Assesses an area from one or more of its measurements.
///
/// Several measurements are averaged field by field before evaluation. A mean
/// metabolic rate or clothing value of zero means the field was not recorded
/// and is replaced by [`DEFAULT_MET`] or [`DEFAULT_CLO`].
///
/// # Errors
///
/// Returns [`AreaError::Empty`] if `measurements` is empty.
pub fn assess_area(measurements: &[Measurement]) -> Result<Assessment, AreaError> {
    let conditions = average(measurements).ok_or(AreaError::Empty)?;

    let (index, compliance) = match evaluate(&conditions) {
        Ok(index) => (Some(index), index.compliance()),
        Err(error) => {
            debug!(%error, "area conditions could not be evaluated");
            (None, Compliance::NonCompliant)
        }
    };

    Ok(Assessment {
        conditions,
        index,
        compliance,
    })
}

fn average(measurements: &[Measurement]) -> Option<Measurement> {
    match measurements {
        [] => return None,
        [single] => return Some(*single),
        _ => {}
    }

    #[allow(clippy::cast_precision_loss)]
    let n = measurements.len() as f64;
    let mean = |field: fn(&Measurement) -> f64| measurements.iter().map(field).sum::<f64>() / n;

    let met = mean(|m| m.met);
    let clo = mean(|m| m.clo);

    Some(Measurement::new(
        mean(Measurement::tdb_celsius),
        mean(Measurement::tr_celsius),
        mean(Measurement::vr_meters_per_second),
        mean(Measurement::rh_percent),
        if met == 0.0 { DEFAULT_MET } else { met },
        if clo == 0.0 { DEFAULT_CLO } else { clo },
    ))
}
