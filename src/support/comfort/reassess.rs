//! Batch recomputation of stored comfort indices.
//!
//! Storage is abstracted behind [`MeasurementSource`] and [`AssessmentSink`]
//! so the same pass can run against a database, a file or memory.

use std::error::Error as StdError;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::{ComfortIndex, Compliance, EvaluateError, Measurement, evaluate};

/// A stored measurement and its identifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementRow {
    pub id: u64,
    pub measurement: Measurement,
}

/// Provides the measurements to reassess.
pub trait MeasurementSource {
    type Error: StdError + 'static;

    /// Returns every stored measurement.
    ///
    /// # Errors
    ///
    /// Returns the source's error if the measurements cannot be read.
    fn measurements(&mut self) -> Result<Vec<MeasurementRow>, Self::Error>;
}

/// Stores recomputed indices.
pub trait AssessmentSink {
    type Error: StdError + 'static;

    /// Stores the (rounded) index and verdict for one measurement.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if the values cannot be stored.
    fn persist(
        &mut self,
        id: u64,
        index: ComfortIndex,
        compliance: Compliance,
    ) -> Result<(), Self::Error>;
}

/// Outcome of a reassessment pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReassessSummary {
    /// Number of rows whose index was stored.
    pub updated: usize,

    /// Rows the evaluator rejected, with the reason.
    pub rejected: Vec<(u64, EvaluateError)>,
}

/// A reassessment pass was aborted by its storage.
#[derive(Debug, Error)]
pub enum ReassessError<S, K> {
    #[error("failed to read measurements")]
    Source(#[source] S),

    #[error("failed to store assessment of measurement {id}")]
    Sink {
        id: u64,
        #[source]
        source: K,
    },
}

/// Recomputes and stores PMV, PPD and compliance for every stored measurement.
///
/// Values are rounded as in [`ComfortIndex::rounded`] before being stored.
/// Rows the evaluator rejects are skipped and reported in the summary.
///
/// # Errors
///
/// Returns a [`ReassessError`] if reading from `source` or writing to `sink` fails.
/// Rows stored before a sink failure stay stored.
pub fn reassess<S, K>(
    source: &mut S,
    sink: &mut K,
) -> Result<ReassessSummary, ReassessError<S::Error, K::Error>>
where
    S: MeasurementSource,
    K: AssessmentSink,
{
    let rows = source.measurements().map_err(ReassessError::Source)?;
    info!(rows = rows.len(), "reassessing stored measurements");

    let mut summary = ReassessSummary::default();

    for MeasurementRow { id, measurement } in rows {
        let index = match evaluate(&measurement) {
            Ok(index) => index.rounded(),
            Err(error) => {
                warn!(id, %error, "skipping measurement");
                summary.rejected.push((id, error));
                continue;
            }
        };

        debug!(id, pmv = index.pmv, ppd = index.ppd, "reassessed measurement");

        sink.persist(id, index, index.compliance())
            .map_err(|source| ReassessError::Sink { id, source })?;
        summary.updated += 1;
    }

    info!(
        updated = summary.updated,
        rejected = summary.rejected.len(),
        "reassessment complete"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{collections::BTreeMap, convert::Infallible};

    #[derive(Debug, Error)]
    #[error("storage offline")]
    struct Offline;

    struct Rows(Vec<MeasurementRow>);

    impl MeasurementSource for Rows {
        type Error = Infallible;

        fn measurements(&mut self) -> Result<Vec<MeasurementRow>, Self::Error> {
            Ok(self.0.clone())
        }
    }

    struct Unreachable;

    impl MeasurementSource for Unreachable {
        type Error = Offline;

        fn measurements(&mut self) -> Result<Vec<MeasurementRow>, Self::Error> {
            Err(Offline)
        }
    }

    #[derive(Default)]
    struct Table {
        stored: BTreeMap<u64, (ComfortIndex, Compliance)>,
        fail_on: Option<u64>,
    }

    impl AssessmentSink for Table {
        type Error = Offline;

        fn persist(
            &mut self,
            id: u64,
            index: ComfortIndex,
            compliance: Compliance,
        ) -> Result<(), Self::Error> {
            if self.fail_on == Some(id) {
                return Err(Offline);
            }
            self.stored.insert(id, (index, compliance));
            Ok(())
        }
    }

    fn rows() -> Rows {
        Rows(vec![
            MeasurementRow {
                id: 1,
                measurement: Measurement::new(22.0, 22.0, 0.1, 60.0, 1.2, 0.5),
            },
            MeasurementRow {
                id: 2,
                measurement: Measurement::new(20.0, 20.0, 0.1, 140.0, 1.2, 0.5),
            },
            MeasurementRow {
                id: 3,
                measurement: Measurement::new(30.0, 30.0, 0.1, 32.0, 1.1, 0.5),
            },
        ])
    }

    #[test]
    fn stores_rounded_values_and_skips_rejected_rows() {
        let mut table = Table::default();

        let summary = reassess(&mut rows(), &mut table).unwrap();

        assert_eq!(summary.updated, 2);
        assert_eq!(summary.rejected.len(), 1);
        assert_eq!(summary.rejected[0].0, 2);
        assert!(matches!(summary.rejected[0].1, EvaluateError::Humidity { .. }));

        let (index, compliance) = table.stored[&1];
        assert_eq!(index, index.rounded());
        assert_eq!(compliance, Compliance::Compliant);

        let (_, compliance) = table.stored[&3];
        assert_eq!(compliance, Compliance::NonCompliant);
        assert!(!table.stored.contains_key(&2));
    }

    #[test]
    fn storage_failures_abort_the_pass() {
        let result = reassess(&mut Unreachable, &mut Table::default());
        assert!(matches!(result, Err(ReassessError::Source(Offline))));

        let mut table = Table {
            fail_on: Some(3),
            ..Table::default()
        };
        let result = reassess(&mut rows(), &mut table);

        assert!(matches!(result, Err(ReassessError::Sink { id: 3, .. })));
        assert!(table.stored.contains_key(&1));
    }
}
