use thiserror::Error;

use crate::support::comfort::EvaluateError;

use super::ConfigError;

/// Errors that prevent an adjustment from running at all.
///
/// Problems inside the loop are recovered and recorded in the history instead.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AdjustError {
    /// The evaluator rejected the measurement as supplied.
    #[error("invalid measurement")]
    InvalidMeasurement(#[source] EvaluateError),

    /// The adjustment configuration is unusable.
    #[error("invalid configuration")]
    Config(#[from] ConfigError),
}
