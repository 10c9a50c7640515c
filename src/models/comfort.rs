//! Thermal comfort adjustment models.
//!
//! [`ComfortAdjuster`] takes a workplace [`Measurement`] and returns the
//! temperatures that would bring it into the ISO 7730 comfort band, the
//! iteration history that got there, and the recommended corrective measures.
//! The computation lives in the internal `core` module; the building blocks
//! it uses (the target-PMV temperature search, the damping rule and the
//! recommendation rules) are re-exported here.
//!
//! ```
//! use twine_comfort::models::comfort::{ComfortAdjuster, Termination};
//! use twine_comfort::support::comfort::Measurement;
//! use twine_core::Model;
//!
//! let cold_office = Measurement::new(19.4, 19.6, 0.26, 52.0, 1.2, 0.5);
//! let report = ComfortAdjuster::default().call(&cold_office).unwrap();
//!
//! assert_eq!(report.adjustment.termination, Termination::Converged);
//! assert!(report.adjustment.adjusted.tdb_celsius() > 19.4);
//! assert!(!report.recommendations.is_empty());
//! ```

pub(crate) mod core;

pub use self::core::{
    AdjustError, AdjusterConfig, Adjustment, AdjustmentStep, Anomaly, Category, ConfigError,
    Priority, Recommendation, RecommendationConfig, RootFindConfig, RootFindError, Strategy, Sweep,
    Termination, VentilationPolicy, adjust, damping_factor, recommend, solve_joint, solve_single,
    target_pmv,
};

use twine_core::Model;

use crate::support::comfort::Measurement;

/// Adjustment result together with the recommendations derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ComfortReport {
    pub adjustment: Adjustment,
    pub recommendations: Vec<Recommendation>,
}

/// Iterative comfort adjustment as a Twine model.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ComfortAdjuster {
    pub config: AdjusterConfig,
    pub recommendations: RecommendationConfig,
}

impl ComfortAdjuster {
    /// Creates an adjuster with the given loop settings and default recommendation rules.
    #[must_use]
    pub fn new(config: AdjusterConfig) -> Self {
        Self {
            config,
            recommendations: RecommendationConfig::default(),
        }
    }
}

impl Model for ComfortAdjuster {
    type Input = Measurement;
    type Output = ComfortReport;
    type Error = AdjustError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let adjustment = adjust(input, &self.config)?;
        let recommendations = recommend(
            adjustment.initial.pmv,
            &adjustment.measured,
            adjustment.adjusted.tdb_celsius(),
            adjustment.adjusted.tr_celsius(),
            &self.recommendations,
        );

        Ok(ComfortReport {
            adjustment,
            recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_combines_adjustment_and_recommendations() {
        let hot = Measurement::new(35.0, 38.0, 0.1, 60.0, 1.5, 0.7);

        let report = ComfortAdjuster::default().call(&hot).unwrap();

        assert_eq!(report.adjustment.termination, Termination::Converged);
        assert_eq!(report.recommendations[0].category, Category::Ventilation);
        assert!(
            report
                .recommendations
                .iter()
                .any(|r| r.category == Category::AirTemperature)
        );
        assert_eq!(
            report.recommendations.last().map(|r| r.category),
            Some(Category::Administrative)
        );
    }

    #[test]
    fn gradual_adjuster_uses_its_config() {
        let adjuster = ComfortAdjuster::new(AdjusterConfig::gradual());
        let cold_office = Measurement::new(19.4, 19.6, 0.26, 52.0, 1.2, 0.5);

        let report = adjuster.call(&cold_office).unwrap();

        assert!(report.adjustment.history.len() > 3);
        assert_eq!(adjuster.recommendations, RecommendationConfig::default());
    }

    #[test]
    fn invalid_measurement_is_an_error() {
        let m = Measurement::new(20.0, 20.0, -0.1, 50.0, 1.2, 0.5);

        assert!(matches!(
            ComfortAdjuster::default().call(&m),
            Err(AdjustError::InvalidMeasurement(_))
        ));
    }
}
