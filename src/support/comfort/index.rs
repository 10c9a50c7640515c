use std::fmt;

/// Half-width of the comfort band: a PMV within `[-1, 1]` is compliant.
pub const COMFORT_BAND: f64 = 1.0;

/// Predicted Mean Vote and Predicted Percentage Dissatisfied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComfortIndex {
    /// Predicted Mean Vote (0 is neutral, negative is cold, positive is hot).
    pub pmv: f64,

    /// Predicted Percentage Dissatisfied, %.
    pub ppd: f64,
}

impl ComfortIndex {
    /// Builds an index from a PMV, deriving the PPD.
    #[must_use]
    pub fn from_pmv(pmv: f64) -> Self {
        Self {
            pmv,
            ppd: ppd(pmv),
        }
    }

    /// Returns `true` if the PMV lies in the comfort band.
    #[must_use]
    pub fn is_comfortable(&self) -> bool {
        in_comfort_band(self.pmv)
    }

    /// Regulatory compliance label for this index.
    #[must_use]
    pub fn compliance(&self) -> Compliance {
        Compliance::from_pmv(self.pmv)
    }

    /// Rounds PMV to 2 decimals and PPD to 1 decimal, as reported.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            pmv: round_to(self.pmv, 2),
            ppd: round_to(self.ppd, 1),
        }
    }
}

/// Computes PPD (%) from PMV.
///
/// PPD is 5 % at neutrality and grows monotonically with `|pmv|`.
#[must_use]
pub fn ppd(pmv: f64) -> f64 {
    100.0 - 95.0 * (-0.03353 * pmv.powi(4) - 0.2179 * pmv.powi(2)).exp()
}

/// Returns `true` if `pmv` lies in the closed comfort band `[-1, 1]`.
#[must_use]
pub fn in_comfort_band(pmv: f64) -> bool {
    (-COMFORT_BAND..=COMFORT_BAND).contains(&pmv)
}

/// Compliance with the comfort band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compliance {
    /// PMV within `[-1, 1]`.
    Compliant,
    /// PMV outside the band, or not computable.
    NonCompliant,
}

impl Compliance {
    /// Classifies a PMV value. `NaN` is non-compliant.
    #[must_use]
    pub fn from_pmv(pmv: f64) -> Self {
        if in_comfort_band(pmv) {
            Self::Compliant
        } else {
            Self::NonCompliant
        }
    }

    /// Label used in assessment records.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compliant => "CUMPLE",
            Self::NonCompliant => "NO CUMPLE",
        }
    }
}

impl fmt::Display for Compliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn ppd_is_five_percent_at_neutral() {
        assert_relative_eq!(ppd(0.0), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn ppd_is_symmetric() {
        for pmv in [0.3, 1.0, 1.7, 2.9] {
            assert_relative_eq!(ppd(pmv), ppd(-pmv), epsilon = 1e-12);
        }
    }

    #[test]
    fn ppd_at_band_edge() {
        // ISO 7730 quotes roughly 26 % dissatisfied at |PMV| = 1.
        assert_relative_eq!(ppd(1.0), 26.12, epsilon = 0.01);
    }

    #[test]
    fn compliance_labels() {
        assert_eq!(Compliance::from_pmv(0.0), Compliance::Compliant);
        assert_eq!(Compliance::from_pmv(-1.0), Compliance::Compliant);
        assert_eq!(Compliance::from_pmv(1.0), Compliance::Compliant);
        assert_eq!(Compliance::from_pmv(1.01), Compliance::NonCompliant);
        assert_eq!(Compliance::from_pmv(-2.3), Compliance::NonCompliant);
        assert_eq!(Compliance::from_pmv(f64::NAN), Compliance::NonCompliant);

        assert_eq!(Compliance::Compliant.to_string(), "CUMPLE");
        assert_eq!(Compliance::NonCompliant.as_str(), "NO CUMPLE");
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn rounding_matches_report_precision() {
        let index = ComfortIndex {
            pmv: -2.131_268,
            ppd: 82.322_362,
        };
        let rounded = index.rounded();
        assert_eq!(rounded.pmv, -2.13);
        assert_eq!(rounded.ppd, 82.3);
    }
}
