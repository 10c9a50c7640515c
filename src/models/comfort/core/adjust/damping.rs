/// Fraction of the distance to the candidate temperature taken in one step.
///
/// For a PMV gap `d = |pmv - target|` up to 2 the factor follows the tuned
/// quadratic `0.09·d² - 0.43·d + 1`, which is 1 at `d = 0` and 0.5 at `d = 2`.
/// Larger gaps keep the minimum of 0.5.
#[must_use]
pub fn damping_factor(gap: f64) -> f64 {
    let d = gap.abs();
    if d <= 2.0 {
        0.09 * d * d - 0.43 * d + 1.0
    } else {
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn literal_values() {
        assert_relative_eq!(damping_factor(0.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(damping_factor(1.0), 0.66, epsilon = 1e-12);
        assert_relative_eq!(damping_factor(2.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(damping_factor(3.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(damping_factor(0.5), 0.0225 - 0.215 + 1.0, epsilon = 1e-12);
    }

    #[test]
    fn follows_quadratic_up_to_two() {
        for i in 0..=200 {
            let d = f64::from(i) * 0.01;
            assert_relative_eq!(
                damping_factor(d),
                0.09 * d.powi(2) - 0.43 * d + 1.0,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn stays_between_half_and_one() {
        for i in 0..=600 {
            let factor = damping_factor(f64::from(i) * 0.01);
            assert!((0.5..=1.0).contains(&factor), "factor {factor} out of range");
        }
    }
}
