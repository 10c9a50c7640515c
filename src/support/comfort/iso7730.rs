//! Fanger heat balance as published in ISO 7730:2005.

use crate::support::units::{
    SQUARE_METER_KELVIN_PER_WATT_PER_CLO, WATTS_PER_SQUARE_METER_PER_MET,
};

use super::{ComfortIndex, EvaluateError, Measurement};

/// Convergence threshold on the scaled clothing surface temperature.
const CLOTHING_TOL: f64 = 0.000_15;

/// Iteration cap for the clothing surface temperature.
const CLOTHING_MAX_ITERS: usize = 150;

/// Evaluates PMV and PPD without enforcing the standard's applicability limits.
///
/// External work is taken as zero.
pub(super) fn evaluate(m: &Measurement) -> Result<ComfortIndex, EvaluateError> {
    let tdb = m.tdb_celsius();
    let tr = m.tr_celsius();
    let vr = m.vr_meters_per_second();
    let rh = m.rh_percent();

    check(tdb, tr, vr, rh, m.met, m.clo)?;

    // Partial water vapour pressure, Pa.
    let pa = rh * 10.0 * (16.6536 - 4030.183 / (tdb + 235.0)).exp();

    let icl = SQUARE_METER_KELVIN_PER_WATT_PER_CLO * m.clo;
    let metabolic = m.met * WATTS_PER_SQUARE_METER_PER_MET;
    let mw = metabolic;

    let f_cl = if icl <= 0.078 {
        1.0 + 1.29 * icl
    } else {
        1.05 + 0.645 * icl
    };

    let hcf = 12.1 * vr.sqrt();
    let taa = tdb + 273.0;
    let tra = tr + 273.0;

    let p1 = icl * f_cl;
    let p2 = p1 * 3.96;
    let p3 = p1 * 100.0;
    let p4 = p1 * taa;
    let p5 = 308.7 - 0.028 * mw + p2 * (tra / 100.0).powi(4);

    let t_cla = taa + (35.5 - tdb) / (3.5 * icl + 0.1);
    let mut xn = t_cla / 100.0;
    let mut xf = t_cla / 50.0;
    let mut hc = hcf;
    let mut iters = 0;

    while (xn - xf).abs() > CLOTHING_TOL {
        xf = (xf + xn) / 2.0;
        let hcn = 2.38 * (100.0 * xf - taa).abs().powf(0.25);
        hc = hcf.max(hcn);
        xn = (p5 + p4 * hc - p2 * xf.powi(4)) / (100.0 + p3 * hc);

        iters += 1;
        if iters > CLOTHING_MAX_ITERS || !xn.is_finite() {
            return Err(EvaluateError::ClothingTemperature { iters });
        }
    }

    let tcl = 100.0 * xn - 273.0;

    // Heat losses, W/m².
    let skin_diffusion = 3.05e-3 * (5733.0 - 6.99 * mw - pa);
    let sweating = if mw > WATTS_PER_SQUARE_METER_PER_MET {
        0.42 * (mw - WATTS_PER_SQUARE_METER_PER_MET)
    } else {
        0.0
    };
    let latent_respiration = 1.7e-5 * metabolic * (5867.0 - pa);
    let dry_respiration = 0.0014 * metabolic * (34.0 - tdb);
    let radiation = 3.96 * f_cl * (xn.powi(4) - (tra / 100.0).powi(4));
    let convection = f_cl * hc * (tcl - tdb);

    let sensitivity = 0.303 * (-0.036 * metabolic).exp() + 0.028;
    let pmv = sensitivity
        * (mw
            - skin_diffusion
            - sweating
            - latent_respiration
            - dry_respiration
            - radiation
            - convection);

    Ok(ComfortIndex::from_pmv(pmv))
}

fn check(tdb: f64, tr: f64, vr: f64, rh: f64, met: f64, clo: f64) -> Result<(), EvaluateError> {
    for (input, value) in [
        ("tdb", tdb),
        ("tr", tr),
        ("vr", vr),
        ("rh", rh),
        ("met", met),
        ("clo", clo),
    ] {
        if !value.is_finite() {
            return Err(EvaluateError::NonFinite { input });
        }
    }

    if !(0.0..=100.0).contains(&rh) {
        return Err(EvaluateError::Humidity { rh });
    }
    if vr < 0.0 {
        return Err(EvaluateError::AirSpeed { vr });
    }
    if met <= 0.0 {
        return Err(EvaluateError::MetabolicRate { met });
    }
    if clo < 0.0 {
        return Err(EvaluateError::Clothing { clo });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn pmv_ppd(tdb: f64, tr: f64, vr: f64, rh: f64, met: f64, clo: f64) -> ComfortIndex {
        evaluate(&Measurement::new(tdb, tr, vr, rh, met, clo)).expect("valid inputs")
    }

    /// Reference cases from ISO 7730:2005 Annex D.
    #[test]
    fn matches_standard_tables() {
        let cases = [
            // tdb, tr, vr, rh, met, clo, pmv, ppd
            (22.0, 22.0, 0.1, 60.0, 1.2, 0.5, -0.75, 17.0),
            (27.0, 27.0, 0.1, 60.0, 1.2, 0.5, 0.77, 17.0),
            (27.0, 27.0, 0.3, 60.0, 1.2, 0.5, 0.44, 9.0),
            (23.5, 25.5, 0.1, 60.0, 1.2, 0.5, -0.01, 5.0),
            (23.5, 25.5, 0.3, 60.0, 1.2, 0.5, -0.55, 11.0),
            (19.0, 19.0, 0.1, 40.0, 1.5, 1.0, -0.04, 5.0),
        ];

        for (tdb, tr, vr, rh, met, clo, pmv, ppd) in cases {
            let index = pmv_ppd(tdb, tr, vr, rh, met, clo);
            assert_relative_eq!(index.pmv, pmv, epsilon = 0.01);
            assert_relative_eq!(index.ppd, ppd, epsilon = 0.5);
        }
    }

    #[test]
    fn cold_office_is_below_band() {
        let index = pmv_ppd(19.4, 19.6, 0.26, 52.0, 1.2, 0.5);
        assert_relative_eq!(index.pmv, -2.13, epsilon = 0.01);
        assert!(!index.is_comfortable());
    }

    #[test]
    fn still_air_and_no_clothing_are_accepted() {
        let index = pmv_ppd(25.0, 25.0, 0.0, 50.0, 1.0, 0.0);
        assert!(index.pmv.is_finite());
        assert!(index.pmv < -1.0);
    }

    #[test]
    fn warmer_air_raises_pmv() {
        let cool = pmv_ppd(22.0, 22.0, 0.1, 50.0, 1.2, 0.5);
        let warm = pmv_ppd(25.0, 25.0, 0.1, 50.0, 1.2, 0.5);
        assert!(warm.pmv > cool.pmv);
    }

    #[test]
    fn rejects_invalid_inputs() {
        let base = Measurement::new(22.0, 22.0, 0.1, 50.0, 1.2, 0.5);

        assert_eq!(
            evaluate(&Measurement::new(f64::NAN, 22.0, 0.1, 50.0, 1.2, 0.5)),
            Err(EvaluateError::NonFinite { input: "tdb" })
        );
        assert!(matches!(
            evaluate(&Measurement::new(22.0, 22.0, 0.1, -5.0, 1.2, 0.5)),
            Err(EvaluateError::Humidity { .. })
        ));
        assert!(matches!(
            evaluate(&Measurement::new(22.0, 22.0, 0.1, 120.0, 1.2, 0.5)),
            Err(EvaluateError::Humidity { .. })
        ));
        assert!(matches!(
            evaluate(&base.with_air_speed(-0.1)),
            Err(EvaluateError::AirSpeed { .. })
        ));
        assert!(matches!(
            evaluate(&Measurement { met: 0.0, ..base }),
            Err(EvaluateError::MetabolicRate { .. })
        ));
        assert!(matches!(
            evaluate(&Measurement { clo: -0.2, ..base }),
            Err(EvaluateError::Clothing { .. })
        ));
    }
}
