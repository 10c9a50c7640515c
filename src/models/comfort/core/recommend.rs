//! Corrective measures derived from an assessment and its adjustment.
//!
//! Every rule is evaluated independently, so several may fire for one
//! measurement. The output order is fixed: parameter adjustments first,
//! then the main strategy for the detected stress, then additional factors,
//! and finally the maintenance and administrative measures that always apply.

mod config;
mod recommendation;

pub use config::RecommendationConfig;
pub use recommendation::{Category, Priority, Recommendation};

use crate::support::{
    comfort::{COMFORT_BAND, Measurement},
    units::{to_celsius_delta, to_meters_per_second, to_percent},
};

/// Derives the recommendations for a measurement.
///
/// `initial_pmv` is the PMV of `measured`, and `tdb_final`/`tr_final` are the
/// adjusted temperatures in °C.
#[must_use]
pub fn recommend(
    initial_pmv: f64,
    measured: &Measurement,
    tdb_final: f64,
    tr_final: f64,
    config: &RecommendationConfig,
) -> Vec<Recommendation> {
    let tdb = measured.tdb_celsius();
    let tr = measured.tr_celsius();
    let vr = measured.vr_meters_per_second();
    let hot = initial_pmv > COMFORT_BAND;
    let cold = initial_pmv < -COMFORT_BAND && config.enable_cold_recommendations;

    let floor = to_meters_per_second(config.ventilation_floor);
    let radiant_excess = tr - tdb;
    let radiant_excess_flagged = radiant_excess > to_celsius_delta(config.radiant_excess);

    let mut recommendations = Vec::new();

    if hot && vr < floor {
        recommendations.push(
            Recommendation::new(
                Category::Ventilation,
                format!("Increase air speed from {vr:.2} m/s to at least {floor:.2} m/s"),
            )
            .actions([
                "Install fans (at least 2 per area)",
                "Add forced extraction",
                "Improve cross ventilation",
            ])
            .priority(Priority::First)
            .deadline("3 months"),
        );
    }

    let ceiling = to_meters_per_second(config.cold_draft_ceiling);
    if cold && vr > ceiling {
        recommendations.push(
            Recommendation::new(
                Category::Ventilation,
                format!("Reduce cold air currents from {vr:.2} m/s to at most {ceiling:.2} m/s"),
            )
            .actions([
                "Redirect or shield air outlets away from work stations",
                "Lower fan speeds during cold periods",
            ])
            .priority(Priority::First),
        );
    }

    if radiant_excess_flagged {
        recommendations.push(
            Recommendation::new(
                Category::RadiantTemperature,
                format!("Radiant temperature exceeds air temperature by {radiant_excess:.1} °C"),
            )
            .actions([
                format!("Bring radiant temperature from {tr:.1} °C to about {tr_final:.1} °C"),
                "Install reflective surfaces".to_owned(),
                "Control radiation sources such as windows and equipment".to_owned(),
            ])
            .priority(Priority::First),
        );
    }

    if tdb - tdb_final > to_celsius_delta(config.air_temperature_drop) {
        recommendations.push(
            Recommendation::new(
                Category::AirTemperature,
                format!(
                    "Reduce air temperature by {:.1} °C, from {tdb:.1} °C to {tdb_final:.1} °C",
                    tdb - tdb_final
                ),
            )
            .actions([
                format!("Lower air temperature to about {tdb_final:.1} °C"),
                format!("Lower radiant temperature from {tr:.1} °C to about {tr_final:.1} °C"),
            ])
            .priority(Priority::First),
        );
    }

    if hot {
        recommendations.push(
            Recommendation::new(Category::Cooling, "Active cooling required")
                .actions([
                    "Acquire portable coolers (1-2 per area)",
                    "Agree on refill protocols with suppliers",
                    "Install HVAC systems in critical areas",
                ])
                .priority(Priority::Second)
                .deadline("3-6 months"),
        );

        if radiant_excess_flagged {
            recommendations.push(
                Recommendation::new(Category::Insulation, "Reduce thermal load")
                    .actions([
                        "Insulate roofs and walls",
                        "Add reflective solar protection",
                        "Insulate radiant heat sources",
                    ])
                    .priority(Priority::Second)
                    .deadline("3 months"),
            );
        }
    }

    if cold {
        recommendations.push(
            Recommendation::new(Category::Heating, "Protection against cold")
                .actions([
                    "Install radiant heating",
                    "Improve envelope insulation",
                    "Seal air infiltration",
                ])
                .priority(Priority::Second)
                .deadline("3 months"),
        );
    }

    if config
        .low_activity
        .is_some_and(|threshold| measured.met < threshold)
    {
        recommendations.push(
            Recommendation::new(
                Category::Activity,
                format!("Low metabolic activity ({:.1} met)", measured.met),
            )
            .actions([
                "Schedule active breaks".to_owned(),
                format!("Review clothing (currently {:.1} clo)", measured.clo),
            ]),
        );
    }

    if config
        .high_humidity
        .is_some_and(|threshold| measured.rh > threshold)
    {
        recommendations.push(
            Recommendation::new(
                Category::Humidity,
                format!("High relative humidity ({:.0} %)", to_percent(measured.rh)),
            )
            .actions([
                "Use dehumidifiers",
                "Improve natural or mechanical ventilation",
            ]),
        );
    }

    recommendations.push(
        Recommendation::new(Category::Maintenance, "Comprehensive maintenance program")
            .actions([
                "Preventive: schedule equipment servicing with suppliers",
                "Preventive: filter and panel cleaning calendar",
                "Preventive: monthly system checks",
                "Corrective: repair ventilation systems",
                "Corrective: tune air conditioning equipment",
                "Corrective: log technical interventions",
                "Control: keep air temperature within 23-26 °C and record it",
                "Control: monitor environmental parameters continuously",
            ])
            .priority(Priority::Third)
            .deadline("Ongoing"),
    );

    recommendations.push(
        Recommendation::new(Category::Administrative, "Worker communication")
            .actions([
                "Formally inform all staff about thermal risks",
                "Keep signed training records",
            ])
            .priority(Priority::Third)
            .deadline("30 days"),
    );

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(recommendations: &[Recommendation]) -> Vec<Category> {
        recommendations.iter().map(|r| r.category).collect()
    }

    #[test]
    fn comfortable_measurement_gets_only_standing_measures() {
        let m = Measurement::new(22.0, 22.0, 0.1, 50.0, 1.2, 0.5);

        let recommendations = recommend(-0.5, &m, 22.0, 22.0, &RecommendationConfig::default());

        assert_eq!(
            categories(&recommendations),
            vec![Category::Maintenance, Category::Administrative]
        );
        assert!(
            recommendations
                .iter()
                .all(|r| r.priority == Some(Priority::Third))
        );
    }

    #[test]
    fn hot_room_with_radiant_load_fires_rules_in_order() {
        let m = Measurement::new(35.0, 38.0, 0.1, 75.0, 1.1, 0.7);

        let recommendations = recommend(3.37, &m, 26.3, 26.3, &RecommendationConfig::default());

        assert_eq!(
            categories(&recommendations),
            vec![
                Category::Ventilation,
                Category::RadiantTemperature,
                Category::AirTemperature,
                Category::Cooling,
                Category::Insulation,
                Category::Activity,
                Category::Humidity,
                Category::Maintenance,
                Category::Administrative,
            ]
        );

        let air = &recommendations[2];
        assert!(air.message.contains("8.7 °C"));
        assert!(air.actions[1].contains("26.3 °C"));
        assert_eq!(recommendations[3].deadline.as_deref(), Some("3-6 months"));
    }

    #[test]
    fn cold_rules_follow_the_flag() {
        let m = Measurement::new(12.0, 12.0, 1.5, 10.0, 1.2, 0.5);
        let config = RecommendationConfig::default();

        let recommendations = recommend(-3.0, &m, 20.0, 20.0, &config);
        assert_eq!(
            categories(&recommendations),
            vec![
                Category::Ventilation,
                Category::Heating,
                Category::Maintenance,
                Category::Administrative,
            ]
        );

        let config = RecommendationConfig {
            enable_cold_recommendations: false,
            ..config
        };
        let recommendations = recommend(-3.0, &m, 20.0, 20.0, &config);
        assert_eq!(
            categories(&recommendations),
            vec![Category::Maintenance, Category::Administrative]
        );
    }

    #[test]
    fn optional_factors_can_be_turned_off() {
        let m = Measurement::new(22.0, 22.0, 0.1, 85.0, 1.0, 0.5);
        let config = RecommendationConfig {
            low_activity: None,
            high_humidity: None,
            ..RecommendationConfig::default()
        };

        let recommendations = recommend(0.2, &m, 22.0, 22.0, &config);

        assert_eq!(recommendations.len(), 2);
    }

    #[test]
    fn small_air_temperature_change_is_not_flagged() {
        let m = Measurement::new(30.0, 30.0, 0.2, 32.0, 1.2, 0.5);

        let recommendations = recommend(1.3, &m, 29.32, 29.32, &RecommendationConfig::default());

        assert!(
            recommendations
                .iter()
                .all(|r| r.category != Category::AirTemperature)
        );
        assert!(
            recommendations
                .iter()
                .all(|r| r.category != Category::Ventilation)
        );
        assert!(recommendations.iter().any(|r| r.category == Category::Cooling));
    }

    #[test]
    fn category_codes_are_stable() {
        assert_eq!(Category::Ventilation.code(), "ventilacion");
        assert_eq!(Category::RadiantTemperature.code(), "temperatura_radiante");
        assert_eq!(Category::Heating.to_string(), "calefaccion");
        assert_eq!(Priority::Second.level(), 2);
    }
}
