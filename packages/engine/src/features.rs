//! Per-row risk feature derivation.

use greengrid_weather_models::Observation;

/// Weight of daily maximum temperature in the heat risk index.
pub const TEMPERATURE_WEIGHT: f64 = 0.5;
/// Weight of daily maximum humidity in the heat risk index.
pub const HUMIDITY_WEIGHT: f64 = 0.3;
/// Weight of daily precipitation, which offsets heat risk.
pub const PRECIPITATION_WEIGHT: f64 = 0.2;

/// Weighted combination of temperature, humidity, and (negatively)
/// precipitation for one observation.
#[must_use]
pub fn heat_risk_index(observation: &Observation) -> f64 {
    TEMPERATURE_WEIGHT * observation.temperature_max
        + HUMIDITY_WEIGHT * observation.humidity_max
        - PRECIPITATION_WEIGHT * observation.precipitation_sum
}

/// Population-weighted exposure: heat risk index scaled by ward
/// population.
#[must_use]
pub fn population_at_risk(observation: &Observation) -> f64 {
    heat_risk_index(observation) * observation.population
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn observation(temperature_max: f64, humidity_max: f64, precipitation_sum: f64) -> Observation {
        Observation {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            ward_no: 1,
            ward_name: "Koramangala".to_string(),
            latitude: Some(12.93),
            longitude: Some(77.62),
            population: 45_000.0,
            temperature_max,
            humidity_max,
            precipitation_sum,
        }
    }

    #[test]
    fn heat_risk_index_matches_linear_formula() {
        let obs = observation(34.2, 78.0, 0.4);
        let expected = 0.5 * 34.2 + 0.3 * 78.0 - 0.2 * 0.4;
        assert!((heat_risk_index(&obs) - expected).abs() < 1e-6);
    }

    #[test]
    fn precipitation_offsets_risk() {
        let dry = observation(34.2, 78.0, 0.0);
        let wet = observation(34.2, 78.0, 10.0);
        assert!(heat_risk_index(&wet) < heat_risk_index(&dry));
    }

    #[test]
    fn population_at_risk_scales_by_population() {
        let obs = observation(34.2, 78.0, 0.4);
        let expected = heat_risk_index(&obs) * 45_000.0;
        assert!((population_at_risk(&obs) - expected).abs() < 1e-6);
    }
}
