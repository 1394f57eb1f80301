#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Result types for the GreenGrid vulnerability engine.
//!
//! These types carry the output of the three engine queries (snapshot,
//! detail, forecast). They are separate from the raw observation types so
//! that projection, rounding, and date formatting rules live in one place
//! — the `From` conversions here — rather than being scattered through the
//! query code.

use chrono::NaiveDate;
use greengrid_weather_models::Observation;
use serde::{Deserialize, Serialize};

/// Date format used for all engine output (`YYYY-MM-DD`).
pub const OUTPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Rounds a value to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// An [`Observation`] enriched with the derived risk fields.
///
/// Produced by the engine pipeline (load → derive → normalize). The
/// vulnerability score is normalized over the *entire* loaded dataset, so
/// a `ScoredObservation` is only meaningful relative to the table it was
/// computed with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredObservation {
    /// Calendar date of the measurements.
    pub date: NaiveDate,
    /// Positive integer ward identifier.
    pub ward_no: u32,
    /// Human-readable ward name.
    pub ward_name: String,
    /// Ward centroid latitude, if parseable.
    pub latitude: Option<f64>,
    /// Ward centroid longitude, if parseable.
    pub longitude: Option<f64>,
    /// Ward population.
    pub population: f64,
    /// Daily maximum temperature.
    pub temperature_max: f64,
    /// Daily maximum relative humidity.
    pub humidity_max: f64,
    /// Daily precipitation sum.
    pub precipitation_sum: f64,
    /// Weighted combination of temperature, humidity, and (negatively)
    /// precipitation.
    pub heat_risk_index: f64,
    /// `heat_risk_index * population`.
    pub population_at_risk: f64,
    /// Population at risk rescaled to `[0, 100]` over the whole dataset.
    pub vulnerability_score: f64,
}

impl ScoredObservation {
    /// Assembles a scored row from a cleaned observation and its derived
    /// fields.
    #[must_use]
    pub fn new(
        observation: Observation,
        heat_risk_index: f64,
        population_at_risk: f64,
        vulnerability_score: f64,
    ) -> Self {
        Self {
            date: observation.date,
            ward_no: observation.ward_no,
            ward_name: observation.ward_name,
            latitude: observation.latitude,
            longitude: observation.longitude,
            population: observation.population,
            temperature_max: observation.temperature_max,
            humidity_max: observation.humidity_max,
            precipitation_sum: observation.precipitation_sum,
            heat_risk_index,
            population_at_risk,
            vulnerability_score,
        }
    }
}

/// One ward's record for the most recent date in the dataset.
///
/// All numeric fields are rounded to two decimal places. Note the
/// projected column set drops `date` (implied by the snapshot) and
/// `precipitation_sum`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    /// Ward identifier.
    pub ward_no: u32,
    /// Ward name.
    pub ward_name: String,
    /// Ward centroid latitude.
    pub latitude: Option<f64>,
    /// Ward centroid longitude.
    pub longitude: Option<f64>,
    /// Ward population.
    pub population: f64,
    /// Daily maximum temperature.
    pub temperature_max: f64,
    /// Daily maximum relative humidity.
    pub humidity_max: f64,
    /// Heat risk index.
    pub heat_risk_index: f64,
    /// Population at risk.
    pub population_at_risk: f64,
    /// Vulnerability score in `[0, 100]`.
    pub vulnerability_score: f64,
}

impl From<&ScoredObservation> for SnapshotRecord {
    fn from(row: &ScoredObservation) -> Self {
        Self {
            ward_no: row.ward_no,
            ward_name: row.ward_name.clone(),
            latitude: row.latitude.map(round2),
            longitude: row.longitude.map(round2),
            population: round2(row.population),
            temperature_max: round2(row.temperature_max),
            humidity_max: round2(row.humidity_max),
            heat_risk_index: round2(row.heat_risk_index),
            population_at_risk: round2(row.population_at_risk),
            vulnerability_score: round2(row.vulnerability_score),
        }
    }
}

/// One historical row for a single ward, date formatted as `YYYY-MM-DD`.
///
/// Unlike the snapshot projection, detail rows carry the full column set
/// and are not rounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRecord {
    /// Measurement date as an ISO calendar string.
    pub date: String,
    /// Ward identifier.
    pub ward_no: u32,
    /// Ward name.
    pub ward_name: String,
    /// Ward centroid latitude.
    pub latitude: Option<f64>,
    /// Ward centroid longitude.
    pub longitude: Option<f64>,
    /// Ward population.
    pub population: f64,
    /// Daily maximum temperature.
    pub temperature_max: f64,
    /// Daily maximum relative humidity.
    pub humidity_max: f64,
    /// Daily precipitation sum.
    pub precipitation_sum: f64,
    /// Heat risk index.
    pub heat_risk_index: f64,
    /// Population at risk.
    pub population_at_risk: f64,
    /// Vulnerability score in `[0, 100]`.
    pub vulnerability_score: f64,
}

impl From<&ScoredObservation> for DetailRecord {
    fn from(row: &ScoredObservation) -> Self {
        Self {
            date: row.date.format(OUTPUT_DATE_FORMAT).to_string(),
            ward_no: row.ward_no,
            ward_name: row.ward_name.clone(),
            latitude: row.latitude,
            longitude: row.longitude,
            population: row.population,
            temperature_max: row.temperature_max,
            humidity_max: row.humidity_max,
            precipitation_sum: row.precipitation_sum,
            heat_risk_index: row.heat_risk_index,
            population_at_risk: row.population_at_risk,
            vulnerability_score: row.vulnerability_score,
        }
    }
}

/// One projected future day for a single ward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Forecast date as an ISO calendar string.
    pub date: String,
    /// Predicted daily maximum temperature, rounded to two decimals.
    pub predicted_value: f64,
    /// Lower uncertainty bound.
    pub lower_bound: f64,
    /// Upper uncertainty bound.
    pub upper_bound: f64,
}
