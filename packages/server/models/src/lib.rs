#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API response types for the GreenGrid server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the engine result types to allow independent evolution of the API
//! contract.

use greengrid_engine_models::{DetailRecord, ForecastPoint, SnapshotRecord};
use serde::{Deserialize, Serialize};

/// A ward's vulnerability record for the most recent date, as returned by
/// the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiWardRisk {
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
    /// Vulnerability score (0-100).
    pub vulnerability_score: f64,
}

impl From<SnapshotRecord> for ApiWardRisk {
    fn from(record: SnapshotRecord) -> Self {
        Self {
            ward_no: record.ward_no,
            ward_name: record.ward_name,
            latitude: record.latitude,
            longitude: record.longitude,
            population: record.population,
            temperature_max: record.temperature_max,
            humidity_max: record.humidity_max,
            heat_risk_index: record.heat_risk_index,
            population_at_risk: record.population_at_risk,
            vulnerability_score: record.vulnerability_score,
        }
    }
}

/// One historical ward-day record, as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiWardDetail {
    /// Measurement date (`YYYY-MM-DD`).
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
    /// Vulnerability score (0-100).
    pub vulnerability_score: f64,
}

impl From<DetailRecord> for ApiWardDetail {
    fn from(record: DetailRecord) -> Self {
        Self {
            date: record.date,
            ward_no: record.ward_no,
            ward_name: record.ward_name,
            latitude: record.latitude,
            longitude: record.longitude,
            population: record.population,
            temperature_max: record.temperature_max,
            humidity_max: record.humidity_max,
            precipitation_sum: record.precipitation_sum,
            heat_risk_index: record.heat_risk_index,
            population_at_risk: record.population_at_risk,
            vulnerability_score: record.vulnerability_score,
        }
    }
}

/// One forecast day, as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiForecastPoint {
    /// Forecast date (`YYYY-MM-DD`).
    pub date: String,
    /// Predicted daily maximum temperature.
    pub predicted_value: f64,
    /// Lower uncertainty bound.
    pub lower_bound: f64,
    /// Upper uncertainty bound.
    pub upper_bound: f64,
}

impl From<ForecastPoint> for ApiForecastPoint {
    fn from(point: ForecastPoint) -> Self {
        Self {
            date: point.date,
            predicted_value: point.predicted_value,
            lower_bound: point.lower_bound,
            upper_bound: point.upper_bound,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}
