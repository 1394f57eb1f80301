#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Core observation types for the GreenGrid dataset.
//!
//! One [`Observation`] is one cleaned ward-day row of the raw weather +
//! population table. These types are pure data; parsing and cleaning live
//! in the engine crate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One cleaned row of the raw dataset: a single ward on a single day.
///
/// The five required numeric fields (`ward_no`, `population`,
/// `temperature_max`, `humidity_max`, `precipitation_sum`) are guaranteed
/// present by the loader — rows failing coercion are dropped, never
/// imputed. `latitude`/`longitude` are descriptive only and may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Calendar date of the measurements (no time component).
    pub date: NaiveDate,
    /// Positive integer ward identifier. `(ward_no, date)` is unique
    /// within a cleaned dataset.
    pub ward_no: u32,
    /// Human-readable ward name (static per ward).
    pub ward_name: String,
    /// Ward centroid latitude, if parseable.
    pub latitude: Option<f64>,
    /// Ward centroid longitude, if parseable.
    pub longitude: Option<f64>,
    /// Ward population. Numeric, not necessarily integral.
    pub population: f64,
    /// Daily maximum temperature.
    pub temperature_max: f64,
    /// Daily maximum relative humidity.
    pub humidity_max: f64,
    /// Daily precipitation sum.
    pub precipitation_sum: f64,
}
