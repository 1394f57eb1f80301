#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Data pipeline and query engine for GreenGrid ward vulnerability.
//!
//! The pipeline cleans the raw weather + population CSV into per-ward-day
//! observations, derives the heat risk fields, and normalizes the
//! vulnerability score over the whole dataset. The three queries
//! (snapshot, detail, forecast) each re-run the full pipeline and apply
//! their own selection step — every query is a pure function of the
//! on-disk dataset, with no shared or cached state between calls.

pub mod features;
pub mod loader;
pub mod normalize;
pub mod queries;

use std::path::Path;

use greengrid_engine_models::ScoredObservation;
use thiserror::Error;

/// Errors that can occur during engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Reading the dataset failed (other than the file being absent,
    /// which degrades to an empty table).
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset could not be parsed as CSV.
    #[error("Failed to parse dataset: {0}")]
    Csv(#[from] csv::Error),

    /// A date value did not match the fixed `DD-MM-YYYY` dataset format.
    /// Unlike malformed numeric fields, this is fatal for the whole load.
    #[error("Invalid date '{value}' in dataset: {source}")]
    DateParse {
        /// The offending date string.
        value: String,
        /// Underlying chrono parse failure.
        source: chrono::ParseError,
    },

    /// No rows exist for the requested ward.
    #[error("No data found for ward_no {ward_no}")]
    WardNotFound {
        /// The requested ward identifier.
        ward_no: u32,
    },

    /// The ward has too few historical observations to fit a forecast.
    #[error("Not enough data to create forecast for ward {ward_no}")]
    InsufficientData {
        /// The requested ward identifier.
        ward_no: u32,
    },

    /// The seasonal model fit failed.
    #[error("Forecast model error: {0}")]
    Forecast(#[from] greengrid_forecast::ForecastError),
}

/// Loads, cleans, and scores the full dataset.
///
/// Runs the whole pipeline: CSV load + clean, per-row risk derivation,
/// then the global min-max vulnerability rescale. A missing dataset file
/// yields an empty table, not an error.
///
/// # Errors
///
/// Returns [`EngineError`] if the dataset cannot be read or parsed, or if
/// a date value is malformed.
pub fn load_scored(path: &Path) -> Result<Vec<ScoredObservation>, EngineError> {
    let observations = loader::load(path)?;

    let at_risk: Vec<f64> = observations.iter().map(features::population_at_risk).collect();
    let (scores, range) = normalize::rescale(&at_risk);
    if let Some((min, max)) = range {
        log::debug!("Vulnerability scale fit over population at risk range [{min}, {max}]");
    }

    Ok(observations
        .into_iter()
        .zip(at_risk.into_iter().zip(scores))
        .map(|(observation, (population_at_risk, vulnerability_score))| {
            let heat_risk_index = features::heat_risk_index(&observation);
            ScoredObservation::new(
                observation,
                heat_risk_index,
                population_at_risk,
                vulnerability_score,
            )
        })
        .collect())
}
