#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Additive seasonal time-series model for GreenGrid forecasts.
//!
//! Fits `y(t) = trend(t) + Σ seasonal(t)` over a daily series, where the
//! trend is linear and each seasonal component is a truncated Fourier
//! series with a fixed period and harmonic count. Coefficients are
//! estimated by least squares through a rank-truncating SVD, which also
//! yields a minimum-norm solution when a short series leaves the system
//! underdetermined. Uncertainty bounds come from the residual standard
//! deviation with rank-adjusted degrees of freedom.
//!
//! The fit is fully deterministic — no sampling anywhere — so repeated
//! fits over the same series produce bit-identical predictions.

mod model;

pub use model::{ModelConfig, Prediction, SeasonalModel, Seasonality, Z_80};

use thiserror::Error;

/// Errors that can occur while fitting a seasonal model.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The input series has no observations.
    #[error("Cannot fit a seasonal model on an empty series")]
    EmptySeries,

    /// The time and value slices have different lengths.
    #[error("Series length mismatch: {times} times vs {values} values")]
    LengthMismatch {
        /// Number of time points.
        times: usize,
        /// Number of observed values.
        values: usize,
    },

    /// The least-squares solve failed.
    #[error("Least-squares solve failed: {message}")]
    Solve {
        /// Solver failure description.
        message: String,
    },
}
