//! Harmonic regression model: linear trend plus Fourier seasonality.

use nalgebra::{DMatrix, DVector};

use crate::ForecastError;

/// Two-sided z multiplier for a central 80% normal interval.
pub const Z_80: f64 = 1.281_551_565_545;

/// One seasonal component: a truncated Fourier series over a fixed period.
///
/// The harmonic count bounds model flexibility — more harmonics fit
/// sharper within-period shapes but overfit short series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Seasonality {
    /// Cycle length in days.
    pub period: f64,
    /// Number of sine/cosine harmonic pairs.
    pub harmonics: u32,
}

impl Seasonality {
    /// Weekly cycle with the conventional three harmonics.
    #[must_use]
    pub const fn weekly() -> Self {
        Self {
            period: 7.0,
            harmonics: 3,
        }
    }

    /// Approximate monthly cycle (30.5 days) with five harmonics.
    #[must_use]
    pub const fn monthly() -> Self {
        Self {
            period: 30.5,
            harmonics: 5,
        }
    }
}

/// Configuration for a [`SeasonalModel`] fit.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    /// Seasonal components to include, in design-matrix order.
    pub seasonalities: Vec<Seasonality>,
    /// Two-sided z multiplier applied to the residual standard deviation
    /// when computing uncertainty bounds.
    pub interval_z: f64,
}

impl Default for ModelConfig {
    /// Weekly + monthly seasonality with 80% uncertainty intervals. No
    /// daily component (the series is daily) and no yearly component (the
    /// observed span is too short to constrain one).
    fn default() -> Self {
        Self {
            seasonalities: vec![Seasonality::weekly(), Seasonality::monthly()],
            interval_z: Z_80,
        }
    }
}

impl ModelConfig {
    /// Number of columns in the design matrix: intercept, trend, and a
    /// sine/cosine pair per harmonic of each seasonal component.
    #[must_use]
    pub fn column_count(&self) -> usize {
        2 + self
            .seasonalities
            .iter()
            .map(|s| 2 * s.harmonics as usize)
            .sum::<usize>()
    }
}

/// A point prediction with uncertainty bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Predicted value.
    pub value: f64,
    /// Lower uncertainty bound.
    pub lower: f64,
    /// Upper uncertainty bound.
    pub upper: f64,
}

/// A fitted additive seasonal model.
#[derive(Debug, Clone)]
pub struct SeasonalModel {
    config: ModelConfig,
    coefficients: DVector<f64>,
    residual_std: f64,
}

impl SeasonalModel {
    /// Fits the model to an observed series.
    ///
    /// `times` are fractional days on a common origin (typically days since
    /// the first observation) and must be paired one-to-one with `values`.
    /// The series should be chronological, although the least-squares fit
    /// itself is order-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::EmptySeries`] for an empty input,
    /// [`ForecastError::LengthMismatch`] when the slices disagree, and
    /// [`ForecastError::Solve`] if the SVD solve fails.
    pub fn fit(
        config: ModelConfig,
        times: &[f64],
        values: &[f64],
    ) -> Result<Self, ForecastError> {
        if times.is_empty() {
            return Err(ForecastError::EmptySeries);
        }
        if times.len() != values.len() {
            return Err(ForecastError::LengthMismatch {
                times: times.len(),
                values: values.len(),
            });
        }

        let n = times.len();
        let p = config.column_count();
        let design = DMatrix::from_row_iterator(
            n,
            p,
            times.iter().flat_map(|&t| design_row(&config, t)),
        );
        let observed = DVector::from_column_slice(values);

        let svd = design.clone().svd(true, true);
        let epsilon = singular_value_cutoff(&svd.singular_values, n.max(p));
        let rank = svd.rank(epsilon);
        let coefficients: DVector<f64> = svd
            .solve(&observed, epsilon)
            .map_err(|message| ForecastError::Solve {
                message: message.to_string(),
            })?;

        // Rank-adjusted degrees of freedom; an interpolating fit on a
        // short series legitimately collapses sigma to ~0.
        let residuals = &observed - &design * &coefficients;
        let dof = n.saturating_sub(rank).max(1);
        #[allow(clippy::cast_precision_loss)]
        let residual_std = (residuals.norm_squared() / dof as f64).sqrt();

        Ok(Self {
            config,
            coefficients,
            residual_std,
        })
    }

    /// Predicts the value at time `t` (same origin as the fitted series)
    /// with uncertainty bounds.
    #[must_use]
    pub fn predict(&self, t: f64) -> Prediction {
        let row = design_row(&self.config, t);
        let value: f64 = row
            .iter()
            .zip(self.coefficients.iter())
            .map(|(x, beta)| x * beta)
            .sum();
        let margin = self.config.interval_z * self.residual_std;
        Prediction {
            value,
            lower: value - margin,
            upper: value + margin,
        }
    }

    /// Standard deviation of the fit residuals.
    #[must_use]
    pub const fn residual_std(&self) -> f64 {
        self.residual_std
    }
}

/// One design-matrix row: `[1, t, sin/cos pairs...]`.
fn design_row(config: &ModelConfig, t: f64) -> Vec<f64> {
    let mut row = Vec::with_capacity(config.column_count());
    row.push(1.0);
    row.push(t);
    for seasonality in &config.seasonalities {
        for k in 1..=seasonality.harmonics {
            let angle = std::f64::consts::TAU * f64::from(k) * t / seasonality.period;
            row.push(angle.sin());
            row.push(angle.cos());
        }
    }
    row
}

/// Relative cutoff below which singular values are treated as zero.
fn singular_value_cutoff(singular_values: &DVector<f64>, dim: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let scale = dim as f64;
    singular_values.max() * f64::EPSILON * scale
}
