//! The three engine queries: snapshot, detail, and forecast.
//!
//! Each query re-runs the full pipeline over the on-disk dataset and then
//! applies its own selection/projection/modeling step. Nothing is cached
//! between calls.

use std::path::Path;

use chrono::NaiveDate;
use greengrid_engine_models::{
    DetailRecord, ForecastPoint, OUTPUT_DATE_FORMAT, SnapshotRecord, round2,
};
use greengrid_forecast::{ModelConfig, SeasonalModel};

use crate::EngineError;

/// Number of future days projected by the forecaster.
pub const FORECAST_HORIZON_DAYS: i64 = 14;

/// Minimum historical observations required before fitting a forecast.
pub const MIN_FORECAST_OBSERVATIONS: usize = 10;

/// Returns the per-ward records for the single most recent date in the
/// dataset, in table order. All numeric outputs are rounded to two
/// decimals.
///
/// An empty (or missing) dataset yields an empty vector, never an error.
///
/// # Errors
///
/// Returns [`EngineError`] if the dataset cannot be read or parsed.
pub fn current_snapshot(data_path: &Path) -> Result<Vec<SnapshotRecord>, EngineError> {
    let table = crate::load_scored(data_path)?;

    let Some(latest) = table.iter().map(|row| row.date).max() else {
        return Ok(Vec::new());
    };
    log::info!("Snapshot query selecting latest date {latest}");

    Ok(table
        .iter()
        .filter(|row| row.date == latest)
        .map(SnapshotRecord::from)
        .collect())
}

/// Returns all historical rows for one ward, in table order.
///
/// # Errors
///
/// Returns [`EngineError::WardNotFound`] when the identifier is absent
/// from the dataset — an absent ward is a domain condition, never an
/// empty success.
pub fn ward_detail(data_path: &Path, ward_no: u32) -> Result<Vec<DetailRecord>, EngineError> {
    let table = crate::load_scored(data_path)?;

    let records: Vec<DetailRecord> = table
        .iter()
        .filter(|row| row.ward_no == ward_no)
        .map(DetailRecord::from)
        .collect();

    if records.is_empty() {
        return Err(EngineError::WardNotFound { ward_no });
    }
    Ok(records)
}

/// Fits a seasonal model on one ward's daily maximum temperature and
/// projects the next [`FORECAST_HORIZON_DAYS`] days with uncertainty
/// bounds.
///
/// A fresh model is fit on every call. The ward's series is explicitly
/// sorted by date before fitting — table order is not trusted to be
/// chronological.
///
/// # Errors
///
/// Returns [`EngineError::InsufficientData`] when the ward has fewer than
/// [`MIN_FORECAST_OBSERVATIONS`] historical rows (an absent ward included),
/// and propagates dataset or model-fit failures.
pub fn ward_forecast(data_path: &Path, ward_no: u32) -> Result<Vec<ForecastPoint>, EngineError> {
    let table = crate::load_scored(data_path)?;

    let mut series: Vec<(NaiveDate, f64)> = table
        .iter()
        .filter(|row| row.ward_no == ward_no)
        .map(|row| (row.date, row.temperature_max))
        .collect();

    if series.len() < MIN_FORECAST_OBSERVATIONS {
        return Err(EngineError::InsufficientData { ward_no });
    }

    series.sort_by_key(|(date, _)| *date);
    let origin = series[0].0;
    let last_observed = series[series.len() - 1].0;

    let times: Vec<f64> = series
        .iter()
        .map(|(date, _)| day_offset(origin, *date))
        .collect();
    let values: Vec<f64> = series.iter().map(|(_, value)| *value).collect();

    let model = SeasonalModel::fit(ModelConfig::default(), &times, &values)?;

    // Predict over the whole extended axis (history + horizon), then keep
    // only the genuinely future days.
    let mut axis: Vec<NaiveDate> = series.iter().map(|(date, _)| *date).collect();
    axis.extend((1..=FORECAST_HORIZON_DAYS).map(|offset| last_observed + chrono::Duration::days(offset)));

    let points: Vec<ForecastPoint> = axis
        .into_iter()
        .map(|date| (date, model.predict(day_offset(origin, date))))
        .filter(|(date, _)| *date > last_observed)
        .map(|(date, prediction)| ForecastPoint {
            date: date.format(OUTPUT_DATE_FORMAT).to_string(),
            predicted_value: round2(prediction.value),
            lower_bound: round2(prediction.lower),
            upper_bound: round2(prediction.upper),
        })
        .collect();

    log::info!(
        "Created {}-day forecast for ward {ward_no} from {} observations",
        FORECAST_HORIZON_DAYS,
        values.len()
    );
    Ok(points)
}

/// Days between `origin` and `date` as a fractional day count.
#[allow(clippy::cast_precision_loss)]
fn day_offset(origin: NaiveDate, date: NaiveDate) -> f64 {
    (date - origin).num_days() as f64
}
