//! CSV loader and cleaner for the raw weather + population dataset.
//!
//! Cleaning rules: dates must parse under the fixed `DD-MM-YYYY` format
//! (a malformed date fails the whole load); the five required numeric
//! columns are coerced and any row with an unparseable value is dropped;
//! latitude/longitude are descriptive and parse leniently.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use greengrid_weather_models::Observation;
use serde::Deserialize;

use crate::EngineError;

/// Fixed date format of the raw dataset.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// One raw CSV record, string-typed so numeric coercion is explicit.
///
/// The raw header spells the population column `Population`.
#[derive(Debug, Deserialize)]
struct RawRecord {
    date: String,
    ward_no: String,
    ward_name: String,
    latitude: String,
    longitude: String,
    #[serde(rename = "Population")]
    population: String,
    temperature_max: String,
    humidity_max: String,
    precipitation_sum: String,
}

/// Loads and cleans the dataset at `path`.
///
/// A missing file is a degraded mode, not an error: it logs a warning and
/// returns an empty table, so every downstream query sees "no data".
///
/// # Errors
///
/// Returns [`EngineError`] if the file exists but cannot be read or parsed
/// as CSV, or if any date value does not match [`DATE_FORMAT`].
pub fn load(path: &Path) -> Result<Vec<Observation>, EngineError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::warn!(
                "Dataset not found at {}; treating as empty",
                path.display()
            );
            return Ok(Vec::new());
        }
        Err(e) => return Err(EngineError::Io(e)),
    };

    let mut reader = csv::Reader::from_reader(file);
    let mut observations = Vec::new();
    let mut dropped: usize = 0;

    for record in reader.deserialize() {
        let raw: RawRecord = record?;

        let date = NaiveDate::parse_from_str(raw.date.trim(), DATE_FORMAT).map_err(|source| {
            EngineError::DateParse {
                value: raw.date.clone(),
                source,
            }
        })?;

        let (
            Some(ward_no),
            Some(population),
            Some(temperature_max),
            Some(humidity_max),
            Some(precipitation_sum),
        ) = (
            parse_ward_no(&raw.ward_no),
            parse_numeric(&raw.population),
            parse_numeric(&raw.temperature_max),
            parse_numeric(&raw.humidity_max),
            parse_numeric(&raw.precipitation_sum),
        )
        else {
            dropped += 1;
            continue;
        };

        observations.push(Observation {
            date,
            ward_no,
            ward_name: raw.ward_name,
            latitude: parse_numeric(&raw.latitude),
            longitude: parse_numeric(&raw.longitude),
            population,
            temperature_max,
            humidity_max,
            precipitation_sum,
        });
    }

    if dropped > 0 {
        log::warn!("Dropped {dropped} rows with missing required numeric fields");
    }
    log::info!(
        "Loaded {} observations from {}",
        observations.len(),
        path.display()
    );

    Ok(observations)
}

/// Coerces a cell to a finite number, treating anything else as missing.
fn parse_numeric(s: &str) -> Option<f64> {
    let value: f64 = s.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Coerces a ward number: numeric first, then truncated to an integer,
/// matching the source data's integer cast.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_ward_no(s: &str) -> Option<u32> {
    let value = parse_numeric(s)?;
    (value >= 0.0 && value <= f64::from(u32::MAX)).then_some(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "date,ward_no,ward_name,latitude,longitude,Population,temperature_max,humidity_max,precipitation_sum";

    fn write_csv(rows: &[&str]) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weather.csv");
        let mut contents = String::from(HEADER);
        contents.push('\n');
        for row in rows {
            contents.push_str(row);
            contents.push('\n');
        }
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_clean_rows() {
        let (_dir, path) = write_csv(&[
            "01-06-2024,1,Koramangala,12.93,77.62,45000,34.2,78.0,0.4",
            "02-06-2024,2.0,Indiranagar,12.97,77.64,38000,33.8,75.5,1.2",
        ]);
        let rows = load(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(rows[0].ward_no, 1);
        // ward_no coerces through a numeric cast, so "2.0" is ward 2
        assert_eq!(rows[1].ward_no, 2);
        assert!((rows[0].population - 45_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn drops_rows_with_missing_required_numerics() {
        let (_dir, path) = write_csv(&[
            "01-06-2024,1,Koramangala,12.93,77.62,45000,34.2,78.0,0.4",
            "01-06-2024,2,Indiranagar,12.97,77.64,,33.8,75.5,1.2",
            "01-06-2024,3,Jayanagar,12.92,77.58,52000,n/a,80.1,0.0",
            "01-06-2024,4,Malleshwaram,13.00,77.57,41000,32.5,NaN,0.1",
        ]);
        let rows = load(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].ward_no, 1);
    }

    #[test]
    fn missing_file_yields_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let rows = load(&dir.path().join("absent.csv")).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn malformed_date_is_fatal() {
        let (_dir, path) = write_csv(&[
            "01-06-2024,1,Koramangala,12.93,77.62,45000,34.2,78.0,0.4",
            "2024-06-02,2,Indiranagar,12.97,77.64,38000,33.8,75.5,1.2",
        ]);
        let result = load(&path);
        assert!(matches!(result, Err(EngineError::DateParse { value, .. }) if value == "2024-06-02"));
    }

    #[test]
    fn coordinates_parse_leniently() {
        let (_dir, path) = write_csv(&[
            "01-06-2024,1,Koramangala,unknown,77.62,45000,34.2,78.0,0.4",
        ]);
        let rows = load(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].latitude, None);
        assert_eq!(rows[0].longitude, Some(77.62));
    }

    #[test]
    fn negative_ward_no_drops_the_row() {
        let (_dir, path) = write_csv(&[
            "01-06-2024,-3,Koramangala,12.93,77.62,45000,34.2,78.0,0.4",
        ]);
        let rows = load(&path).unwrap();
        assert!(rows.is_empty());
    }
}
