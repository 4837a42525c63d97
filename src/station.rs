//! Station observation processing.
//!
//! Reads surface observation rows (time, temperature, dew point) from a
//! delimited log, derives relative humidity per row, and emits one record
//! per input row in input order. No filtering, no deduplication: malformed
//! numeric cells become NaN and flow through the derivation unchanged, and
//! input ranges are not validated.

use serde::Serialize;
use std::path::Path;
use tracing::debug;

use crate::error::{MagnusError, Result};
use crate::humidity;

/// One surface reading as supplied by the station log.
#[derive(Debug, Clone, PartialEq)]
pub struct StationObservation {
    /// Observation timestamp, passed through verbatim
    pub time: String,
    /// Air temperature in °C
    pub temperature_c: f64,
    /// Dew point in °C
    pub dewpoint_c: f64,
}

/// One output row: the observation plus its derived relative humidity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationRecord {
    #[serde(rename = "Date and Time (UTC)")]
    pub time: String,
    #[serde(rename = "Temperature (Celsius)")]
    pub temperature_c: f64,
    #[serde(rename = "Dew Point (Celsius)")]
    pub dewpoint_c: f64,
    #[serde(rename = "Relative Humidity (%)")]
    pub relative_humidity_pct: f64,
}

/// Read observations from a delimited station log.
///
/// The header row must name `time`, `temperature` and `dewpoint` columns
/// (matched case-insensitively, in any position).
pub fn read_observations(path: &Path) -> Result<Vec<StationObservation>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| MagnusError::SourceRead {
        message: format!("Failed to open station file {}: {}", path.display(), e),
    })?;

    let headers = reader.headers()?.clone();
    let time_idx = column_index(&headers, "time", path)?;
    let temperature_idx = column_index(&headers, "temperature", path)?;
    let dewpoint_idx = column_index(&headers, "dewpoint", path)?;

    let mut observations = Vec::new();
    for result in reader.records() {
        let record = result?;
        observations.push(StationObservation {
            time: record.get(time_idx).unwrap_or("").to_string(),
            temperature_c: parse_or_nan(record.get(temperature_idx)),
            dewpoint_c: parse_or_nan(record.get(dewpoint_idx)),
        });
    }

    debug!("Read {} station observations", observations.len());
    Ok(observations)
}

fn column_index(headers: &csv::StringRecord, name: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| MagnusError::SourceRead {
            message: format!("station file {} has no {} column", path.display(), name),
        })
}

/// Missing cells and malformed numbers both surface as NaN.
fn parse_or_nan(cell: Option<&str>) -> f64 {
    cell.and_then(|c| c.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Derive relative humidity for every observation, preserving input order.
pub fn process(observations: &[StationObservation]) -> Result<Vec<StationRecord>> {
    observations
        .iter()
        .map(|obs| {
            let relative_humidity_pct =
                humidity::relative_humidity(obs.temperature_c, obs.dewpoint_c)?;
            Ok(StationRecord {
                time: obs.time.clone(),
                temperature_c: obs.temperature_c,
                dewpoint_c: obs.dewpoint_c,
                relative_humidity_pct,
            })
        })
        .collect()
}
