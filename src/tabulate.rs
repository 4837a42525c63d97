//! Flattening a field set into row-oriented records.
//!
//! The Cartesian product of the four canonical axes is expanded with time
//! outermost and longitude innermost. That nesting order must match the
//! memory layout of the (time, pressure, latitude, longitude) arrays; the
//! length-product assertion below enforces the contract before any record
//! is emitted.

use serde::Serialize;
use tracing::debug;

use crate::error::{MagnusError, Result};
use crate::field::FieldSet;
use crate::units;

/// One row of the flattened grid table: a coordinate tuple joined with the
/// corresponding cell of every field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridRecord {
    /// Decoded UTC timestamp
    #[serde(rename = "Date and Time (UTC)")]
    pub time: String,
    #[serde(rename = "Latitude (degrees)")]
    pub latitude: f64,
    #[serde(rename = "Longitude (degrees)")]
    pub longitude: f64,
    #[serde(rename = "Pressure (hPa)")]
    pub pressure: f64,
    #[serde(rename = "Temperature (Celsius)")]
    pub temperature_c: f64,
    #[serde(rename = "Relative Humidity (%)")]
    pub relative_humidity_pct: f64,
    #[serde(rename = "Height Above Sea Level (m)")]
    pub height_m: f64,
}

/// Expand the coordinate grid into its full combinatorial index space and
/// emit one record per cell. The sequence is deterministic: the same field
/// set always yields the same records in the same order, with cardinality
/// exactly |time| x |pressure| x |latitude| x |longitude|.
pub fn to_records(field_set: &FieldSet) -> Result<Vec<GridRecord>> {
    let time = field_set.axis("time")?;
    let pressure = field_set.axis("pressure")?;
    let latitude = field_set.axis("latitude")?;
    let longitude = field_set.axis("longitude")?;

    let expected = field_set.cell_count();
    for field in field_set.fields() {
        if field.data.len() != expected {
            return Err(MagnusError::Shape {
                message: format!(
                    "field {} has {} cells, axes imply {}",
                    field.variable_name,
                    field.data.len(),
                    expected
                ),
            });
        }
    }

    // Decode each time value once; every (pressure, lat, lon) cell under it
    // reuses the formatted timestamp.
    let timestamps: Vec<String> = time
        .values
        .iter()
        .map(|&v| {
            units::decode_time(v, &field_set.time_units)
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        })
        .collect::<Result<_>>()?;

    let mut records = Vec::with_capacity(expected);
    for (ti, timestamp) in timestamps.iter().enumerate() {
        for (pi, &pressure_value) in pressure.values.iter().enumerate() {
            for (yi, &lat) in latitude.values.iter().enumerate() {
                for (xi, &lon) in longitude.values.iter().enumerate() {
                    let idx = [ti, pi, yi, xi];
                    records.push(GridRecord {
                        time: timestamp.clone(),
                        latitude: lat,
                        longitude: lon,
                        pressure: pressure_value,
                        temperature_c: field_set.temperature.data[idx],
                        relative_humidity_pct: field_set.relative_humidity.data[idx],
                        height_m: field_set.height.data[idx],
                    });
                }
            }
        }
    }

    debug!("Flattened {} grid cells into records", records.len());
    Ok(records)
}
