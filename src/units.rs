//! Pure numeric unit conversions.
//!
//! Geopotential to height, temperature to Celsius, and decoding of
//! epoch-offset time values as NetCDF sources carry them
//! ("hours since 2023-07-17 00:00:00").

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::STANDARD_GRAVITY;
use crate::error::{MagnusError, Result};
use crate::field::GriddedField;

/// Temperature units the converter recognizes, by their CF spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    fn parse(unit: &str) -> Result<Self> {
        match unit {
            "K" | "kelvin" | "Kelvin" => Ok(Self::Kelvin),
            "degC" | "deg_C" | "C" | "celsius" | "Celsius" => Ok(Self::Celsius),
            "degF" | "deg_F" | "F" | "fahrenheit" | "Fahrenheit" => Ok(Self::Fahrenheit),
            _ => Err(MagnusError::UnsupportedUnit {
                unit: unit.to_string(),
            }),
        }
    }

    fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Kelvin => value - 273.15,
            Self::Celsius => value,
            Self::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        }
    }
}

/// Convert geopotential (m²/s²) to height above sea level (m) by dividing
/// by standard gravity. Total: defined for all real inputs.
pub fn geopotential_to_height(geopotential: f64) -> f64 {
    geopotential / STANDARD_GRAVITY
}

/// Convert a single temperature value to Celsius.
pub fn to_celsius(value: f64, source_unit: &str) -> Result<f64> {
    Ok(TemperatureUnit::parse(source_unit)?.to_celsius(value))
}

/// Convert a whole temperature field to Celsius, rewriting its units tag.
pub fn field_to_celsius(mut field: GriddedField) -> Result<GriddedField> {
    let unit = TemperatureUnit::parse(&field.units)?;
    field.data.mapv_inplace(|v| unit.to_celsius(v));
    field.units = "degC".to_string();
    Ok(field)
}

/// Derive a height-above-sea-level field from a geopotential field.
/// The axes carry over unchanged, so the result stays co-registered.
pub fn geopotential_field_to_height(field: &GriddedField) -> GriddedField {
    GriddedField {
        variable_name: "height_above_sea_level".to_string(),
        units: "m".to_string(),
        data: field.data.mapv(geopotential_to_height),
        axes: field.axes.clone(),
    }
}

/// Decode an epoch-offset time value using its units string, e.g.
/// `decode_time(2.0, "hours since 2023-07-17 22:00:00")`.
///
/// Sub-second fractions are rounded to the nearest second.
pub fn decode_time(value: f64, units: &str) -> Result<NaiveDateTime> {
    let mut parts = units.splitn(2, " since ");
    let step = parts.next().unwrap_or("").trim();
    let epoch = parts
        .next()
        .ok_or_else(|| MagnusError::UnsupportedUnit {
            unit: units.to_string(),
        })?
        .trim();

    let seconds_per_step = match step {
        "seconds" | "second" => 1.0,
        "minutes" | "minute" => 60.0,
        "hours" | "hour" => 3600.0,
        "days" | "day" => 86400.0,
        _ => {
            return Err(MagnusError::UnsupportedUnit {
                unit: units.to_string(),
            })
        }
    };

    let epoch_dt = NaiveDateTime::parse_from_str(epoch, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(epoch, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| {
            NaiveDate::parse_from_str(epoch, "%Y-%m-%d").map(|d| d.and_time(NaiveTime::MIN))
        })
        .map_err(|_| MagnusError::UnsupportedUnit {
            unit: units.to_string(),
        })?;

    let offset_seconds = (value * seconds_per_step).round() as i64;
    Ok(epoch_dt + Duration::seconds(offset_seconds))
}
