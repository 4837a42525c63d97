//! NetCDF data loading functionality.
//!
//! This module reads an ERA5 pressure-level file and turns it into a
//! validated [`FieldSet`]: one field per required variable, unit-converted,
//! with every coordinate axis cross-checked against the temperature field
//! before the fields may be combined. The binary encoding itself is the
//! netcdf crate's concern; nothing here parses bytes.

use ndarray::{Array, Dim};
use netcdf::{self, Variable as NetCDFVariable};
use std::path::Path;
use tracing::{debug, info};

use crate::config::{AXIS_NAMES, GEOPOTENTIAL_VAR, HUMIDITY_VAR, TEMPERATURE_VAR};
use crate::error::{MagnusError, Result};
use crate::field::{Axis, FieldSet, GriddedField};
use crate::units;

/// Load the three required fields from a NetCDF source and return them
/// co-registered and unit-converted: temperature in °C, relative humidity
/// unchanged, geopotential divided down to height above sea level.
pub fn load_fields(path: &Path) -> Result<FieldSet> {
    if !path.exists() {
        return Err(MagnusError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("File not found: {}", path.display()),
        )));
    }

    let file = netcdf::open(path).map_err(|e| MagnusError::SourceRead {
        message: format!("Failed to open NetCDF file {}: {}", path.display(), e),
    })?;

    info!("Opened NetCDF file: {}", path.display());
    debug!("File has {} variables", file.variables().count());

    let temperature = extract_field(&file, TEMPERATURE_VAR)?;
    let humidity = extract_field(&file, HUMIDITY_VAR)?;
    let geopotential = extract_field(&file, GEOPOTENTIAL_VAR)?;

    let time_units = axis_units(&file, "time")?;

    let temperature = units::field_to_celsius(temperature)?;
    let height = units::geopotential_field_to_height(&geopotential);

    // FieldSet::new checks every axis of the other fields against the
    // temperature field before the set can reach the tabularizer.
    FieldSet::new(temperature, humidity, height, time_units)
}

/// Select exactly one variable matching the given meteorological identifier
/// and read it as a gridded field. Zero matches and multiple matches are
/// both errors: a missing field cannot be substituted, and a duplicate must
/// not be resolved by silently picking one.
fn extract_field(file: &netcdf::File, variable_name: &str) -> Result<GriddedField> {
    let matches: Vec<NetCDFVariable> = file
        .variables()
        .filter(|var| variable_identifier(var) == variable_name)
        .collect();

    match matches.len() {
        0 => Err(MagnusError::MissingVariable {
            name: variable_name.to_string(),
        }),
        1 => read_field(file, &matches[0], variable_name),
        n => Err(MagnusError::AmbiguousVariable {
            name: variable_name.to_string(),
            count: n,
        }),
    }
}

/// The identifier a variable is matched under: its CF `standard_name`
/// attribute when present, its short name otherwise.
fn variable_identifier(var: &NetCDFVariable) -> String {
    if let Some(attr) = var.attribute("standard_name") {
        if let Ok(netcdf::AttributeValue::Str(s)) = attr.value() {
            return s;
        }
    }
    var.name()
}

/// Read one variable as a gridded field: canonical axes, coordinate values,
/// dense data, units tag.
fn read_field(
    file: &netcdf::File,
    var: &NetCDFVariable,
    variable_name: &str,
) -> Result<GriddedField> {
    let dim_names: Vec<String> = var.dimensions().iter().map(|d| d.name()).collect();
    if dim_names != AXIS_NAMES {
        return Err(MagnusError::SourceRead {
            message: format!(
                "variable {} has axes {:?}, expected {:?}",
                variable_name, dim_names, AXIS_NAMES
            ),
        });
    }

    let mut axes = Vec::with_capacity(dim_names.len());
    for name in &dim_names {
        axes.push(Axis {
            name: name.clone(),
            values: read_axis_values(file, name)?,
        });
    }

    let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();
    let values = read_values(var, variable_name)?;
    let data = Array::from_shape_vec(Dim(shape), values).map_err(|e| MagnusError::Shape {
        message: format!("variable {}: {}", variable_name, e),
    })?;

    debug!("Read variable {} with shape {:?}", variable_name, data.shape());

    let units = string_attribute(var, "units").unwrap_or_default();
    GriddedField::new(variable_name.to_string(), units, data, axes)
}

/// Read a coordinate variable's values as f64. Coordinate variables may be
/// stored at several numeric widths.
fn read_axis_values(file: &netcdf::File, name: &str) -> Result<Vec<f64>> {
    use netcdf::types::{BasicType, VariableType};

    let var = file.variable(name).ok_or_else(|| MagnusError::SourceRead {
        message: format!("no coordinate variable for axis {}", name),
    })?;

    match var.vartype() {
        VariableType::Basic(BasicType::Int) => {
            let values: Vec<i32> = var.get_values::<i32, _>(..)?;
            Ok(values.into_iter().map(|v| v as f64).collect())
        }
        VariableType::Basic(BasicType::Float) => {
            let values: Vec<f32> = var.get_values::<f32, _>(..)?;
            Ok(values.into_iter().map(|v| v as f64).collect())
        }
        VariableType::Basic(BasicType::Double) => {
            let values: Vec<f64> = var.get_values::<f64, _>(..)?;
            Ok(values)
        }
        other => Err(MagnusError::SourceRead {
            message: format!("axis {} has unsupported type {:?}", name, other),
        }),
    }
}

/// Read a data variable's dense values as f64, in the file's axis order.
fn read_values(var: &NetCDFVariable, variable_name: &str) -> Result<Vec<f64>> {
    use netcdf::types::{BasicType, VariableType};

    match var.vartype() {
        VariableType::Basic(BasicType::Int) => {
            let values: Vec<i32> = var.get_values::<i32, _>(..)?;
            Ok(values.into_iter().map(|v| v as f64).collect())
        }
        VariableType::Basic(BasicType::Float) => {
            let values: Vec<f32> = var.get_values::<f32, _>(..)?;
            Ok(values.into_iter().map(|v| v as f64).collect())
        }
        VariableType::Basic(BasicType::Double) => {
            let values: Vec<f64> = var.get_values::<f64, _>(..)?;
            Ok(values)
        }
        other => Err(MagnusError::SourceRead {
            message: format!(
                "variable {} has unsupported type {:?}",
                variable_name, other
            ),
        }),
    }
}

/// Read a string attribute from a variable, if present.
fn string_attribute(var: &NetCDFVariable, name: &str) -> Option<String> {
    let attr = var.attribute(name)?;
    match attr.value() {
        Ok(netcdf::AttributeValue::Str(s)) => Some(s),
        _ => None,
    }
}

/// The units string of a coordinate variable (empty if absent), needed for
/// decoding the time axis.
fn axis_units(file: &netcdf::File, name: &str) -> Result<String> {
    let var = file.variable(name).ok_or_else(|| MagnusError::SourceRead {
        message: format!("no coordinate variable for axis {}", name),
    })?;
    Ok(string_attribute(&var, "units").unwrap_or_default())
}
