//! Gridded-field domain types.
//!
//! A [`GriddedField`] is one physical quantity sampled over the canonical
//! (time, pressure, latitude, longitude) grid. A [`FieldSet`] is the three
//! co-registered fields the pipelines work with, cross-validated on
//! construction so that element-wise combination is safe everywhere
//! downstream.

use ndarray::ArrayD;

use crate::config::AXIS_NAMES;
use crate::coords;
use crate::error::{MagnusError, Result};

/// One coordinate axis: a name and its ordered sample values.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    /// Name of the axis
    pub name: String,
    /// Ordered coordinate values along the axis
    pub values: Vec<f64>,
}

/// A physical quantity sampled over the canonical coordinate grid.
///
/// Immutable after unit conversion; discarded after tabularization.
#[derive(Debug, Clone)]
pub struct GriddedField {
    /// Meteorological identifier of the quantity
    pub variable_name: String,
    /// Unit tag as carried by the source (rewritten by unit conversion)
    pub units: String,
    /// Dense values laid out in axis order
    pub data: ArrayD<f64>,
    /// Coordinate axes, in the canonical (time, pressure, latitude, longitude) order
    pub axes: Vec<Axis>,
}

impl GriddedField {
    /// Create a field, enforcing the axis-order and shape invariants:
    /// the axes must be exactly the four canonical ones in order, and
    /// `data.shape()[i]` must equal `axes[i].values.len()` for every `i`.
    pub fn new(
        variable_name: String,
        units: String,
        data: ArrayD<f64>,
        axes: Vec<Axis>,
    ) -> Result<Self> {
        let axis_names: Vec<&str> = axes.iter().map(|a| a.name.as_str()).collect();
        if axis_names != AXIS_NAMES {
            return Err(MagnusError::Shape {
                message: format!(
                    "field {} has axes {:?}, expected {:?}",
                    variable_name, axis_names, AXIS_NAMES
                ),
            });
        }

        if data.ndim() != axes.len() {
            return Err(MagnusError::Shape {
                message: format!(
                    "field {} has {} data dimensions for {} axes",
                    variable_name,
                    data.ndim(),
                    axes.len()
                ),
            });
        }

        for (i, axis) in axes.iter().enumerate() {
            if data.shape()[i] != axis.values.len() {
                return Err(MagnusError::Shape {
                    message: format!(
                        "field {}: {} axis has {} coordinate values but data extent is {}",
                        variable_name,
                        axis.name,
                        axis.values.len(),
                        data.shape()[i]
                    ),
                });
            }
        }

        Ok(Self {
            variable_name,
            units,
            data,
            axes,
        })
    }

    /// Get a named coordinate axis
    pub fn axis(&self, name: &str) -> Result<&Axis> {
        self.axes
            .iter()
            .find(|a| a.name == name)
            .ok_or_else(|| MagnusError::Shape {
                message: format!("field {} has no {} axis", self.variable_name, name),
            })
    }
}

/// Three co-registered fields plus the canonical axes they share.
///
/// Construction is the only way to obtain a `FieldSet`, and it refuses any
/// pair of fields whose coordinates disagree beyond tolerance.
#[derive(Debug, Clone)]
pub struct FieldSet {
    /// The shared coordinate axes, taken from the temperature field
    pub axes: Vec<Axis>,
    /// Units string of the time axis, needed to decode time values
    pub time_units: String,
    /// Temperature in °C
    pub temperature: GriddedField,
    /// Relative humidity in %
    pub relative_humidity: GriddedField,
    /// Height above sea level in m
    pub height: GriddedField,
}

impl FieldSet {
    /// Assemble a field set with the temperature field as the coordinate
    /// reference. Every axis of every other field is checked against it
    /// before the set may be combined.
    pub fn new(
        temperature: GriddedField,
        relative_humidity: GriddedField,
        height: GriddedField,
        time_units: String,
    ) -> Result<Self> {
        for other in [&relative_humidity, &height] {
            for axis_name in AXIS_NAMES {
                coords::assert_coord_equal(&temperature, other, axis_name)?;
            }
        }

        let axes = temperature.axes.clone();
        Ok(Self {
            axes,
            time_units,
            temperature,
            relative_humidity,
            height,
        })
    }

    /// Get a named canonical axis
    pub fn axis(&self, name: &str) -> Result<&Axis> {
        self.axes
            .iter()
            .find(|a| a.name == name)
            .ok_or_else(|| MagnusError::Shape {
                message: format!("field set has no {} axis", name),
            })
    }

    /// Number of cells in the full coordinate grid
    pub fn cell_count(&self) -> usize {
        self.axes.iter().map(|a| a.values.len()).product()
    }

    /// The three fields in output-column order
    pub fn fields(&self) -> [&GriddedField; 3] {
        [&self.temperature, &self.relative_humidity, &self.height]
    }
}
