//! Cross-field coordinate validation.
//!
//! Two gridded fields may only be combined element-wise once every shared
//! axis has been confirmed numerically identical. A silent axis mismatch
//! would corrupt every downstream record without raising an error, so the
//! check is mandatory and failure is fatal.

use crate::config::COORD_TOLERANCE;
use crate::error::{MagnusError, Result};
use crate::field::GriddedField;

/// Assert that the named axis carries the same coordinate values in both
/// fields, within an absolute tolerance. Coordinates round-trip through
/// binary file encodings, so bit equality is not required. Success is silent.
pub fn assert_coord_equal(
    field_a: &GriddedField,
    field_b: &GriddedField,
    axis_name: &str,
) -> Result<()> {
    let a = field_a.axis(axis_name)?;
    let b = field_b.axis(axis_name)?;

    if a.values.len() != b.values.len() {
        return Err(MagnusError::CoordinateMismatch {
            axis: axis_name.to_string(),
            message: format!(
                "{} has {} values, {} has {}",
                field_a.variable_name,
                a.values.len(),
                field_b.variable_name,
                b.values.len()
            ),
        });
    }

    for (i, (va, vb)) in a.values.iter().zip(&b.values).enumerate() {
        if (va - vb).abs() > COORD_TOLERANCE {
            return Err(MagnusError::CoordinateMismatch {
                axis: axis_name.to_string(),
                message: format!(
                    "{} and {} differ at index {}: {} vs {}",
                    field_a.variable_name, field_b.variable_name, i, va, vb
                ),
            });
        }
    }

    Ok(())
}
