//! Relative humidity from air temperature and dew point.
//!
//! Based on the Magnus formula relating saturation vapour pressure to
//! temperature:
//!
//! ```text
//! RH = 100 * e_s(Td) / e_s(T)
//!    = 100 * exp(a*Td / (b + Td) - a*T / (b + T))
//! ```
//!
//! The output is a diagnostic pass-through: it is not clamped to [0, 100],
//! so thermodynamically inconsistent inputs (dew point above temperature)
//! yield values above 100%.

use crate::config::{MAGNUS_A, MAGNUS_B};
use crate::error::{MagnusError, Result};

/// Relative humidity (%) from air temperature and dew point, both in °C.
///
/// Fails with a domain error only at the formula's singular point
/// (-243.5 °C), far outside any realistic input.
pub fn relative_humidity(temp_c: f64, dewpoint_c: f64) -> Result<f64> {
    if MAGNUS_B + dewpoint_c == 0.0 {
        return Err(MagnusError::Domain {
            message: format!("dew point {} °C is at the Magnus singularity", dewpoint_c),
        });
    }
    if MAGNUS_B + temp_c == 0.0 {
        return Err(MagnusError::Domain {
            message: format!("temperature {} °C is at the Magnus singularity", temp_c),
        });
    }

    let alpha = MAGNUS_A * dewpoint_c / (MAGNUS_B + dewpoint_c);
    let beta = MAGNUS_A * temp_c / (MAGNUS_B + temp_c);

    Ok(100.0 * (alpha - beta).exp())
}

/// Element-wise relative humidity over paired slices of equal length.
pub fn relative_humidity_all(temps_c: &[f64], dewpoints_c: &[f64]) -> Result<Vec<f64>> {
    if temps_c.len() != dewpoints_c.len() {
        return Err(MagnusError::Domain {
            message: format!(
                "length mismatch: {} temperatures vs {} dew points",
                temps_c.len(),
                dewpoints_c.len()
            ),
        });
    }

    temps_c
        .iter()
        .zip(dewpoints_c)
        .map(|(&t, &td)| relative_humidity(t, td))
        .collect()
}
