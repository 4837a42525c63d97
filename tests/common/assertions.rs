//! Assertion utilities for testing.
//!
//! This module provides helper functions for making assertions in tests,
//! particularly for floating-point comparisons on pipeline output.

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Arguments
///
/// * `actual` - The actual value
/// * `expected` - The expected value
/// * `epsilon` - The maximum allowed difference (default: 1e-9)
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Parse a CSV cell as f64 and assert it is approximately equal to the
/// expected value.
///
/// # Panics
///
/// Panics if the cell does not parse as a number or differs from `expected`
/// by more than `epsilon`.
pub fn assert_cell_approx_eq(cell: &str, expected: f64, epsilon: Option<f64>) {
    let actual: f64 = cell
        .parse()
        .unwrap_or_else(|_| panic!("Cell {:?} does not parse as a number", cell));
    assert_approx_eq(actual, expected, epsilon);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(1.0, 1.0 + 1e-12, None);
        assert_approx_eq(100.0, 100.5, Some(1.0));
    }

    #[test]
    #[should_panic(expected = "not approximately equal")]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq(1.0, 1.1, None);
    }

    #[test]
    fn test_assert_cell_approx_eq() {
        assert_cell_approx_eq("46.5", 46.5, None);
        assert_cell_approx_eq("1000.0", 1000.0, None);
    }

    #[test]
    #[should_panic(expected = "does not parse")]
    fn test_assert_cell_approx_eq_rejects_text() {
        assert_cell_approx_eq("not-a-number", 0.0, None);
    }
}
