//! Error metrics and theoretical quadrature error bounds.
//!
//! The bounds are worst-case magnitudes, never signed corrections:
//!
//! ```text
//! trapezoid: |b - a|³ / (12 n²)  · max|f''|
//! simpson:   |b - a|⁵ / (180 n⁴) · max|f''''|
//! ```

use crate::error::AppError;

/// `|exact - approx|`.
///
/// NaN in either input propagates to a NaN result; this function never fails.
pub fn absolute_error(exact: f64, approx: f64) -> f64 {
    (exact - approx).abs()
}

/// `|exact - approx| / |exact|`.
///
/// Rejects NaN inputs and `exact == 0`.
pub fn relative_error(exact: f64, approx: f64) -> Result<f64, AppError> {
    if exact.is_nan() || approx.is_nan() {
        return Err(AppError::invalid_argument(
            "Inputs cannot be NaN for relative error.",
        ));
    }
    if exact == 0.0 {
        return Err(AppError::invalid_argument(
            "Exact value cannot be zero for relative error.",
        ));
    }
    Ok(((exact - approx) / exact).abs())
}

/// Upper bound on the composite trapezoid error, given `m2 ≥ max|f''|` on `[a, b]`.
pub fn trapezoid_error_bound(a: f64, b: f64, n: usize, m2: f64) -> Result<f64, AppError> {
    check_subintervals(n)?;
    let n = n as f64;
    Ok((b - a).abs().powi(3) / (12.0 * n * n) * m2.abs())
}

/// Upper bound on the composite Simpson error, given `m4 ≥ max|f''''|` on `[a, b]`.
pub fn simpson_error_bound(a: f64, b: f64, n: usize, m4: f64) -> Result<f64, AppError> {
    check_subintervals(n)?;
    let n = n as f64;
    Ok((b - a).abs().powi(5) / (180.0 * n.powi(4)) * m4.abs())
}

fn check_subintervals(n: usize) -> Result<(), AppError> {
    if n == 0 {
        return Err(AppError::invalid_argument(
            "Number of subintervals n must be positive.",
        ));
    }
    Ok(())
}
