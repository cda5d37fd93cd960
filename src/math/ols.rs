//! Least squares solver.
//!
//! Used to fit straight lines in log-log space when measuring how fast a
//! numerical error shrinks with the step size:
//!
//! ```text
//! minimize Σ (y_i - x_i^T β)^2
//! ```
//!
//! We solve via SVD so tall systems (more samples than parameters) work and
//! near-collinear designs degrade gracefully instead of panicking.

use nalgebra::{DMatrix, DVector};

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // Try progressively looser tolerances if strict solve fails.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}

/// Fit `y = c + slope · x` and return `slope`.
///
/// Needs at least two points with distinct `x`.
pub fn fit_slope(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let mut rows = Vec::with_capacity(xs.len() * 2);
    for &x in xs {
        rows.push(1.0);
        rows.push(x);
    }
    let design = DMatrix::from_row_slice(xs.len(), 2, &rows);
    let target = DVector::from_column_slice(ys);

    let beta = solve_least_squares(&design, &target)?;
    Some(beta[1])
}
