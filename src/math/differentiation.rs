//! Finite-difference first derivatives.
//!
//! - forward:  `(f(x+h) - f(x)) / h`, error O(h)
//! - backward: `(f(x) - f(x-h)) / h`, error O(h)
//! - central:  `(f(x+h) - f(x-h)) / 2h`, error O(h²)

use clap::ValueEnum;
use serde::Serialize;

use crate::error::AppError;

/// Finite-difference stencil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DiffScheme {
    Forward,
    Backward,
    Central,
}

impl DiffScheme {
    pub const ALL: [DiffScheme; 3] = [DiffScheme::Forward, DiffScheme::Backward, DiffScheme::Central];

    pub fn display_name(self) -> &'static str {
        match self {
            DiffScheme::Forward => "Forward",
            DiffScheme::Backward => "Backward",
            DiffScheme::Central => "Central",
        }
    }

    /// Formal order of accuracy in `h`.
    pub fn order(self) -> u32 {
        match self {
            DiffScheme::Forward | DiffScheme::Backward => 1,
            DiffScheme::Central => 2,
        }
    }

    pub fn derivative<F>(self, f: F, x: f64, h: f64) -> Result<f64, AppError>
    where
        F: Fn(f64) -> f64,
    {
        match self {
            DiffScheme::Forward => forward_diff(f, x, h),
            DiffScheme::Backward => backward_diff(f, x, h),
            DiffScheme::Central => central_diff(f, x, h),
        }
    }
}

pub fn forward_diff<F>(f: F, x: f64, h: f64) -> Result<f64, AppError>
where
    F: Fn(f64) -> f64,
{
    check_step(h)?;
    Ok((f(x + h) - f(x)) / h)
}

pub fn backward_diff<F>(f: F, x: f64, h: f64) -> Result<f64, AppError>
where
    F: Fn(f64) -> f64,
{
    check_step(h)?;
    Ok((f(x) - f(x - h)) / h)
}

pub fn central_diff<F>(f: F, x: f64, h: f64) -> Result<f64, AppError>
where
    F: Fn(f64) -> f64,
{
    check_step(h)?;
    Ok((f(x + h) - f(x - h)) / (2.0 * h))
}

fn check_step(h: f64) -> Result<(), AppError> {
    if h.is_nan() || h <= 0.0 {
        return Err(AppError::invalid_argument(format!(
            "Step size h must be positive (got h={h})."
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn schemes_are_exact_for_lines() {
        let f = |x: f64| 4.0 * x + 1.0;
        for scheme in DiffScheme::ALL {
            let d = scheme.derivative(f, 2.0, 0.5).unwrap();
            assert!((d - 4.0).abs() < 1e-12, "{scheme:?} gave {d}");
        }
    }

    #[test]
    fn central_is_exact_for_parabolas() {
        let f = |x: f64| x * x;
        let d = central_diff(f, 3.0, 0.25).unwrap();
        assert!((d - 6.0).abs() < 1e-12);
        // One-sided stencils pick up the h·f''/2 = 0.25 bias.
        assert!((forward_diff(f, 3.0, 0.25).unwrap() - 6.25).abs() < 1e-12);
        assert!((backward_diff(f, 3.0, 0.25).unwrap() - 5.75).abs() < 1e-12);
    }

    #[test]
    fn central_error_decays_quadratically() {
        let h = 1e-2;
        let e1 = (central_diff(f64::sin, 0.0, h).unwrap() - 1.0).abs();
        let e2 = (central_diff(f64::sin, 0.0, h / 2.0).unwrap() - 1.0).abs();
        let ratio = e1 / e2;
        assert!((ratio - 4.0).abs() < 0.05, "ratio {ratio}");
    }

    #[test]
    fn forward_error_decays_linearly() {
        let h = 1e-3;
        let e1 = (forward_diff(f64::exp, 0.0, h).unwrap() - 1.0).abs();
        let e2 = (forward_diff(f64::exp, 0.0, h / 2.0).unwrap() - 1.0).abs();
        let ratio = e1 / e2;
        assert!((ratio - 2.0).abs() < 0.05, "ratio {ratio}");
    }

    #[test]
    fn non_positive_step_is_rejected() {
        for h in [0.0, -1e-3, f64::NAN] {
            for scheme in DiffScheme::ALL {
                let err = scheme.derivative(f64::sin, 0.0, h).unwrap_err();
                assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            }
        }
    }
}
