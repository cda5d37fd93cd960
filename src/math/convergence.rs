//! Empirical convergence studies.
//!
//! Runs a rule (or stencil) at a sequence of resolutions against a known exact
//! value and estimates the observed order `p` from `error ≈ C · step^p`, i.e.
//! the least-squares slope of `ln(error)` against `ln(step)`.

use serde::Serialize;

use crate::error::AppError;
use crate::math::differentiation::DiffScheme;
use crate::math::error_bounds::absolute_error;
use crate::math::ols::fit_slope;
use crate::math::quadrature::QuadratureRule;

/// One resolution of a convergence study.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConvergenceSample {
    /// Grid spacing (quadrature) or finite-difference step.
    pub step: f64,
    pub approx: f64,
    pub abs_error: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvergenceStudy {
    pub label: String,
    pub exact: f64,
    pub samples: Vec<ConvergenceSample>,
}

impl ConvergenceStudy {
    /// Least-squares order of convergence.
    ///
    /// Samples whose error is zero or non-finite carry no slope information and
    /// are skipped; `None` if fewer than two usable samples remain.
    pub fn observed_order(&self) -> Option<f64> {
        let (xs, ys): (Vec<f64>, Vec<f64>) = self
            .samples
            .iter()
            .filter(|s| s.abs_error > 0.0 && s.abs_error.is_finite() && s.step > 0.0)
            .map(|s| (s.step.ln(), s.abs_error.ln()))
            .unzip();
        fit_slope(&xs, &ys)
    }
}

/// Integrate `f` over `[a, b]` once per entry of `ns`.
pub fn quadrature_convergence<F>(
    f: F,
    a: f64,
    b: f64,
    exact: f64,
    rule: QuadratureRule,
    ns: &[usize],
) -> Result<ConvergenceStudy, AppError>
where
    F: Fn(f64) -> f64,
{
    let mut samples = Vec::with_capacity(ns.len());
    for &n in ns {
        let approx = rule.integrate(&f, a, b, n)?;
        samples.push(ConvergenceSample {
            step: ((b - a) / n as f64).abs(),
            approx,
            abs_error: absolute_error(exact, approx),
        });
    }

    Ok(ConvergenceStudy {
        label: rule.display_name().to_string(),
        exact,
        samples,
    })
}

/// Differentiate `f` at `x` once per entry of `hs`.
pub fn derivative_convergence<F>(
    f: F,
    x: f64,
    exact: f64,
    scheme: DiffScheme,
    hs: &[f64],
) -> Result<ConvergenceStudy, AppError>
where
    F: Fn(f64) -> f64,
{
    let mut samples = Vec::with_capacity(hs.len());
    for &h in hs {
        let approx = scheme.derivative(&f, x, h)?;
        samples.push(ConvergenceSample {
            step: h,
            approx,
            abs_error: absolute_error(exact, approx),
        });
    }

    Ok(ConvergenceStudy {
        label: scheme.display_name().to_string(),
        exact,
        samples,
    })
}

/// `start, start/2, start/4, ...` (`count` values).
pub fn halving_steps(start: f64, count: usize) -> Vec<f64> {
    (0..count).map(|i| start / 2f64.powi(i as i32)).collect()
}

/// `start, 2·start, 4·start, ...` (`count` values).
///
/// `None` if a count does not fit in `usize`.
pub fn doubling_counts(start: usize, count: usize) -> Option<Vec<usize>> {
    (0..count)
        .map(|i| {
            let factor = u32::try_from(i).ok().and_then(|i| 1usize.checked_shl(i))?;
            start.checked_mul(factor)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::f64::consts::PI;

    #[test]
    fn trapezoid_converges_at_second_order() {
        let ns = doubling_counts(8, 5).unwrap();
        let study = quadrature_convergence(f64::sin, 0.0, PI, 2.0, QuadratureRule::Trapezoid, &ns).unwrap();
        let p = study.observed_order().unwrap();
        assert!((p - 2.0).abs() < 0.05, "order {p}");
    }

    #[test]
    fn simpson_converges_at_fourth_order() {
        let ns = doubling_counts(4, 4).unwrap();
        let study = quadrature_convergence(f64::sin, 0.0, PI, 2.0, QuadratureRule::Simpson, &ns).unwrap();
        let p = study.observed_order().unwrap();
        assert!((p - 4.0).abs() < 0.1, "order {p}");
    }

    #[test]
    fn derivative_orders_match_schemes() {
        let hs = halving_steps(0.1, 5);
        for scheme in DiffScheme::ALL {
            // d/dx exp(x) at x = 0.5
            let study = derivative_convergence(f64::exp, 0.5, 0.5f64.exp(), scheme, &hs).unwrap();
            let p = study.observed_order().unwrap();
            assert!(
                (p - scheme.order() as f64).abs() < 0.1,
                "{scheme:?} observed order {p}"
            );
        }
    }

    #[test]
    fn exact_samples_give_no_order() {
        // Affine integrand on dyadic grids: every trapezoid sample is exact.
        let study =
            quadrature_convergence(|x: f64| 2.0 * x, 0.0, 1.0, 1.0, QuadratureRule::Trapezoid, &[1, 2, 4]).unwrap();
        assert!(study.samples.iter().all(|s| s.abs_error == 0.0));
        assert!(study.observed_order().is_none());
    }

    #[test]
    fn invalid_resolution_propagates() {
        let err = quadrature_convergence(f64::sin, 0.0, 1.0, 0.0, QuadratureRule::Simpson, &[4, 3]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = derivative_convergence(f64::sin, 0.0, 1.0, DiffScheme::Central, &[0.1, 0.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn step_sequences() {
        assert_eq!(doubling_counts(4, 3), Some(vec![4, 8, 16]));
        assert_eq!(halving_steps(1.0, 3), vec![1.0, 0.5, 0.25]);
    }

    #[test]
    fn doubling_counts_report_overflow() {
        assert_eq!(doubling_counts(4, 0), Some(vec![]));
        assert!(doubling_counts(4, 63).is_none());
        assert!(doubling_counts(4, 65).is_none());
        assert!(doubling_counts(usize::MAX, 2).is_none());
    }
}
