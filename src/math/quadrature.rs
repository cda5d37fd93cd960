//! Composite Newton–Cotes quadrature.
//!
//! Both rules sample `f` on the uniform grid `x_i = a + i h`, `h = (b - a) / n`:
//!
//! ```text
//! trapezoid: h * [ f(a)/2 + f(b)/2 + Σ_{i=1}^{n-1} f(x_i) ]
//! simpson:   h/3 * [ f(a) + f(b) + 4 Σ_{odd i} f(x_i) + 2 Σ_{even interior i} f(x_i) ]
//! ```
//!
//! There is no adaptive refinement. `b < a` gives the oriented integral
//! (the sign flips through `h`), and `a == b` gives zero.
//!
//! Very large `n` can make `h` underflow; that is an accuracy limit of the
//! fixed grid, not something these functions detect.

use clap::ValueEnum;
use serde::Serialize;

use crate::error::AppError;

/// Which composite rule to integrate with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum QuadratureRule {
    Trapezoid,
    Simpson,
}

impl QuadratureRule {
    pub fn display_name(self) -> &'static str {
        match self {
            QuadratureRule::Trapezoid => "Trapezoid",
            QuadratureRule::Simpson => "Simpson",
        }
    }

    /// Integrate `f` over `[a, b]` with `n` subintervals.
    pub fn integrate<F>(self, f: F, a: f64, b: f64, n: usize) -> Result<f64, AppError>
    where
        F: Fn(f64) -> f64,
    {
        match self {
            QuadratureRule::Trapezoid => trapezoid(f, a, b, n),
            QuadratureRule::Simpson => simpson(f, a, b, n),
        }
    }
}

/// Composite trapezoid rule. Requires `n > 0`.
pub fn trapezoid<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, AppError>
where
    F: Fn(f64) -> f64,
{
    if n == 0 {
        return Err(AppError::invalid_argument(
            "Number of subintervals n must be positive.",
        ));
    }

    let h = (b - a) / n as f64;
    let mut sum = 0.5 * f(a) + 0.5 * f(b);
    for i in 1..n {
        sum += f(a + i as f64 * h);
    }

    Ok(h * sum)
}

/// Composite Simpson's rule. Requires `n > 0` and even.
///
/// Odd `n` is rejected, not rounded up.
pub fn simpson<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, AppError>
where
    F: Fn(f64) -> f64,
{
    if n == 0 {
        return Err(AppError::invalid_argument(
            "Number of subintervals n must be positive.",
        ));
    }
    if n % 2 != 0 {
        return Err(AppError::invalid_argument(format!(
            "Simpson's rule needs an even number of subintervals (got n={n})."
        )));
    }

    let h = (b - a) / n as f64;
    let mut sum = f(a) + f(b);
    for i in 1..n {
        let weight = if i % 2 == 0 { 2.0 } else { 4.0 };
        sum += weight * f(a + i as f64 * h);
    }

    Ok(h / 3.0 * sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_relative_eq;
    use std::cell::Cell;
    use std::f64::consts::PI;

    #[test]
    fn trapezoid_is_exact_for_affine_functions() {
        let f = |x: f64| 3.0 * x - 2.0;
        // ∫_{-1}^{4} (3x - 2) dx = [1.5x² - 2x] = (24 - 8) - (1.5 + 2) = 12.5
        for n in [1, 2, 3, 7, 64] {
            let v = trapezoid(f, -1.0, 4.0, n).unwrap();
            assert_relative_eq!(v, 12.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn simpson_is_exact_for_cubics() {
        let f = |x: f64| x * x * x - 2.0 * x * x + x + 5.0;
        // Antiderivative: x⁴/4 - 2x³/3 + x²/2 + 5x on [0, 3]
        let exact = 81.0 / 4.0 - 18.0 + 4.5 + 15.0;
        for n in [2, 4, 10, 100] {
            let v = simpson(f, 0.0, 3.0, n).unwrap();
            assert_relative_eq!(v, exact, epsilon = 1e-10);
        }
    }

    #[test]
    fn simpson_beats_trapezoid_on_sine() {
        let trap = trapezoid(f64::sin, 0.0, PI, 1000).unwrap();
        let simp = simpson(f64::sin, 0.0, PI, 1000).unwrap();
        assert!((simp - 2.0).abs() < (trap - 2.0).abs());
        assert!((simp - 2.0).abs() < 1e-10);
    }

    #[test]
    fn zero_width_interval_integrates_to_zero() {
        for n in [1, 2, 5, 1000] {
            assert_eq!(trapezoid(|x: f64| x.exp() + 10.0, 1.5, 1.5, n).unwrap(), 0.0);
        }
        assert_eq!(simpson(|x: f64| x.cos(), 2.0, 2.0, 4).unwrap(), 0.0);
    }

    #[test]
    fn reversed_bounds_flip_the_sign() {
        let fwd = trapezoid(|x: f64| x * x, 0.0, 2.0, 50).unwrap();
        let rev = trapezoid(|x: f64| x * x, 2.0, 0.0, 50).unwrap();
        assert_relative_eq!(fwd, -rev, epsilon = 1e-12);
    }

    #[test]
    fn zero_subintervals_are_rejected() {
        let err = trapezoid(f64::sin, 0.0, 1.0, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = simpson(f64::sin, 0.0, 1.0, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn simpson_rejects_odd_n_without_sampling() {
        let calls = Cell::new(0usize);
        let f = |x: f64| {
            calls.set(calls.get() + 1);
            x
        };
        let err = simpson(f, 0.0, 1.0, 7).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let f = |x: f64| (x * 1.3).sin() * x.exp();
        let a = simpson(f, 0.1, 2.9, 200).unwrap();
        let b = simpson(f, 0.1, 2.9, 200).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn rule_dispatch_matches_free_functions() {
        let f = |x: f64| 1.0 / (1.0 + x * x);
        assert_eq!(
            QuadratureRule::Trapezoid.integrate(f, 0.0, 1.0, 16).unwrap(),
            trapezoid(f, 0.0, 1.0, 16).unwrap()
        );
        assert_eq!(
            QuadratureRule::Simpson.integrate(f, 0.0, 1.0, 16).unwrap(),
            simpson(f, 0.0, 1.0, 16).unwrap()
        );
    }
}
