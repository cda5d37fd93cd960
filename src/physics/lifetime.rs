//! Numerical lifetime estimate from a luminosity curve.

use crate::error::AppError;
use crate::math::quadrature::QuadratureRule;

/// Estimate a lifetime by rescaling a trial horizon against the fuel burned.
///
/// Integrates `luminosity` over `[0, t_guess]` with `rule` to get `burned`, then
/// returns `s0 * (t_guess / burned)`.
///
/// This is one proportional correction, not a root find: it assumes the burn
/// is linear in the horizon. It is exact for constant luminosity and only a
/// first-order correction otherwise; calling it again with the result as the
/// new guess does not converge in general.
///
/// Fails with `InvalidArgument` for an unusable `n` (see the quadrature rules)
/// and with `UndefinedResult` when `burned` is zero or not finite.
pub fn estimate_lifetime<F>(
    s0: f64,
    luminosity: F,
    t_guess: f64,
    n: usize,
    rule: QuadratureRule,
) -> Result<f64, AppError>
where
    F: Fn(f64) -> f64,
{
    let burned = rule.integrate(luminosity, 0.0, t_guess, n)?;

    if burned == 0.0 || !burned.is_finite() {
        return Err(AppError::undefined(format!(
            "Integrated luminosity over [0, {t_guess}] is {burned}; cannot rescale the lifetime."
        )));
    }

    Ok(s0 * (t_guess / burned))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::physics::constants::SOLAR_MASS_KG;
    use crate::physics::luminosity::LuminosityModel;
    use crate::physics::stellar::fuel_stock;
    use approx::assert_relative_eq;

    #[test]
    fn constant_luminosity_returns_initial_fuel() {
        for rule in [QuadratureRule::Simpson, QuadratureRule::Trapezoid] {
            for n in [2, 10, 1000] {
                let t = estimate_lifetime(42.0, |_| 1.0, 3.7, n, rule).unwrap();
                assert_relative_eq!(t, 42.0, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn rules_agree_on_smooth_decay() {
        let s0 = fuel_stock(SOLAR_MASS_KG);
        let l = |t| LuminosityModel::ExpDecay.at(t);
        let simp = estimate_lifetime(s0, l, 1e10, 1000, QuadratureRule::Simpson).unwrap();
        let trap = estimate_lifetime(s0, l, 1e10, 1000, QuadratureRule::Trapezoid).unwrap();
        assert!(simp > 0.0);
        assert_relative_eq!(simp, trap, max_relative = 1e-6);
    }

    #[test]
    fn zero_burn_is_undefined() {
        let err = estimate_lifetime(1.0, |_| 0.0, 10.0, 4, QuadratureRule::Simpson).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UndefinedResult);

        // Zero horizon burns nothing either.
        let err = estimate_lifetime(1.0, |_| 1.0, 0.0, 4, QuadratureRule::Trapezoid).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UndefinedResult);
    }

    #[test]
    fn non_finite_burn_is_undefined() {
        let err = estimate_lifetime(1.0, |_| f64::INFINITY, 10.0, 4, QuadratureRule::Trapezoid).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UndefinedResult);
    }

    #[test]
    fn invalid_n_propagates_from_quadrature() {
        let err = estimate_lifetime(1.0, |_| 1.0, 10.0, 5, QuadratureRule::Simpson).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = estimate_lifetime(1.0, |_| 1.0, 10.0, 0, QuadratureRule::Trapezoid).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
