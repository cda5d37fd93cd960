//! Shared computation used by both the subcommands and the interactive menu.
//!
//! Keeping this in one place avoids duplicating the workflows:
//! lifetime table, catalog comparison, numerical validation.
//!
//! The front-ends then only deal with presentation (printing vs prompting).

use std::f64::consts::PI;

use crate::domain::{
    DerivativeCheck, IntegrationCheck, LifetimeTable, LifetimeTableRow, Star, StarResult, TableConfig,
    ValidationConfig, ValidationReport,
};
use crate::error::AppError;
use crate::math::convergence::{derivative_convergence, doubling_counts, halving_steps, quadrature_convergence};
use crate::math::differentiation::DiffScheme;
use crate::math::error_bounds::{absolute_error, relative_error, simpson_error_bound, trapezoid_error_bound};
use crate::math::quadrature::QuadratureRule;
use crate::physics::constants::{SECONDS_PER_YEAR, SOLAR_MASS_KG};
use crate::physics::lifetime::estimate_lifetime;
use crate::physics::luminosity::LuminosityModel;
use crate::physics::stellar::{fuel_stock, lifetime, luminosity};

/// Most resolutions a validation convergence study may use. The finest
/// quadrature grid is `4 · 2^(levels-1)` subintervals.
pub const MAX_VALIDATION_LEVELS: usize = 20;

/// Horizon used when the caller does not supply one (years).
pub const DEFAULT_HORIZON_YEARS: f64 = 1e10;

/// Analytic lifetime (years) of a star given in solar masses.
pub fn lifetime_for_solar_masses(mass_msun: f64) -> Result<f64, AppError> {
    if !(mass_msun.is_finite() && mass_msun > 0.0) {
        return Err(AppError::invalid_argument(format!(
            "Stellar mass must be positive and finite (got {mass_msun} M☉)."
        )));
    }
    Ok(lifetime(mass_msun * SOLAR_MASS_KG))
}

/// Trapezoid and Simpson lifetime estimates for every even `n` up to `max_n`.
pub fn run_lifetime_table(config: &TableConfig) -> Result<LifetimeTable, AppError> {
    if config.max_n < 2 {
        return Err(AppError::invalid_argument(format!(
            "Lifetime table needs max_n >= 2 (got {}).",
            config.max_n
        )));
    }

    let model = config.model;
    let l = |t: f64| model.at(t);

    let mut rows = Vec::with_capacity(config.max_n / 2);
    for n in (2..=config.max_n).step_by(2) {
        let trapezoid_years =
            estimate_lifetime(config.initial_fuel_j, l, config.horizon_years, n, QuadratureRule::Trapezoid)
                .map_err(|e| e.context(format!("trapezoid, n={n}")))?;
        let simpson_years =
            estimate_lifetime(config.initial_fuel_j, l, config.horizon_years, n, QuadratureRule::Simpson)
                .map_err(|e| e.context(format!("simpson, n={n}")))?;
        rows.push(LifetimeTableRow {
            n,
            trapezoid_years,
            simpson_years,
        });
    }

    Ok(LifetimeTable {
        model,
        horizon_years: config.horizon_years,
        initial_fuel_j: config.initial_fuel_j,
        rows,
    })
}

/// Predict each star's analytic lifetime and compare it with its observed age.
///
/// A massless star has no defined lifetime and fails with `InvalidArgument`.
pub fn run_catalog(stars: &[Star]) -> Result<Vec<StarResult>, AppError> {
    stars
        .iter()
        .map(|star| {
            let predicted = lifetime_for_solar_masses(star.mass_msun()).map_err(|e| e.context(star.name()))?;
            let observed = star.observed_age_years();
            Ok(StarResult {
                star: star.clone(),
                predicted_lifetime_years: predicted,
                abs_error: absolute_error(observed, predicted),
                rel_error: relative_error(observed, predicted).ok(),
            })
        })
        .collect()
}

/// Exercise every numerical routine against closed-form answers.
///
/// - ∫₀^π sin(x) dx = 2 with both rules, against their error bounds
/// - d/dx sin(x) at 0 = 1 with all three stencils
/// - observed convergence orders of each rule and stencil
/// - the closed-form solar lifetime recomputed step by step
/// - one lifetime estimate for the decaying luminosity model
pub fn run_validation(config: &ValidationConfig) -> Result<ValidationReport, AppError> {
    if !(2..=MAX_VALIDATION_LEVELS).contains(&config.levels) {
        return Err(AppError::invalid_argument(format!(
            "Convergence studies need between 2 and {MAX_VALIDATION_LEVELS} levels (got {}).",
            config.levels
        )));
    }

    const EXACT_INTEGRAL: f64 = 2.0;
    const EXACT_DERIVATIVE: f64 = 1.0;

    let mut integration = Vec::with_capacity(2);
    for rule in [QuadratureRule::Trapezoid, QuadratureRule::Simpson] {
        let approx = rule.integrate(f64::sin, 0.0, PI, config.n)?;
        // |sin''| and |sin''''| are both bounded by 1 on [0, π].
        let bound = match rule {
            QuadratureRule::Trapezoid => trapezoid_error_bound(0.0, PI, config.n, 1.0)?,
            QuadratureRule::Simpson => simpson_error_bound(0.0, PI, config.n, 1.0)?,
        };
        integration.push(IntegrationCheck {
            rule,
            n: config.n,
            approx,
            abs_error: absolute_error(EXACT_INTEGRAL, approx),
            rel_error: relative_error(EXACT_INTEGRAL, approx)?,
            bound,
        });
    }

    let mut derivatives = Vec::with_capacity(DiffScheme::ALL.len());
    for scheme in DiffScheme::ALL {
        let approx = scheme.derivative(f64::sin, 0.0, config.h)?;
        derivatives.push(DerivativeCheck {
            scheme,
            h: config.h,
            approx,
            abs_error: absolute_error(EXACT_DERIVATIVE, approx),
        });
    }

    let ns = doubling_counts(4, config.levels).ok_or_else(|| {
        AppError::invalid_argument(format!("Too many convergence levels ({}).", config.levels))
    })?;
    let quadrature_studies = vec![
        quadrature_convergence(f64::sin, 0.0, PI, EXACT_INTEGRAL, QuadratureRule::Trapezoid, &ns)?,
        quadrature_convergence(f64::sin, 0.0, PI, EXACT_INTEGRAL, QuadratureRule::Simpson, &ns)?,
    ];

    // sin'(0.5) = cos(0.5); x = 0 would hide the even error terms of the
    // one-sided stencils.
    let hs = halving_steps(0.1, config.levels);
    let derivative_studies = DiffScheme::ALL
        .iter()
        .map(|&scheme| derivative_convergence(f64::sin, 0.5, 0.5f64.cos(), scheme, &hs))
        .collect::<Result<Vec<_>, _>>()?;

    let analytic_lifetime_years = lifetime(SOLAR_MASS_KG);
    let recomputed_lifetime_years = fuel_stock(SOLAR_MASS_KG) / luminosity(SOLAR_MASS_KG) / SECONDS_PER_YEAR;
    let lifetime_rel_error = relative_error(analytic_lifetime_years, recomputed_lifetime_years)?;

    let decay = LuminosityModel::ExpDecay;
    let decay_estimate_years = estimate_lifetime(
        fuel_stock(SOLAR_MASS_KG),
        |t| decay.at(t),
        DEFAULT_HORIZON_YEARS,
        config.n,
        QuadratureRule::Simpson,
    )?;

    Ok(ValidationReport {
        integration,
        derivatives,
        quadrature_studies,
        derivative_studies,
        analytic_lifetime_years,
        recomputed_lifetime_years,
        lifetime_rel_error,
        decay_estimate_years,
    })
}
