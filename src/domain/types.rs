//! Shared domain types.
//!
//! Run configurations are plain values built from CLI args (plus `.env`
//! defaults) in `app`; results are serializable so they can be exported.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::star::Star;
use crate::math::convergence::ConvergenceStudy;
use crate::math::differentiation::DiffScheme;
use crate::math::quadrature::QuadratureRule;
use crate::physics::luminosity::LuminosityModel;

/// Environment variable naming the export directory.
pub const RESULTS_DIR_ENV: &str = "STELLAR_RESULTS_DIR";
/// Environment variable naming the default star catalog CSV.
pub const CATALOG_ENV: &str = "STELLAR_CATALOG";

/// Process-wide settings resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Where exports go when no explicit path is given.
    pub results_dir: PathBuf,
    /// Star catalog read by `stellar catalog` when `--input` is omitted.
    pub catalog_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from("results"),
            catalog_path: PathBuf::from("data/star_data.csv"),
        }
    }
}

impl Settings {
    /// Defaults overridden by `STELLAR_RESULTS_DIR` / `STELLAR_CATALOG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty()).map(PathBuf::from);
        Self {
            results_dir: non_empty(RESULTS_DIR_ENV).unwrap_or(defaults.results_dir),
            catalog_path: non_empty(CATALOG_ENV).unwrap_or(defaults.catalog_path),
        }
    }
}

/// Inputs for the trapezoid-vs-Simpson lifetime table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    /// Largest subdivision count; rows use even `n` in `2..=max_n`.
    pub max_n: usize,
    pub model: LuminosityModel,
    /// Integration horizon `T_guess` (years).
    pub horizon_years: f64,
    /// Initial fuel stock `S0` (J).
    pub initial_fuel_j: f64,
    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}

/// Inputs for the numerical self-check.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationConfig {
    /// Subdivisions for the single-shot integration checks (must be even).
    pub n: usize,
    /// Step for the single-shot derivative checks.
    pub h: f64,
    /// Number of resolutions in each convergence study.
    pub levels: usize,
    pub write_debug_bundle: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            n: 1000,
            h: 1e-3,
            levels: 5,
            write_debug_bundle: false,
        }
    }
}

/// Inputs for the catalog comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LifetimeTableRow {
    pub n: usize,
    pub trapezoid_years: f64,
    pub simpson_years: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifetimeTable {
    pub model: LuminosityModel,
    pub horizon_years: f64,
    pub initial_fuel_j: f64,
    pub rows: Vec<LifetimeTableRow>,
}

/// JSON export schema for a lifetime table.
#[derive(Debug, Clone, Serialize)]
pub struct LifetimeTableFile {
    pub tool: String,
    /// RFC 3339 local timestamp.
    pub generated: String,
    #[serde(flatten)]
    pub table: LifetimeTable,
}

/// Analytic lifetime prediction for one catalog star.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarResult {
    pub star: Star,
    pub predicted_lifetime_years: f64,
    pub abs_error: f64,
    /// `None` when the observed age is zero (relative error undefined).
    pub rel_error: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntegrationCheck {
    pub rule: QuadratureRule,
    pub n: usize,
    pub approx: f64,
    pub abs_error: f64,
    pub rel_error: f64,
    /// Theoretical worst-case error for this rule and `n`.
    pub bound: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivativeCheck {
    pub scheme: DiffScheme,
    pub h: f64,
    pub approx: f64,
    pub abs_error: f64,
}

/// Everything `stellar validate` computes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub integration: Vec<IntegrationCheck>,
    pub derivatives: Vec<DerivativeCheck>,
    pub quadrature_studies: Vec<ConvergenceStudy>,
    pub derivative_studies: Vec<ConvergenceStudy>,
    /// `lifetime(M☉)` from the closed form.
    pub analytic_lifetime_years: f64,
    /// `fuel_stock / luminosity / yr` recomputed step by step.
    pub recomputed_lifetime_years: f64,
    pub lifetime_rel_error: f64,
    /// `estimate_lifetime` for the exponential-decay model (Simpson).
    pub decay_estimate_years: f64,
}
