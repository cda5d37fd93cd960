//! Command-line parsing for the stellar lifetime estimator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the numerical/physics code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::physics::luminosity::LuminosityModel;

pub mod menu;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "stellar", version, about = "Stellar lifetime estimator (numerical integration toolkit)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Predict the main-sequence lifetime of a star from its mass.
    Estimate(EstimateArgs),
    /// Trapezoid vs Simpson lifetime estimates for increasing subdivision counts.
    Table(TableArgs),
    /// Summarize and compare the Sun and Sirius A.
    Compare,
    /// Predict lifetimes for a CSV star catalog and compare with observed ages.
    Catalog(CatalogArgs),
    /// Check the integrators and difference schemes against known results.
    Validate(ValidateArgs),
    /// Step a star forward in time, burning its fuel.
    Evolve(EvolveArgs),
    /// ASCII plot of a luminosity model.
    Plot(PlotArgs),
    /// Interactive menu (the default when no subcommand is given).
    Menu,
}

#[derive(Debug, Parser, Clone)]
pub struct EstimateArgs {
    /// Stellar mass in solar masses.
    #[arg(short, long)]
    pub mass: f64,
}

#[derive(Debug, Parser, Clone)]
pub struct TableArgs {
    /// Largest subdivision count (rows use every even n from 2).
    #[arg(short = 'n', long, default_value_t = 100)]
    pub max_n: usize,

    /// Luminosity model integrated over the horizon.
    #[arg(long, value_enum, default_value_t = LuminosityModel::ExpDecay)]
    pub model: LuminosityModel,

    /// Integration horizon T_guess (years).
    #[arg(long, default_value_t = 1e10)]
    pub horizon: f64,

    /// Initial fuel stock in joules (defaults to the fuel stock of one solar mass).
    #[arg(long)]
    pub fuel: Option<f64>,

    /// Export the table to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the table (with its inputs) to JSON.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,
}

#[derive(Debug, Parser, Clone)]
pub struct CatalogArgs {
    /// Star catalog CSV (`name,mass,luminosity,age`). Defaults to `STELLAR_CATALOG`.
    #[arg(short = 'f', long, value_name = "CSV")]
    pub input: Option<PathBuf>,

    /// Results CSV. Defaults to `<STELLAR_RESULTS_DIR>/star_results.csv`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Parser, Clone)]
pub struct ValidateArgs {
    /// Subdivisions for the integration checks (even).
    #[arg(short = 'n', long, default_value_t = 1000)]
    pub n: usize,

    /// Step size for the derivative checks.
    #[arg(long, default_value_t = 1e-3)]
    pub h: f64,

    /// Resolutions per convergence study.
    #[arg(long, default_value_t = 5)]
    pub levels: usize,

    /// Write a markdown debug bundle under `debug/`.
    #[arg(long)]
    pub debug: bool,
}

#[derive(Debug, Parser, Clone)]
pub struct EvolveArgs {
    /// Name used in the report.
    #[arg(long, default_value = "Star")]
    pub name: String,

    /// Mass in solar masses.
    #[arg(short, long, default_value_t = 1.0)]
    pub mass: f64,

    /// Luminosity in solar luminosities.
    #[arg(short, long, default_value_t = 1.0)]
    pub luminosity: f64,

    /// Current age (years).
    #[arg(short, long, default_value_t = 0.0)]
    pub age: f64,

    /// Total time to evolve (years).
    #[arg(long, default_value_t = 1e9)]
    pub t_final: f64,

    /// Time step (years).
    #[arg(long, default_value_t = 1e7)]
    pub dt: f64,
}

#[derive(Debug, Parser, Clone)]
pub struct PlotArgs {
    #[arg(long, value_enum, default_value_t = LuminosityModel::Sinusoidal)]
    pub model: LuminosityModel,

    /// Right end of the time axis.
    #[arg(long, default_value_t = 10.0)]
    pub horizon: f64,

    /// Mark the nodes of an n-interval composite rule (0 disables).
    #[arg(short = 'n', long, default_value_t = 0)]
    pub nodes: usize,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_defaults() {
        let cli = Cli::parse_from(["stellar", "table"]);
        let Command::Table(args) = cli.command else {
            panic!("expected table");
        };
        assert_eq!(args.max_n, 100);
        assert_eq!(args.model, LuminosityModel::ExpDecay);
        assert_eq!(args.horizon, 1e10);
        assert!(args.fuel.is_none());
    }

    #[test]
    fn model_names_are_kebab_case() {
        let cli = Cli::parse_from(["stellar", "plot", "--model", "exp-decay", "-n", "8"]);
        let Command::Plot(args) = cli.command else {
            panic!("expected plot");
        };
        assert_eq!(args.model, LuminosityModel::ExpDecay);
        assert_eq!(args.nodes, 8);
    }

    #[test]
    fn estimate_requires_mass() {
        assert!(Cli::try_parse_from(["stellar", "estimate"]).is_err());
        let cli = Cli::try_parse_from(["stellar", "estimate", "--mass", "2.5"]).unwrap();
        assert!(matches!(cli.command, Command::Estimate(EstimateArgs { mass }) if mass == 2.5));
    }

    #[test]
    fn clap_configuration_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
