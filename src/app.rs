//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` defaults and parses CLI arguments
//! - runs the requested computation through `pipeline`
//! - prints reports/plots
//! - writes optional exports

use std::io;
use std::path::PathBuf;

use clap::Parser;

use crate::cli::{CatalogArgs, Command, EstimateArgs, EvolveArgs, PlotArgs, TableArgs, ValidateArgs};
use crate::domain::{CatalogConfig, Settings, Star, TableConfig, ValidationConfig};
use crate::error::AppError;
use crate::physics::constants::SOLAR_MASS_KG;
use crate::physics::stellar::fuel_stock;

pub mod pipeline;

/// File name of the catalog results export, inside the results dir.
pub const CATALOG_RESULTS_FILE: &str = "star_results.csv";

/// Entry point for the `stellar` binary.
pub fn run() -> Result<(), AppError> {
    // A missing `.env` is fine; the built-in defaults apply.
    dotenvy::dotenv().ok();
    let settings = Settings::from_env();

    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Estimate(args) => handle_estimate(args),
        Command::Table(args) => handle_table(args),
        Command::Compare => handle_compare(),
        Command::Catalog(args) => handle_catalog(args, &settings),
        Command::Validate(args) => handle_validate(args),
        Command::Evolve(args) => handle_evolve(args),
        Command::Plot(args) => handle_plot(args),
        Command::Menu => handle_menu(&settings),
    }
}

fn handle_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let years = pipeline::lifetime_for_solar_masses(args.mass)?;
    print!("{}", crate::report::format_estimate(args.mass, years));
    Ok(())
}

fn handle_table(args: TableArgs) -> Result<(), AppError> {
    let config = table_config_from_args(&args);
    let table = pipeline::run_lifetime_table(&config)?;

    println!("{}", crate::report::format_lifetime_table(&table));

    if let Some(path) = &config.export_csv {
        crate::io::export::write_lifetime_table_csv(path, &table)?;
        println!("Wrote {}", path.display());
    }
    if let Some(path) = &config.export_json {
        crate::io::table::write_table_json(path, &table)?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn handle_compare() -> Result<(), AppError> {
    print!(
        "{}",
        crate::report::format_comparison(&Star::sun(), &Star::sirius_a())
    );
    Ok(())
}

fn handle_catalog(args: CatalogArgs, settings: &Settings) -> Result<(), AppError> {
    let config = catalog_config_from_args(&args, settings);
    let data = crate::io::catalog::load_stars(&config.input)?;

    for err in &data.row_errors {
        eprintln!("Skipping {} line {}: {}", config.input.display(), err.line, err.message);
    }

    let results = pipeline::run_catalog(&data.stars)?;
    println!(
        "Read {} star(s) from {} ({} row(s) skipped)\n",
        data.stars.len(),
        config.input.display(),
        data.row_errors.len()
    );
    println!("{}", crate::report::format_catalog_results(&results));

    crate::io::export::write_catalog_results_csv(&config.output, &results)?;
    println!("Wrote {}", config.output.display());
    Ok(())
}

fn handle_validate(args: ValidateArgs) -> Result<(), AppError> {
    let config = validation_config_from_args(&args);
    let report = pipeline::run_validation(&config)?;

    print!("{}", crate::report::format_validation(&report));

    if config.write_debug_bundle {
        let path = crate::debug::write_debug_bundle(
            &PathBuf::from(crate::debug::DEBUG_DIR),
            &config,
            &report,
        )?;
        println!("\nDebug bundle: {}", path.display());
    }

    Ok(())
}

fn handle_evolve(args: EvolveArgs) -> Result<(), AppError> {
    let mut star = Star::new(args.name, args.mass, args.luminosity, args.age)?;
    print!("{}", crate::report::format_star_summary(&star));

    let evolution = star.evolve(args.t_final, args.dt)?;
    print!("{}", crate::report::format_evolution(&star, &evolution));
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let plot = crate::plot::render_luminosity_plot(args.model, args.horizon, args.nodes, args.width, args.height);
    println!("{plot}");
    Ok(())
}

fn handle_menu(settings: &Settings) -> Result<(), AppError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    crate::cli::menu::run_menu(&mut input, &mut out, settings)
}

pub fn table_config_from_args(args: &TableArgs) -> TableConfig {
    TableConfig {
        max_n: args.max_n,
        model: args.model,
        horizon_years: args.horizon,
        initial_fuel_j: args.fuel.unwrap_or_else(|| fuel_stock(SOLAR_MASS_KG)),
        export_csv: args.export.clone(),
        export_json: args.export_json.clone(),
    }
}

pub fn catalog_config_from_args(args: &CatalogArgs, settings: &Settings) -> CatalogConfig {
    CatalogConfig {
        input: args.input.clone().unwrap_or_else(|| settings.catalog_path.clone()),
        output: args
            .output
            .clone()
            .unwrap_or_else(|| settings.results_dir.join(CATALOG_RESULTS_FILE)),
    }
}

pub fn validation_config_from_args(args: &ValidateArgs) -> ValidationConfig {
    ValidationConfig {
        n: args.n,
        h: args.h,
        levels: args.levels,
        write_debug_bundle: args.debug,
    }
}

/// Rewrite argv so `stellar` defaults to `stellar menu`.
///
/// Rules:
/// - `stellar`              -> `stellar menu`
/// - anything else          -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    if argv.len() < 2 {
        argv.push("menu".to_string());
    }
    argv
}
