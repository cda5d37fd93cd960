//! Interactive menu.
//!
//! This is intentionally kept separate from clap parsing:
//! - clap handles structured flags/subcommands
//! - the menu provides the "run `stellar` and pick an option" UX
//!
//! Input and output are injected so the menu can be driven from tests.

use std::io::{BufRead, Write};

use crate::app::pipeline::{self, DEFAULT_HORIZON_YEARS};
use crate::domain::{Settings, Star, TableConfig};
use crate::error::AppError;
use crate::io::export::write_lifetime_table_csv;
use crate::physics::constants::SOLAR_MASS_KG;
use crate::physics::luminosity::LuminosityModel;
use crate::physics::stellar::fuel_stock;
use crate::report::{format_comparison, format_estimate, format_lifetime_table};

/// Subdivision limit of the menu's lifetime table.
const MENU_TABLE_MAX_N: usize = 100;

/// File name of the menu's lifetime table export, inside the results dir.
pub const MENU_TABLE_FILE: &str = "lifetime_table.csv";

/// Run the menu until `q` or end of input.
pub fn run_menu<R: BufRead, W: Write>(input: &mut R, out: &mut W, settings: &Settings) -> Result<(), AppError> {
    loop {
        say(
            out,
            "=== Stellar Lifetime Simulator ===\n\
             1. Estimate lifetime of a star\n\
             2. Generate lifetime table\n\
             3. Compare Sun and Sirius A\n\
             q. Quit\n\
             Choose option: ",
        )?;

        let Some(choice) = read_line(input)? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => estimate(input, out)?,
            "2" => lifetime_table(out, settings)?,
            "3" => say(out, &format_comparison(&Star::sun(), &Star::sirius_a()))?,
            "q" | "Q" => return Ok(()),
            _ => say(out, "Invalid option.\n")?,
        }
    }
}

fn estimate<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<(), AppError> {
    say(out, "Enter stellar mass (in solar masses): ")?;
    let Some(line) = read_line(input)? else {
        return Ok(());
    };

    let result = line
        .parse::<f64>()
        .map_err(|_| AppError::invalid_argument(format!("Not a number: '{line}'")))
        .and_then(|mass| pipeline::lifetime_for_solar_masses(mass).map(|years| (mass, years)));

    match result {
        Ok((mass, years)) => say(out, &format_estimate(mass, years)),
        Err(e) => say(out, &format!("Error: {e}\n")),
    }
}

fn lifetime_table<W: Write>(out: &mut W, settings: &Settings) -> Result<(), AppError> {
    let path = settings.results_dir.join(MENU_TABLE_FILE);
    let config = TableConfig {
        max_n: MENU_TABLE_MAX_N,
        model: LuminosityModel::ExpDecay,
        horizon_years: DEFAULT_HORIZON_YEARS,
        initial_fuel_j: fuel_stock(SOLAR_MASS_KG),
        export_csv: Some(path.clone()),
        export_json: None,
    };

    let table = pipeline::run_lifetime_table(&config)?;
    say(out, &format_lifetime_table(&table))?;
    write_lifetime_table_csv(&path, &table)?;
    say(out, &format!("Wrote {}\n", path.display()))
}

fn say<W: Write>(out: &mut W, text: &str) -> Result<(), AppError> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| AppError::io(format!("Failed to write prompt: {e}")))
}

/// Next trimmed line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    let bytes = input
        .read_line(&mut line)
        .map_err(|e| AppError::io(format!("Failed to read input: {e}")))?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
