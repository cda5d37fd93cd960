//! CSV exports.
//!
//! Every field, header included, is followed by a `,`, so each line ends in a
//! trailing delimiter before the newline. Downstream spreadsheets written
//! against earlier exports expect that layout.

use std::fs::{File, create_dir_all};
use std::io::BufWriter;
use std::path::Path;

use crate::domain::{LifetimeTable, StarResult};
use crate::error::AppError;

pub const CATALOG_HEADERS: [&str; 7] = [
    "Name",
    "Mass(Msun)",
    "Luminosity(Lsun)",
    "Observed Age (yrs)",
    "Predicted Lifetime (yrs)",
    "Abs Error",
    "Rel Error",
];

pub const TABLE_HEADERS: [&str; 3] = ["n", "Trap Lifetime", "Simp Lifetime"];

/// Write `headers` and `rows` as trailing-delimiter CSV.
///
/// Each record gets an extra empty field, which `csv` renders as the trailing
/// `,`. Fields are quoted only when needed.
pub fn write_csv(path: &Path, headers: &[&str], rows: &[Vec<String>]) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)
            .map_err(|e| AppError::io(format!("Failed to create directory '{}': {e}", parent.display())))?;
    }

    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to open '{}' for writing: {e}", path.display())))?;
    let mut out = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(BufWriter::new(file));

    out.write_record(headers.iter().copied().chain([""]))
        .map_err(|e| AppError::io(format!("Failed to write CSV header: {e}")))?;
    for row in rows {
        out.write_record(row.iter().map(String::as_str).chain([""]))
            .map_err(|e| AppError::io(format!("Failed to write CSV row: {e}")))?;
    }
    out.flush()
        .map_err(|e| AppError::io(format!("Failed to flush '{}': {e}", path.display())))?;

    Ok(())
}

/// Write per-star catalog results.
pub fn write_catalog_results_csv(path: &Path, results: &[StarResult]) -> Result<(), AppError> {
    let rows: Vec<Vec<String>> = results
        .iter()
        .map(|r| {
            vec![
                r.star.name().to_string(),
                fixed(r.star.mass_msun()),
                fixed(r.star.luminosity_lsun()),
                fixed(r.star.observed_age_years()),
                fixed(r.predicted_lifetime_years),
                fixed(r.abs_error),
                r.rel_error.map(fixed).unwrap_or_default(),
            ]
        })
        .collect();
    write_csv(path, &CATALOG_HEADERS, &rows)
}

/// Write the trapezoid-vs-Simpson lifetime table.
pub fn write_lifetime_table_csv(path: &Path, table: &LifetimeTable) -> Result<(), AppError> {
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|r| vec![r.n.to_string(), fixed(r.trapezoid_years), fixed(r.simpson_years)])
        .collect();
    write_csv(path, &TABLE_HEADERS, &rows)
}

/// Six fixed decimals, matching the historical exports.
fn fixed(v: f64) -> String {
    format!("{v:.6}")
}
