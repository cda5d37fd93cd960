//! Star catalog CSV ingest.
//!
//! Expected columns (header row required, matched case-insensitively):
//!
//! ```text
//! name,mass,luminosity,age
//! ```
//!
//! `mass_msun` / `luminosity_lsun` / `observed_age_years` are accepted as
//! aliases. Rows that fail to parse or validate are skipped and reported with
//! their line number; a catalog with no usable rows is an error. A star needs
//! a positive mass to have a predicted lifetime.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::Star;
use crate::error::AppError;

/// A row-level error encountered during ingest.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct CatalogData {
    pub stars: Vec<Star>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

const NAME: &[&str] = &["name"];
const MASS: &[&str] = &["mass", "mass_msun", "mass(msun)"];
const LUMINOSITY: &[&str] = &["luminosity", "luminosity_lsun", "luminosity(lsun)"];
const AGE: &[&str] = &["age", "observed_age_years", "observed_age", "age_years"];

/// Load a star catalog from disk.
pub fn load_stars(path: &Path) -> Result<CatalogData, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open star catalog '{}': {e}", path.display())))?;
    read_stars(file)
}

/// Parse a star catalog from any reader.
pub fn read_stars<R: Read>(reader: R) -> Result<CatalogData, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::io(format!("Failed to read catalog headers: {e}")))?
        .clone();
    let columns = Columns::resolve(&headers)?;

    let mut stars = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2: 1-based lines, and the header occupies line 1.
        let line = idx + 2;
        rows_read += 1;

        let parsed = result
            .map_err(|e| format!("CSV parse error: {e}"))
            .and_then(|record| parse_row(&record, &columns));
        match parsed {
            Ok(star) => stars.push(star),
            Err(message) => row_errors.push(RowError { line, message }),
        }
    }

    if stars.is_empty() {
        return Err(AppError::io(format!(
            "No valid stars in catalog ({rows_read} row(s) read, {} rejected).",
            row_errors.len()
        )));
    }

    Ok(CatalogData {
        stars,
        row_errors,
        rows_read,
    })
}

struct Columns {
    name: usize,
    mass: usize,
    luminosity: usize,
    age: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, AppError> {
        let map: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (normalize_header_name(name), idx))
            .collect();

        let find = |aliases: &[&str]| -> Result<usize, AppError> {
            aliases
                .iter()
                .find_map(|alias| map.get(*alias).copied())
                .ok_or_else(|| AppError::io(format!("Missing required catalog column: `{}`", aliases[0])))
        };

        Ok(Self {
            name: find(NAME)?,
            mass: find(MASS)?,
            luminosity: find(LUMINOSITY)?,
            age: find(AGE)?,
        })
    }
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes prefix the first header with a BOM.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase().replace(' ', "_")
}

fn parse_row(record: &StringRecord, columns: &Columns) -> Result<Star, String> {
    let name = get_required(record, columns.name, "name")?;
    let mass = parse_f64(get_required(record, columns.mass, "mass")?, "mass")?;
    let luminosity = parse_f64(get_required(record, columns.luminosity, "luminosity")?, "luminosity")?;
    let age = parse_f64(get_required(record, columns.age, "age")?, "age")?;
    if mass == 0.0 {
        return Err(format!("`mass` must be positive (got {mass})"));
    }

    Star::new(name, mass, luminosity, age).map_err(|e| e.to_string())
}

fn get_required<'a>(record: &'a StringRecord, idx: usize, name: &str) -> Result<&'a str, String> {
    record
        .get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing required value: `{name}`"))
}

fn parse_f64(s: &str, name: &str) -> Result<f64, String> {
    s.parse::<f64>()
        .map_err(|_| format!("Invalid number for `{name}`: '{s}'"))
}
