//! Lifetime-table JSON export.
//!
//! The JSON file carries the inputs (model, horizon, initial fuel) alongside
//! the rows, so a table can be reproduced from its export alone. The schema is
//! `domain::LifetimeTableFile`.

use std::fs::{File, create_dir_all};
use std::path::Path;

use chrono::Local;

use crate::domain::{LifetimeTable, LifetimeTableFile};
use crate::error::AppError;

/// Write a lifetime table as pretty-printed JSON.
pub fn write_table_json(path: &Path, table: &LifetimeTable) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)
            .map_err(|e| AppError::io(format!("Failed to create directory '{}': {e}", parent.display())))?;
    }

    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create table JSON '{}': {e}", path.display())))?;

    let export = LifetimeTableFile {
        tool: "stellar".to_string(),
        generated: Local::now().to_rfc3339(),
        table: table.clone(),
    };

    serde_json::to_writer_pretty(file, &export)
        .map_err(|e| AppError::io(format!("Failed to write table JSON: {e}")))?;

    Ok(())
}
