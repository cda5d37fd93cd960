//! Input/output helpers.
//!
//! - star catalog CSV ingest (`catalog`)
//! - trailing-delimiter CSV exports (`export`)
//! - lifetime table JSON export (`table`)

pub mod catalog;
pub mod export;
pub mod table;

pub use catalog::*;
pub use export::*;
pub use table::*;
