//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the validated `Star` value type
//! - run settings and per-command configs (`Settings`, `TableConfig`, ...)
//! - result records (`LifetimeTable`, `StarResult`, `ValidationReport`)

pub mod star;
pub mod types;

pub use star::*;
pub use types::*;
