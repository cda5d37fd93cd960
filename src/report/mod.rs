//! Reporting utilities: terminal formatting for every command's results.

pub mod format;

pub use format::*;
