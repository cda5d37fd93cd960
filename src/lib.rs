//! `stellar-lifetimes` library crate.
//!
//! The binary (`stellar`) is a thin wrapper around this library so that:
//!
//! - the numerical core (`math`) and the star physics (`physics`) are testable
//!   without spawning processes
//! - the subcommands and the interactive menu share one `app::pipeline`

pub mod app;
pub mod cli;
pub mod debug;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod physics;
pub mod plot;
pub mod report;
