//! Stellar physics: constants, closed-form scaling laws, luminosity models and
//! the quadrature-based lifetime estimator.

pub mod constants;
pub mod lifetime;
pub mod luminosity;
pub mod stellar;

pub use constants::*;
pub use lifetime::*;
pub use luminosity::*;
pub use stellar::*;
