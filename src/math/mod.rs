//! Numerical methods: quadrature, finite differences, error metrics, and the
//! small least-squares helper used to measure convergence orders.

pub mod convergence;
pub mod differentiation;
pub mod error_bounds;
pub mod ols;
pub mod quadrature;

pub use convergence::*;
pub use differentiation::*;
pub use error_bounds::*;
pub use ols::*;
pub use quadrature::*;
