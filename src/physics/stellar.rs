//! Closed-form stellar scaling laws.
//!
//! ```text
//! fuel_stock(M) = f · M · c² · η                      [J]
//! luminosity(M) = L☉ · (M / M☉)^3.5                   [W]
//! lifetime(M)   = fuel_stock(M) / luminosity(M) / yr  [years]
//! ```
//!
//! These are the analytic reference the numerical lifetime estimator is
//! checked against. Inputs are masses in kilograms and are expected to be
//! non-negative; a negative mass makes the power law NaN, and `lifetime(0)`
//! is `0/0`, also NaN.

use crate::physics::constants::PhysicalConstants;

impl PhysicalConstants {
    pub fn fuel_stock(&self, mass_kg: f64) -> f64 {
        self.hydrogen_fraction * mass_kg * self.c_squared * self.fusion_efficiency
    }

    pub fn luminosity(&self, mass_kg: f64) -> f64 {
        self.solar_luminosity_w * (mass_kg / self.solar_mass_kg).powf(3.5)
    }

    pub fn lifetime(&self, mass_kg: f64) -> f64 {
        let seconds = self.fuel_stock(mass_kg) / self.luminosity(mass_kg);
        seconds / self.seconds_per_year
    }
}

/// Hydrogen fuel energy available for fusion (J).
pub fn fuel_stock(mass_kg: f64) -> f64 {
    PhysicalConstants::STANDARD.fuel_stock(mass_kg)
}

/// Mass–luminosity relation (W).
pub fn luminosity(mass_kg: f64) -> f64 {
    PhysicalConstants::STANDARD.luminosity(mass_kg)
}

/// Time to burn the whole fuel stock at constant luminosity (years).
pub fn lifetime(mass_kg: f64) -> f64 {
    PhysicalConstants::STANDARD.lifetime(mass_kg)
}
