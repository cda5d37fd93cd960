//! Physical constants for the toy stellar model.

/// An immutable set of the constants the stellar formulas depend on.
///
/// `STANDARD` is what the free functions in `physics::stellar` use; other sets
/// exist mainly for what-if comparisons and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Fraction of the mass available as hydrogen fuel.
    pub hydrogen_fraction: f64,
    /// Fraction of fused mass converted to energy.
    pub fusion_efficiency: f64,
    /// Speed of light squared (m²/s²).
    pub c_squared: f64,
    /// Solar mass (kg).
    pub solar_mass_kg: f64,
    /// Solar luminosity (W).
    pub solar_luminosity_w: f64,
    pub seconds_per_year: f64,
}

impl PhysicalConstants {
    pub const STANDARD: PhysicalConstants = PhysicalConstants {
        hydrogen_fraction: HYDROGEN_FRACTION,
        fusion_efficiency: FUSION_EFFICIENCY,
        c_squared: C_SQUARED,
        solar_mass_kg: SOLAR_MASS_KG,
        solar_luminosity_w: SOLAR_LUMINOSITY_W,
        seconds_per_year: SECONDS_PER_YEAR,
    };
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::STANDARD
    }
}

pub const HYDROGEN_FRACTION: f64 = 0.1;
pub const FUSION_EFFICIENCY: f64 = 0.007;
pub const C_SQUARED: f64 = 9.0e16;
pub const SOLAR_MASS_KG: f64 = 1.989e30;
pub const SOLAR_LUMINOSITY_W: f64 = 3.828e26;
pub const SECONDS_PER_YEAR: f64 = 3.154e7;
