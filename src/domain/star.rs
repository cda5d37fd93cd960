//! The `Star` value type.
//!
//! Stars carry their attributes in solar units; conversions to SI go through
//! `PhysicalConstants::STANDARD`. All numeric attributes are validated to be
//! finite and non-negative, both at construction and in every setter.

use serde::Serialize;

use crate::error::AppError;
use crate::physics::constants::{SOLAR_LUMINOSITY_W, SOLAR_MASS_KG};
use crate::physics::stellar::lifetime;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Star {
    name: String,
    mass_msun: f64,
    luminosity_lsun: f64,
    observed_age_years: f64,
}

/// Result of `Star::evolve`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evolution {
    /// Years actually simulated (a whole number of steps).
    pub elapsed_years: f64,
    /// Fuel left as a fraction of the initial stock, in `[0, 1]`.
    pub remaining_fuel: f64,
}

impl Star {
    pub fn new(
        name: impl Into<String>,
        mass_msun: f64,
        luminosity_lsun: f64,
        observed_age_years: f64,
    ) -> Result<Self, AppError> {
        Ok(Self {
            name: name.into(),
            mass_msun: non_negative("mass_msun", mass_msun)?,
            luminosity_lsun: non_negative("luminosity_lsun", luminosity_lsun)?,
            observed_age_years: non_negative("observed_age_years", observed_age_years)?,
        })
    }

    /// The Sun: 1 M☉, 1 L☉, 4.6 Gyr.
    pub fn sun() -> Self {
        Self {
            name: "Sun".to_string(),
            mass_msun: 1.0,
            luminosity_lsun: 1.0,
            observed_age_years: 4.6e9,
        }
    }

    /// Sirius A: 2.1 M☉, 25 L☉, 240 Myr.
    pub fn sirius_a() -> Self {
        Self {
            name: "Sirius A".to_string(),
            mass_msun: 2.1,
            luminosity_lsun: 25.0,
            observed_age_years: 2.4e8,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass_msun(&self) -> f64 {
        self.mass_msun
    }

    pub fn luminosity_lsun(&self) -> f64 {
        self.luminosity_lsun
    }

    pub fn observed_age_years(&self) -> f64 {
        self.observed_age_years
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_mass(&mut self, mass_msun: f64) -> Result<(), AppError> {
        self.mass_msun = non_negative("mass_msun", mass_msun)?;
        Ok(())
    }

    pub fn set_luminosity(&mut self, luminosity_lsun: f64) -> Result<(), AppError> {
        self.luminosity_lsun = non_negative("luminosity_lsun", luminosity_lsun)?;
        Ok(())
    }

    pub fn set_age(&mut self, observed_age_years: f64) -> Result<(), AppError> {
        self.observed_age_years = non_negative("observed_age_years", observed_age_years)?;
        Ok(())
    }

    pub fn mass_kg(&self) -> f64 {
        self.mass_msun * SOLAR_MASS_KG
    }

    pub fn luminosity_watts(&self) -> f64 {
        self.luminosity_lsun * SOLAR_LUMINOSITY_W
    }

    /// Analytic fuel lifetime from the mass–luminosity relation (years).
    ///
    /// Uses the star's mass only; the observed luminosity does not enter.
    pub fn fuel_lifetime_years(&self) -> f64 {
        lifetime(self.mass_kg())
    }

    pub fn is_older_than(&self, other: &Star) -> bool {
        self.observed_age_years > other.observed_age_years
    }

    pub fn is_brighter_than(&self, other: &Star) -> bool {
        self.luminosity_lsun > other.luminosity_lsun
    }

    pub fn is_more_massive_than(&self, other: &Star) -> bool {
        self.mass_msun > other.mass_msun
    }

    /// Burn fuel for up to `t_final` years in steps of `dt`, ageing the star.
    ///
    /// Fuel starts at 1 (the full stock) and each step burns
    /// `dt / fuel_lifetime_years()`, so a star evolved for its whole analytic
    /// lifetime ends with no fuel. Stepping stops at `t_final` or when the fuel
    /// runs out, whichever comes first. A massless star has no fuel and does
    /// not age.
    pub fn evolve(&mut self, t_final: f64, dt: f64) -> Result<Evolution, AppError> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(AppError::invalid_argument(format!(
                "Star::evolve: dt must be positive and finite (got {dt})."
            )));
        }
        if !(t_final.is_finite() && t_final >= 0.0) {
            return Err(AppError::invalid_argument(format!(
                "Star::evolve: t_final must be non-negative and finite (got {t_final})."
            )));
        }

        if self.mass_msun == 0.0 {
            return Ok(Evolution {
                elapsed_years: 0.0,
                remaining_fuel: 0.0,
            });
        }

        // Steps until t_final is reached, and until the fuel runs out.
        let burn_per_step = dt / self.fuel_lifetime_years();
        let time_steps = (t_final / dt).ceil();
        let fuel_steps = (1.0 / burn_per_step).ceil();
        let (steps, remaining_fuel) = if fuel_steps <= time_steps {
            (fuel_steps, 0.0)
        } else {
            (time_steps, (1.0 - time_steps * burn_per_step).max(0.0))
        };

        let elapsed_years = steps * dt;
        self.observed_age_years += elapsed_years;

        Ok(Evolution {
            elapsed_years,
            remaining_fuel,
        })
    }
}

fn non_negative(field: &str, value: f64) -> Result<f64, AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::invalid_argument(format!(
            "Star: {field} must be finite and non-negative (got {value})."
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_relative_eq;

    #[test]
    fn accessors_and_conversions() {
        let sun = Star::new("Sun", 1.0, 1.0, 4.6e9).unwrap();
        assert_eq!(sun, Star::sun());
        assert_eq!(sun.name(), "Sun");
        assert_eq!(sun.mass_kg(), SOLAR_MASS_KG);
        assert_eq!(sun.luminosity_watts(), SOLAR_LUMINOSITY_W);
        assert_relative_eq!(sun.fuel_lifetime_years(), lifetime(SOLAR_MASS_KG));
    }

    #[test]
    fn negative_attributes_are_rejected() {
        assert_eq!(
            Star::new("X", -1.0, 1.0, 1.0).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert!(Star::new("X", 1.0, -0.1, 1.0).is_err());
        assert!(Star::new("X", 1.0, 1.0, -5.0).is_err());
        assert!(Star::new("X", f64::NAN, 1.0, 1.0).is_err());

        let mut star = Star::sun();
        assert!(star.set_mass(-2.0).is_err());
        assert!(star.set_luminosity(-2.0).is_err());
        assert!(star.set_age(-2.0).is_err());
        // Failed setters leave the star untouched.
        assert_eq!(star, Star::sun());

        star.set_mass(3.0).unwrap();
        star.set_name("Heavy Sun");
        assert_eq!(star.mass_msun(), 3.0);
        assert_eq!(star.name(), "Heavy Sun");
    }

    #[test]
    fn comparisons() {
        let sun = Star::sun();
        let sirius = Star::sirius_a();
        let proxima = Star::new("Proxima Centauri", 0.12, 0.0017, 4.85e9).unwrap();

        assert!(sirius.is_more_massive_than(&sun));
        assert!(sun.is_older_than(&sirius));
        assert!(sirius.is_brighter_than(&proxima));
        assert!(!sun.is_brighter_than(&sun));
    }

    #[test]
    fn evolve_depends_on_lifetime() {
        // Sirius burns out much sooner than the Sun, so the same window leaves
        // it with less fuel.
        let mut sun = Star::sun();
        let mut sirius = Star::sirius_a();
        let a = sun.evolve(1e9, 1e7).unwrap();
        let b = sirius.evolve(1e9, 1e7).unwrap();
        assert!(b.remaining_fuel < a.remaining_fuel);
        assert_relative_eq!(a.elapsed_years, 1e9);
        assert_relative_eq!(sun.observed_age_years(), 4.6e9 + 1e9);
        assert_relative_eq!(a.remaining_fuel, 1.0 - 1e9 / Star::sun().fuel_lifetime_years(), max_relative = 1e-9);
    }

    #[test]
    fn evolve_stops_when_fuel_runs_out() {
        let mut star = Star::new("Blue", 10.0, 1e4, 0.0).unwrap();
        let life = star.fuel_lifetime_years();
        let out = star.evolve(10.0 * life, life / 100.0).unwrap();
        assert_eq!(out.remaining_fuel, 0.0);
        assert!(out.elapsed_years <= life * 1.02);
        assert!(out.elapsed_years >= life * 0.98);
    }

    #[test]
    fn tiny_steps_do_not_iterate() {
        // 1e12 steps; counted, not iterated.
        let mut sun = Star::sun();
        let out = sun.evolve(1e9, 1e-3).unwrap();
        assert_relative_eq!(out.elapsed_years, 1e9, max_relative = 1e-9);
        assert_relative_eq!(
            out.remaining_fuel,
            1.0 - 1e9 / Star::sun().fuel_lifetime_years(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn zero_duration_leaves_the_star_unchanged() {
        let mut sun = Star::sun();
        let out = sun.evolve(0.0, 1e7).unwrap();
        assert_eq!(out.elapsed_years, 0.0);
        assert_eq!(out.remaining_fuel, 1.0);
        assert_eq!(sun, Star::sun());
    }

    #[test]
    fn evolve_validates_inputs() {
        let mut star = Star::sun();
        assert_eq!(star.evolve(1.0, 0.0).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(star.evolve(-1.0, 1.0).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(star.observed_age_years(), 4.6e9);
    }

    #[test]
    fn massless_star_does_not_age() {
        let mut star = Star::new("Ghost", 0.0, 0.0, 10.0).unwrap();
        let out = star.evolve(100.0, 1.0).unwrap();
        assert_eq!(out.elapsed_years, 0.0);
        assert_eq!(star.observed_age_years(), 10.0);
    }
}
