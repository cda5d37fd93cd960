//! Luminosity-versus-time models fed to the lifetime estimator.

use clap::ValueEnum;
use serde::Serialize;

use crate::physics::constants::SOLAR_LUMINOSITY_W;

/// Decay rate of `ExpDecay` (per year).
const DECAY_RATE: f64 = 1e-10;

const SINE_AMPLITUDE: f64 = 0.2;
const SINE_FREQUENCY: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LuminosityModel {
    /// One unit of fuel per unit time.
    Constant,
    /// `L☉ · exp(-1e-10 · t)`, t in years.
    ExpDecay,
    /// `1 + 0.2 · sin(2t)`.
    Sinusoidal,
}

impl LuminosityModel {
    pub fn display_name(self) -> &'static str {
        match self {
            LuminosityModel::Constant => "constant",
            LuminosityModel::ExpDecay => "exponential decay",
            LuminosityModel::Sinusoidal => "sinusoidal",
        }
    }

    /// Luminosity at time `t`.
    pub fn at(self, t: f64) -> f64 {
        match self {
            LuminosityModel::Constant => 1.0,
            LuminosityModel::ExpDecay => SOLAR_LUMINOSITY_W * (-DECAY_RATE * t).exp(),
            LuminosityModel::Sinusoidal => 1.0 + SINE_AMPLITUDE * (SINE_FREQUENCY * t).sin(),
        }
    }

    /// Closed-form `∫₀ᵀ L(t) dt`, used to check quadrature of the models.
    pub fn burned(self, horizon: f64) -> f64 {
        match self {
            LuminosityModel::Constant => horizon,
            LuminosityModel::ExpDecay => SOLAR_LUMINOSITY_W * -(-DECAY_RATE * horizon).exp_m1() / DECAY_RATE,
            LuminosityModel::Sinusoidal => {
                horizon + SINE_AMPLITUDE * (1.0 - (SINE_FREQUENCY * horizon).cos()) / SINE_FREQUENCY
            }
        }
    }
}
