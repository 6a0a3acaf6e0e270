//! Core physical constants and the simulation clock for the lensing simulation.

use bevy::prelude::*;

/// Physical constants (SI units)

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.67430e-11;

/// Speed of light in vacuum (m/s)
pub const C: f64 = 299792458.0;

/// Schwarzschild radius for a given mass: r_s = 2GM/c² (meters).
pub fn schwarzschild_radius(mass: f64) -> f64 {
    2.0 * G * mass / (C * C)
}

/// Simulation clock resource tracking progress along the affine parameter.
///
/// Photons are advanced in steps of the affine parameter λ rather than
/// coordinate time; the clock accumulates how far the simulation has been
/// integrated and whether stepping is paused. The tick rate itself is
/// driven by the external frame clock.
#[derive(Resource, Clone, Debug)]
pub struct SimulationClock {
    /// Total affine parameter integrated so far.
    pub lambda: f64,
    /// Whether photon stepping is paused.
    pub paused: bool,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            lambda: 0.0,
            paused: false,
        }
    }
}

impl SimulationClock {
    /// Record one advance of the affine parameter.
    pub fn advance(&mut self, d_lambda: f64) {
        self.lambda += d_lambda;
    }

    /// Reset integrated progress and pause.
    pub fn reset(&mut self) {
        self.lambda = 0.0;
        self.paused = true;
    }
}
