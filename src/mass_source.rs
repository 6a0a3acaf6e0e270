//! The gravitating body that bends light.
//!
//! A single non-rotating mass described by the Schwarzschild metric.
//! Immutable after construction; photons only ever read its derived
//! Schwarzschild radius.

use bevy::math::DVec3;
use bevy::prelude::*;
use thiserror::Error;

use crate::types::schwarzschild_radius;

/// Error raised when a mass source cannot be constructed.
///
/// The Schwarzschild radius formula r_s = 2GM/c² silently propagates a
/// nonsensical mass into every downstream computation, so the mass is
/// validated here instead.
#[derive(Debug, Error, PartialEq)]
pub enum MassSourceError {
    /// Mass must be strictly positive and finite.
    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f64),
}

/// An immutable gravitating body with a derived Schwarzschild radius.
///
/// The position is a point in world space; the photon plane passes through
/// it. Mass is in kilograms, the Schwarzschild radius in meters.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct MassSource {
    position: DVec3,
    mass: f64,
    schwarzschild_radius: f64,
}

impl MassSource {
    /// Create a mass source, validating the mass.
    ///
    /// # Errors
    /// Returns [`MassSourceError::InvalidMass`] for zero, negative, or
    /// non-finite mass.
    pub fn new(position: DVec3, mass: f64) -> Result<Self, MassSourceError> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(MassSourceError::InvalidMass(mass));
        }
        Ok(Self {
            position,
            mass,
            schwarzschild_radius: schwarzschild_radius(mass),
        })
    }

    /// Position of the body in world space.
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Mass in kilograms.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Schwarzschild radius r_s = 2GM/c² in meters.
    ///
    /// Strictly positive for any successfully constructed source.
    pub fn schwarzschild_radius(&self) -> f64 {
        self.schwarzschild_radius
    }
}
