//! Preset launch configurations.
//!
//! Named ray layouts around a chosen mass, ready for the presentation
//! layer to spawn. The default beam reproduces the classic lensing demo:
//! a fan of horizontal rays entering from the left edge of the domain and
//! bending around a Sagittarius A*-mass body.

use bevy::math::{DVec2, DVec3};

use crate::mass_source::{MassSource, MassSourceError};

/// Sagittarius A* mass in kilograms.
pub const SAGITTARIUS_A_MASS: f64 = 8.54e36;

/// Geometric arrangement of the launched rays (screen units).
#[derive(Clone, Copy, Debug)]
pub enum RayLayout {
    /// Horizontal beam entering from a fixed x, spread evenly over a
    /// vertical span, all traveling in +x.
    ParallelBeam { x: f64, y_min: f64, y_max: f64 },
    /// A ring of rays aimed straight at the mass.
    RadialInfall { radius: f64 },
}

/// A named, self-contained launch configuration.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Mass of the lensing body in kilograms.
    pub mass: f64,
    /// Number of rays to launch.
    pub ray_count: usize,
    pub layout: RayLayout,
}

/// All available preset scenarios.
pub static SCENARIOS: &[Scenario] = &[SAGITTARIUS_BEAM, PHOTON_RING_PROBE, RADIAL_INFALL];

/// The default demo: a parallel beam grazing a Sgr A*-mass body.
///
/// Rays above and below the axis bend toward it by different amounts,
/// tracing the characteristic lensing fan.
pub static SAGITTARIUS_BEAM: Scenario = Scenario {
    id: "sagittarius_beam",
    name: "Sagittarius A* Beam",
    description: "Parallel rays from the left edge bending around a Sgr A*-mass body.",
    mass: SAGITTARIUS_A_MASS,
    ray_count: 13,
    layout: RayLayout::ParallelBeam {
        x: -1.0,
        y_min: -0.9,
        y_max: 0.9,
    },
};

/// A tight beam skimming the capture zone.
///
/// Impact parameters straddle the photon sphere, so some rays whip around
/// the body and escape while their neighbors spiral in and are captured.
pub static PHOTON_RING_PROBE: Scenario = Scenario {
    id: "photon_ring_probe",
    name: "Photon Ring Probe",
    description: "Near-critical rays: some escape with large deflection, some are captured.",
    mass: SAGITTARIUS_A_MASS,
    ray_count: 9,
    // Critical impact parameter is (3√3/2)·r_s ≈ 1.56 screen units at the
    // default scale; this span straddles it
    layout: RayLayout::ParallelBeam {
        x: -3.0,
        y_min: 0.6,
        y_max: 2.2,
    },
};

/// A ring of rays falling straight in. Every one is captured; used to
/// demonstrate the horizon stop rule.
pub static RADIAL_INFALL: Scenario = Scenario {
    id: "radial_infall",
    name: "Radial Infall",
    description: "A ring of rays aimed straight at the horizon; all are captured.",
    mass: SAGITTARIUS_A_MASS,
    ray_count: 8,
    layout: RayLayout::RadialInfall { radius: 3.0 },
};

impl Scenario {
    /// Build the mass source for this scenario, centered at the origin.
    pub fn mass_source(&self) -> Result<MassSource, MassSourceError> {
        MassSource::new(DVec3::ZERO, self.mass)
    }

    /// Generate the (initial position, initial direction) pairs for this
    /// scenario's rays, in screen units.
    pub fn rays(&self) -> Vec<(DVec2, DVec2)> {
        let n = self.ray_count;
        match self.layout {
            RayLayout::ParallelBeam { x, y_min, y_max } => (0..n)
                .map(|i| {
                    let t = if n > 1 {
                        i as f64 / (n - 1) as f64
                    } else {
                        0.5
                    };
                    let y = y_min + t * (y_max - y_min);
                    (DVec2::new(x, y), DVec2::X)
                })
                .collect(),
            RayLayout::RadialInfall { radius } => (0..n)
                .map(|i| {
                    let angle = std::f64::consts::TAU * i as f64 / n as f64;
                    let outward = DVec2::new(angle.cos(), angle.sin());
                    (outward * radius, -outward)
                })
                .collect(),
        }
    }
}
