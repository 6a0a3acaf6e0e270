//! Photon state and trail bookkeeping.
//!
//! Each photon is one simulated light ray: a polar state integrated along
//! the affine parameter, plus the derived Cartesian position/direction and
//! a bounded trail of past positions that the renderer draws as a fading
//! line strip. Rays are independent; stepping one never touches another.

use std::collections::VecDeque;

use bevy::math::{DVec2, Vec2};
use bevy::prelude::*;

use crate::physics::{geodesic_rhs, rk4_step};
use crate::scaling::UnitScale;

/// Default bound on retained trail samples per photon.
pub const DEFAULT_MAX_TRAIL_LEN: usize = 1000;

/// Capture margin: a photon at r ≤ 1.05·r_s (screen units) is considered
/// swallowed. The 5% hysteresis keeps the stepper from landing exactly on
/// the singular point.
pub const CAPTURE_MARGIN: f64 = 1.05;

/// Marker component identifying an entity as a simulated light ray.
///
/// Entities with this component have their [`PhotonState`] advanced by the
/// lensing physics system each tick.
#[derive(Component, Default)]
pub struct Photon;

/// One trail sample: a past position and its normalized age.
///
/// Age runs from 0.0 at the oldest retained sample to 1.0 at the newest;
/// the renderer maps it to alpha so trails fade out behind the ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailSample {
    /// Position in screen units (f32 is plenty for display geometry).
    pub position: Vec2,
    /// Normalized age in [0, 1], 1.0 = newest.
    pub age: f32,
}

/// Bounded FIFO history of a photon's past positions.
#[derive(Clone, Debug)]
pub struct Trail {
    samples: VecDeque<TrailSample>,
    max_len: usize,
}

impl Trail {
    /// Create an empty trail retaining at most `max_len` samples.
    pub fn new(max_len: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(max_len.min(DEFAULT_MAX_TRAIL_LEN) + 1),
            max_len,
        }
    }

    /// Append a sample at full age, evict the oldest when over the bound,
    /// and renormalize every sample's age to `index / (len - 1)`.
    pub fn push(&mut self, position: Vec2) {
        self.samples.push_back(TrailSample { position, age: 1.0 });
        if self.samples.len() > self.max_len {
            self.samples.pop_front();
        }
        self.renormalize_ages();
    }

    fn renormalize_ages(&mut self) {
        let len = self.samples.len();
        if len > 1 {
            for (i, sample) in self.samples.iter_mut().enumerate() {
                sample.age = i as f32 / (len - 1) as f32;
            }
        }
    }

    /// Number of retained samples. Never exceeds the configured bound.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum number of retained samples.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Samples in order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TrailSample> {
        self.samples.iter()
    }

    /// Oldest retained sample, if any.
    pub fn oldest(&self) -> Option<&TrailSample> {
        self.samples.front()
    }

    /// Newest sample, if any.
    pub fn newest(&self) -> Option<&TrailSample> {
        self.samples.back()
    }
}

/// Evolving state of one light ray.
///
/// The polar fields (`r`, `phi`, `dr`, `dphi`) are the integrated state;
/// `position` and `direction` are re-derived from them after every step for
/// the renderer. `e` is the conserved energy constant of the null geodesic,
/// set at creation and never recomputed.
#[derive(Component, Clone, Debug)]
pub struct PhotonState {
    /// Polar radius in the orbital plane (screen units), r ≥ 0.
    pub r: f64,
    /// Polar angle, wrapped implicitly by trigonometric use.
    pub phi: f64,
    /// dr/dλ.
    pub dr: f64,
    /// dphi/dλ.
    pub dphi: f64,
    /// Conserved energy constant E of the null geodesic.
    pub e: f64,
    /// Cartesian position derived from (r, phi).
    pub position: DVec2,
    /// Direction derived from the polar velocities, renormalized to the
    /// configured speed when non-zero.
    pub direction: DVec2,
    /// True once the ray has crossed the capture threshold. Terminal.
    pub captured: bool,
    /// Bounded history of past positions.
    pub trail: Trail,
}

impl PhotonState {
    /// Create a photon from an initial position and direction (screen
    /// units), with the default trail bound.
    pub fn new(position: DVec2, direction: DVec2) -> Self {
        Self::with_trail_bound(position, direction, DEFAULT_MAX_TRAIL_LEN)
    }

    /// Create a photon with an explicit trail bound.
    ///
    /// The 2D position/direction are converted once to polar state:
    /// radial and tangential velocity components are projections of the
    /// direction onto the local polar basis at the spawn point.
    pub fn with_trail_bound(position: DVec2, direction: DVec2, max_trail_len: usize) -> Self {
        let r = position.length();
        let phi = position.y.atan2(position.x);
        let (sin_phi, cos_phi) = phi.sin_cos();

        let dr = direction.x * cos_phi + direction.y * sin_phi;
        // A spawn exactly at the origin has no tangential basis; leave
        // dphi at zero instead of dividing by r = 0.
        let dphi = if r > 0.0 {
            (-direction.x * sin_phi + direction.y * cos_phi) / r
        } else {
            0.0
        };

        let mut trail = Trail::new(max_trail_len);
        trail.push(position.as_vec2());

        Self {
            r,
            phi,
            dr,
            dphi,
            e: 1.0,
            position,
            direction,
            captured: false,
            trail,
        }
    }

    /// Advance this photon by one tick.
    ///
    /// Recomputes r from the last Cartesian position, applies the capture
    /// stop rule, integrates one RK4 step of `d_lambda`, re-derives the
    /// Cartesian position and direction, and appends a trail sample.
    /// A captured photon is terminal: the call is a no-op.
    pub fn step(&mut self, d_lambda: f64, rs_meters: f64, scale: &UnitScale, speed: f64) {
        if self.captured {
            return;
        }

        // Stay consistent with the post-step Cartesian derivation
        self.r = self.position.length();

        let rs_screen = scale.schwarzschild_screen_radius(rs_meters);
        if self.r <= rs_screen * CAPTURE_MARGIN {
            self.captured = true;
            return;
        }

        let e = self.e;
        let y = rk4_step(
            [self.r, self.phi, self.dr, self.dphi],
            d_lambda,
            |state| geodesic_rhs(state, e, rs_screen),
        );
        // r is a radius; never step below zero
        self.r = y[0].max(0.0);
        self.phi = y[1];
        self.dr = y[2];
        self.dphi = y[3];

        let (sin_phi, cos_phi) = self.phi.sin_cos();
        self.position = DVec2::new(self.r * cos_phi, self.r * sin_phi);

        self.direction = DVec2::new(
            self.dr * cos_phi - self.r * sin_phi * self.dphi,
            self.dr * sin_phi + self.r * cos_phi * self.dphi,
        );
        if self.direction.length_squared() > 0.0 {
            self.direction = self.direction.normalize() * speed;
        }

        self.trail.push(self.position.as_vec2());
    }
}

/// Spawn a single photon entity.
pub fn spawn_photon(
    commands: &mut Commands,
    max_trail_len: usize,
    position: DVec2,
    direction: DVec2,
) -> Entity {
    commands
        .spawn((
            Photon,
            PhotonState::with_trail_bound(position, direction, max_trail_len),
        ))
        .id()
}

/// Spawn N photon entities from (initial position, initial direction)
/// pairs in screen units.
///
/// This is the construction entry point the presentation layer calls with
/// its launch configuration.
pub fn spawn_photons(
    commands: &mut Commands,
    max_trail_len: usize,
    rays: &[(DVec2, DVec2)],
) -> Vec<Entity> {
    info!("Spawning {} photons", rays.len());
    rays.iter()
        .map(|&(position, direction)| spawn_photon(commands, max_trail_len, position, direction))
        .collect()
}
