//! Geodesic integration for photons around the mass source.
//!
//! This module owns the per-tick advance: every `FixedUpdate`, each live
//! photon takes one fixed RK4 step of the affine parameter against the
//! Schwarzschild null-geodesic model. No adaptive step control; the tick
//! rate itself comes from the external frame clock.

mod geodesic;
mod integrator;


use bevy::prelude::*;

pub use geodesic::{HORIZON_FREEZE_FACTOR, MIN_METRIC_FACTOR, StateVec, geodesic_rhs};
pub use integrator::rk4_step;

use crate::mass_source::MassSource;
use crate::photon::{DEFAULT_MAX_TRAIL_LEN, Photon, PhotonState};
use crate::scaling::UnitScale;
use crate::types::SimulationClock;

/// Configuration for photon stepping.
#[derive(Resource, Clone, Debug)]
pub struct LensingConfig {
    /// Affine-parameter step size per tick. Default: 0.01.
    pub d_lambda: f64,
    /// Magnitude the derived direction vector is renormalized to.
    /// Default: 1.0.
    pub photon_speed: f64,
    /// Maximum trail samples retained per photon. Default: 1000.
    pub max_trail_len: usize,
    /// Meters to screen-unit mapping.
    pub scale: UnitScale,
}

impl Default for LensingConfig {
    fn default() -> Self {
        Self {
            d_lambda: 0.01,
            photon_speed: 1.0,
            max_trail_len: DEFAULT_MAX_TRAIL_LEN,
            scale: UnitScale::default(),
        }
    }
}

/// Plugin providing geodesic integration for photons.
///
/// Adds the per-tick advance system in `FixedUpdate` along with default
/// [`LensingConfig`] and [`SimulationClock`] resources. The caller inserts
/// the [`MassSource`]; until one exists the system does nothing.
pub struct LensingPlugin;

impl Plugin for LensingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(LensingConfig::default())
            .insert_resource(SimulationClock::default())
            .add_systems(FixedUpdate, lensing_step);
    }
}

/// Main per-tick integration system.
///
/// Advances every non-captured photon by one step and records the affine
/// parameter on the simulation clock.
fn lensing_step(
    mut photons: Query<&mut PhotonState, With<Photon>>,
    source: Option<Res<MassSource>>,
    config: Res<LensingConfig>,
    mut clock: ResMut<SimulationClock>,
) {
    let Some(source) = source else {
        return;
    };
    if clock.paused {
        return;
    }

    advance_photons(
        photons.iter_mut().map(Mut::into_inner),
        config.d_lambda,
        source.schwarzschild_radius(),
        &config,
    );
    clock.advance(config.d_lambda);
}

/// Advance all non-captured photons by one step of `d_lambda`.
///
/// This is the per-tick advance entry point; the `FixedUpdate` system wraps
/// it, and headless callers (tests, offline trajectory dumps) drive it
/// directly. Photons are integrated sequentially and independently; no
/// photon's update reads another's state.
pub fn advance_photons<'a, I>(photons: I, d_lambda: f64, rs_meters: f64, config: &LensingConfig)
where
    I: IntoIterator<Item = &'a mut PhotonState>,
{
    for photon in photons {
        if photon.captured {
            continue;
        }
        photon.step(d_lambda, rs_meters, &config.scale, config.photon_speed);
        if photon.captured {
            info!(
                "Photon captured at r = {:.3} screen units (phi = {:.3})",
                photon.r, photon.phi
            );
        }
    }
}
