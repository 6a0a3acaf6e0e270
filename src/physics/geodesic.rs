//! Schwarzschild null-geodesic equations of motion.
//!
//! Spherical symmetry keeps every geodesic in a plane, so the photon state
//! is polar: `[r, phi, dr, dphi]` with derivatives taken against the affine
//! parameter λ. The metric's radial factor f = 1 − r_s/r diverges as 1/f at
//! the horizon; the right-hand side refuses to evolve state that close in
//! and returns zero instead.

/// Four-component polar photon state `[r, phi, dr/dλ, dphi/dλ]`.
pub type StateVec = [f64; 4];

/// Threshold multiplier below which the right-hand side freezes: no
/// derivatives are computed for r ≤ 1.01·r_s.
pub const HORIZON_FREEZE_FACTOR: f64 = 1.01;

/// Minimum metric factor f before the 1/f terms are considered divergent.
pub const MIN_METRIC_FACTOR: f64 = 1e-10;

/// Evaluate the geodesic right-hand side at a state.
///
/// Returns `[dr/dλ, dphi/dλ, d²r/dλ², d²phi/dλ²]` for a photon with
/// conserved energy constant `e` around a body of Schwarzschild radius
/// `rs` (same unit system as `y[0]`).
///
/// The horizon guard runs before f is computed, so the function is safe
/// to call for any r ≥ 0, including r = 0.
pub fn geodesic_rhs(y: StateVec, e: f64, rs: f64) -> StateVec {
    let [r, _phi, dr, dphi] = y;

    // Freeze state arbitrarily close to or inside the horizon
    if r <= rs * HORIZON_FREEZE_FACTOR {
        return [0.0; 4];
    }

    let f = 1.0 - rs / r;
    if f < MIN_METRIC_FACTOR {
        return [0.0; 4];
    }

    // dt/dλ from the conserved energy: E = f · dt/dλ
    let dt_dlambda = e / f;

    let d2r = -(rs / (2.0 * r * r)) * f * (dt_dlambda * dt_dlambda)
        + (rs / (2.0 * r * r * f)) * (dr * dr)
        + (r - rs) * (dphi * dphi);

    let d2phi = -2.0 * dr * dphi / r;

    [dr, dphi, d2r, d2phi]
}
