//! Fixed-step classical Runge–Kutta integration.
//!
//! The stepper is generic over the right-hand side so the geodesic model
//! stays a pure function of the state vector. No adaptive step control:
//! the caller supplies dλ and it is honored exactly.

use super::geodesic::StateVec;

/// `a + b·factor`, componentwise. Builds the intermediate stage states.
fn add_scaled(a: StateVec, b: StateVec, factor: f64) -> StateVec {
    [
        a[0] + b[0] * factor,
        a[1] + b[1] * factor,
        a[2] + b[2] * factor,
        a[3] + b[3] * factor,
    ]
}

/// Advance a state vector by one classical RK4 step of size `d_lambda`.
///
/// Evaluates the right-hand side at four stages (current state, two
/// half-step predictions, one full-step prediction) and combines them
/// with the 1/6·(k1 + 2k2 + 2k3 + k4) weights. The stage vectors are
/// per-call scratch; nothing is retained between invocations.
pub fn rk4_step<F>(y: StateVec, d_lambda: f64, rhs: F) -> StateVec
where
    F: Fn(StateVec) -> StateVec,
{
    let k1 = rhs(y);
    let k2 = rhs(add_scaled(y, k1, d_lambda / 2.0));
    let k3 = rhs(add_scaled(y, k2, d_lambda / 2.0));
    let k4 = rhs(add_scaled(y, k3, d_lambda));

    let mut out = y;
    for i in 0..4 {
        out[i] += (d_lambda / 6.0) * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]);
    }
    out
}
