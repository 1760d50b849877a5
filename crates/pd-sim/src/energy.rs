//! Mechanical energy of the bob, treated as a point mass on a massless rope.

use crate::state::{PendulumParams, PhaseState};

/// KE = ½·m·(L·ω)² [J]
pub fn kinetic_energy(params: &PendulumParams, x: PhaseState) -> f64 {
    let speed = params.rope_length() * x.omega;
    0.5 * params.mass() * speed * speed
}

/// PE = m·g·L·(1 − cos θ) [J], zero at the bottom of the swing.
///
/// Evaluated as `2·sin²(θ/2)` so small nonzero angles stay strictly positive.
pub fn potential_energy(params: &PendulumParams, x: PhaseState) -> f64 {
    let half = (0.5 * x.theta).sin();
    params.mass() * params.gravity() * params.rope_length() * 2.0 * half * half
}

/// KE + PE [J]
pub fn total_energy(params: &PendulumParams, x: PhaseState) -> f64 {
    kinetic_energy(params, x) + potential_energy(params, x)
}
