//! Fixed-step time integrators for the pendulum phase.

use crate::eom::EquationOfMotion;
use crate::state::PhaseState;

/// Trait for time integrators.
pub trait Integrator {
    fn name(&self) -> &'static str;

    /// Advance the phase by one step of length `dt`.
    fn step(&self, eom: &EquationOfMotion, x: PhaseState, dt: f64) -> PhaseState;
}

/// Semi-implicit (symplectic) Euler.
///
/// ω is kicked by the restoring term at the current θ, then drag is applied
/// implicitly, then θ moves with the updated ω. This is the scheme the engine
/// uses for every frame step; the implicit drag keeps it dissipative however
/// stiff the drag is relative to the step.
#[derive(Clone, Copy, Debug, Default)]
pub struct SemiImplicitEuler;

impl Integrator for SemiImplicitEuler {
    fn name(&self) -> &'static str {
        "semi-implicit-euler"
    }

    fn step(&self, eom: &EquationOfMotion, x: PhaseState, dt: f64) -> PhaseState {
        let kicked = x.omega + dt * eom.restoring_acceleration(x.theta);
        let omega = eom.damp(kicked, dt);
        let theta = x.theta + dt * omega;
        PhaseState::new(theta, omega)
    }
}

/// Forward Euler (explicit, 1st order). Both updates use the pre-step state.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn name(&self) -> &'static str {
        "forward-euler"
    }

    fn step(&self, eom: &EquationOfMotion, x: PhaseState, dt: f64) -> PhaseState {
        x.add(eom.rhs(x).scale(dt))
    }
}

/// Classical RK4 (Runge-Kutta 4th order) integrator.
#[derive(Clone, Copy, Debug, Default)]
pub struct RK4;

impl Integrator for RK4 {
    fn name(&self) -> &'static str {
        "rk4"
    }

    fn step(&self, eom: &EquationOfMotion, x: PhaseState, dt: f64) -> PhaseState {
        let k1 = eom.rhs(x);
        let k2 = eom.rhs(x.add(k1.scale(0.5 * dt)));
        let k3 = eom.rhs(x.add(k2.scale(0.5 * dt)));
        let k4 = eom.rhs(x.add(k3.scale(dt)));

        // Combine: x_new = x + (dt/6) * (k1 + 2*k2 + 2*k3 + k4)
        let k_sum = k1.add(k2.scale(2.0)).add(k3.scale(2.0)).add(k4);
        x.add(k_sum.scale(dt / 6.0))
    }
}
