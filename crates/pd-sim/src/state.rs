//! Physical configuration and phase of the pendulum.

use crate::error::SimResult;
use pd_core::units::constants::{ALUMINIUM_RHO_KGPM3, G0_MPS2};
use pd_core::{ensure_finite, ensure_non_negative, ensure_positive};
use pd_fluids::{DragLaw, Fluid};
use std::f64::consts::PI;

/// Angle and angular velocity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhaseState {
    /// Angular displacement from the downward vertical [rad], never wrapped.
    pub theta: f64,
    /// Angular velocity [rad/s].
    pub omega: f64,
}

impl PhaseState {
    pub const fn new(theta: f64, omega: f64) -> Self {
        Self { theta, omega }
    }

    /// Element-wise sum.
    pub fn add(self, other: Self) -> Self {
        Self::new(self.theta + other.theta, self.omega + other.omega)
    }

    /// Multiply both components by `k`.
    pub fn scale(self, k: f64) -> Self {
        Self::new(self.theta * k, self.omega * k)
    }

    pub fn is_finite(&self) -> bool {
        self.theta.is_finite() && self.omega.is_finite()
    }
}

/// Session-constant physical parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendulumParams {
    rope_length: f64,
    radius: f64,
    mass: f64,
    gravity: f64,
}

impl PendulumParams {
    /// Solid aluminium bob of the given radius on a rope of the given length.
    ///
    /// A zero radius gives a 1 kg point mass with no cross-section. A radius
    /// so small that the derived mass underflows to zero is rejected.
    pub fn new(rope_length: f64, radius: f64) -> SimResult<Self> {
        let rope_length = ensure_positive(rope_length, "rope length")?;
        let radius = ensure_non_negative(radius, "bob radius")?;
        let mass = ensure_positive(sphere_mass(radius), "bob mass")?;
        Ok(Self {
            rope_length,
            radius,
            mass,
            gravity: G0_MPS2,
        })
    }

    /// Override the bob mass [kg].
    pub fn with_mass(mut self, mass: f64) -> SimResult<Self> {
        self.mass = ensure_positive(mass, "bob mass")?;
        Ok(self)
    }

    /// Override the gravitational acceleration [m/s²].
    pub fn with_gravity(mut self, gravity: f64) -> SimResult<Self> {
        self.gravity = ensure_positive(gravity, "gravity")?;
        Ok(self)
    }

    /// Rope length L [m].
    pub fn rope_length(&self) -> f64 {
        self.rope_length
    }

    /// Bob radius r [m].
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Bob mass m [kg].
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Gravitational acceleration g [m/s²].
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Natural angular frequency of the linearized pendulum, sqrt(g/L).
    pub fn natural_frequency(&self) -> f64 {
        (self.gravity / self.rope_length).sqrt()
    }
}

fn sphere_mass(radius: f64) -> f64 {
    if radius > 0.0 {
        4.0 / 3.0 * PI * radius.powi(3) * ALUMINIUM_RHO_KGPM3
    } else {
        1.0
    }
}

/// Which equation of motion the integrator uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modes {
    /// Include the fluid drag term.
    pub drag_enabled: bool,
    /// Replace sin θ with θ.
    pub simple_harmonic: bool,
    /// Fluid used for drag constants; ignored while drag is off.
    pub fluid: Fluid,
    /// Functional form of the drag force.
    pub drag_law: DragLaw,
}

/// Complete pendulum state: parameters, mode flags and phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendulumState {
    params: PendulumParams,
    modes: Modes,
    phase: PhaseState,
}

impl PendulumState {
    /// New state at rest at angle `theta0`.
    pub fn new(params: PendulumParams, modes: Modes, theta0: f64) -> SimResult<Self> {
        let theta0 = ensure_finite(theta0, "initial theta")?;
        Ok(Self {
            params,
            modes,
            phase: PhaseState::new(theta0, 0.0),
        })
    }

    pub fn params(&self) -> &PendulumParams {
        &self.params
    }

    pub fn modes(&self) -> &Modes {
        &self.modes
    }

    pub fn phase(&self) -> PhaseState {
        self.phase
    }

    pub fn theta(&self) -> f64 {
        self.phase.theta
    }

    pub fn omega(&self) -> f64 {
        self.phase.omega
    }

    /// Overwrite θ. Any finite value is legal.
    pub fn set_theta(&mut self, theta: f64) -> SimResult<()> {
        self.phase.theta = ensure_finite(theta, "theta")?;
        Ok(())
    }

    /// Overwrite ω. Any finite value is legal.
    pub fn set_omega(&mut self, omega: f64) -> SimResult<()> {
        self.phase.omega = ensure_finite(omega, "omega")?;
        Ok(())
    }

    pub fn set_drag_enabled(&mut self, enabled: bool) {
        self.modes.drag_enabled = enabled;
    }

    pub fn set_simple_harmonic(&mut self, enabled: bool) {
        self.modes.simple_harmonic = enabled;
    }

    pub fn set_fluid(&mut self, fluid: Fluid) {
        self.modes.fluid = fluid;
    }

    pub fn set_drag_law(&mut self, law: DragLaw) {
        self.modes.drag_law = law;
    }

    pub(crate) fn set_phase(&mut self, phase: PhaseState) {
        self.phase = phase;
    }
}
