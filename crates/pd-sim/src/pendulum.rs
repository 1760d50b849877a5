//! The pendulum engine: state + equation of motion + stepping.
//!
//! A host calls [`Pendulum::init`] once (or builds with [`Pendulum::new`]),
//! then [`Pendulum::next_step`] once per frame with the elapsed time. Setters
//! may be called at any time; mode setters take effect on the next step.

use crate::energy;
use crate::eom::EquationOfMotion;
use crate::error::{SimError, SimResult};
use crate::integrator::{Integrator, SemiImplicitEuler};
use crate::state::{Modes, PendulumParams, PendulumState, PhaseState};
use pd_core::ensure_positive;
use pd_fluids::{DragLaw, DragModel, Fluid};
use tracing::{debug, trace, warn};

/// Longest single integration step [s]; longer frames are split evenly.
pub const DEFAULT_MAX_SUBSTEP: f64 = 0.01;

/// Refuse frames that would need more substeps than this.
const MAX_SUBSTEPS_PER_CALL: f64 = 1.0e6;

/// A single pendulum and the frame stepper that advances it.
///
/// Owns the validated parameters, the mode flags and the phase. The equation
/// of motion is rebuilt whenever a mode changes, so stepping never has to
/// look at the flags.
#[derive(Clone, Debug)]
pub struct Pendulum {
    state: PendulumState,
    /// Drag geometry validated at init; mode changes only swap fluid and law.
    drag: DragModel,
    eom: EquationOfMotion,
    max_substep: f64,
}

impl Pendulum {
    /// Build an engine at rest at `theta0`, in air, with quadratic drag.
    pub fn new(
        rope_length: f64,
        radius: f64,
        resistance: bool,
        simple_harmonic: bool,
        theta0: f64,
    ) -> SimResult<Self> {
        let params = PendulumParams::new(rope_length, radius)?;
        let modes = Modes {
            drag_enabled: resistance,
            simple_harmonic,
            ..Modes::default()
        };
        Self::from_parts(params, modes, theta0)
    }

    /// Build an engine from explicit parameters and modes, at rest at `theta0`.
    pub fn from_parts(params: PendulumParams, modes: Modes, theta0: f64) -> SimResult<Self> {
        let state = PendulumState::new(params, modes, theta0)?;
        let drag = DragModel::new(
            modes.fluid,
            modes.drag_law,
            params.radius(),
            params.rope_length(),
        )?;
        let eom = EquationOfMotion::assemble(&params, &modes, drag);
        debug!(
            rope_length = params.rope_length(),
            radius = params.radius(),
            mass = params.mass(),
            theta0,
            eom = eom.name(),
            "pendulum initialized"
        );
        Ok(Self {
            state,
            drag,
            eom,
            max_substep: DEFAULT_MAX_SUBSTEP,
        })
    }

    /// Set the longest single integration step [s].
    pub fn with_max_substep(mut self, max_substep: f64) -> SimResult<Self> {
        self.set_max_substep(max_substep)?;
        Ok(self)
    }

    pub fn set_max_substep(&mut self, max_substep: f64) -> SimResult<()> {
        self.max_substep = ensure_positive(max_substep, "max substep")?;
        Ok(())
    }

    pub fn max_substep(&self) -> f64 {
        self.max_substep
    }

    /// Reseed the whole state: ω = 0, fluid = air.
    ///
    /// Inputs are validated before anything is written; on error the previous
    /// state is left intact. The drag law and max substep are engine settings
    /// and survive a reseed.
    pub fn init(
        &mut self,
        rope_length: f64,
        radius: f64,
        resistance: bool,
        simple_harmonic: bool,
        theta0: f64,
    ) -> SimResult<()> {
        let params = PendulumParams::new(rope_length, radius)?;
        let modes = Modes {
            drag_enabled: resistance,
            simple_harmonic,
            fluid: Fluid::Air,
            drag_law: self.state.modes().drag_law,
        };
        let fresh = Self::from_parts(params, modes, theta0)?;
        self.state = fresh.state;
        self.drag = fresh.drag;
        self.eom = fresh.eom;
        Ok(())
    }

    /// Advance by `dt` seconds with semi-implicit Euler and return the new θ.
    ///
    /// `dt == 0` is a no-op. Negative or non-finite `dt` is rejected without
    /// touching the state.
    pub fn next_step(&mut self, dt: f64) -> SimResult<f64> {
        self.advance_with(&SemiImplicitEuler, dt)
    }

    /// Advance by `dt` with an arbitrary integrator, splitting into equal substeps.
    pub fn advance_with<I: Integrator>(&mut self, integrator: &I, dt: f64) -> SimResult<f64> {
        if !dt.is_finite() {
            warn!(dt, "rejected non-finite time step");
            return Err(SimError::NonFinite {
                what: "time step",
                value: dt,
            });
        }
        if dt < 0.0 {
            warn!(dt, "rejected negative time step");
            return Err(SimError::OutOfRange {
                what: "time step",
                value: dt,
            });
        }
        if dt == 0.0 {
            return Ok(self.state.theta());
        }

        let substeps = (dt / self.max_substep).ceil().max(1.0);
        if substeps > MAX_SUBSTEPS_PER_CALL {
            warn!(dt, max_substep = self.max_substep, "rejected oversized time step");
            return Err(SimError::InvalidArg {
                what: "time step needs too many substeps",
            });
        }
        let substeps = substeps as usize;
        let h = dt / substeps as f64;

        let mut x = self.state.phase();
        for _ in 0..substeps {
            x = integrator.step(&self.eom, x, h);
        }
        if !x.is_finite() {
            warn!(dt, "step produced a non-finite state; state left unchanged");
            return Err(SimError::NonPhysical {
                what: "integration produced a non-finite state",
            });
        }

        self.state.set_phase(x);
        trace!(
            dt,
            substeps,
            integrator = integrator.name(),
            theta = x.theta,
            omega = x.omega,
            "step"
        );
        Ok(x.theta)
    }

    /// Current angle θ [rad].
    pub fn theta(&self) -> f64 {
        self.state.theta()
    }

    /// Current angular velocity ω [rad/s].
    pub fn omega(&self) -> f64 {
        self.state.omega()
    }

    pub fn phase(&self) -> PhaseState {
        self.state.phase()
    }

    pub fn set_theta(&mut self, theta: f64) -> SimResult<()> {
        self.state.set_theta(theta)
    }

    pub fn set_omega(&mut self, omega: f64) -> SimResult<()> {
        self.state.set_omega(omega)
    }

    /// Toggle the drag term.
    pub fn set_resistance(&mut self, enabled: bool) {
        self.state.set_drag_enabled(enabled);
        debug!(enabled, "drag toggled");
        self.rebuild_eom();
    }

    /// Toggle the sin θ ≈ θ linearization.
    pub fn set_simple_harmonic(&mut self, enabled: bool) {
        self.state.set_simple_harmonic(enabled);
        debug!(enabled, "simple harmonic toggled");
        self.rebuild_eom();
    }

    pub fn set_fluid(&mut self, fluid: Fluid) {
        self.state.set_fluid(fluid);
        debug!(%fluid, "fluid selected");
        self.rebuild_eom();
    }

    /// Select the fluid by host index (0 = air, 1 = water).
    ///
    /// Any other index is rejected and the current fluid is kept.
    pub fn set_fluid_index(&mut self, index: i32) -> SimResult<()> {
        let fluid = Fluid::try_from(index).inspect_err(|_| {
            warn!(index, "rejected unknown fluid index");
        })?;
        self.set_fluid(fluid);
        Ok(())
    }

    pub fn set_drag_law(&mut self, law: DragLaw) {
        self.state.set_drag_law(law);
        debug!(?law, "drag law selected");
        self.rebuild_eom();
    }

    /// Kinetic energy [J] of the current state.
    pub fn kinetic_energy(&self) -> f64 {
        energy::kinetic_energy(self.state.params(), self.state.phase())
    }

    /// Potential energy [J] of the current state, zero at θ = 0.
    pub fn potential_energy(&self) -> f64 {
        energy::potential_energy(self.state.params(), self.state.phase())
    }

    pub fn total_energy(&self) -> f64 {
        energy::total_energy(self.state.params(), self.state.phase())
    }

    /// Signed tangential speed of the bob, L·ω [m/s].
    pub fn bob_speed(&self) -> f64 {
        self.state.params().rope_length() * self.state.omega()
    }

    pub fn state(&self) -> &PendulumState {
        &self.state
    }

    pub fn params(&self) -> &PendulumParams {
        self.state.params()
    }

    pub fn modes(&self) -> &Modes {
        self.state.modes()
    }

    pub fn eom(&self) -> &EquationOfMotion {
        &self.eom
    }

    fn rebuild_eom(&mut self) {
        self.eom = EquationOfMotion::assemble(self.state.params(), self.state.modes(), self.drag);
    }
}
