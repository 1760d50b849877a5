//! Equation of motion for the pendulum angle.
//!
//! `α(θ, ω) = -(g/L)·S(θ) - D(ω)/(m·L)` where `S(θ)` is `sin θ` or `θ`
//! and `D` is the drag force, zero when drag is off.

use crate::error::SimResult;
use crate::state::{Modes, PendulumParams, PendulumState, PhaseState};
use pd_fluids::DragModel;

/// Coefficients shared by every variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gravitational {
    /// g / L [1/s²]
    pub g_over_l: f64,
}

/// Drag term coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Damping {
    pub drag: DragModel,
    /// m · L [kg·m]
    pub mass_length: f64,
}

impl Damping {
    fn acceleration(&self, omega: f64) -> f64 {
        self.drag.force(omega) / self.mass_length
    }

    /// Drag deceleration per unit angular velocity, `D(ω)/(m·L·ω)` [1/s].
    fn rate(&self, omega: f64) -> f64 {
        if omega == 0.0 {
            return 0.0;
        }
        (self.acceleration(omega) / omega).max(0.0)
    }
}

/// The four equations of motion selectable by the mode flags.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EquationOfMotion {
    /// Full nonlinear pendulum without drag.
    Exact(Gravitational),
    /// Linearized pendulum without drag.
    Harmonic(Gravitational),
    /// Full nonlinear pendulum in a fluid.
    ExactDamped(Gravitational, Damping),
    /// Linearized pendulum in a fluid.
    HarmonicDamped(Gravitational, Damping),
}

impl EquationOfMotion {
    /// Select the variant for the state's current modes.
    pub fn from_state(state: &PendulumState) -> SimResult<Self> {
        let params = state.params();
        let modes = state.modes();
        let drag = DragModel::new(
            modes.fluid,
            modes.drag_law,
            params.radius(),
            params.rope_length(),
        )?;
        Ok(Self::assemble(params, modes, drag))
    }

    /// Select the variant for `modes` around an already validated drag model.
    ///
    /// The model supplies the geometry; its fluid and law are taken from `modes`.
    pub fn assemble(params: &PendulumParams, modes: &Modes, drag: DragModel) -> Self {
        let gravitational = Gravitational {
            g_over_l: params.gravity() / params.rope_length(),
        };
        if !modes.drag_enabled {
            return if modes.simple_harmonic {
                EquationOfMotion::Harmonic(gravitational)
            } else {
                EquationOfMotion::Exact(gravitational)
            };
        }

        let damping = Damping {
            drag: drag.with_fluid(modes.fluid).with_law(modes.drag_law),
            mass_length: params.mass() * params.rope_length(),
        };
        if modes.simple_harmonic {
            EquationOfMotion::HarmonicDamped(gravitational, damping)
        } else {
            EquationOfMotion::ExactDamped(gravitational, damping)
        }
    }

    /// Restoring part of α, `-(g/L)·S(θ)` [rad/s²].
    pub fn restoring_acceleration(&self, theta: f64) -> f64 {
        match self {
            EquationOfMotion::Exact(g) | EquationOfMotion::ExactDamped(g, _) => {
                -g.g_over_l * theta.sin()
            }
            EquationOfMotion::Harmonic(g) | EquationOfMotion::HarmonicDamped(g, _) => {
                -g.g_over_l * theta
            }
        }
    }

    /// Apply drag implicitly over `dt`: `ω' = ω / (1 + dt·D(ω)/(m·L·ω))`.
    ///
    /// The result keeps the sign of `ω` and never exceeds it in magnitude,
    /// whatever the step size or drag stiffness.
    pub fn damp(&self, omega: f64, dt: f64) -> f64 {
        match self {
            EquationOfMotion::ExactDamped(_, d) | EquationOfMotion::HarmonicDamped(_, d) => {
                omega / (1.0 + dt * d.rate(omega))
            }
            EquationOfMotion::Exact(_) | EquationOfMotion::Harmonic(_) => omega,
        }
    }

    /// Angular acceleration α [rad/s²].
    pub fn angular_acceleration(&self, x: PhaseState) -> f64 {
        let restoring = self.restoring_acceleration(x.theta);
        match self {
            EquationOfMotion::ExactDamped(_, d) | EquationOfMotion::HarmonicDamped(_, d) => {
                restoring - d.acceleration(x.omega)
            }
            EquationOfMotion::Exact(_) | EquationOfMotion::Harmonic(_) => restoring,
        }
    }

    /// Time derivative of the phase, `(dθ/dt, dω/dt) = (ω, α)`.
    pub fn rhs(&self, x: PhaseState) -> PhaseState {
        PhaseState::new(x.omega, self.angular_acceleration(x))
    }

    pub fn is_damped(&self) -> bool {
        matches!(
            self,
            EquationOfMotion::ExactDamped(..) | EquationOfMotion::HarmonicDamped(..)
        )
    }

    pub fn is_linearized(&self) -> bool {
        matches!(
            self,
            EquationOfMotion::Harmonic(_) | EquationOfMotion::HarmonicDamped(..)
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            EquationOfMotion::Exact(_) => "exact",
            EquationOfMotion::Harmonic(_) => "harmonic",
            EquationOfMotion::ExactDamped(..) => "exact+drag",
            EquationOfMotion::HarmonicDamped(..) => "harmonic+drag",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pd_fluids::{DragLaw, Fluid};

    fn state_with(drag_enabled: bool, simple_harmonic: bool) -> PendulumState {
        let params = PendulumParams::new(1.0, 0.05).unwrap();
        let modes = Modes {
            drag_enabled,
            simple_harmonic,
            fluid: Fluid::Water,
            ..Modes::default()
        };
        PendulumState::new(params, modes, 0.3).unwrap()
    }

    #[test]
    fn flags_select_all_four_variants() {
        let cases = [
            (false, false, "exact"),
            (false, true, "harmonic"),
            (true, false, "exact+drag"),
            (true, true, "harmonic+drag"),
        ];
        for (drag, harmonic, name) in cases {
            let eom = EquationOfMotion::from_state(&state_with(drag, harmonic)).unwrap();
            assert_eq!(eom.name(), name);
            assert_eq!(eom.is_damped(), drag);
            assert_eq!(eom.is_linearized(), harmonic);
        }
    }

    #[test]
    fn restoring_term_uses_sine_or_angle() {
        let x = PhaseState::new(0.3, 0.0);
        let g_over_l = pd_core::units::constants::G0_MPS2;
        let exact = EquationOfMotion::from_state(&state_with(false, false)).unwrap();
        let harmonic = EquationOfMotion::from_state(&state_with(false, true)).unwrap();
        assert_eq!(exact.angular_acceleration(x), -g_over_l * 0.3_f64.sin());
        assert_eq!(harmonic.angular_acceleration(x), -g_over_l * 0.3);
    }

    #[test]
    fn drag_opposes_angular_velocity() {
        let damped = EquationOfMotion::from_state(&state_with(true, false)).unwrap();
        let free = EquationOfMotion::from_state(&state_with(false, false)).unwrap();
        let x = PhaseState::new(0.0, 2.0);
        assert_eq!(free.angular_acceleration(x), 0.0);
        assert!(damped.angular_acceleration(x) < 0.0);
        assert!(damped.angular_acceleration(PhaseState::new(0.0, -2.0)) > 0.0);
    }

    #[test]
    fn assemble_matches_from_state() {
        let state = state_with(true, false);
        let air = DragModel::new(Fluid::Air, DragLaw::Quadratic, 0.05, 1.0).unwrap();
        assert_eq!(
            EquationOfMotion::assemble(state.params(), state.modes(), air),
            EquationOfMotion::from_state(&state).unwrap()
        );
    }

    #[test]
    fn implicit_drag_shrinks_without_reversing() {
        let damped = EquationOfMotion::from_state(&state_with(true, false)).unwrap();
        for omega in [-50.0, -1.0, 0.5, 40.0] {
            for dt in [1.0e-4, 0.01, 1.0, 1.0e3] {
                let next = damped.damp(omega, dt);
                assert!(next * omega > 0.0, "omega {omega} dt {dt} -> {next}");
                assert!(next.abs() < omega.abs());
            }
        }
        assert_eq!(damped.damp(0.0, 0.01), 0.0);

        let free = EquationOfMotion::from_state(&state_with(false, false)).unwrap();
        assert_eq!(free.damp(3.0, 0.01), 3.0);
    }

    #[test]
    fn rhs_packs_omega_and_alpha() {
        let eom = EquationOfMotion::from_state(&state_with(false, true)).unwrap();
        let x = PhaseState::new(0.1, -0.4);
        let dx = eom.rhs(x);
        assert_eq!(dx.theta, -0.4);
        assert_eq!(dx.omega, eom.angular_acceleration(x));
    }
}
