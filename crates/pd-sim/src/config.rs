//! Serializable pendulum configuration.

use crate::error::SimResult;
use crate::pendulum::{DEFAULT_MAX_SUBSTEP, Pendulum};
use crate::state::{Modes, PendulumParams};
use pd_fluids::{DragLaw, Fluid};
use serde::{Deserialize, Serialize};

fn default_max_substep() -> f64 {
    DEFAULT_MAX_SUBSTEP
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PendulumConfig {
    pub rope_length_m: f64,
    pub radius_m: f64,
    #[serde(default)]
    pub resistance: bool,
    #[serde(default)]
    pub simple_harmonic: bool,
    pub theta0_rad: f64,
    #[serde(default)]
    pub fluid: Fluid,
    #[serde(default)]
    pub drag_law: DragLaw,
    #[serde(default = "default_max_substep")]
    pub max_substep_s: f64,
    /// Overrides the aluminium-sphere mass when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass_kg: Option<f64>,
}

impl Default for PendulumConfig {
    fn default() -> Self {
        Self {
            rope_length_m: 1.0,
            radius_m: 0.05,
            resistance: false,
            simple_harmonic: false,
            theta0_rad: 30.0_f64.to_radians(),
            fluid: Fluid::Air,
            drag_law: DragLaw::Quadratic,
            max_substep_s: DEFAULT_MAX_SUBSTEP,
            mass_kg: None,
        }
    }
}

impl PendulumConfig {
    /// Validate and build an engine at rest at `theta0_rad`.
    pub fn build(&self) -> SimResult<Pendulum> {
        let mut params = PendulumParams::new(self.rope_length_m, self.radius_m)?;
        if let Some(mass) = self.mass_kg {
            params = params.with_mass(mass)?;
        }
        let modes = Modes {
            drag_enabled: self.resistance,
            simple_harmonic: self.simple_harmonic,
            fluid: self.fluid,
            drag_law: self.drag_law,
        };
        Pendulum::from_parts(params, modes, self.theta0_rad)?.with_max_substep(self.max_substep_s)
    }
}
