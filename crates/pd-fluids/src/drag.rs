//! Resistive force on a spherical bob moving through a fluid.
//!
//! The bob travels on a circle of radius `L`, so its linear speed is `L·ω`.
//! Every law here returns a force with the same sign as `ω`; the equation of
//! motion subtracts it, so drag always opposes the swing.

use crate::error::FluidResult;
use crate::fluid::Fluid;
use pd_core::units::{Area, m2};
use pd_core::{ensure_non_negative, ensure_positive};
use std::f64::consts::PI;

/// Drag coefficient of a smooth sphere in the Newton regime.
pub const SPHERE_DRAG_COEFFICIENT: f64 = 0.47;

/// Below this Reynolds number only Stokes (viscous) drag is applied.
pub const STOKES_REYNOLDS_THRESHOLD: f64 = 0.1;

/// Upper bound of the Cheng correlation; Almedeij is used above it.
const CHENG_REYNOLDS_LIMIT: f64 = 3000.0;

/// Functional form of the drag force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DragLaw {
    /// `D(ω) = k·ω·|ω|` with a constant sphere drag coefficient.
    #[default]
    Quadratic,
    /// Stokes viscous drag plus inertial drag with a Reynolds-dependent coefficient.
    Reynolds,
}

impl std::str::FromStr for DragLaw {
    type Err = crate::FluidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quadratic" => Ok(DragLaw::Quadratic),
            "reynolds" => Ok(DragLaw::Reynolds),
            _ => Err(crate::FluidError::InvalidArg {
                what: "drag law must be 'quadratic' or 'reynolds'",
            }),
        }
    }
}

/// Reynolds number of a sphere of radius `radius` moving at `speed` through `fluid`.
pub fn reynolds_number(fluid: Fluid, radius: f64, speed: f64) -> f64 {
    2.0 * radius * speed.abs() / fluid.kinematic_viscosity().value
}

/// Sphere drag coefficient as a function of Reynolds number.
///
/// Cheng (2009) for `Re <= 3000`, Almedeij (2008) above. `re` must be positive.
pub fn sphere_drag_coefficient(re: f64) -> f64 {
    if re <= CHENG_REYNOLDS_LIMIT {
        return 24.0 / re * (1.0 + 0.27 * re).powf(0.43)
            + 0.47 * (1.0 - (-0.04 * re.powf(0.38)).exp());
    }

    let phi1 = (24.0 / re).powi(10)
        + (21.0 * re.powf(-0.67)).powi(10)
        + (4.0 * re.powf(-0.33)).powi(10)
        + 0.4_f64.powi(10);
    let phi2 = 1.0 / (1.0 / (0.148 * re.powf(0.11)).powi(10) + 1.0 / 0.5_f64.powi(10));
    let phi3 = (1.57e8 * re.powf(-1.625)).powi(10);
    let phi4 = 1.0 / (1.0 / (6.0e-17 * re.powf(2.63)).powi(10) + 1.0 / 0.2_f64.powi(10));

    (1.0 / (1.0 / (phi1 + phi2) + 1.0 / phi3) + phi4).powf(0.1)
}

/// Drag acting on a sphere of a given radius at the end of a rope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragModel {
    fluid: Fluid,
    law: DragLaw,
    radius: f64,
    rope_length: f64,
}

impl DragModel {
    /// Build a drag model.
    ///
    /// `radius` may be zero (no cross-section, no drag); `rope_length` must be positive.
    pub fn new(fluid: Fluid, law: DragLaw, radius: f64, rope_length: f64) -> FluidResult<Self> {
        let radius = ensure_non_negative(radius, "bob radius")?;
        let rope_length = ensure_positive(rope_length, "rope length")?;
        Ok(Self {
            fluid,
            law,
            radius,
            rope_length,
        })
    }

    /// Same geometry in another fluid.
    pub fn with_fluid(mut self, fluid: Fluid) -> Self {
        self.fluid = fluid;
        self
    }

    /// Same geometry under another drag law.
    pub fn with_law(mut self, law: DragLaw) -> Self {
        self.law = law;
        self
    }

    pub fn fluid(&self) -> Fluid {
        self.fluid
    }

    pub fn law(&self) -> DragLaw {
        self.law
    }

    /// Frontal (cross-sectional) area π·r².
    pub fn frontal_area(&self) -> Area {
        m2(PI * self.radius * self.radius)
    }

    /// Coefficient `k` of the quadratic law, `½·ρ·C_D·π r²·L²`.
    pub fn quadratic_coefficient(&self) -> f64 {
        0.5 * self.fluid.density().value
            * SPHERE_DRAG_COEFFICIENT
            * self.frontal_area().value
            * self.rope_length
            * self.rope_length
    }

    /// Drag force [N] for angular velocity `omega` [rad/s], signed like `omega`.
    pub fn force(&self, omega: f64) -> f64 {
        match self.law {
            DragLaw::Quadratic => self.quadratic_coefficient() * omega * omega.abs(),
            DragLaw::Reynolds => self.reynolds_force(omega),
        }
    }

    fn reynolds_force(&self, omega: f64) -> f64 {
        let speed = self.rope_length * omega;
        let re = reynolds_number(self.fluid, self.radius, speed);
        let viscous =
            6.0 * PI * self.fluid.dynamic_viscosity().value * self.radius * speed;

        if re < STOKES_REYNOLDS_THRESHOLD {
            return viscous;
        }

        let inertial = 0.5
            * self.fluid.density().value
            * PI
            * (self.radius * speed).powi(2)
            * sphere_drag_coefficient(re);
        viscous + inertial.copysign(omega)
    }
}
