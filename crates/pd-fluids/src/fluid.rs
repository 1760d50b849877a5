//! Surrounding fluid definitions.

use crate::error::FluidError;
use pd_core::units::{Density, DynVisc, KinVisc, kgpm3, m2ps, pa_s};

const AIR_RHO: f64 = 1.205;
const AIR_MU: f64 = 1.822e-5;
const WATER_RHO: f64 = 998.203;
const WATER_MU: f64 = 1.004e-3;

/// Fluid the pendulum swings through.
///
/// The set is closed: hosts that select fluids by integer index go through
/// `TryFrom<i32>`, which rejects anything outside `0 = Air, 1 = Water`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Fluid {
    /// Air at room temperature
    #[default]
    Air,
    /// Water at room temperature
    Water,
}

impl Fluid {
    pub const ALL: [Fluid; 2] = [Fluid::Air, Fluid::Water];

    pub fn key(&self) -> &'static str {
        match self {
            Fluid::Air => "air",
            Fluid::Water => "water",
        }
    }

    /// Host-facing selector index.
    pub fn index(&self) -> i32 {
        match self {
            Fluid::Air => 0,
            Fluid::Water => 1,
        }
    }

    /// Density [kg/m³].
    pub fn density(&self) -> Density {
        match self {
            Fluid::Air => kgpm3(AIR_RHO),
            Fluid::Water => kgpm3(WATER_RHO),
        }
    }

    /// Dynamic viscosity μ [Pa·s].
    pub fn dynamic_viscosity(&self) -> DynVisc {
        match self {
            Fluid::Air => pa_s(AIR_MU),
            Fluid::Water => pa_s(WATER_MU),
        }
    }

    /// Kinematic viscosity ν = μ/ρ [m²/s].
    pub fn kinematic_viscosity(&self) -> KinVisc {
        m2ps(self.dynamic_viscosity().value / self.density().value)
    }
}

impl std::fmt::Display for Fluid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl TryFrom<i32> for Fluid {
    type Error = FluidError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Fluid::Air),
            1 => Ok(Fluid::Water),
            _ => Err(FluidError::UnknownFluid { index }),
        }
    }
}

impl std::str::FromStr for Fluid {
    type Err = FluidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AIR" => Ok(Fluid::Air),
            "WATER" | "H2O" => Ok(Fluid::Water),
            _ => Err(FluidError::UnknownName {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pd_core::{Tolerances, nearly_equal};

    #[test]
    fn index_round_trip() {
        for fluid in Fluid::ALL {
            assert_eq!(Fluid::try_from(fluid.index()).unwrap(), fluid);
        }
    }

    #[test]
    fn out_of_range_index_rejected() {
        assert_eq!(
            Fluid::try_from(2),
            Err(FluidError::UnknownFluid { index: 2 })
        );
        assert!(Fluid::try_from(-1).is_err());
    }

    #[test]
    fn parse_names() {
        assert_eq!("Air".parse::<Fluid>().unwrap(), Fluid::Air);
        assert_eq!(" water ".parse::<Fluid>().unwrap(), Fluid::Water);
        assert!("oil".parse::<Fluid>().is_err());
    }

    #[test]
    fn water_is_denser_and_more_viscous() {
        assert!(Fluid::Water.density().value > Fluid::Air.density().value);
        assert!(Fluid::Water.dynamic_viscosity().value > Fluid::Air.dynamic_viscosity().value);
    }

    #[test]
    fn kinematic_viscosity_of_air() {
        let nu = Fluid::Air.kinematic_viscosity().value;
        assert!(nearly_equal(nu, 1.822e-5 / 1.205, Tolerances::default()));
    }

    #[test]
    fn default_is_air() {
        assert_eq!(Fluid::default(), Fluid::Air);
    }
}
