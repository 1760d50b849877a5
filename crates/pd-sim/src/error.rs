//! Error types for pendulum simulation.

use pd_core::PdError;
use pd_fluids::FluidError;
use thiserror::Error;

/// Errors raised by the engine, the trajectory runner and CSV export.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Value out of range for {what}: {value}")]
    OutOfRange { what: &'static str, value: f64 },

    #[error("Non-physical condition: {what}")]
    NonPhysical { what: &'static str },

    #[error("Fluid error: {0}")]
    Fluid(#[from] FluidError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;

impl From<PdError> for SimError {
    fn from(e: PdError) -> Self {
        match e {
            PdError::NonFinite { what, value } => SimError::NonFinite { what, value },
            PdError::OutOfRange { what, value } => SimError::OutOfRange { what, value },
            PdError::InvalidArg { what } => SimError::InvalidArg { what },
        }
    }
}
