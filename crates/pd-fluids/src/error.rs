//! Fluid and drag errors.

use pd_core::PdError;
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur while selecting a fluid or building a drag model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Host passed a fluid index outside the closed set.
    #[error("Unknown fluid index {index} (expected 0 = air, 1 = water)")]
    UnknownFluid { index: i32 },

    /// Fluid name did not match any known fluid.
    #[error("Unknown fluid name: {name}")]
    UnknownName { name: String },

    /// Non-physical geometry or state (negative radius, NaN, ...).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

impl From<PdError> for FluidError {
    fn from(err: PdError) -> Self {
        match err {
            PdError::NonFinite { what, .. } | PdError::OutOfRange { what, .. } => {
                FluidError::NonPhysical { what }
            }
            PdError::InvalidArg { what } => FluidError::InvalidArg { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FluidError::UnknownFluid { index: 7 };
        assert!(err.to_string().contains('7'));

        let err = FluidError::UnknownName {
            name: "honey".into(),
        };
        assert!(err.to_string().contains("honey"));
    }

    #[test]
    fn core_error_maps_to_non_physical() {
        let err: FluidError = PdError::NonFinite {
            what: "radius",
            value: f64::NAN,
        }
        .into();
        assert_eq!(err, FluidError::NonPhysical { what: "radius" });
    }
}
