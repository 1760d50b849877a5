//! pd-fluids: fluid properties and drag for the pendulum bob.
//!
//! Provides:
//! - The closed set of surrounding fluids (`Fluid::Air`, `Fluid::Water`)
//! - Density and viscosity lookup for each fluid
//! - Sphere drag-coefficient correlations
//! - `DragModel`, the resistive force acting on the bob for a given angular velocity
//!
//! # Example
//!
//! ```
//! use pd_fluids::{DragLaw, DragModel, Fluid};
//!
//! let drag = DragModel::new(Fluid::Water, DragLaw::Quadratic, 0.05, 1.0).unwrap();
//! let f = drag.force(2.0);
//! assert!(f > 0.0);
//! assert_eq!(drag.force(0.0), 0.0);
//! ```

pub mod drag;
pub mod error;
pub mod fluid;

pub use drag::{
    DragLaw, DragModel, SPHERE_DRAG_COEFFICIENT, STOKES_REYNOLDS_THRESHOLD, reynolds_number,
    sphere_drag_coefficient,
};
pub use error::{FluidError, FluidResult};
pub use fluid::Fluid;
