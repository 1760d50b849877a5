//! Pendulum dynamics engine.
//!
//! Provides:
//! - `PendulumState`: rope length, bob geometry and mass, mode flags, θ and ω
//! - `EquationOfMotion`: the four exact/linearized × free/damped variants
//! - Semi-implicit Euler frame stepping (plus forward Euler and RK4 for offline runs)
//! - Kinetic and potential energy diagnostics
//! - Fixed-step trajectory recording, CSV export and period analysis
//!
//! # Example
//!
//! ```
//! use pd_sim::Pendulum;
//!
//! let mut pendulum = Pendulum::new(1.0, 0.05, false, false, 0.5236).unwrap();
//! assert_eq!(pendulum.kinetic_energy(), 0.0);
//!
//! let theta = pendulum.next_step(1.0 / 60.0).unwrap();
//! assert!(theta < 0.5236);
//! assert!(pendulum.kinetic_energy() > 0.0);
//! ```

pub mod analysis;
pub mod config;
pub mod energy;
pub mod eom;
pub mod error;
pub mod export;
pub mod integrator;
pub mod pendulum;
pub mod presets;
pub mod sim;
pub mod state;

// Re-exports for public API
pub use analysis::{downward_zero_crossings, measure_period, small_angle_period};
pub use config::PendulumConfig;
pub use eom::EquationOfMotion;
pub use error::{SimError, SimResult};
pub use export::{CsvLayout, write_csv};
pub use integrator::{ForwardEuler, Integrator, RK4, SemiImplicitEuler};
pub use pendulum::{DEFAULT_MAX_SUBSTEP, Pendulum};
pub use presets::{Preset, reference_presets};
pub use sim::{IntegratorType, Sample, SimOptions, SimRecord, run_sim};
pub use state::{Modes, PendulumParams, PendulumState, PhaseState};
