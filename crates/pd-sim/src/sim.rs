//! Trajectory recording at a fixed time step.

use crate::error::{SimError, SimResult};
use crate::integrator::{ForwardEuler, RK4, SemiImplicitEuler};
use crate::pendulum::Pendulum;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Integrator selection for trajectory recording.
///
/// Frame stepping through [`Pendulum::next_step`] always uses semi-implicit Euler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntegratorType {
    /// Semi-implicit Euler (default, same scheme as frame stepping).
    #[default]
    SemiImplicitEuler,
    /// Forward Euler (1st-order, drifts in energy).
    ForwardEuler,
    /// 4th-order Runge-Kutta (4 rhs calls per step).
    #[serde(rename = "rk4")]
    RK4,
}

impl std::str::FromStr for IntegratorType {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "semi-implicit-euler" | "symplectic-euler" | "semi-implicit" => {
                Ok(IntegratorType::SemiImplicitEuler)
            }
            "forward-euler" | "euler" => Ok(IntegratorType::ForwardEuler),
            "rk4" => Ok(IntegratorType::RK4),
            _ => Err(SimError::InvalidArg {
                what: "integrator must be semi-implicit-euler, forward-euler or rk4",
            }),
        }
    }
}

/// Options for simulation runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimOptions {
    /// Fixed time step (seconds)
    pub dt: f64,
    /// Final simulation time (seconds), rounded to a whole number of steps
    pub t_end: f64,
    /// Maximum number of steps (safety limit)
    pub max_steps: usize,
    /// Record every N-th step (decimation)
    pub record_every: usize,
    /// Integrator type (default: semi-implicit Euler)
    #[serde(default)]
    pub integrator: IntegratorType,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            dt: 1e-3,
            t_end: 4.0,
            max_steps: 10_000_000,
            record_every: 1,
            integrator: IntegratorType::default(),
        }
    }
}

/// One recorded point of a trajectory.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub t: f64,
    pub theta: f64,
    pub omega: f64,
    pub kinetic: f64,
    pub potential: f64,
    pub total: f64,
}

impl Sample {
    fn capture(t: f64, pendulum: &Pendulum) -> Self {
        Self {
            t,
            theta: pendulum.theta(),
            omega: pendulum.omega(),
            kinetic: pendulum.kinetic_energy(),
            potential: pendulum.potential_energy(),
            total: pendulum.total_energy(),
        }
    }
}

/// Record of simulation results.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimRecord {
    pub samples: Vec<Sample>,
}

impl SimRecord {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.t)
    }

    pub fn thetas(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.theta)
    }
}

/// Run the pendulum forward from its current state, recording samples.
///
/// The first sample is the state at t = 0; the final state is always recorded.
pub fn run_sim(pendulum: &mut Pendulum, opts: &SimOptions) -> SimResult<SimRecord> {
    if opts.dt <= 0.0 || !opts.dt.is_finite() {
        return Err(SimError::InvalidArg {
            what: "dt must be positive",
        });
    }
    if opts.t_end < 0.0 || !opts.t_end.is_finite() {
        return Err(SimError::InvalidArg {
            what: "t_end must be non-negative",
        });
    }
    if opts.max_steps == 0 {
        return Err(SimError::InvalidArg {
            what: "max_steps must be positive",
        });
    }
    if opts.record_every == 0 {
        return Err(SimError::InvalidArg {
            what: "record_every must be positive",
        });
    }

    let requested = (opts.t_end / opts.dt).round();
    let n_steps = if requested > opts.max_steps as f64 {
        warn!(
            requested,
            max_steps = opts.max_steps,
            "step count capped by max_steps"
        );
        opts.max_steps
    } else {
        requested as usize
    };
    debug!(
        dt = opts.dt,
        n_steps,
        integrator = ?opts.integrator,
        eom = pendulum.eom().name(),
        "trajectory run"
    );

    let mut samples = Vec::with_capacity(n_steps / opts.record_every + 2);
    samples.push(Sample::capture(0.0, pendulum));

    for step in 1..=n_steps {
        match opts.integrator {
            IntegratorType::SemiImplicitEuler => {
                pendulum.advance_with(&SemiImplicitEuler, opts.dt)?
            }
            IntegratorType::ForwardEuler => pendulum.advance_with(&ForwardEuler, opts.dt)?,
            IntegratorType::RK4 => pendulum.advance_with(&RK4, opts.dt)?,
        };

        if step % opts.record_every == 0 || step == n_steps {
            samples.push(Sample::capture(step as f64 * opts.dt, pendulum));
        }
    }

    Ok(SimRecord { samples })
}
