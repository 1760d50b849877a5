mod error;

use clap::{Args, Parser, Subcommand};
use error::{AppError, AppResult};
use pd_fluids::{DragLaw, Fluid};
use pd_sim::{
    CsvLayout, IntegratorType, PendulumConfig, Preset, SimOptions, measure_period,
    reference_presets, run_sim, small_angle_period, write_csv,
};
use rayon::prelude::*;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pd-cli")]
#[command(about = "Pendulum CLI - gravity pendulum dynamics with optional fluid drag", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a trajectory and export it as CSV
    Run {
        #[command(flatten)]
        model: ModelArgs,
        /// Time step in seconds
        #[arg(long, default_value_t = 1e-3)]
        dt: f64,
        /// End time in seconds
        #[arg(long, default_value_t = 4.0)]
        t_end: f64,
        /// Record every N-th step
        #[arg(long, default_value_t = 1)]
        record_every: usize,
        /// semi-implicit-euler, forward-euler or rk4
        #[arg(long, default_value = "semi-implicit-euler")]
        integrator: IntegratorType,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Include a header and every sample column
        #[arg(long)]
        wide: bool,
    },
    /// Print energies and period estimates for a configuration
    Summary {
        #[command(flatten)]
        model: ModelArgs,
        /// Duration of the run used to measure the period, in seconds
        #[arg(long, default_value_t = 20.0)]
        t_end: f64,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the reference presets in parallel, one CSV per preset
    Batch {
        /// Directory receiving the CSV files
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

/// Model parameters: YAML config first, then flag overrides.
#[derive(Args, Debug, Default)]
struct ModelArgs {
    /// Path to a YAML pendulum config
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Rope length in metres
    #[arg(long)]
    length: Option<f64>,
    /// Bob radius in metres
    #[arg(long)]
    radius: Option<f64>,
    /// Initial angle in degrees
    #[arg(long, allow_hyphen_values = true)]
    theta0_deg: Option<f64>,
    /// Enable fluid drag
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    resistance: Option<bool>,
    /// Linearize sin θ ≈ θ
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    simple_harmonic: Option<bool>,
    /// air or water
    #[arg(long)]
    fluid: Option<Fluid>,
    /// quadratic or reynolds
    #[arg(long)]
    drag_law: Option<DragLaw>,
    /// Bob mass in kg (default: aluminium sphere of the given radius)
    #[arg(long)]
    mass: Option<f64>,
}

impl ModelArgs {
    fn resolve(&self) -> AppResult<PendulumConfig> {
        let mut cfg = match &self.config {
            Some(path) => load_config(path)?,
            None => PendulumConfig::default(),
        };
        if let Some(v) = self.length {
            cfg.rope_length_m = v;
        }
        if let Some(v) = self.radius {
            cfg.radius_m = v;
        }
        if let Some(v) = self.theta0_deg {
            cfg.theta0_rad = v.to_radians();
        }
        if let Some(v) = self.resistance {
            cfg.resistance = v;
        }
        if let Some(v) = self.simple_harmonic {
            cfg.simple_harmonic = v;
        }
        if let Some(v) = self.fluid {
            cfg.fluid = v;
        }
        if let Some(v) = self.drag_law {
            cfg.drag_law = v;
        }
        if self.mass.is_some() {
            cfg.mass_kg = self.mass;
        }
        debug!(?cfg, "resolved pendulum config");
        Ok(cfg)
    }
}

fn load_config(path: &Path) -> AppResult<PendulumConfig> {
    let text = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&text).map_err(|source| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            model,
            dt,
            t_end,
            record_every,
            integrator,
            output,
            wide,
        } => {
            let opts = SimOptions {
                dt,
                t_end,
                record_every,
                integrator,
                ..SimOptions::default()
            };
            let layout = if wide {
                CsvLayout::Wide
            } else {
                CsvLayout::Compact
            };
            cmd_run(&model.resolve()?, &opts, layout, output.as_deref())
        }
        Commands::Summary { model, t_end, json } => cmd_summary(&model.resolve()?, t_end, json),
        Commands::Batch { out_dir } => cmd_batch(&out_dir),
    }
}

fn cmd_run(
    cfg: &PendulumConfig,
    opts: &SimOptions,
    layout: CsvLayout,
    output: Option<&Path>,
) -> AppResult<()> {
    let mut pendulum = cfg.build()?;
    let record = run_sim(&mut pendulum, opts)?;
    info!(samples = record.len(), "trajectory recorded");

    match output {
        Some(path) => {
            let file = File::create(path).map_err(|source| AppError::OutputWrite {
                path: path.to_path_buf(),
                source,
            })?;
            write_csv(&record, layout, BufWriter::new(file))?;
            info!(path = %path.display(), "CSV written");
        }
        None => write_csv(&record, layout, io::stdout().lock())?,
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct Summary {
    equation: &'static str,
    rope_length_m: f64,
    mass_kg: f64,
    theta0_rad: f64,
    kinetic_j: f64,
    potential_j: f64,
    total_j: f64,
    small_angle_period_s: f64,
    measured_period_s: Option<f64>,
    final_total_j: f64,
}

fn cmd_summary(cfg: &PendulumConfig, t_end: f64, json: bool) -> AppResult<()> {
    let mut pendulum = cfg.build()?;
    let params = *pendulum.params();
    let equation = pendulum.eom().name();
    let kinetic_j = pendulum.kinetic_energy();
    let potential_j = pendulum.potential_energy();
    let total_j = pendulum.total_energy();

    let opts = SimOptions {
        t_end,
        ..SimOptions::default()
    };
    let record = run_sim(&mut pendulum, &opts)?;

    let summary = Summary {
        equation,
        rope_length_m: params.rope_length(),
        mass_kg: params.mass(),
        theta0_rad: cfg.theta0_rad,
        kinetic_j,
        potential_j,
        total_j,
        small_angle_period_s: small_angle_period(params.rope_length(), params.gravity()),
        measured_period_s: measure_period(&record),
        final_total_j: pendulum.total_energy(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Equation of motion:  {}", summary.equation);
    println!("Rope length:         {:.3} m", summary.rope_length_m);
    println!("Bob mass:            {:.6} kg", summary.mass_kg);
    println!(
        "Initial angle:       {:.3}°",
        summary.theta0_rad.to_degrees()
    );
    println!("Kinetic energy:      {:.6} J", summary.kinetic_j);
    println!("Potential energy:    {:.6} J", summary.potential_j);
    println!("Total energy:        {:.6} J", summary.total_j);
    println!(
        "Small-angle period:  {:.4} s",
        summary.small_angle_period_s
    );
    match summary.measured_period_s {
        Some(p) => println!("Measured period:     {p:.4} s"),
        None => println!("Measured period:     n/a (fewer than two swings in {t_end} s)"),
    }
    println!(
        "Total energy at {t_end} s: {:.6} J",
        summary.final_total_j
    );
    Ok(())
}

fn run_preset(preset: &Preset, out_dir: &Path) -> AppResult<PathBuf> {
    let fail = |message: String| AppError::Preset {
        name: preset.name.to_string(),
        message,
    };
    let mut pendulum = preset.config.build().map_err(|e| fail(e.to_string()))?;
    let record = run_sim(&mut pendulum, &preset.options).map_err(|e| fail(e.to_string()))?;

    let path = out_dir.join(preset.file_name());
    let file = File::create(&path).map_err(|source| AppError::OutputWrite {
        path: path.clone(),
        source,
    })?;
    write_csv(&record, CsvLayout::Compact, BufWriter::new(file))
        .map_err(|e| fail(e.to_string()))?;
    info!(preset = preset.name, path = %path.display(), samples = record.len(), "preset written");
    Ok(path)
}

fn cmd_batch(out_dir: &Path) -> AppResult<()> {
    fs::create_dir_all(out_dir).map_err(|source| AppError::OutputWrite {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let presets = reference_presets();
    let written: Vec<PathBuf> = presets
        .par_iter()
        .map(|preset| run_preset(preset, out_dir))
        .collect::<AppResult<_>>()?;

    for path in &written {
        println!("✓ {}", path.display());
    }
    Ok(())
}
