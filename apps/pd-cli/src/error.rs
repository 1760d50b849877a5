//! Error types for the command-line front end.

use std::path::PathBuf;

/// Application error wrapping library errors for display at the top level.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Failed to write output file: {path}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Preset {name} failed: {message}")]
    Preset { name: String, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pd-cli operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<pd_sim::SimError> for AppError {
    fn from(err: pd_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}
