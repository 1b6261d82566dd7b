// File: crates/graticule-core/src/error.rs
// Summary: Error type shared by the grid engine, configuration parsing and paint backends.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("invalid dimension {0}; expected 0 or 1")]
    InvalidDimension(u8),

    #[error("unknown {axis} range '{name}'")]
    UnknownRange { axis: &'static str, name: String },

    #[error("invalid color literal '{0}'")]
    InvalidColor(String),

    #[error("invalid grid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Failure reported by a paint backend; passed through untouched.
    #[error(transparent)]
    Paint(#[from] anyhow::Error),
}

pub type Result<T, E = GridError> = std::result::Result<T, E>;
