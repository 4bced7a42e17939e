//! Error types for solver setup.
//!
//! The optimization itself is a pure numeric computation and never fails.
//! Errors only come from building inputs: loading a config, validating it,
//! or converting a raw vector into [`FilterParams`](crate::FilterParams).

use thiserror::Error;

/// Solver setup error.
#[derive(Debug, Error)]
pub enum SolverError {
    /// I/O error reading a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Config values the solver cannot run with.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Parameter vector of the wrong shape.
    #[error("invalid filter parameters: {0}")]
    InvalidParams(String),
}

/// Result type for solver setup.
pub type SolverResult<T> = Result<T, SolverError>;
