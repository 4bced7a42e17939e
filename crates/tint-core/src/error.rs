//! Error types for color parsing.
//!
//! The filter operators themselves never fail: every mutation clamps its
//! result into range. The only fallible entry point is turning user input
//! into a [`Color`](crate::Color).

use thiserror::Error;

/// Color model error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input is not a `#RGB` or `#RRGGBB` hex color.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
