//! # tint-core
//!
//! Color model for approximating colors with CSS filter chains.
//!
//! This crate provides the types the solver drives:
//!
//! - [`Color`] - RGB color with the CSS filter operators as in-place mutations
//! - [`Hsl`] - HSL projection in the x100 units the loss function compares
//! - [`Mat3`] - 3x3 transform behind hue-rotate, grayscale, sepia and saturate
//! - [`ColorError`] - hex parsing errors
//!
//! ## Channel Invariant
//!
//! Channels are `f64` values in `[0, 255]`. Every operator clamps
//! immediately, so a chain of filters never carries out-of-range
//! intermediates into the next step:
//!
//! ```rust
//! use tint_core::Color;
//!
//! let mut c = Color::black();
//! c.invert(1.0);
//! c.brightness(2.0);
//! assert_eq!(c.rgb(), [255.0, 255.0, 255.0]);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! tint-core (this crate)
//!    ^
//!    |
//!    +-- tint-solver (loss, SPSA, formatting)
//!    +-- tint-cli (the `tint` binary)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod hex;
pub mod matrix;

pub use color::{Color, Hsl};
pub use error::{ColorError, ColorResult};
pub use matrix::{FILTER_LUMA, Mat3, REC709_LUMA};

/// Prelude module for convenient imports.
///
/// ```
/// use tint_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Color, Hsl};
    pub use crate::error::{ColorError, ColorResult};
    pub use crate::matrix::Mat3;
}
