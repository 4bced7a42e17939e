//! # tint-solver
//!
//! Finds a CSS filter chain that turns black into a target color.
//!
//! The chain is fixed:
//!
//! ```text
//! invert -> sepia -> saturate -> hue-rotate -> brightness -> contrast
//! ```
//!
//! and the solver searches its six intensities with SPSA, a gradient-free
//! stochastic optimizer. The loss surface is clamped and non-convex, so the
//! search runs a wide phase with restarts followed by a narrow refinement.
//!
//! - [`Solver`] - two-phase solve, seeded and reproducible
//! - [`Objective`] - loss evaluator with its own scratch color
//! - [`spsa()`] - the shared SPSA core
//! - [`FilterParams`], [`FilterKind`], [`fix`] - parameters and repair rules
//! - [`format`] - CSS, raw and Tailwind rendering
//! - [`LossQuality`], [`Leaderboard`] - reading and ranking results
//! - [`SolverConfig`] - phase settings, loadable from YAML
//!
//! # Example
//!
//! ```rust,no_run
//! use tint_core::Color;
//! use tint_solver::Solver;
//!
//! let mut solver = Solver::with_seed(Color::from_rgb8(255, 0, 0), 42);
//! let result = solver.solve();
//! println!("{}", result.filter);
//! println!("{}", result.quality());
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` - run wide-phase attempts on rayon when
//!   [`SolverConfig::parallel`] is set (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod format;
pub mod leaderboard;
pub mod objective;
pub mod params;
pub mod quality;
pub mod solver;
pub mod spsa;

pub use config::{NarrowConfig, SolverConfig, WIDE_INITIAL, WideConfig};
pub use error::{SolverError, SolverResult};
pub use leaderboard::{Entry, Leaderboard};
pub use objective::{Objective, apply_filters};
pub use params::{FilterKind, FilterParams, PARAM_COUNT, fix};
pub use quality::LossQuality;
pub use solver::{SolveResult, Solver, random_seed};
pub use spsa::{Candidate, Schedule, spsa};
