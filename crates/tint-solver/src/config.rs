//! Solver configuration.
//!
//! Defaults reproduce the standard two-phase run. Every field is optional
//! in YAML; missing fields fall back to the defaults. That includes the
//! fields of `wide.initial`, which default to [`WIDE_INITIAL`]:
//!
//! ```yaml
//! wide:
//!   attempts: 5
//!   accept_loss: 10.0
//!   initial:
//!     invert: 10
//! narrow:
//!   iterations: 800
//! parallel: true
//! ```

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::params::PARAM_COUNT;
use crate::spsa::Schedule;
use crate::{FilterParams, SolverError, SolverResult};

/// Default starting point of every wide attempt.
pub const WIDE_INITIAL: FilterParams = FilterParams::from_array([50.0, 20.0, 3750.0, 50.0, 100.0, 100.0]);

/// `wide.initial` as written in YAML, any field may be left out.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PartialParams {
    invert: Option<f64>,
    sepia: Option<f64>,
    saturate: Option<f64>,
    hue_rotate: Option<f64>,
    brightness: Option<f64>,
    contrast: Option<f64>,
}

fn initial_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<FilterParams, D::Error> {
    let p = PartialParams::deserialize(deserializer)?;
    let d = WIDE_INITIAL;
    Ok(FilterParams {
        invert: p.invert.unwrap_or(d.invert),
        sepia: p.sepia.unwrap_or(d.sepia),
        saturate: p.saturate.unwrap_or(d.saturate),
        hue_rotate: p.hue_rotate.unwrap_or(d.hue_rotate),
        brightness: p.brightness.unwrap_or(d.brightness),
        contrast: p.contrast.unwrap_or(d.contrast),
    })
}

/// Coarse search with restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WideConfig {
    /// Maximum number of independent SPSA runs.
    pub attempts: usize,
    /// Iterations per run.
    pub iterations: usize,
    /// Stability offset `A`.
    pub stability: f64,
    /// Initial perturbation `c`.
    pub perturbation: f64,
    /// Per-parameter gains `a`.
    pub gains: [f64; PARAM_COUNT],
    /// Starting point of every attempt.
    #[serde(deserialize_with = "initial_or_default")]
    pub initial: FilterParams,
    /// Stop restarting once the best loss is at or below this.
    pub accept_loss: f64,
}

impl Default for WideConfig {
    fn default() -> Self {
        Self {
            attempts: 3,
            iterations: 1000,
            stability: 5.0,
            perturbation: 15.0,
            gains: [60.0, 180.0, 18000.0, 600.0, 1.2, 1.2],
            initial: WIDE_INITIAL,
            accept_loss: 25.0,
        }
    }
}

impl WideConfig {
    /// SPSA schedule for one attempt.
    pub fn schedule(&self) -> Schedule {
        Schedule {
            stability: self.stability,
            gains: self.gains,
            perturbation: self.perturbation,
        }
    }
}

/// Local refinement seeded from the wide result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrowConfig {
    /// Iterations of the single refinement run.
    pub iterations: usize,
    /// Initial perturbation `c`.
    pub perturbation: f64,
    /// Gains as multiples of `wide_loss + 1`.
    pub gain_scale: [f64; PARAM_COUNT],
}

impl Default for NarrowConfig {
    fn default() -> Self {
        Self {
            iterations: 500,
            perturbation: 2.0,
            gain_scale: [0.25, 0.25, 1.0, 0.25, 0.2, 0.2],
        }
    }
}

impl NarrowConfig {
    /// Schedule scaled by the residual loss of the wide phase.
    ///
    /// A larger residual gives larger steps: `A = wide_loss` and
    /// `a_i = gain_scale_i * (wide_loss + 1)`.
    pub fn schedule(&self, wide_loss: f64) -> Schedule {
        let scale = wide_loss + 1.0;
        Schedule {
            stability: wide_loss,
            gains: self.gain_scale.map(|g| g * scale),
            perturbation: self.perturbation,
        }
    }
}

/// Full solver configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Wide phase.
    pub wide: WideConfig,
    /// Narrow phase.
    pub narrow: NarrowConfig,
    /// Run wide attempts concurrently (needs the `parallel` feature).
    pub parallel: bool,
}

impl SolverConfig {
    /// Loads configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> SolverResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Loads configuration from a YAML string and validates it.
    pub fn from_yaml_str(yaml: &str) -> SolverResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the solver can run with these values.
    pub fn validate(&self) -> SolverResult<()> {
        let invalid = |msg: String| Err(SolverError::InvalidConfig(msg));

        if self.wide.attempts == 0 {
            return invalid("wide.attempts must be at least 1".into());
        }
        for (name, c) in [
            ("wide.perturbation", self.wide.perturbation),
            ("narrow.perturbation", self.narrow.perturbation),
        ] {
            if !(c.is_finite() && c > 0.0) {
                return invalid(format!("{name} must be positive, got {c}"));
            }
        }
        if !(self.wide.stability.is_finite() && self.wide.stability >= 0.0) {
            return invalid(format!(
                "wide.stability must be non-negative, got {}",
                self.wide.stability
            ));
        }
        if !self.wide.accept_loss.is_finite() {
            return invalid("wide.accept_loss must be finite".into());
        }
        for (name, gains) in [
            ("wide.gains", &self.wide.gains),
            ("narrow.gain_scale", &self.narrow.gain_scale),
        ] {
            if let Some(g) = gains.iter().find(|g| !(g.is_finite() && **g >= 0.0)) {
                return invalid(format!("{name} must be non-negative, got {g}"));
            }
        }
        if let Some(v) = self.wide.initial.to_array().iter().find(|v| !v.is_finite()) {
            return invalid(format!("wide.initial must be finite, got {v}"));
        }
        Ok(())
    }

    /// Upper bound on loss evaluations for one solve.
    pub fn max_evaluations(&self) -> u64 {
        let wide = self.wide.attempts as u64 * (3 * self.wide.iterations as u64).max(1);
        let narrow = (3 * self.narrow.iterations as u64).max(1);
        wide + narrow
    }
}
