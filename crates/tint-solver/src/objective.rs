//! Loss function: distance from a filtered black to the target.
//!
//! ```text
//! black -> invert -> sepia -> saturate -> hue-rotate -> brightness -> contrast
//! loss  = |dr| + |dg| + |db| + |dh| + |ds| + |dl|
//! ```
//!
//! RGB is compared in `[0, 255]` units and HSL in the x100 units of
//! [`Hsl`]. Zero is a perfect match.

use tint_core::{Color, Hsl};

use crate::FilterParams;
use crate::params::HUE_DEGREES_PER_UNIT;

/// Applies the filter chain to `color` in place.
///
/// Percent parameters are divided by 100; hue-rotate is converted to degrees.
pub fn apply_filters(color: &mut Color, p: &FilterParams) {
    color.invert(p.invert / 100.0);
    color.sepia(p.sepia / 100.0);
    color.saturate(p.saturate / 100.0);
    color.hue_rotate(p.hue_rotate * HUE_DEGREES_PER_UNIT);
    color.brightness(p.brightness / 100.0);
    color.contrast(p.contrast / 100.0);
}

/// Loss evaluator for one target.
///
/// Holds a scratch color that every evaluation resets to black and mutates.
/// Evaluations through one `Objective` are sequential by construction
/// (`&mut self`); clone it to evaluate concurrently.
#[derive(Debug, Clone)]
pub struct Objective {
    target: Color,
    target_hsl: Hsl,
    scratch: Color,
    evaluations: u64,
}

impl Objective {
    /// Creates an objective for `target`.
    pub fn new(target: Color) -> Self {
        Self {
            target,
            target_hsl: target.hsl(),
            scratch: Color::black(),
            evaluations: 0,
        }
    }

    /// The color being approximated.
    #[inline]
    pub fn target(&self) -> Color {
        self.target
    }

    /// Precomputed HSL of the target.
    #[inline]
    pub fn target_hsl(&self) -> Hsl {
        self.target_hsl
    }

    /// Number of loss evaluations performed so far.
    #[inline]
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Color produced by applying `params` to black.
    pub fn render(&mut self, params: &FilterParams) -> Color {
        self.scratch.set(0.0, 0.0, 0.0);
        apply_filters(&mut self.scratch, params);
        self.scratch
    }

    /// Loss of `params` against the target.
    pub fn loss(&mut self, params: &FilterParams) -> f64 {
        self.evaluations += 1;
        let color = self.render(params);
        let hsl = color.hsl();
        let t = &self.target;
        let th = &self.target_hsl;

        (color.r() - t.r()).abs()
            + (color.g() - t.g()).abs()
            + (color.b() - t.b()).abs()
            + (hsl.h - th.h).abs()
            + (hsl.s - th.s).abs()
            + (hsl.l - th.l).abs()
    }
}
