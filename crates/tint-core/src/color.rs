//! RGB color with CSS filter operators.
//!
//! [`Color`] owns three channels in `[0, 255]`. The operators mirror the CSS
//! filter functions and mutate the color in place, clamping after every step.
//! This is the forward model the solver evaluates thousands of times per run,
//! so nothing here allocates.
//!
//! # Example
//!
//! ```rust
//! use tint_core::Color;
//!
//! let mut c = Color::black();
//! c.invert(0.5);
//! c.sepia(1.0);
//! let hsl = c.hsl();
//! assert!(hsl.h >= 0.0 && hsl.h < 100.0);
//! ```

use serde::Serialize;
use std::fmt;

use crate::Mat3;

/// Maximum channel value.
pub const CHANNEL_MAX: f64 = 255.0;

#[inline]
fn clamp(value: f64) -> f64 {
    value.clamp(0.0, CHANNEL_MAX)
}

/// HSL projection of a [`Color`].
///
/// All three components are scaled by 100: hue is in `[0, 100)` rather than
/// degrees, saturation and lightness are in `[0, 100]`. The loss function
/// compares in these units, so they must not be rescaled.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Hsl {
    /// Hue, `[0, 100)`.
    pub h: f64,
    /// Saturation, `[0, 100]`.
    pub s: f64,
    /// Lightness, `[0, 100]`.
    pub l: f64,
}

/// An RGB color with channels clamped to `[0, 255]`.
///
/// Channels are private. The only mutation paths are [`set`](Self::set),
/// [`multiply`](Self::multiply), [`linear`](Self::linear) and the filter
/// operators built on them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

impl Color {
    /// Creates a color, clamping each channel.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        let mut c = Self::default();
        c.set(r, g, b);
        c
    }

    /// Pure black, the starting point of every filter chain.
    #[inline]
    pub const fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0 }
    }

    /// Creates a color from 8-bit channels.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r: r as f64, g: g as f64, b: b as f64 }
    }

    /// Red channel.
    #[inline]
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Green channel.
    #[inline]
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Blue channel.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Channels as `[r, g, b]`.
    #[inline]
    pub fn rgb(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Assigns all three channels, clamped.
    #[inline]
    pub fn set(&mut self, r: f64, g: f64, b: f64) {
        self.r = clamp(r);
        self.g = clamp(g);
        self.b = clamp(b);
    }

    /// Applies a 3x3 transform. All three outputs are computed from the
    /// previous channel values before any is written.
    #[inline]
    pub fn multiply(&mut self, matrix: &Mat3) {
        let [r, g, b] = matrix.transform(self.rgb());
        self.set(r, g, b);
    }

    /// CSS `hue-rotate()`, angle in degrees.
    pub fn hue_rotate(&mut self, degrees: f64) {
        self.multiply(&Mat3::hue_rotate(degrees));
    }

    /// CSS `grayscale()`. `1.0` is full effect, `0.0` is identity.
    pub fn grayscale(&mut self, value: f64) {
        self.multiply(&Mat3::grayscale(value));
    }

    /// CSS `sepia()`. `1.0` is full effect, `0.0` is identity.
    pub fn sepia(&mut self, value: f64) {
        self.multiply(&Mat3::sepia(value));
    }

    /// CSS `saturate()`. `1.0` is identity.
    pub fn saturate(&mut self, value: f64) {
        self.multiply(&Mat3::saturate(value));
    }

    /// CSS `brightness()`: scales every channel.
    pub fn brightness(&mut self, value: f64) {
        self.linear(value, 0.0);
    }

    /// CSS `contrast()`: scales every channel around the midpoint.
    pub fn contrast(&mut self, value: f64) {
        self.linear(value, -(0.5 * value) + 0.5);
    }

    /// `channel = channel * slope + intercept * 255`, clamped.
    #[inline]
    pub fn linear(&mut self, slope: f64, intercept: f64) {
        let offset = intercept * CHANNEL_MAX;
        self.r = clamp(self.r * slope + offset);
        self.g = clamp(self.g * slope + offset);
        self.b = clamp(self.b * slope + offset);
    }

    /// CSS `invert()`. `1.0` is full inversion, `0.0` is identity.
    pub fn invert(&mut self, value: f64) {
        let inv = |c: f64| clamp((value + (c / CHANNEL_MAX) * (1.0 - 2.0 * value)) * CHANNEL_MAX);
        self.r = inv(self.r);
        self.g = inv(self.g);
        self.b = inv(self.b);
    }

    /// HSL projection, each component scaled by 100.
    pub fn hsl(&self) -> Hsl {
        let r = self.r / CHANNEL_MAX;
        let g = self.g / CHANNEL_MAX;
        let b = self.b / CHANNEL_MAX;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl { h: 0.0, s: 0.0, l: l * 100.0 };
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        let h = sector / 6.0;

        Hsl { h: h * 100.0, s: s * 100.0, l: l * 100.0 }
    }

    /// Channels rounded to 8-bit.
    pub fn to_rgb8(&self) -> [u8; 3] {
        // Round half up, then the clamp invariant keeps the cast in range.
        let round = |c: f64| (c + 0.5).floor() as u8;
        [round(self.r), round(self.g), round(self.b)]
    }

    /// CSS `rgb(r, g, b)` notation with rounded channels.
    pub fn to_rgb(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("rgb({r}, {g}, {b})")
    }

    /// Lowercase `#rrggbb` notation with rounded channels.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_rgb8(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_new_clamps() {
        let c = Color::new(-10.0, 300.0, 128.0);
        assert_eq!(c.rgb(), [0.0, 255.0, 128.0]);
    }

    #[test]
    fn test_invert_black() {
        let mut c = Color::black();
        c.invert(1.0);
        assert_eq!(c.rgb(), [255.0, 255.0, 255.0]);

        let mut half = Color::black();
        half.invert(0.5);
        assert_eq!(half.rgb(), [127.5, 127.5, 127.5]);

        let mut none = Color::new(40.0, 80.0, 120.0);
        none.invert(0.0);
        assert_abs_diff_eq!(none.r(), 40.0, epsilon = 1e-9);
        assert_abs_diff_eq!(none.b(), 120.0, epsilon = 1e-9);
    }

    #[test]
    fn test_brightness_and_contrast() {
        let mut c = Color::new(100.0, 100.0, 100.0);
        c.brightness(2.0);
        assert_eq!(c.rgb(), [200.0, 200.0, 200.0]);
        c.brightness(2.0);
        assert_eq!(c.rgb(), [255.0, 255.0, 255.0]);

        // Contrast 0 collapses to the midpoint.
        let mut m = Color::new(10.0, 200.0, 30.0);
        m.contrast(0.0);
        assert_eq!(m.rgb(), [127.5, 127.5, 127.5]);

        // Contrast 2 pushes away from it.
        let mut p = Color::new(100.0, 127.5, 200.0);
        p.contrast(2.0);
        assert_abs_diff_eq!(p.r(), 72.5, epsilon = 1e-9);
        assert_abs_diff_eq!(p.g(), 127.5, epsilon = 1e-9);
        assert_eq!(p.b(), 255.0);
    }

    #[test]
    fn test_operators_keep_range() {
        let mut c = Color::new(250.0, 5.0, 128.0);
        c.saturate(75.0);
        c.hue_rotate(200.0);
        c.sepia(0.3);
        c.grayscale(0.2);
        for ch in c.rgb() {
            assert!((0.0..=255.0).contains(&ch), "channel {ch} out of range");
        }
    }

    #[test]
    fn test_grayscale_full() {
        let mut c = Color::new(255.0, 0.0, 0.0);
        c.grayscale(1.0);
        for ch in c.rgb() {
            assert_abs_diff_eq!(ch, 0.2126 * 255.0, epsilon = 1e-9);
        }
    }

    fn assert_rgb(c: Color, expected: [f64; 3]) {
        for (got, want) in c.rgb().into_iter().zip(expected) {
            assert_abs_diff_eq!(got, want, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_sepia_values() {
        let mut white = Color::new(255.0, 255.0, 255.0);
        white.sepia(1.0);
        // Row sums 1.351 and 1.203 clip; 0.937 * 255 does not.
        assert_rgb(white, [255.0, 255.0, 238.935]);

        let mut c = Color::new(100.0, 50.0, 20.0);
        c.sepia(1.0);
        assert_rgb(c, [81.53, 72.56, 56.52]);
    }

    #[test]
    fn test_saturate_values() {
        // saturate(2) maps each channel to 2c - luma, luma = 124.95 here.
        let mut c = Color::new(150.0, 120.0, 100.0);
        c.saturate(2.0);
        assert_rgb(c, [175.05, 115.05, 75.05]);
    }

    #[test]
    fn test_hue_rotate_values() {
        let mut red = Color::new(255.0, 0.0, 0.0);
        red.hue_rotate(90.0);
        assert_rgb(red, [0.0, 0.356 * 255.0, 0.0]);

        let mut blue = Color::new(0.0, 0.0, 255.0);
        blue.hue_rotate(180.0);
        assert_rgb(blue, [36.72, 36.72, 0.0]);
    }

    #[test]
    fn test_grayscale_half() {
        let mut c = Color::new(255.0, 0.0, 0.0);
        c.grayscale(0.5);
        assert_rgb(c, [0.6063 * 255.0, 0.1063 * 255.0, 0.1063 * 255.0]);
    }

    #[test]
    fn test_hsl_achromatic() {
        for v in [0.0, 1.0, 64.0, 128.0, 254.0, 255.0] {
            let hsl = Color::new(v, v, v).hsl();
            assert_eq!(hsl.h, 0.0);
            assert_eq!(hsl.s, 0.0);
            assert_abs_diff_eq!(hsl.l, v / 255.0 * 100.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_hsl_primaries() {
        let red = Color::new(255.0, 0.0, 0.0).hsl();
        assert_abs_diff_eq!(red.h, 0.0);
        assert_abs_diff_eq!(red.s, 100.0);
        assert_abs_diff_eq!(red.l, 50.0);

        let green = Color::new(0.0, 255.0, 0.0).hsl();
        assert_abs_diff_eq!(green.h, 100.0 / 3.0, epsilon = 1e-9);

        let blue = Color::new(0.0, 0.0, 255.0).hsl();
        assert_abs_diff_eq!(blue.h, 200.0 / 3.0, epsilon = 1e-9);

        // Magenta-ish: max is red with g < b, hue wraps into the top sixth.
        let pink = Color::new(255.0, 0.0, 128.0).hsl();
        assert!(pink.h > 83.0 && pink.h < 100.0);
    }

    #[test]
    fn test_hsl_light_saturation_branch() {
        // l > 0.5 uses d / (2 - max - min).
        let c = Color::new(255.0, 204.0, 204.0).hsl();
        assert_abs_diff_eq!(c.s, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.l, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_presentation() {
        let c = Color::new(255.0, 127.5, 0.4);
        assert_eq!(c.to_rgb(), "rgb(255, 128, 0)");
        assert_eq!(c.to_hex(), "#ff8000");
        assert_eq!(c.to_string(), "#ff8000");
        assert_eq!(Color::from([1, 2, 3]).to_hex(), "#010203");
    }
}
