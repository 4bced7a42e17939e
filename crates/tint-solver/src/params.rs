//! Filter parameter vector and its repair rules.
//!
//! The solver optimizes six filter intensities. Internally they live in the
//! named record [`FilterParams`]; the SPSA update works on `[f64; 6]` and
//! converts at that boundary only.
//!
//! # Positions
//!
//! | index | kind         | unit             | valid range       |
//! |-------|--------------|------------------|-------------------|
//! | 0     | invert       | %                | `[0, 100]`        |
//! | 1     | sepia        | %                | `[0, 100]`        |
//! | 2     | saturate     | %                | `[0, 7500]`       |
//! | 3     | hue-rotate   | 3.6 deg per unit | `[0, 100)` wraps  |
//! | 4     | brightness   | %                | `[0, 200]`        |
//! | 5     | contrast     | %                | `[0, 200]`        |

use serde::{Deserialize, Serialize};

use crate::{SolverError, SolverResult};

/// Number of filter parameters.
pub const PARAM_COUNT: usize = 6;

/// Degrees per hue-rotate parameter unit.
pub const HUE_DEGREES_PER_UNIT: f64 = 3.6;

/// One position of the filter chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// `invert()`
    Invert,
    /// `sepia()`
    Sepia,
    /// `saturate()`
    Saturate,
    /// `hue-rotate()`
    HueRotate,
    /// `brightness()`
    Brightness,
    /// `contrast()`
    Contrast,
}

impl FilterKind {
    /// All kinds in chain order.
    pub const ALL: [FilterKind; PARAM_COUNT] = [
        Self::Invert,
        Self::Sepia,
        Self::Saturate,
        Self::HueRotate,
        Self::Brightness,
        Self::Contrast,
    ];

    /// Position in the parameter vector.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Kind at a vector position.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < PARAM_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Upper bound of the valid range.
    pub const fn max(self) -> f64 {
        match self {
            Self::Saturate => 7500.0,
            Self::Brightness | Self::Contrast => 200.0,
            Self::Invert | Self::Sepia | Self::HueRotate => 100.0,
        }
    }

    /// Hue-rotate wraps around instead of clamping.
    #[inline]
    pub const fn is_circular(self) -> bool {
        matches!(self, Self::HueRotate)
    }

    /// CSS function name.
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Invert => "invert",
            Self::Sepia => "sepia",
            Self::Saturate => "saturate",
            Self::HueRotate => "hue-rotate",
            Self::Brightness => "brightness",
            Self::Contrast => "contrast",
        }
    }

    /// CSS unit suffix.
    pub const fn unit(self) -> &'static str {
        match self {
            Self::HueRotate => "deg",
            _ => "%",
        }
    }

    /// Factor from parameter units to CSS units.
    pub const fn css_scale(self) -> f64 {
        match self {
            Self::HueRotate => HUE_DEGREES_PER_UNIT,
            _ => 1.0,
        }
    }
}

/// Repairs a parameter after an update step.
///
/// Non-circular kinds clamp to `[0, max]`. Hue-rotate wraps into `[0, 100)`,
/// so `100` maps to `0` and `-10` maps to `90`. The result is always a fixed
/// point: `fix(fix(x, k), k) == fix(x, k)`.
pub fn fix(value: f64, kind: FilterKind) -> f64 {
    let max = kind.max();
    if kind.is_circular() {
        let wrapped = value.rem_euclid(max);
        // rem_euclid can round up to `max` for tiny negative inputs.
        if wrapped >= max { 0.0 } else { wrapped }
    } else {
        value.clamp(0.0, max)
    }
}

/// The six filter intensities, in CSS units except hue-rotate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterParams {
    /// Invert, percent.
    pub invert: f64,
    /// Sepia, percent.
    pub sepia: f64,
    /// Saturate, percent.
    pub saturate: f64,
    /// Hue-rotate in units of 3.6 degrees.
    pub hue_rotate: f64,
    /// Brightness, percent.
    pub brightness: f64,
    /// Contrast, percent.
    pub contrast: f64,
}

impl FilterParams {
    /// Filter chain that leaves any color unchanged.
    pub const IDENTITY: Self = Self::from_array([0.0, 0.0, 100.0, 0.0, 100.0, 100.0]);

    /// Builds from a vector in chain order.
    #[inline]
    pub const fn from_array(v: [f64; PARAM_COUNT]) -> Self {
        Self {
            invert: v[0],
            sepia: v[1],
            saturate: v[2],
            hue_rotate: v[3],
            brightness: v[4],
            contrast: v[5],
        }
    }

    /// Builds from a slice, which must hold exactly six values.
    pub fn from_slice(v: &[f64]) -> SolverResult<Self> {
        let arr: [f64; PARAM_COUNT] = v.try_into().map_err(|_| {
            SolverError::InvalidParams(format!("expected {PARAM_COUNT} values, got {}", v.len()))
        })?;
        Ok(Self::from_array(arr))
    }

    /// Vector in chain order.
    #[inline]
    pub const fn to_array(&self) -> [f64; PARAM_COUNT] {
        [
            self.invert,
            self.sepia,
            self.saturate,
            self.hue_rotate,
            self.brightness,
            self.contrast,
        ]
    }

    /// Value for one kind.
    #[inline]
    pub fn get(&self, kind: FilterKind) -> f64 {
        self.to_array()[kind.index()]
    }

    /// Applies [`fix`] to every field.
    pub fn repaired(&self) -> Self {
        let mut v = self.to_array();
        for (value, kind) in v.iter_mut().zip(FilterKind::ALL) {
            *value = fix(*value, kind);
        }
        Self::from_array(v)
    }
}

impl Default for FilterParams {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f64; PARAM_COUNT]> for FilterParams {
    fn from(v: [f64; PARAM_COUNT]) -> Self {
        Self::from_array(v)
    }
}

impl From<FilterParams> for [f64; PARAM_COUNT] {
    fn from(p: FilterParams) -> Self {
        p.to_array()
    }
}
