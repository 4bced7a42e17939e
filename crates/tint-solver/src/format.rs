//! Rendering filter parameters as CSS.
//!
//! Values are rounded half-up to integers after scaling hue-rotate to
//! degrees, then listed in chain order:
//!
//! ```text
//! invert(10%) sepia(0%) saturate(100%) hue-rotate(0deg) brightness(101%) contrast(99%)
//! ```

use crate::FilterParams;
use crate::params::FilterKind;

/// Rounds to the nearest integer, halves toward positive infinity.
pub fn round_half_up(x: f64) -> i64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

/// Rounded CSS value of one parameter, in its CSS unit.
#[inline]
pub fn css_value(params: &FilterParams, kind: FilterKind) -> i64 {
    round_half_up(params.get(kind) * kind.css_scale())
}

/// Bare filter list, suitable for a `filter` property value.
pub fn raw(params: &FilterParams) -> String {
    FilterKind::ALL
        .iter()
        .map(|&kind| format!("{}({}{})", kind.css_name(), css_value(params, kind), kind.unit()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full CSS declaration: `filter: <raw>;`.
pub fn css(params: &FilterParams) -> String {
    format!("filter: {};", raw(params))
}

/// Percent as a decimal string without the leading zero (`7` -> `.07`).
fn percent_to_decimal(percent: i64) -> String {
    let s = (percent as f64 / 100.0).to_string();
    match s.strip_prefix('0') {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => s,
    }
}

/// Tailwind CSS utility classes for the same filter chain.
///
/// Percent filters become `name-[decimal]`, or `name-100` at exactly 100%.
/// Hue-rotate keeps its degrees: `hue-rotate-[90deg]`.
pub fn tailwind(params: &FilterParams) -> String {
    FilterKind::ALL
        .iter()
        .map(|&kind| {
            let value = css_value(params, kind);
            match kind {
                FilterKind::HueRotate => format!("{}-[{}deg]", kind.css_name(), value),
                _ if value == 100 => format!("{}-100", kind.css_name()),
                _ => format!("{}-[{}]", kind.css_name(), percent_to_decimal(value)),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
