//! CLI command implementations

pub mod apply;
pub mod eval;
pub mod solve;

use anyhow::{Context, Result, bail};
use tint_core::Color;
use tint_solver::{FilterParams, PARAM_COUNT};

/// Parse a target color from hex input.
pub fn parse_color(input: &str) -> Result<Color> {
    input
        .parse::<Color>()
        .with_context(|| format!("Invalid color '{input}', expected #RRGGBB or #RGB"))
}

/// Parse six comma-separated filter values.
pub fn parse_filter(s: &str) -> Result<FilterParams> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != PARAM_COUNT {
        bail!("Expected {} values (invert,sepia,saturate,hue,brightness,contrast), got {}", PARAM_COUNT, parts.len());
    }
    let values = parts
        .iter()
        .map(|p| p.parse::<f64>().with_context(|| format!("Invalid filter value '{p}'")))
        .collect::<Result<Vec<_>>>()?;
    Ok(FilterParams::from_slice(&values)?)
}

/// Print a line only when verbose.
pub fn log_verbose(msg: &str, verbose: u8) {
    if verbose > 0 {
        println!("{msg}");
    }
}
