//! Apply command
//!
//! Renders black through a filter vector and prints the resulting color.

use crate::ApplyArgs;
use anyhow::Result;
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use tint_core::Color;
use tint_solver::{apply_filters, format};

pub fn run(args: ApplyArgs, verbose: u8) -> Result<()> {
    trace!(filter = %args.filter, "apply::run");

    let params = super::parse_filter(&args.filter)?;
    let mut color = Color::black();
    apply_filters(&mut color, &params);
    debug!(r = color.r(), g = color.g(), b = color.b(), "Applied");

    super::log_verbose(&format::css(&params), verbose);
    let hsl = color.hsl();
    println!("{}", color.to_rgb());
    println!("{}", color.to_hex());
    super::log_verbose(&format!("hsl(x100): {:.3} {:.3} {:.3}", hsl.h, hsl.s, hsl.l), verbose);
    Ok(())
}
