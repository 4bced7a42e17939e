//! Eval command
//!
//! Scores a filter vector against a target color.

use crate::EvalArgs;
use anyhow::Result;
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use tint_solver::{LossQuality, Objective, format};

pub fn run(args: EvalArgs, verbose: u8) -> Result<()> {
    trace!(color = %args.color, filter = %args.filter, "eval::run");

    let target = super::parse_color(&args.color)?;
    let params = super::parse_filter(&args.filter)?;
    let repaired = params.repaired();
    if repaired != params {
        info!(?params, ?repaired, "Filter values outside their valid range");
    }

    let mut objective = Objective::new(target);
    let loss = objective.loss(&params);
    let rendered = objective.render(&params);

    super::log_verbose(&format!("Target:   {} ({})", target.to_hex(), target.to_rgb()), verbose);
    super::log_verbose(&format!("Rendered: {} ({})", rendered.to_hex(), rendered.to_rgb()), verbose);
    println!("{}", format::raw(&params));
    println!("Loss: {loss}. {}", LossQuality::from_loss(loss));
    Ok(())
}
