//! Solve command
//!
//! Runs the two-phase solver one or more times and reports the best result.
//! Every run continues the same seed stream, so `--seed` with `--runs`
//! reproduces the whole leaderboard.

use crate::{OutputFormat, SolveArgs};
use anyhow::{Context, Result, bail};
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use tint_solver::{Leaderboard, SolveResult, Solver, SolverConfig, format, random_seed};

pub fn run(args: SolveArgs, threads: usize, verbose: u8) -> Result<()> {
    trace!(color = %args.color, runs = args.runs, seed = ?args.seed, "solve::run");

    if args.runs == 0 {
        bail!("--runs must be at least 1");
    }

    let target = super::parse_color(&args.color)?;
    let mut config = match &args.config {
        Some(path) => SolverConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => SolverConfig::default(),
    };
    if args.parallel {
        config.parallel = true;
    }
    if config.parallel && !cfg!(feature = "parallel") {
        info!("Built without the parallel feature; attempts run sequentially");
    }
    if threads > 0 && !config.parallel {
        info!(threads, "Thread count ignored; attempts run sequentially without --parallel");
    }

    let seed = args.seed.unwrap_or_else(random_seed);
    let mut solver = Solver::with_config(target, config, seed)?;
    info!(color = %target, seed, runs = args.runs, "Solving");
    super::log_verbose(&format!("Solving {} ({}) with seed {}", target.to_hex(), target.to_rgb(), seed), verbose);

    let mut board = Leaderboard::new();
    let mut best: Option<SolveResult> = None;
    for run in 0..args.runs {
        let result = solver.solve();
        debug!(run, loss = result.loss, "Run finished");
        board.record_result(&result);
        if best.as_ref().is_none_or(|b| result.loss < b.loss) {
            best = Some(result);
        }
    }
    let Some(best) = best else {
        bail!("No solve runs completed");
    };

    match args.format {
        OutputFormat::Json => {
            let out = serde_json::json!({
                "target": target.to_hex(),
                "seed": seed,
                "result": best,
                "tailwind": format::tailwind(&best.values),
                "quality": best.quality(),
                "message": best.quality().message(),
                "leaderboard": board,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
            return Ok(());
        }
        OutputFormat::Css => println!("{}", best.filter),
        OutputFormat::Raw => println!("{}", best.filter_raw),
        OutputFormat::Tailwind => println!("{}", format::tailwind(&best.values)),
    }
    println!("Loss: {}. {}", best.loss, best.quality());
    if let Some(hint) = retry_hint(&best, args.runs) {
        println!("{hint}");
    }

    if board.len() > 1 {
        println!();
        println!("{:>4}  {:>12}  filter", "rank", "loss");
        for (rank, entry) in board.ranked() {
            println!("{:>4}  {:>12.6}  {}", rank, entry.loss, entry.filter);
        }
    }

    Ok(())
}

/// Suggests more runs when the best result is still off.
fn retry_hint(best: &SolveResult, runs: usize) -> Option<String> {
    if !best.quality().should_retry() {
        return None;
    }
    let more = (runs * 2).max(5);
    Some(format!("Try `--runs {more}` to keep the best of more attempts."))
}
