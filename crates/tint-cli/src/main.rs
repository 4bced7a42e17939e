//! tint - approximate a color with a CSS filter chain
//!
//! Solves for `invert sepia saturate hue-rotate brightness contrast`
//! intensities that turn black into a target color.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

mod commands;

#[derive(Parser)]
#[command(name = "tint")]
#[command(author, version, about = "Approximate a color with a CSS filter chain")]
#[command(long_about = "
Finds the CSS filter chain that renders a black element as the target color.

Examples:
  tint solve '#1da1f2'                  # Solve and print the CSS declaration
  tint solve 03f --format tailwind      # Tailwind classes instead of CSS
  tint solve ff8000 --runs 5            # Best of five runs, with leaderboard
  tint solve ff8000 --seed 42 --format json
  tint eval ff8000 --filter 50,20,3750,50,100,100
  tint apply --filter 100,0,100,0,50,100
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    /// Number of threads for parallel attempts (0 = auto; only used with --parallel)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve for the filter chain that reproduces a color
    #[command(visible_alias = "s")]
    Solve(SolveArgs),

    /// Score a filter vector against a color
    #[command(visible_alias = "e")]
    Eval(EvalArgs),

    /// Show the color a filter vector produces from black
    #[command(visible_alias = "a")]
    Apply(ApplyArgs),
}

/// Output format for solve results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `filter: ...;` declaration
    Css,
    /// Bare filter list
    Raw,
    /// Tailwind utility classes
    Tailwind,
    /// Machine-readable result
    Json,
}

#[derive(Args)]
pub struct SolveArgs {
    /// Target color: #RRGGBB or #RGB (the # is optional)
    pub color: String,

    /// Seed for reproducible runs (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of independent runs; the best is reported
    #[arg(short = 'n', long, default_value = "1")]
    pub runs: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "css")]
    pub format: OutputFormat,

    /// Solver config (YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Run wide-phase attempts in parallel
    #[arg(long)]
    pub parallel: bool,
}

#[derive(Args)]
pub struct EvalArgs {
    /// Target color: #RRGGBB or #RGB
    pub color: String,

    /// Six comma-separated values: invert,sepia,saturate,hue,brightness,contrast
    #[arg(short, long, allow_hyphen_values = true)]
    pub filter: String,
}

#[derive(Args)]
pub struct ApplyArgs {
    /// Six comma-separated values: invert,sepia,saturate,hue,brightness,contrast
    #[arg(short, long, allow_hyphen_values = true)]
    pub filter: String,
}

/// Installs the tracing subscriber.
///
/// `RUST_LOG` wins over `-v`. With `--log`, output is mirrored to the file
/// through a non-blocking writer whose guard must outlive `main`.
fn init_logging(verbose: u8, log: Option<&PathBuf>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    match log {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            builder
                .with_ansi(false)
                .with_writer(std::io::stderr.and(writer))
                .init();
            Ok(Some(guard))
        }
        None => {
            builder.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log.as_ref())?;

    // Configure thread pool; solve logs when it goes unused
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Solve(args) => commands::solve::run(args, cli.threads, cli.verbose),
        Commands::Eval(args) => commands::eval::run(args, cli.verbose),
        Commands::Apply(args) => commands::apply::run(args, cli.verbose),
    }
}
