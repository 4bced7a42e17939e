//! Two-phase solve: wide search with restarts, then narrow refinement.
//!
//! # Phases
//!
//! 1. **Wide** - up to `attempts` SPSA runs from a fixed starting point with
//!    large gains. Restarts stop once the best loss reaches `accept_loss`.
//! 2. **Narrow** - one SPSA run from the wide best, with gains proportional
//!    to the residual loss.
//!
//! # Randomness
//!
//! A solver is seeded once. Each wide attempt and the narrow run draw their
//! own generator seed from that stream, so the sequential and parallel wide
//! phase see identical sign sequences and produce identical results.
//!
//! # Example
//!
//! ```rust,no_run
//! use tint_core::Color;
//! use tint_solver::Solver;
//!
//! let target: Color = "#1da1f2".parse().unwrap();
//! let result = Solver::with_seed(target, 7).solve();
//! println!("{} (loss {:.2})", result.filter, result.loss);
//! ```

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use tint_core::Color;

use crate::format::{css, raw};
use crate::spsa::{Candidate, spsa};
use crate::{FilterParams, LossQuality, Objective, SolverConfig, SolverResult};

/// Outcome of [`Solver::solve`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveResult {
    /// Best parameters found.
    pub values: FilterParams,
    /// Loss of `values`.
    pub loss: f64,
    /// CSS declaration, `filter: ...;`.
    pub filter: String,
    /// Bare filter list.
    pub filter_raw: String,
}

impl SolveResult {
    /// Builds the result and its string forms from a candidate.
    pub fn from_candidate(c: Candidate) -> Self {
        Self {
            values: c.values,
            loss: c.loss,
            filter: css(&c.values),
            filter_raw: raw(&c.values),
        }
    }

    /// Qualitative reading of the loss.
    pub fn quality(&self) -> LossQuality {
        LossQuality::from_loss(self.loss)
    }
}

/// Picks the wide-phase winner from attempts in order.
///
/// Keeps the first strictly lowest loss and stops pulling attempts once the
/// best is at or below `accept_loss`. With a lazy iterator this is the
/// restart loop itself.
fn pick_wide(attempts: impl Iterator<Item = Candidate>, accept_loss: f64) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for (attempt, result) in attempts.enumerate() {
        debug!(attempt, loss = result.loss, "wide attempt");
        if best.is_none_or(|b| result.loss < b.loss) {
            best = Some(result);
        }
        if best.is_some_and(|b| b.loss <= accept_loss) {
            break;
        }
    }
    best
}

/// Fresh seed from the thread-local generator.
pub fn random_seed() -> u64 {
    rand::rng().random()
}

/// Filter solver for one target color.
#[derive(Debug, Clone)]
pub struct Solver {
    objective: Objective,
    config: SolverConfig,
    seed: u64,
    rng: Pcg32,
}

impl Solver {
    /// Creates a solver with default config and a random seed.
    pub fn new(target: Color) -> Self {
        Self::with_seed(target, random_seed())
    }

    /// Creates a solver with default config and a fixed seed.
    pub fn with_seed(target: Color, seed: u64) -> Self {
        Self {
            objective: Objective::new(target),
            config: SolverConfig::default(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Creates a solver with a custom config, validating it first.
    pub fn with_config(target: Color, config: SolverConfig, seed: u64) -> SolverResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::with_seed(target, seed)
        })
    }

    /// The color being approximated.
    pub fn target(&self) -> Color {
        self.objective.target()
    }

    /// Seed this solver was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Loss evaluations performed through this solver's own objective.
    ///
    /// Parallel wide attempts run on clones and are not counted.
    pub fn evaluations(&self) -> u64 {
        self.objective.evaluations()
    }

    /// Loss of `params` against the target.
    pub fn loss(&mut self, params: &FilterParams) -> f64 {
        self.objective.loss(params)
    }

    /// Runs both phases and formats the best result.
    ///
    /// Each call continues the seed stream, so repeated calls are
    /// independent runs.
    pub fn solve(&mut self) -> SolveResult {
        trace!(color = %self.objective.target(), seed = self.seed, "Solver::solve");
        let wide = self.solve_wide();
        let narrow = self.solve_narrow(&wide);
        let result = SolveResult::from_candidate(narrow);
        info!(
            color = %self.objective.target(),
            wide_loss = wide.loss,
            loss = result.loss,
            filter = %result.filter_raw,
            "Solved"
        );
        result
    }

    /// Wide phase: restarts from the fixed initial point.
    pub fn solve_wide(&mut self) -> Candidate {
        let wide = &self.config.wide;
        let schedule = wide.schedule();
        let seeds: Vec<u64> = (0..wide.attempts).map(|_| self.rng.random()).collect();
        debug!(attempts = wide.attempts, iterations = wide.iterations, "Wide phase");

        #[cfg(feature = "parallel")]
        if self.config.parallel {
            let objective = &self.objective;
            let results: Vec<Candidate> = seeds
                .par_iter()
                .map(|&seed| {
                    let mut objective = objective.clone();
                    let mut rng = Pcg32::seed_from_u64(seed);
                    spsa(&mut objective, &mut rng, &schedule, wide.initial, wide.iterations)
                })
                .collect();
            if let Some(best) = pick_wide(results.into_iter(), wide.accept_loss) {
                return best;
            }
            return Candidate::evaluate(&mut self.objective, self.config.wide.initial);
        }

        let objective = &mut self.objective;
        let attempts = seeds.iter().map(|&seed| {
            let mut rng = Pcg32::seed_from_u64(seed);
            spsa(objective, &mut rng, &schedule, wide.initial, wide.iterations)
        });
        match pick_wide(attempts, wide.accept_loss) {
            Some(best) => best,
            None => Candidate::evaluate(&mut self.objective, self.config.wide.initial),
        }
    }

    /// Narrow phase: refines `wide` with gains scaled by its loss.
    pub fn solve_narrow(&mut self, wide: &Candidate) -> Candidate {
        let narrow = &self.config.narrow;
        let schedule = narrow.schedule(wide.loss);
        debug!(iterations = narrow.iterations, wide_loss = wide.loss, "Narrow phase");

        let mut rng = Pcg32::seed_from_u64(self.rng.random());
        spsa(&mut self.objective, &mut rng, &schedule, wide.values, narrow.iterations)
    }
}
