//! Simultaneous Perturbation Stochastic Approximation.
//!
//! Each iteration perturbs all six parameters at once along a random
//! Rademacher direction, evaluates the loss on both sides, and steps every
//! parameter against the resulting gradient estimate. That is two loss
//! evaluations per gradient regardless of dimension, plus one to score the
//! updated point.
//!
//! # Gain sequences
//!
//! ```text
//! c_k   = c / (k + 1)^gamma          gamma = 1/6
//! a_k,i = a_i / (A + k + 1)^alpha    alpha = 1
//! g_i   = (L(v + c_k*d) - L(v - c_k*d)) / (2*c_k) * d_i
//! v_i   = fix(v_i - a_k,i * g_i)
//! ```
//!
//! The trajectory is noisy, so the best point seen is tracked separately and
//! returned instead of the final iterate.

use rand::Rng;
use serde::Serialize;
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::params::{FilterKind, PARAM_COUNT, fix};
use crate::{FilterParams, Objective};

/// Step-size decay exponent.
pub const ALPHA: f64 = 1.0;

/// Perturbation decay exponent.
pub const GAMMA: f64 = 1.0 / 6.0;

/// Gain schedule for one SPSA run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schedule {
    /// Stability offset `A` added to the iteration count in the step size.
    pub stability: f64,
    /// Per-parameter step gains `a`.
    pub gains: [f64; PARAM_COUNT],
    /// Initial perturbation magnitude `c`.
    pub perturbation: f64,
}

impl Schedule {
    /// Perturbation magnitude at iteration `k`.
    #[inline]
    pub fn ck(&self, k: usize) -> f64 {
        self.perturbation / ((k + 1) as f64).powf(GAMMA)
    }

    /// Step size of parameter `i` at iteration `k`.
    #[inline]
    pub fn ak(&self, i: usize, k: usize) -> f64 {
        self.gains[i] / (self.stability + k as f64 + 1.0).powf(ALPHA)
    }
}

/// A parameter vector with its loss.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Candidate {
    /// Filter parameters.
    pub values: FilterParams,
    /// Loss of `values` against the target.
    pub loss: f64,
}

impl Candidate {
    /// Evaluates `values` and wraps the result.
    pub fn evaluate(objective: &mut Objective, values: FilterParams) -> Self {
        let loss = objective.loss(&values);
        Self { values, loss }
    }
}

/// Draws +1 or -1 with equal probability.
#[inline]
pub fn rademacher<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    if rng.random::<f64>() > 0.5 { 1.0 } else { -1.0 }
}

/// Runs `iterations` SPSA steps from `initial` and returns the best point seen.
///
/// Only a strictly lower loss replaces the running best. With zero
/// iterations the initial point is scored and returned.
pub fn spsa<R: Rng + ?Sized>(
    objective: &mut Objective,
    rng: &mut R,
    schedule: &Schedule,
    initial: FilterParams,
    iterations: usize,
) -> Candidate {
    trace!(iterations, stability = schedule.stability, c = schedule.perturbation, "spsa");

    let mut values = initial.to_array();
    let mut deltas = [0.0; PARAM_COUNT];
    let mut high = [0.0; PARAM_COUNT];
    let mut low = [0.0; PARAM_COUNT];
    let mut best: Option<Candidate> = None;

    for k in 0..iterations {
        let ck = schedule.ck(k);
        for (((delta, hi), lo), v) in deltas.iter_mut().zip(&mut high).zip(&mut low).zip(values) {
            *delta = rademacher(rng);
            *hi = v + ck * *delta;
            *lo = v - ck * *delta;
        }

        let loss_diff = objective.loss(&FilterParams::from_array(high))
            - objective.loss(&FilterParams::from_array(low));

        for (i, kind) in FilterKind::ALL.into_iter().enumerate() {
            let g = loss_diff / (2.0 * ck) * deltas[i];
            values[i] = fix(values[i] - schedule.ak(i, k) * g, kind);
        }

        let current = Candidate::evaluate(objective, FilterParams::from_array(values));
        best = match best {
            Some(b) if b.loss <= current.loss => Some(b),
            _ => Some(current),
        };
    }

    let best = best.unwrap_or_else(|| Candidate::evaluate(objective, initial));
    debug!(loss = best.loss, "spsa done");
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use tint_core::Color;

    fn wide_schedule() -> Schedule {
        Schedule {
            stability: 5.0,
            gains: [60.0, 180.0, 18000.0, 600.0, 1.2, 1.2],
            perturbation: 15.0,
        }
    }

    #[test]
    fn test_gain_sequences() {
        let s = wide_schedule();
        assert_abs_diff_eq!(s.ck(0), 15.0);
        assert_abs_diff_eq!(s.ck(63), 15.0 / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.ak(2, 0), 3000.0);
        assert_abs_diff_eq!(s.ak(0, 4), 6.0);
    }

    #[test]
    fn test_rademacher_is_balanced() {
        let mut rng = Pcg32::seed_from_u64(7);
        let draws: Vec<f64> = (0..10_000).map(|_| rademacher(&mut rng)).collect();
        assert!(draws.iter().all(|d| *d == 1.0 || *d == -1.0));
        let sum: f64 = draws.iter().sum();
        assert!(sum.abs() < 400.0, "sum {sum}");
    }

    #[test]
    fn test_zero_iterations_returns_initial() {
        let mut obj = Objective::new(Color::new(10.0, 20.0, 30.0));
        let mut rng = Pcg32::seed_from_u64(1);
        let initial = FilterParams::from_array([50.0, 20.0, 3750.0, 50.0, 100.0, 100.0]);
        let c = spsa(&mut obj, &mut rng, &wide_schedule(), initial, 0);
        assert_eq!(c.values, initial);
        assert_eq!(c.loss, obj.loss(&initial));
    }

    #[test]
    fn test_best_is_consistent_and_in_range() {
        let mut obj = Objective::new(Color::new(200.0, 60.0, 90.0));
        let mut rng = Pcg32::seed_from_u64(42);
        let initial = FilterParams::from_array([50.0, 20.0, 3750.0, 50.0, 100.0, 100.0]);
        let c = spsa(&mut obj, &mut rng, &wide_schedule(), initial, 300);

        // The reported loss belongs to the reported vector.
        assert_eq!(obj.loss(&c.values), c.loss);
        assert_eq!(c.values.repaired(), c.values);
        assert!(c.loss.is_finite() && c.loss >= 0.0);
    }

    #[test]
    fn test_evaluation_count() {
        let mut obj = Objective::new(Color::new(1.0, 2.0, 3.0));
        let mut rng = Pcg32::seed_from_u64(3);
        spsa(&mut obj, &mut rng, &wide_schedule(), FilterParams::IDENTITY, 25);
        assert_eq!(obj.evaluations(), 75);
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let target = Color::new(30.0, 140.0, 220.0);
        let run = |seed| {
            let mut obj = Objective::new(target);
            let mut rng = Pcg32::seed_from_u64(seed);
            spsa(&mut obj, &mut rng, &wide_schedule(), FilterParams::IDENTITY, 100)
        };
        assert_eq!(run(11), run(11));
    }
}
