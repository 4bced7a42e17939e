//! Ranking of repeated solves for one target.
//!
//! Runs are keyed by loss. Recording a loss that is already present replaces
//! its filter, so each distinct loss appears once.

use serde::Serialize;

use crate::SolveResult;

/// One ranked run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    /// Loss of the run.
    pub loss: f64,
    /// CSS declaration of the run.
    pub filter: String,
}

/// Solves of one target, ranked by ascending loss.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Leaderboard {
    entries: Vec<Entry>,
}

impl Leaderboard {
    /// Creates an empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a run.
    pub fn record(&mut self, loss: f64, filter: impl Into<String>) {
        let filter = filter.into();
        match self.entries.iter_mut().find(|e| e.loss == loss) {
            Some(entry) => entry.filter = filter,
            None => {
                let at = self.entries.partition_point(|e| e.loss.total_cmp(&loss).is_lt());
                self.entries.insert(at, Entry { loss, filter });
            }
        }
    }

    /// Records a solve result.
    pub fn record_result(&mut self, result: &SolveResult) {
        self.record(result.loss, result.filter.clone());
    }

    /// Lowest-loss entry.
    pub fn best(&self) -> Option<&Entry> {
        self.entries.first()
    }

    /// Entries with their 1-based rank.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &Entry)> {
        self.entries.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_by_loss() {
        let mut board = Leaderboard::new();
        board.record(7.5, "b");
        board.record(0.5, "a");
        board.record(30.0, "c");

        let ranked: Vec<_> = board.ranked().map(|(rank, e)| (rank, e.filter.as_str())).collect();
        assert_eq!(ranked, vec![(1, "a"), (2, "b"), (3, "c")]);
        assert_eq!(board.best().unwrap().loss, 0.5);
    }

    #[test]
    fn test_equal_loss_replaces() {
        let mut board = Leaderboard::new();
        board.record(2.0, "first");
        board.record(2.0, "second");
        assert_eq!(board.len(), 1);
        assert_eq!(board.best().unwrap().filter, "second");
    }

    #[test]
    fn test_empty() {
        let board = Leaderboard::new();
        assert!(board.is_empty());
        assert!(board.best().is_none());
    }
}
