//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Counters collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes visited, root included.
    pub nodes: u64,

    /// Horizon nodes scored by the heuristic.
    pub leaves: u64,

    /// Nodes where the game was already decided.
    pub terminals: u64,

    /// Nodes that returned early on an alpha or beta bound.
    pub cutoffs: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add the node counters of `other`. Time is left alone.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
        self.terminals += other.terminals;
        self.cutoffs += other.cutoffs;
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.cutoffs, 0);
    }

    #[test]
    fn test_stats_nodes_per_second() {
        let mut stats = SearchStats::new();
        stats.nodes = 1000;
        stats.time_us = 500_000;
        assert_eq!(stats.nodes_per_second(), 2000.0);

        stats.time_us = 0;
        assert_eq!(stats.nodes_per_second(), 0.0);
    }

    #[test]
    fn test_stats_merge_and_reset() {
        let mut total = SearchStats::new();
        total.time_us = 7;
        let part = SearchStats {
            nodes: 10,
            leaves: 6,
            terminals: 1,
            cutoffs: 2,
            time_us: 99,
        };
        total.merge(&part);
        total.merge(&part);
        assert_eq!(total.nodes, 20);
        assert_eq!(total.leaves, 12);
        assert_eq!(total.terminals, 2);
        assert_eq!(total.cutoffs, 4);
        assert_eq!(total.time_us, 7);

        total.reset();
        assert_eq!(total, SearchStats::default());
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SearchStats::new();
        stats.nodes = 42;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats, deserialized);
    }
}
