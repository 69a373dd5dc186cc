//! Search statistics for diagnostics and benchmarking.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions whose children were generated.
    pub nodes_expanded: u64,

    /// Finished positions scored directly.
    pub terminal_nodes: u64,

    /// Deepest recursion, or largest explicit stack, seen.
    pub max_depth: u32,

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

    /// All positions visited.
    #[must_use]
    pub fn total_nodes(&self) -> u64 {
        self.nodes_expanded + self.terminal_nodes
    }

    /// Positions visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.total_nodes() as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    pub(crate) fn record_depth(&mut self, depth: usize) {
        let depth = u32::try_from(depth).unwrap_or(u32::MAX);
        self.max_depth = self.max_depth.max(depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.total_nodes(), 0);
        assert_eq!(stats.nodes_per_second(), 0.0);
    }

    #[test]
    fn test_nodes_per_second() {
        let mut stats = SearchStats::new();
        stats.nodes_expanded = 600;
        stats.terminal_nodes = 400;
        stats.time_us = 500_000;

        assert_eq!(stats.nodes_per_second(), 2000.0);
    }

    #[test]
    fn test_record_depth_keeps_max() {
        let mut stats = SearchStats::new();
        stats.record_depth(4);
        stats.record_depth(2);
        assert_eq!(stats.max_depth, 4);

        stats.reset();
        assert_eq!(stats.max_depth, 0);
    }
}
