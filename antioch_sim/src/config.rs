//! Tunables for the planner.

use serde::Deserialize;

/// Search parameters for an agent's policy search.
///
/// Every field has a default, so a partial `[alice]` table is enough.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Seed for the sampling RNG. Equal seeds give equal runs.
    pub seed: u64,

    /// Imagined rollouts per planning round.
    pub search_breadth: usize,

    /// Steps per imagined rollout.
    pub search_depth: usize,

    /// Weight of the first imagined step. Squares after every step.
    pub discount: f64,

    /// How many recently followed policies are reconsidered when replanning.
    pub recent_policies: usize,

    /// Surprise above this drops the current policy.
    pub surprise_threshold: f64,

    /// Ticks to simulate.
    pub steps: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            search_breadth: 1000,
            search_depth: 10,
            discount: 0.9,
            recent_policies: 3,
            surprise_threshold: 10.0,
            steps: 12,
        }
    }
}
