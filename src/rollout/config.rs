//! Rollout evaluator configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PenteError, Result};

/// Rollout evaluator configuration parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolloutConfig {
    /// Random playouts run after each candidate move (default: 100).
    pub rollouts_per_action: u32,

    /// Random seed for the playout streams.
    /// `Some` gives reproducible estimates; `None` draws a fresh seed
    /// from OS entropy on every evaluation.
    pub seed: Option<u64>,

    /// Spread per-action batches over the rayon thread pool
    /// (default: true). Results do not depend on this flag.
    pub parallel: bool,
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self {
            rollouts_per_action: 100,
            seed: None,
            parallel: true,
        }
    }
}

impl RolloutConfig {
    pub fn with_rollouts_per_action(mut self, rollouts: u32) -> Self {
        self.rollouts_per_action = rollouts;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.rollouts_per_action == 0 {
            return Err(PenteError::invalid_config("rollouts_per_action must be at least 1"));
        }
        Ok(())
    }
}
