//! Rollout statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one evaluation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RolloutStats {
    /// Candidate moves evaluated.
    pub actions: usize,

    /// Playouts run across all actions.
    pub simulations: u64,

    /// Moves played inside playouts.
    pub playout_plies: u64,

    /// Total time spent evaluating (microseconds).
    pub time_us: u64,
}

impl RolloutStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate simulations per second.
    #[must_use]
    pub fn simulations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.simulations as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Average playout length in moves.
    #[must_use]
    pub fn avg_playout_length(&self) -> f64 {
        if self.simulations == 0 {
            0.0
        } else {
            self.playout_plies as f64 / self.simulations as f64
        }
    }
}
