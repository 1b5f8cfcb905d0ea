//! Random playouts and flat Monte-Carlo move evaluation.
//!
//! ## Components
//!
//! - `playout`: plays a state to the end, recording a [`Trajectory`] or
//!   just the final status
//! - `evaluator`: scores every legal move by the mean outcome of random
//!   playouts after it
//! - `config` / `stats`: evaluator settings and diagnostics
//!
//! ## Usage
//!
//! ```
//! use pente::core::GameState;
//! use pente::rollout::{RolloutConfig, RolloutEvaluator};
//!
//! let state = GameState::new_game(7);
//! let evaluator = RolloutEvaluator::new(
//!     RolloutConfig::default().with_rollouts_per_action(2).with_seed(1),
//! );
//! let values = evaluator.get_values(&state, 2).unwrap();
//! assert_eq!(values.len(), 49);
//! ```

mod config;
mod evaluator;
mod playout;
mod stats;
mod trajectory;

pub use config::RolloutConfig;
pub use evaluator::{ActionValue, RolloutEvaluator, RolloutReport};
pub use playout::{
    play_game, play_random_game, run_to_end, run_to_end_with, PlayoutPolicy, UniformRandom,
};
pub use stats::RolloutStats;
pub use trajectory::{Step, Trajectory};
