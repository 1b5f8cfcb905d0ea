//! # pente
//!
//! A Pente engine with a flat Monte-Carlo move evaluator.
//!
//! ## Rules
//!
//! Two players alternate placing stones on an N×N grid. Bracketing exactly
//! two opposing stones between the placed stone and another own stone
//! captures them. A player wins with `win_length` stones in a row or
//! `captures_to_win` captured pairs; a full board with no winner is a draw.
//! All three thresholds are configurable through `RuleConfig`.
//!
//! ## Architecture
//!
//! - **Clone to branch**: `GameState` owns its board outright; simulations
//!   clone it and mutate the copy. There is no undo.
//!
//! - **Explicit randomness**: every random choice draws from a `GameRng`
//!   passed in by the caller, so any game or evaluation can be replayed
//!   from its seed.
//!
//! - **Flat rollouts**: each legal move is scored by the mean outcome of
//!   uniformly random playouts after it. No search tree.
//!
//! ## Modules
//!
//! - `core`: players, board, moves, rule configuration, RNG, game state
//! - `rules`: move legality, captures, line and terminal detection
//! - `rollout`: random playouts, trajectories and the rollout evaluator
//! - `error`: the crate error type
//!
//! With the `python` feature the crate also builds a Python extension
//! module exposing a `Pente` class.

pub mod core;
pub mod error;
pub mod rollout;
pub mod rules;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, GameRng, GameState, GameStatus, Move, Player, PlayerMap, RuleConfig,
};

pub use crate::error::{MoveRejection, PenteError, Result};

pub use crate::rules::{GameResult, PenteRules};

pub use crate::rollout::{
    play_random_game, run_to_end, ActionValue, PlayoutPolicy, RolloutConfig, RolloutEvaluator,
    RolloutReport, RolloutStats, Step, Trajectory, UniformRandom,
};
