//! Core engine types: players, board, moves, state, RNG, configuration.
//!
//! These are the building blocks the rules engine and rollout driver
//! operate on.

pub mod action;
pub mod board;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::Move;
pub use board::{Board, Cell};
pub use config::RuleConfig;
pub use player::{Player, PlayerMap};
pub use rng::GameRng;
pub use state::{GameState, GameStatus};
