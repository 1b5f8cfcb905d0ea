//! Rules engine for Pente.
//!
//! `PenteRules` defines:
//! - Legal placements for each game state
//! - How a placement modifies state (stone, captures, turn)
//! - Win/draw conditions
//!
//! `GameState` owns a `PenteRules` and delegates to it; the helpers in
//! `capture` and `lines` are pure functions over a `Board`.

pub mod capture;
pub mod engine;
pub mod lines;

pub use engine::{GameResult, PenteRules};
