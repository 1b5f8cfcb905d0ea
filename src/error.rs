//! Error types for the Pente engine.
//!
//! Every fallible operation reports a [`PenteError`] before touching any
//! state, so a failed call never leaves a board half-updated.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::action::Move;

/// Why a move was refused by the rules engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveRejection {
    /// The coordinate lies outside the grid.
    OutOfBounds,
    /// The cell already holds a stone.
    Occupied,
    /// The opening move must be played on the center cell.
    CenterOpening,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::OutOfBounds => write!(f, "position out of bounds"),
            MoveRejection::Occupied => write!(f, "position already occupied"),
            MoveRejection::CenterOpening => write!(f, "first move must be the center cell"),
        }
    }
}

/// Main error type for the crate.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum PenteError {
    #[error("coordinate ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: Move, reason: MoveRejection },

    #[error("game already over")]
    GameOver,

    /// A non-terminal state produced no legal moves. Indicates a bug in
    /// terminal detection, never a recoverable condition.
    #[error("no legal moves in a non-terminal state")]
    NoLegalMoves,

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl PenteError {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        PenteError::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PenteError>;
