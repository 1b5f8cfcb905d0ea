//! Rule configuration.
//!
//! Pente variants differ in board size and in a handful of thresholds.
//! `RuleConfig` gathers them so the rules engine never hardcodes a number.

use serde::{Deserialize, Serialize};

use crate::error::{PenteError, Result};

/// Rule parameters for a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Side length of the square board (default: 19).
    pub board_size: usize,

    /// Stones in an unbroken line needed to win (default: 5).
    pub win_length: usize,

    /// Capture-pairs needed to win (default: 5).
    pub captures_to_win: u32,

    /// Force the first stone onto the center cell (default: off).
    pub center_opening: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            board_size: 19,
            win_length: 5,
            captures_to_win: 5,
            center_opening: false,
        }
    }
}

impl RuleConfig {
    /// Default rules on a board of the given size.
    pub fn new(board_size: usize) -> Self {
        Self::default().with_board_size(board_size)
    }

    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    pub fn with_win_length(mut self, length: usize) -> Self {
        self.win_length = length;
        self
    }

    pub fn with_captures_to_win(mut self, pairs: u32) -> Self {
        self.captures_to_win = pairs;
        self
    }

    pub fn with_center_opening(mut self, enabled: bool) -> Self {
        self.center_opening = enabled;
        self
    }

    /// Reject configurations the engine cannot play.
    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 {
            return Err(PenteError::invalid_config("board_size must be at least 1"));
        }
        if self.win_length == 0 {
            return Err(PenteError::invalid_config("win_length must be at least 1"));
        }
        if self.captures_to_win == 0 {
            return Err(PenteError::invalid_config("captures_to_win must be at least 1"));
        }
        Ok(())
    }
}
