//! Game state.
//!
//! ## GameState
//!
//! Complete state of one game:
//! - Board
//! - Rules engine (configured by `RuleConfig`)
//! - Player to move, capture-pair counts, stones placed
//! - Terminal status and last move
//!
//! A state is mutated in place one move at a time, or cloned to branch a
//! simulation. Clones share nothing with their source.

use serde::{Deserialize, Serialize};

use super::action::Move;
use super::board::Board;
use super::config::RuleConfig;
use super::player::{Player, PlayerMap};
use crate::error::{PenteError, Result};
use crate::rules::{GameResult, PenteRules};

/// Terminal status of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Final result, or `None` while the game continues.
    #[must_use]
    pub fn result(self) -> Option<GameResult> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(GameResult::Winner(player)),
            GameStatus::Draw => Some(GameResult::Draw),
        }
    }
}

/// Complete state of a Pente game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) rules: PenteRules,
    pub(crate) to_move: Player,
    pub(crate) captures: PlayerMap<u32>,
    pub(crate) stones_placed: u32,
    pub(crate) status: GameStatus,
    pub(crate) last_move: Option<Move>,
}

impl GameState {
    /// New game with default rules on a `board_size` board.
    ///
    /// Panics if `board_size` is 0; use [`GameState::with_config`] to
    /// handle that as an error.
    #[must_use]
    pub fn new_game(board_size: usize) -> Self {
        assert!(board_size > 0, "Board must have at least 1 cell");
        Self::fresh(RuleConfig::new(board_size))
    }

    /// New game with explicit rules.
    pub fn with_config(config: RuleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::fresh(config))
    }

    /// Set up an arbitrary position.
    ///
    /// Terminal status is computed from the whole board, so a position
    /// that already contains a winning line is returned as won.
    pub fn from_position(
        config: RuleConfig,
        board: Board,
        to_move: Player,
        captures: PlayerMap<u32>,
    ) -> Result<Self> {
        config.validate()?;
        if board.size() != config.board_size {
            return Err(PenteError::invalid_config(format!(
                "board is {}x{} but rules expect {}",
                board.size(),
                board.size(),
                config.board_size
            )));
        }

        let rules = PenteRules::new(config);
        let status = rules.scan_status(&board, &captures);
        let stones_placed = (board.stone_count(Player::One) + board.stone_count(Player::Two)) as u32;

        Ok(Self {
            board,
            rules,
            to_move,
            captures,
            stones_placed,
            status,
            last_move: None,
        })
    }

    fn fresh(config: RuleConfig) -> Self {
        Self {
            board: Board::new(config.board_size),
            rules: PenteRules::new(config),
            to_move: Player::One,
            captures: PlayerMap::default(),
            stones_placed: 0,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    /// Back to an empty board under the same rules.
    pub fn reset(&mut self) {
        *self = Self::fresh(*self.config());
    }

    /// Legal moves for the player to move, row-major.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.rules.legal_moves(self)
    }

    /// Whether `mv` would be accepted by [`GameState::apply_move`].
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.rules.check_move(self, mv).is_ok()
    }

    /// Play a move for the player to move.
    ///
    /// Returns the number of pairs captured.
    pub fn apply_move(&mut self, mv: Move) -> Result<u32> {
        let rules = self.rules;
        rules.apply_move(self, mv)
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.status.result()
    }

    /// Player to move. After a terminal move this is the player who
    /// made it.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// Capture-pairs taken by `player`.
    #[must_use]
    pub fn captures(&self, player: Player) -> u32 {
        self.captures[player]
    }

    /// Total stones placed, including ones later captured.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.stones_placed
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Read-only board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &RuleConfig {
        self.rules.config()
    }

    #[must_use]
    pub fn rules(&self) -> &PenteRules {
        &self.rules
    }
}
