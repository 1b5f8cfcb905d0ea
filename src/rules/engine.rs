//! Pente rules: move legality, capture resolution and terminal detection.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Board, Cell, GameState, GameStatus, Move, Player, PlayerMap, RuleConfig};
use crate::error::{MoveRejection, PenteError, Result};

use super::capture::{find_captures, remove_captured};
use super::lines::{find_line, has_line_through};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Draw (full board).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Outcome from `player`'s point of view: +1 win, -1 loss, 0 draw.
    #[must_use]
    pub fn reward_for(&self, player: Player) -> f64 {
        match self {
            GameResult::Winner(p) if *p == player => 1.0,
            GameResult::Winner(_) => -1.0,
            GameResult::Draw => 0.0,
        }
    }
}

/// Rules engine for Pente.
///
/// Stateless apart from its configuration, so it is `Copy` and every
/// `GameState` carries its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PenteRules {
    config: RuleConfig,
}

impl PenteRules {
    #[must_use]
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    /// Get the rule configuration.
    #[must_use]
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Every legal placement for the player to move, in row-major order.
    ///
    /// Empty for terminal states.
    pub fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        if state.is_terminal() {
            return Vec::new();
        }
        if self.opening_restricted(state) {
            let center = Move::center(self.config.board_size);
            return if state.board.cell(center) == Some(Cell::Empty) {
                vec![center]
            } else {
                Vec::new()
            };
        }
        state.board.empty_cells().collect()
    }

    /// Check a move without applying it.
    pub fn check_move(&self, state: &GameState, mv: Move) -> Result<()> {
        if state.is_terminal() {
            return Err(PenteError::GameOver);
        }
        let reject = |reason| Err(PenteError::IllegalMove { mv, reason });
        match state.board.cell(mv) {
            None => return reject(MoveRejection::OutOfBounds),
            Some(cell) if !cell.is_empty() => return reject(MoveRejection::Occupied),
            Some(_) => {}
        }
        if self.opening_restricted(state) && mv != Move::center(self.config.board_size) {
            return reject(MoveRejection::CenterOpening);
        }
        Ok(())
    }

    /// Place the mover's stone, resolve captures, update terminal status
    /// and pass the turn.
    ///
    /// Returns the number of pairs captured. On error the state is
    /// untouched.
    pub fn apply_move(&self, state: &mut GameState, mv: Move) -> Result<u32> {
        self.check_move(state, mv)?;

        let mover = state.to_move;
        state.board.put(mv, Cell::from(mover));

        let captured = find_captures(&state.board, mv, mover);
        let pairs = remove_captured(&mut state.board, &captured);
        state.captures[mover] += pairs;
        state.stones_placed += 1;
        state.last_move = Some(mv);

        state.status = self.status_after_move(&state.board, &state.captures, mover, mv);
        if !state.status.is_terminal() {
            state.to_move = mover.opponent();
        }

        trace!(%mv, ?mover, pairs, status = ?state.status, "applied move");
        Ok(pairs)
    }

    /// Terminal check after `mover` played `mv`.
    ///
    /// Only the mover's capture count and the lines through `mv` can have
    /// changed, so the scan is local.
    pub fn status_after_move(
        &self,
        board: &Board,
        captures: &PlayerMap<u32>,
        mover: Player,
        mv: Move,
    ) -> GameStatus {
        if captures[mover] >= self.config.captures_to_win {
            return GameStatus::Won(mover);
        }
        if has_line_through(board, mv, mover, self.config.win_length) {
            return GameStatus::Won(mover);
        }
        if board.is_full() {
            return GameStatus::Draw;
        }
        GameStatus::InProgress
    }

    /// Terminal check over the whole board, for positions that were not
    /// reached move by move.
    pub fn scan_status(&self, board: &Board, captures: &PlayerMap<u32>) -> GameStatus {
        for player in Player::ALL {
            if captures[player] >= self.config.captures_to_win {
                return GameStatus::Won(player);
            }
        }
        if let Some(player) = find_line(board, self.config.win_length) {
            return GameStatus::Won(player);
        }
        if board.is_full() {
            return GameStatus::Draw;
        }
        GameStatus::InProgress
    }

    fn opening_restricted(&self, state: &GameState) -> bool {
        self.config.center_opening && state.stones_placed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Player::Two);
        assert!(!result.is_winner(Player::One));
        assert!(result.is_winner(Player::Two));
        assert!(!GameResult::Draw.is_winner(Player::One));
    }

    #[test]
    fn test_reward_for() {
        let result = GameResult::Winner(Player::One);
        assert_eq!(result.reward_for(Player::One), 1.0);
        assert_eq!(result.reward_for(Player::Two), -1.0);
        assert_eq!(GameResult::Draw.reward_for(Player::One), 0.0);
    }

    #[test]
    fn test_legal_moves_with_center_opening() {
        let state = GameState::with_config(RuleConfig::new(9).with_center_opening(true)).unwrap();
        assert_eq!(state.legal_moves(), vec![Move::new(4, 4)]);

        let state = GameState::new_game(9);
        assert_eq!(state.legal_moves().len(), 81);
    }

    #[test]
    fn test_center_opening_rejects_off_center() {
        let mut state = GameState::with_config(RuleConfig::new(9).with_center_opening(true)).unwrap();
        let err = state.apply_move(Move::new(0, 0)).unwrap_err();
        assert_eq!(
            err,
            PenteError::IllegalMove {
                mv: Move::new(0, 0),
                reason: MoveRejection::CenterOpening
            }
        );
        assert_eq!(state.move_count(), 0);

        state.apply_move(Move::new(4, 4)).unwrap();
        assert_eq!(state.legal_moves().len(), 80);
    }

    #[test]
    fn test_check_move_rejections() {
        let mut state = GameState::new_game(5);
        state.apply_move(Move::new(0, 0)).unwrap();

        assert_eq!(
            state.rules().check_move(&state, Move::new(0, 0)),
            Err(PenteError::IllegalMove {
                mv: Move::new(0, 0),
                reason: MoveRejection::Occupied
            })
        );
        assert_eq!(
            state.rules().check_move(&state, Move::new(5, 0)),
            Err(PenteError::IllegalMove {
                mv: Move::new(5, 0),
                reason: MoveRejection::OutOfBounds
            })
        );
        assert!(state.rules().check_move(&state, Move::new(1, 1)).is_ok());
    }

    #[test]
    fn test_scan_status_capture_win() {
        let rules = PenteRules::new(RuleConfig::new(9));
        let board = Board::new(9);
        let captures = PlayerMap::new(0, 5);
        assert_eq!(rules.scan_status(&board, &captures), GameStatus::Won(Player::Two));
    }

    #[test]
    fn test_scan_status_captures_precede_lines() {
        let rules = PenteRules::new(RuleConfig::new(9));
        let mut board = Board::new(9);
        for col in 0..5 {
            board.set(0, col, Cell::Player1).unwrap();
        }
        assert_eq!(
            rules.scan_status(&board, &PlayerMap::default()),
            GameStatus::Won(Player::One)
        );
        assert_eq!(
            rules.scan_status(&board, &PlayerMap::new(0, 5)),
            GameStatus::Won(Player::Two)
        );
    }

    #[test]
    fn test_status_after_move_draw() {
        let rules = PenteRules::new(RuleConfig::new(2));
        let mut board = Board::new(2);
        board.set(0, 0, Cell::Player1).unwrap();
        board.set(0, 1, Cell::Player2).unwrap();
        board.set(1, 0, Cell::Player2).unwrap();
        board.set(1, 1, Cell::Player1).unwrap();

        let status = rules.status_after_move(&board, &PlayerMap::default(), Player::One, Move::new(1, 1));
        assert_eq!(status, GameStatus::Draw);
    }
}
