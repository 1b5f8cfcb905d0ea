//! Trajectories: the record of one played-out game.
//!
//! Each step pairs the state *before* a move with that move. The last
//! step holds the terminal state and no move, so a trajectory always has
//! one more entry than moves played and its outcome can be read from the
//! final entry.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Move, Player};
use crate::rules::GameResult;

/// A single entry in a trajectory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// State before `mv` was played (or the terminal state).
    pub state: GameState,

    /// Move played from `state`; `None` on the terminal entry.
    pub mv: Option<Move>,
}

impl Step {
    pub fn new(state: GameState, mv: Option<Move>) -> Self {
        Self { state, mv }
    }

    /// Player to move at this step.
    pub fn player(&self) -> Player {
        self.state.current_player()
    }

    pub fn is_terminal(&self) -> bool {
        self.mv.is_none()
    }
}

/// A complete game from some start position to its end.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trajectory {
    /// All steps, in play order.
    pub steps: Vec<Step>,

    /// Seed of the RNG that chose the moves.
    pub seed: u64,
}

impl Trajectory {
    /// Create an empty trajectory.
    pub fn new(seed: u64) -> Self {
        Self {
            steps: Vec::new(),
            seed,
        }
    }

    /// Append a step.
    pub fn push(&mut self, state: GameState, mv: Option<Move>) {
        self.steps.push(Step::new(state, mv));
    }

    /// Number of entries (moves played + 1 once complete).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Number of moves played.
    pub fn move_count(&self) -> usize {
        self.steps.iter().filter(|s| s.mv.is_some()).count()
    }

    /// Moves in play order.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.steps.iter().filter_map(|s| s.mv)
    }

    /// Final state, if the game was completed.
    pub fn terminal_state(&self) -> Option<&GameState> {
        self.steps
            .last()
            .filter(|s| s.is_terminal() && s.state.is_terminal())
            .map(|s| &s.state)
    }

    /// The step holding the state just before the deciding move.
    pub fn pre_terminal(&self) -> Option<&Step> {
        let n = self.steps.len();
        if n < 2 {
            return None;
        }
        self.steps.get(n - 2)
    }

    /// Final result, if the game was completed.
    pub fn result(&self) -> Option<GameResult> {
        self.terminal_state().and_then(GameState::result)
    }

    pub fn winner(&self) -> Option<Player> {
        self.terminal_state().and_then(GameState::winner)
    }

    /// Outcome from `player`'s point of view (+1 / -1 / 0), or `None` for
    /// an unfinished trajectory.
    pub fn reward_for(&self, player: Player) -> Option<f64> {
        self.result().map(|r| r.reward_for(player))
    }

    /// Outcome for the mover at each non-terminal step, for value targets.
    pub fn value_targets(&self) -> Vec<f64> {
        let Some(result) = self.result() else {
            return Vec::new();
        };
        self.steps
            .iter()
            .filter(|s| !s.is_terminal())
            .map(|s| result.reward_for(s.player()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_game() -> Trajectory {
        let mut traj = Trajectory::new(42);
        let mut state = GameState::new_game(5);
        let moves = [Move::new(0, 0), Move::new(4, 4)];
        for mv in moves {
            traj.push(state.clone(), Some(mv));
            state.apply_move(mv).unwrap();
        }
        traj.push(state, None);
        traj
    }

    #[test]
    fn test_trajectory_creation() {
        let traj = Trajectory::new(7);
        assert!(traj.is_empty());
        assert_eq!(traj.seed, 7);
        assert!(traj.terminal_state().is_none());
        assert!(traj.pre_terminal().is_none());
    }

    #[test]
    fn test_steps_hold_state_before_move() {
        let traj = short_game();
        assert_eq!(traj.len(), 3);
        assert_eq!(traj.move_count(), 2);

        let first = traj.get(0).unwrap();
        assert_eq!(first.state.move_count(), 0);
        assert_eq!(first.player(), Player::One);
        assert_eq!(first.mv, Some(Move::new(0, 0)));

        let second = traj.pre_terminal().unwrap();
        assert_eq!(second.state.move_count(), 1);
        assert_eq!(second.player(), Player::Two);

        let moves: Vec<_> = traj.moves().collect();
        assert_eq!(moves, vec![Move::new(0, 0), Move::new(4, 4)]);
    }

    #[test]
    fn test_unfinished_game_has_no_result() {
        let traj = short_game();
        // Last entry has no move but the game is still running
        assert!(traj.steps.last().unwrap().is_terminal());
        assert!(traj.terminal_state().is_none());
        assert_eq!(traj.result(), None);
        assert_eq!(traj.winner(), None);
        assert_eq!(traj.reward_for(Player::One), None);
        assert!(traj.value_targets().is_empty());
    }

    #[test]
    fn test_value_targets_alternate() {
        let mut traj = Trajectory::new(0);
        let config = crate::core::RuleConfig::new(5).with_win_length(2);
        let mut state = GameState::with_config(config).unwrap();
        for mv in [Move::new(0, 0), Move::new(4, 4), Move::new(0, 1)] {
            traj.push(state.clone(), Some(mv));
            state.apply_move(mv).unwrap();
        }
        traj.push(state, None);

        assert_eq!(traj.winner(), Some(Player::One));
        assert_eq!(traj.value_targets(), vec![1.0, -1.0, 1.0]);
        assert_eq!(traj.reward_for(Player::Two), Some(-1.0));
    }

    #[test]
    fn test_trajectory_serialization() {
        let traj = short_game();
        let json = serde_json::to_string(&traj).unwrap();
        let deserialized: Trajectory = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, traj);
    }
}
