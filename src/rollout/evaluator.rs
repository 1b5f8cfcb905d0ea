//! Flat Monte-Carlo evaluator.
//!
//! Every legal move of a position is scored by playing it and then
//! running a fixed number of playouts to the end. The value of a move is
//! the mean outcome (+1 win, -1 loss, 0 draw) for the player who made it.
//!
//! ## Determinism
//!
//! Each candidate move gets its own RNG stream, derived from the base seed
//! and the move's index. Rollouts fork from that stream. No RNG is shared
//! between actions, so running batches on the rayon pool gives the same
//! numbers as running them in order.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{GameRng, GameState, Move, Player};
use crate::error::{PenteError, Result};

use super::config::RolloutConfig;
use super::playout::{run_to_end_with, PlayoutPolicy, UniformRandom};
use super::stats::RolloutStats;

/// Rollout tallies for one candidate move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionValue {
    pub mv: Move,
    /// Mean outcome in [-1, +1].
    pub value: f64,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl ActionValue {
    fn new(mv: Move) -> Self {
        Self {
            mv,
            value: 0.0,
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    /// Number of rollouts behind this estimate.
    #[must_use]
    pub fn visits(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    fn record(&mut self, reward: f64) {
        if reward > 0.0 {
            self.wins += 1;
        } else if reward < 0.0 {
            self.losses += 1;
        } else {
            self.draws += 1;
        }
    }

    fn finish(mut self) -> Self {
        let visits = self.visits();
        if visits > 0 {
            self.value = (f64::from(self.wins) - f64::from(self.losses)) / f64::from(visits);
        }
        self
    }
}

/// Result of evaluating one position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RolloutReport {
    /// Player to move in the evaluated position; values are from this
    /// player's point of view.
    pub player: Player,

    /// One entry per legal move, in legal-move order.
    pub actions: Vec<ActionValue>,

    pub stats: RolloutStats,
}

impl RolloutReport {
    /// Values in legal-move order.
    pub fn values(&self) -> Vec<f64> {
        self.actions.iter().map(|a| a.value).collect()
    }

    /// Highest-valued action; the earliest one wins ties.
    pub fn best(&self) -> Option<&ActionValue> {
        self.actions.iter().fold(None, |best, action| match best {
            Some(b) if b.value >= action.value => Some(b),
            _ => Some(action),
        })
    }

    pub fn best_move(&self) -> Option<Move> {
        self.best().map(|a| a.mv)
    }
}

/// Flat Monte-Carlo rollout evaluator.
pub struct RolloutEvaluator {
    config: RolloutConfig,
    policy: Box<dyn PlayoutPolicy>,
}

impl Default for RolloutEvaluator {
    fn default() -> Self {
        Self::new(RolloutConfig::default())
    }
}

impl RolloutEvaluator {
    /// Evaluator with uniformly random playouts.
    pub fn new(config: RolloutConfig) -> Self {
        Self {
            config,
            policy: Box::new(UniformRandom),
        }
    }

    /// Set a custom playout policy.
    pub fn with_policy<P: PlayoutPolicy + 'static>(mut self, policy: P) -> Self {
        self.policy = Box::new(policy);
        self
    }

    pub fn config(&self) -> &RolloutConfig {
        &self.config
    }

    /// Mean rollout outcome of every legal move, in legal-move order.
    ///
    /// `rollouts_per_action` overrides the configured budget for this call.
    pub fn get_values(&self, state: &GameState, rollouts_per_action: u32) -> Result<Vec<f64>> {
        let config = self.config.with_rollouts_per_action(rollouts_per_action);
        Ok(self.run(state, &config)?.values())
    }

    /// Full evaluation with per-move tallies and statistics.
    pub fn evaluate(&self, state: &GameState) -> Result<RolloutReport> {
        self.run(state, &self.config)
    }

    /// Move with the highest estimated value, earliest on ties.
    pub fn best_move(&self, state: &GameState) -> Result<Option<Move>> {
        Ok(self.evaluate(state)?.best_move())
    }

    fn run(&self, state: &GameState, config: &RolloutConfig) -> Result<RolloutReport> {
        config.validate()?;
        if state.is_terminal() {
            return Err(PenteError::GameOver);
        }

        let start = Instant::now();
        let player = state.current_player();
        let moves = state.legal_moves();
        if moves.is_empty() {
            return Err(PenteError::NoLegalMoves);
        }

        let base = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let rollouts = config.rollouts_per_action;
        debug!(
            actions = moves.len(),
            rollouts,
            seed = base.seed(),
            parallel = config.parallel,
            "evaluating position"
        );

        let evaluate_one = |(index, &mv): (usize, &Move)| {
            let stream = base.derive(index as u64);
            self.evaluate_action(state, mv, player, rollouts, stream)
        };
        let results: Vec<(ActionValue, u64)> = if config.parallel {
            moves.par_iter().enumerate().map(evaluate_one).collect::<Result<_>>()?
        } else {
            moves.iter().enumerate().map(evaluate_one).collect::<Result<_>>()?
        };

        let mut stats = RolloutStats::new();
        stats.actions = results.len();
        stats.simulations = results.len() as u64 * u64::from(rollouts);
        let mut actions = Vec::with_capacity(results.len());
        for (action, plies) in results {
            stats.playout_plies += plies;
            actions.push(action);
        }
        stats.time_us = start.elapsed().as_micros() as u64;

        debug!(
            simulations = stats.simulations,
            time_us = stats.time_us,
            sims_per_sec = stats.simulations_per_second(),
            "evaluation finished"
        );
        Ok(RolloutReport {
            player,
            actions,
            stats,
        })
    }

    /// Play `mv` once, then run `rollouts` playouts from the result.
    /// Returns the tallies and the total number of playout moves.
    fn evaluate_action(
        &self,
        state: &GameState,
        mv: Move,
        player: Player,
        rollouts: u32,
        mut stream: GameRng,
    ) -> Result<(ActionValue, u64)> {
        let mut child = state.clone();
        child.apply_move(mv)?;

        let mut action = ActionValue::new(mv);
        let mut plies = 0u64;
        for _ in 0..rollouts {
            let mut rng = stream.fork();
            let (status, length) = run_to_end_with(self.policy.as_ref(), child.clone(), &mut rng)?;
            let reward = status.result().map_or(0.0, |r| r.reward_for(player));
            action.record(reward);
            plies += length as u64;
        }

        let action = action.finish();
        trace!(%mv, value = action.value, wins = action.wins, losses = action.losses, "action evaluated");
        Ok((action, plies))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Cell, PlayerMap, RuleConfig};

    fn seeded(rollouts: u32) -> RolloutEvaluator {
        RolloutEvaluator::new(
            RolloutConfig::default()
                .with_rollouts_per_action(rollouts)
                .with_seed(42),
        )
    }

    #[test]
    fn test_values_one_per_legal_move() {
        let mut state = GameState::new_game(5);
        state.apply_move(Move::new(2, 2)).unwrap();

        let values = seeded(4).get_values(&state, 4).unwrap();
        assert_eq!(values.len(), 24);
        assert!(values.iter().all(|v| (-1.0..=1.0).contains(v)));
    }

    #[test]
    fn test_terminal_state_is_game_over() {
        let config = RuleConfig::new(3).with_win_length(1);
        let mut state = GameState::with_config(config).unwrap();
        state.apply_move(Move::new(0, 0)).unwrap();

        assert_eq!(seeded(4).get_values(&state, 4), Err(PenteError::GameOver));
        assert_eq!(seeded(4).best_move(&state), Err(PenteError::GameOver));
    }

    #[test]
    fn test_zero_rollouts_rejected() {
        let state = GameState::new_game(5);
        let result = seeded(4).get_values(&state, 0);
        assert!(matches!(result, Err(PenteError::InvalidConfig { .. })));
    }

    #[test]
    fn test_serial_and_parallel_agree() {
        let state = GameState::new_game(6);
        let serial = RolloutEvaluator::new(
            RolloutConfig::default()
                .with_rollouts_per_action(8)
                .with_seed(9)
                .with_parallel(false),
        );
        let parallel = RolloutEvaluator::new(
            RolloutConfig::default()
                .with_rollouts_per_action(8)
                .with_seed(9)
                .with_parallel(true),
        );

        let a = serial.evaluate(&state).unwrap();
        let b = parallel.evaluate(&state).unwrap();
        assert_eq!(a.actions, b.actions);
        assert_eq!(a.stats.playout_plies, b.stats.playout_plies);
    }

    #[test]
    fn test_immediate_win_scores_one() {
        // Player 1 has four in row 0; (0, 4) completes five.
        let mut board = Board::new(7);
        for col in 0..4 {
            board.set(0, col, Cell::Player1).unwrap();
            board.set(6, col * 2, Cell::Player2).unwrap();
        }
        let state =
            GameState::from_position(RuleConfig::new(7), board, Player::One, PlayerMap::default())
                .unwrap();

        let report = seeded(10).evaluate(&state).unwrap();
        let winning = report
            .actions
            .iter()
            .find(|a| a.mv == Move::new(0, 4))
            .unwrap();
        assert_eq!(winning.value, 1.0);
        assert_eq!(winning.wins, 10);
        assert_eq!(report.best_move(), Some(Move::new(0, 4)));
    }

    #[test]
    fn test_report_tallies_and_stats() {
        let state = GameState::new_game(4);
        let report = seeded(5).evaluate(&state).unwrap();

        assert_eq!(report.player, Player::One);
        assert_eq!(report.actions.len(), 16);
        assert!(report.actions.iter().all(|a| a.visits() == 5));
        assert_eq!(report.stats.actions, 16);
        assert_eq!(report.stats.simulations, 80);
        assert!(report.stats.avg_playout_length() > 0.0);
    }

    #[test]
    fn test_best_breaks_ties_by_order() {
        let report = RolloutReport {
            player: Player::One,
            actions: vec![
                ActionValue::new(Move::new(0, 0)),
                ActionValue::new(Move::new(0, 1)),
            ],
            stats: RolloutStats::new(),
        };
        assert_eq!(report.best_move(), Some(Move::new(0, 0)));
    }

    /// Always plays the first legal move (row-major).
    struct FirstMove;

    impl PlayoutPolicy for FirstMove {
        fn select(&self, _state: &GameState, moves: &[Move], _rng: &mut GameRng) -> Option<Move> {
            moves.first().copied()
        }
    }

    #[test]
    fn test_custom_policy_drives_rollouts() {
        // 3x3, three in a row: after each opening move the rest of the
        // board is filled row-major, so every outcome is fixed.
        let config = RuleConfig::new(3).with_win_length(3);
        let state = GameState::with_config(config).unwrap();
        let expected = vec![1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, -1.0, -1.0];

        for (seed, parallel) in [(1, false), (99, true), (12345, false)] {
            let evaluator = RolloutEvaluator::new(
                RolloutConfig::default()
                    .with_seed(seed)
                    .with_parallel(parallel),
            )
            .with_policy(FirstMove);
            assert_eq!(evaluator.get_values(&state, 3).unwrap(), expected);
        }

        let evaluator = RolloutEvaluator::new(
            RolloutConfig::default()
                .with_rollouts_per_action(4)
                .with_seed(5),
        )
        .with_policy(FirstMove);
        let report = evaluator.evaluate(&state).unwrap();
        assert_eq!(report.actions[3].draws, 4);
        assert_eq!(report.actions[8].losses, 4);
        // Opening (0, 0): (0, 2), (1, 1), (2, 0) completes on move 7
        assert_eq!(report.actions[0].wins, 4);
        assert_eq!(report.stats.playout_plies, 4 * (6 + 6 + 6 + 8 + 8 + 8 + 8 + 7 + 7));
        assert_eq!(evaluator.best_move(&state).unwrap(), Some(Move::new(0, 0)));
    }

    #[test]
    fn test_action_value_finish() {
        let mut action = ActionValue::new(Move::new(1, 1));
        action.record(1.0);
        action.record(1.0);
        action.record(-1.0);
        action.record(0.0);
        let action = action.finish();
        assert_eq!(action.visits(), 4);
        assert_eq!(action.value, 0.25);
    }
}
