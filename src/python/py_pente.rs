//! `Pente` game bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameRng, GameState, GameStatus, Move, Player, RuleConfig};
use crate::rollout::{play_random_game, RolloutConfig, RolloutEvaluator};

/// A Pente game.
///
/// Players are encoded as `1` (first player) and `-1` (second player), the
/// same values used for stones in `get_board()`.
#[pyclass(name = "Pente")]
#[derive(Clone, Debug)]
pub struct PyPente {
    state: GameState,
    rng: GameRng,
}

impl PyPente {
    fn from_state(state: GameState, rng: GameRng) -> Self {
        Self { state, rng }
    }

    /// Seed for the next random operation: the explicit one if given,
    /// otherwise the next fork of this game's RNG.
    fn next_seed(&mut self, seed: Option<u64>) -> u64 {
        seed.unwrap_or_else(|| self.rng.fork().seed())
    }
}

fn player_from_sign(player: i8) -> PyResult<Player> {
    Player::from_sign(player)
        .ok_or_else(|| PyValueError::new_err(format!("player must be 1 or -1, got {player}")))
}

#[pymethods]
impl PyPente {
    /// Create a new game.
    ///
    /// # Arguments
    /// - size: Board side length
    /// - win_length: Stones in a row needed to win
    /// - captures_to_win: Captured pairs needed to win
    /// - center_opening: Restrict the first move to the center cell
    /// - seed: Seed for random playouts (OS entropy if omitted)
    #[new]
    #[pyo3(signature = (
        size = 19,
        win_length = 5,
        captures_to_win = 5,
        center_opening = false,
        seed = None
    ))]
    fn new(
        size: usize,
        win_length: usize,
        captures_to_win: u32,
        center_opening: bool,
        seed: Option<u64>,
    ) -> PyResult<Self> {
        let config = RuleConfig::new(size)
            .with_win_length(win_length)
            .with_captures_to_win(captures_to_win)
            .with_center_opening(center_opening);
        let state = GameState::with_config(config)?;
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Ok(Self::from_state(state, rng))
    }

    /// Board side length.
    #[getter]
    fn size(&self) -> usize {
        self.state.board().size()
    }

    /// Player to move: 1 or -1.
    #[getter]
    fn current_player(&self) -> i8 {
        self.state.current_player().sign()
    }

    /// Legal moves as (row, col) tuples, row-major.
    fn legal_moves(&self) -> Vec<(usize, usize)> {
        self.state.legal_moves().into_iter().map(Into::into).collect()
    }

    /// Place a stone for the player to move.
    ///
    /// Returns True if the move ended the game. Raises ValueError for an
    /// illegal move or a finished game.
    fn step(&mut self, row: usize, col: usize) -> PyResult<bool> {
        self.state.apply_move(Move::new(row, col))?;
        Ok(self.state.is_terminal())
    }

    /// Clear the board, keeping the rules and the RNG.
    fn reset(&mut self) {
        self.state.reset();
    }

    /// Cell value at (row, col): 1, -1 or 0. Raises ValueError off the board.
    fn get(&self, row: usize, col: usize) -> PyResult<i8> {
        Ok(self.state.board().get(row, col)?.value())
    }

    /// Whether `step(row, col)` would be accepted.
    fn is_valid_action(&self, row: usize, col: usize) -> bool {
        self.state.is_legal(Move::new(row, col))
    }

    fn is_full(&self) -> bool {
        self.state.board().is_full()
    }

    fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Winning player (1 or -1), or None while in progress or on a draw.
    fn winner(&self) -> Option<i8> {
        self.state.winner().map(Player::sign)
    }

    fn is_draw(&self) -> bool {
        self.state.status() == GameStatus::Draw
    }

    /// Captured pairs for a player (1 or -1).
    fn get_pair_count(&self, player: i8) -> PyResult<u32> {
        Ok(self.state.captures(player_from_sign(player)?))
    }

    /// Board as a (size, size) int8 array: 1, -1 for stones, 0 for empty.
    fn get_board<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i8>>> {
        let board = self.state.board();
        let n = board.size();
        let flat: Vec<i8> = board.cells().iter().map(|c| c.value()).collect();
        PyArray1::from_vec_bound(py, flat)
            .reshape([n, n])
            .map_err(|e| PyValueError::new_err(format!("{}", e)))
    }

    /// Play random moves to the end of the game from this position.
    ///
    /// Returns a list of (game, move) pairs: each game is the position
    /// before its move, and the final entry is the end position with move
    /// None. This game is not modified.
    #[pyo3(signature = (seed = None))]
    fn play_random_game(
        &mut self,
        py: Python<'_>,
        seed: Option<u64>,
    ) -> PyResult<Vec<(Self, Option<(usize, usize)>)>> {
        let mut rng = GameRng::new(self.next_seed(seed));
        let state = &self.state;
        let trajectory = py.allow_threads(|| play_random_game(state, &mut rng))?;

        let steps = trajectory
            .steps
            .into_iter()
            .enumerate()
            .map(|(i, step)| {
                let rng = GameRng::new(trajectory.seed).derive(i as u64);
                (Self::from_state(step.state, rng), step.mv.map(Into::into))
            })
            .collect();
        Ok(steps)
    }

    /// Estimated value of every legal move for the player to move, in
    /// `legal_moves()` order.
    ///
    /// Each value is the mean outcome (+1 win, -1 loss, 0 draw) of
    /// `rollouts_per_action` random games played after the move.
    #[pyo3(signature = (rollouts_per_action, seed = None))]
    fn get_values<'py>(
        &mut self,
        py: Python<'py>,
        rollouts_per_action: u32,
        seed: Option<u64>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let config = RolloutConfig::default()
            .with_rollouts_per_action(rollouts_per_action)
            .with_seed(self.next_seed(seed));
        let evaluator = RolloutEvaluator::new(config);
        let state = &self.state;
        let values = py.allow_threads(|| evaluator.get_values(state, rollouts_per_action))?;
        Ok(PyArray1::from_vec_bound(py, values))
    }

    /// Independent copy of this game.
    fn copy(&self) -> Self {
        self.clone()
    }

    fn __copy__(&self) -> Self {
        self.clone()
    }

    fn __str__(&self) -> String {
        self.state.board().to_string()
    }

    fn __repr__(&self) -> String {
        let status = match self.state.status() {
            GameStatus::InProgress => "in_progress".to_string(),
            GameStatus::Won(p) => format!("won_by={}", p.sign()),
            GameStatus::Draw => "draw".to_string(),
        };
        format!(
            "Pente(size={}, moves={}, to_move={}, pairs=({}, {}), {})",
            self.state.board().size(),
            self.state.move_count(),
            self.state.current_player().sign(),
            self.state.captures(Player::One),
            self.state.captures(Player::Two),
            status
        )
    }
}
