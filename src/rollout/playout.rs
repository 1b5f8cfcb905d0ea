//! Playout driver: plays a game to the end with a move-selection policy.
//!
//! Every move either fills an empty cell or captures, and captures are
//! bounded by `captures_to_win`, so a playout always terminates.

use tracing::debug;

use crate::core::{GameRng, GameState, GameStatus, Move};
use crate::error::{PenteError, Result};

use super::trajectory::Trajectory;

/// Policy for picking moves during a playout.
pub trait PlayoutPolicy: Send + Sync {
    /// Pick one of `moves` (never empty) for the player to move.
    fn select(&self, state: &GameState, moves: &[Move], rng: &mut GameRng) -> Option<Move>;
}

/// Uniformly random move selection.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformRandom;

impl PlayoutPolicy for UniformRandom {
    fn select(&self, _state: &GameState, moves: &[Move], rng: &mut GameRng) -> Option<Move> {
        rng.choose(moves).copied()
    }
}

/// Play uniformly random moves from `initial` to the end, recording
/// every position.
///
/// The trajectory holds one entry per move plus the terminal state. A
/// terminal `initial` yields a single-entry trajectory.
pub fn play_random_game(initial: &GameState, rng: &mut GameRng) -> Result<Trajectory> {
    play_game(&UniformRandom, initial, rng)
}

/// Play `policy` moves from `initial` to the end, recording every position.
///
/// Each game runs on a fresh fork of `rng`, and the trajectory records that
/// fork's seed: `GameRng::new(trajectory.seed)` replays the same game.
pub fn play_game<P>(policy: &P, initial: &GameState, rng: &mut GameRng) -> Result<Trajectory>
where
    P: PlayoutPolicy + ?Sized,
{
    let mut rng = rng.fork();
    let mut trajectory = Trajectory::new(rng.seed());
    let mut state = initial.clone();

    while !state.is_terminal() {
        let mv = next_move(policy, &state, &mut rng)?;
        trajectory.push(state.clone(), Some(mv));
        state.apply_move(mv)?;
    }

    debug!(
        moves = trajectory.len(),
        status = ?state.status(),
        seed = trajectory.seed,
        "playout finished"
    );
    trajectory.push(state, None);
    Ok(trajectory)
}

/// Run `state` to the end with uniformly random moves, without recording
/// positions. Returns the final status and the number of moves played.
pub fn run_to_end(state: GameState, rng: &mut GameRng) -> Result<(GameStatus, usize)> {
    run_to_end_with(&UniformRandom, state, rng)
}

/// Rollout hot path: the state is consumed and mutated in place.
pub fn run_to_end_with<P>(
    policy: &P,
    mut state: GameState,
    rng: &mut GameRng,
) -> Result<(GameStatus, usize)>
where
    P: PlayoutPolicy + ?Sized,
{
    let mut plies = 0;
    while !state.is_terminal() {
        let mv = next_move(policy, &state, rng)?;
        state.apply_move(mv)?;
        plies += 1;
    }
    Ok((state.status(), plies))
}

fn next_move<P>(policy: &P, state: &GameState, rng: &mut GameRng) -> Result<Move>
where
    P: PlayoutPolicy + ?Sized,
{
    let moves = state.legal_moves();
    if moves.is_empty() {
        return Err(PenteError::NoLegalMoves);
    }
    policy
        .select(state, &moves, rng)
        .ok_or(PenteError::NoLegalMoves)
}
