//! Line detection for the n-in-a-row win.

use crate::core::{Board, Cell, Move, Player};

/// Horizontal, vertical, diagonal and anti-diagonal.
pub const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Length of `player`'s unbroken run through `origin` along one axis.
///
/// Returns 0 if `origin` is not the player's stone.
pub fn run_length(board: &Board, origin: Move, player: Player, axis: (isize, isize)) -> usize {
    let stone = Cell::from(player);
    if board.cell(origin) != Some(stone) {
        return 0;
    }

    let (dr, dc) = axis;
    let mut length = 1;
    for sign in [1, -1] {
        let mut steps = 1;
        while let Some(next) = origin.step(dr * sign, dc * sign, steps) {
            if board.cell(next) != Some(stone) {
                break;
            }
            length += 1;
            steps += 1;
        }
    }
    length
}

/// Whether the stone at `origin` is part of a line of at least `length`.
pub fn has_line_through(board: &Board, origin: Move, player: Player, length: usize) -> bool {
    AXES
        .iter()
        .any(|&axis| run_length(board, origin, player, axis) >= length)
}

/// First player, in row-major scan order, owning a line of `length`.
pub fn find_line(board: &Board, length: usize) -> Option<Player> {
    let size = board.size();
    for row in 0..size {
        for col in 0..size {
            let origin = Move::new(row, col);
            let Some(player) = board.cell(origin).and_then(Cell::owner) else {
                continue;
            };
            if has_line_through(board, origin, player, length) {
                return Some(player);
            }
        }
    }
    None
}
