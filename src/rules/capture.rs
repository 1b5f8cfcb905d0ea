//! Custodial pair captures.
//!
//! A stone placed so that it flanks exactly two opposing stones with
//! another friendly stone (`X O O X`) removes the pair. All eight
//! directions are inspected against the board as it stands right after
//! placement; removals are only applied once every direction is checked.

use smallvec::SmallVec;

use crate::core::{Board, Cell, Move, Player};

/// The eight compass directions as `(d_row, d_col)`.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// Captured stones from one placement. At most two per direction.
pub type Captured = SmallVec<[Move; 16]>;

/// Stones captured by `mover` having just played at `placed`.
///
/// The board must already contain the new stone. Nothing is removed here.
pub fn find_captures(board: &Board, placed: Move, mover: Player) -> Captured {
    let own = Cell::from(mover);
    let theirs = Cell::from(mover.opponent());
    let mut captured = Captured::new();

    for &(dr, dc) in &DIRECTIONS {
        let (Some(first), Some(second), Some(anchor)) = (
            placed.step(dr, dc, 1),
            placed.step(dr, dc, 2),
            placed.step(dr, dc, 3),
        ) else {
            continue;
        };

        if board.cell(anchor) == Some(own)
            && board.cell(first) == Some(theirs)
            && board.cell(second) == Some(theirs)
        {
            captured.push(first);
            captured.push(second);
        }
    }

    captured
}

/// Clear captured stones and return the number of pairs removed.
pub fn remove_captured(board: &mut Board, captured: &[Move]) -> u32 {
    for &mv in captured {
        board.put(mv, Cell::Empty);
    }
    (captured.len() / 2) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, row: usize, col: usize, player: Player) {
        board.set(row, col, Cell::from(player)).unwrap();
    }

    #[test]
    fn test_horizontal_capture() {
        let mut board = Board::new(5);
        place(&mut board, 1, 1, Player::One);
        place(&mut board, 1, 2, Player::Two);
        place(&mut board, 1, 3, Player::Two);
        place(&mut board, 1, 4, Player::One);

        let captured = find_captures(&board, Move::new(1, 4), Player::One);
        assert_eq!(captured.as_slice(), &[Move::new(1, 3), Move::new(1, 2)]);

        let pairs = remove_captured(&mut board, &captured);
        assert_eq!(pairs, 1);
        assert!(board.is_empty(1, 2).unwrap());
        assert!(board.is_empty(1, 3).unwrap());
        assert_eq!(board.get(1, 1).unwrap(), Cell::Player1);
    }

    #[test]
    fn test_diagonal_capture() {
        let mut board = Board::new(5);
        place(&mut board, 0, 0, Player::Two);
        place(&mut board, 1, 1, Player::One);
        place(&mut board, 2, 2, Player::One);
        place(&mut board, 3, 3, Player::Two);

        let captured = find_captures(&board, Move::new(0, 0), Player::Two);
        assert_eq!(captured.len(), 2);
        assert!(captured.contains(&Move::new(1, 1)));
        assert!(captured.contains(&Move::new(2, 2)));
    }

    #[test]
    fn test_no_capture_of_single_or_triple() {
        let mut board = Board::new(6);
        // X O X: single stone is safe
        place(&mut board, 0, 0, Player::One);
        place(&mut board, 0, 1, Player::Two);
        place(&mut board, 0, 2, Player::One);
        assert!(find_captures(&board, Move::new(0, 2), Player::One).is_empty());

        // X O O O X: three stones are safe
        place(&mut board, 2, 0, Player::One);
        place(&mut board, 2, 1, Player::Two);
        place(&mut board, 2, 2, Player::Two);
        place(&mut board, 2, 3, Player::Two);
        place(&mut board, 2, 4, Player::One);
        assert!(find_captures(&board, Move::new(2, 4), Player::One).is_empty());
    }

    #[test]
    fn test_open_end_is_not_capture() {
        let mut board = Board::new(5);
        place(&mut board, 0, 0, Player::One);
        place(&mut board, 0, 1, Player::Two);
        place(&mut board, 0, 2, Player::Two);
        assert!(find_captures(&board, Move::new(0, 0), Player::One).is_empty());
    }

    #[test]
    fn test_multiple_directions_at_once() {
        let mut board = Board::new(7);
        let center = Move::new(3, 3);
        place(&mut board, 3, 3, Player::One);
        // East
        place(&mut board, 3, 4, Player::Two);
        place(&mut board, 3, 5, Player::Two);
        place(&mut board, 3, 6, Player::One);
        // North
        place(&mut board, 2, 3, Player::Two);
        place(&mut board, 1, 3, Player::Two);
        place(&mut board, 0, 3, Player::One);

        let captured = find_captures(&board, center, Player::One);
        assert_eq!(captured.len(), 4);
        assert_eq!(remove_captured(&mut board, &captured), 2);
        assert_eq!(board.stone_count(Player::Two), 0);
    }

    #[test]
    fn test_edge_of_board_is_not_flank() {
        let mut board = Board::new(3);
        place(&mut board, 0, 0, Player::One);
        place(&mut board, 0, 1, Player::Two);
        place(&mut board, 0, 2, Player::Two);
        assert!(find_captures(&board, Move::new(0, 0), Player::One).is_empty());
    }
}
