//! Move representation: a single stone placement.
//!
//! A move is just a grid coordinate. Whether it is legal depends on the
//! board and rules at the time it is proposed, see `rules::PenteRules`.

use serde::{Deserialize, Serialize};

/// A stone placement at `(row, col)`.
///
/// ```
/// use pente::core::Move;
///
/// let mv = Move::new(3, 4);
/// assert_eq!(mv.row, 3);
/// assert_eq!(mv.col, 4);
/// assert_eq!(Move::center(9), Move::new(4, 4));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Center cell of a `size`x`size` board.
    #[must_use]
    pub const fn center(size: usize) -> Self {
        Self::new(size / 2, size / 2)
    }

    /// The coordinate `steps` cells away along `(d_row, d_col)`, if it does
    /// not underflow. Upper bounds are the board's concern.
    #[must_use]
    pub fn step(self, d_row: isize, d_col: isize, steps: isize) -> Option<Move> {
        let row = self.row.checked_add_signed(d_row * steps)?;
        let col = self.col.checked_add_signed(d_col * steps)?;
        Some(Move::new(row, col))
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Move::new(row, col)
    }
}

impl From<Move> for (usize, usize) {
    fn from(mv: Move) -> Self {
        (mv.row, mv.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
