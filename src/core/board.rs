//! The playing grid.
//!
//! A `Board` is a square, row-major grid of [`Cell`] values. It has no
//! knowledge of rules: captures, lines and turn order live in `rules`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::action::Move;
use super::player::Player;
use crate::error::{PenteError, Result};

/// Contents of a single intersection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Player1,
    Player2,
}

impl Cell {
    /// The player whose stone occupies this cell.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::One),
            Cell::Player2 => Some(Player::Two),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Signed value used for numeric exports: 0, +1 or -1.
    #[must_use]
    pub const fn value(self) -> i8 {
        match self.owner() {
            Some(player) => player.sign(),
            None => 0,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::One => Cell::Player1,
            Player::Two => Cell::Player2,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "."),
            Cell::Player1 => write!(f, "B"),
            Cell::Player2 => write!(f, "W"),
        }
    }
}

/// Fixed-size square grid of cells.
///
/// Dimensions never change after construction. Cloning produces a fully
/// independent copy.
///
/// ```
/// use pente::core::{Board, Cell};
///
/// let mut board = Board::new(9);
/// board.set(4, 4, Cell::Player1).unwrap();
///
/// assert_eq!(board.get(4, 4).unwrap(), Cell::Player1);
/// assert!(board.is_empty(0, 0).unwrap());
/// assert!(board.get(9, 0).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `size`x`size` board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of intersections.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Read a cell.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        let idx = self.index_of(row, col)?;
        Ok(self.cells[idx])
    }

    /// Overwrite a cell.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        let idx = self.index_of(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Check whether a cell is empty.
    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool> {
        self.get(row, col).map(Cell::is_empty)
    }

    /// Whether a signed coordinate lies on the grid.
    #[must_use]
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        mv.row < self.size && mv.col < self.size
    }

    /// Cell at `mv`, or `None` off the grid.
    #[must_use]
    pub fn cell(&self, mv: Move) -> Option<Cell> {
        if self.contains(mv) {
            Some(self.cells[mv.row * self.size + mv.col])
        } else {
            None
        }
    }

    /// Write a cell the caller has already bounds-checked.
    pub(crate) fn put(&mut self, mv: Move, cell: Cell) {
        debug_assert!(self.contains(mv));
        self.cells[mv.row * self.size + mv.col] = cell;
    }

    /// No empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(move |(i, _)| Move::new(i / size, i % size))
    }

    /// Number of stones a player has on the board.
    #[must_use]
    pub fn stone_count(&self, player: Player) -> usize {
        let target = Cell::from(player);
        self.cells.iter().filter(|&&c| c == target).count()
    }

    /// Row-by-row copy of the grid.
    #[must_use]
    pub fn to_grid(&self) -> Vec<Vec<Cell>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.cells.chunks(self.size).map(<[Cell]>::to_vec).collect()
    }

    /// Flat row-major view.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.size && col < self.size {
            Ok(row * self.size + col)
        } else {
            Err(PenteError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_grid() {
            for cell in row {
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
