//! Board value type

use std::fmt;
use std::str::FromStr;

use super::{Cell, Player, Pos, BOARD_SIZE, TOTAL_CELLS};
use crate::error::BoardError;

/// A 3x3 board, stored row-major (index = row * 3 + col).
///
/// `Board` is a small `Copy` value; game states hold their own board and
/// produce a new one per move instead of sharing a mutable grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    /// Build a board from a cell array
    pub fn from_cells(cells: [Cell; TOTAL_CELLS]) -> Self {
        Self { cells }
    }

    /// Build a board from an untrusted slice, failing on a wrong length
    pub fn try_from_slice(cells: &[Cell]) -> Result<Self, BoardError> {
        let cells: [Cell; TOTAL_CELLS] =
            cells.try_into().map_err(|_| BoardError::InvalidLength {
                expected: TOTAL_CELLS,
                found: cells.len(),
            })?;
        Ok(Self { cells })
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Return a copy of this board with `player`'s mark at `pos`.
    ///
    /// Returns `None` if the cell is already taken; marks are never
    /// overwritten.
    pub fn with_mark(&self, pos: Pos, player: Player) -> Option<Board> {
        if !self.is_empty(pos) {
            return None;
        }
        let mut next = *self;
        next.cells[pos.to_index()] = player.to_cell();
        Some(next)
    }

    #[inline]
    pub fn cells(&self) -> &[Cell; TOTAL_CELLS] {
        &self.cells
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of cells holding the given mark
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Number of marks placed so far
    pub fn mark_count(&self) -> usize {
        TOTAL_CELLS - self.count(Cell::Empty)
    }

    /// Whether the X/O counts are reachable with X moving first
    /// (X count minus O count is 0 or 1).
    pub fn is_consistent(&self) -> bool {
        let x = self.count(Cell::X);
        let o = self.count(Cell::O);
        x == o || x == o + 1
    }
}

/// Text notation: nine `X`/`O`/`.` characters, rows joined by `/`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % BOARD_SIZE == 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", cell.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses the text notation. `/` separators are skipped; any other
    /// unknown character is rejected with its cell index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(TOTAL_CELLS);
        for c in s.chars().filter(|&c| c != '/') {
            match Cell::from_symbol(c) {
                Some(cell) => cells.push(cell),
                None => {
                    return Err(BoardError::InvalidCell {
                        index: cells.len(),
                        found: c,
                    })
                }
            }
        }
        Self::try_from_slice(&cells)
    }
}
