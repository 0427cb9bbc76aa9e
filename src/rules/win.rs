//! Three-in-a-row detection
//!
//! The board has exactly eight winning lines: three rows, three columns and
//! two diagonals. They are always scanned in that fixed order, so the first
//! match is deterministic even for boards that could never arise in play.

use crate::board::{Board, Cell, Player, Pos};

/// The eight winning triples as cell indices, in scan order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Find the first completed line, returning its positions
pub fn find_winning_line(board: &Board) -> Option<[Pos; 3]> {
    find_winning_triple(board).map(|(line, _)| line)
}

/// Winner of the first completed line, if any
pub fn check_winner(board: &Board) -> Option<Player> {
    find_winning_triple(board).map(|(_, player)| player)
}

fn find_winning_triple(board: &Board) -> Option<([Pos; 3], Player)> {
    let cells = board.cells();
    for [a, b, c] in WINNING_LINES {
        let cell = cells[a];
        if cell != Cell::Empty && cell == cells[b] && cell == cells[c] {
            let line = [Pos::from_index(a), Pos::from_index(b), Pos::from_index(c)];
            return cell.player().map(|p| (line, p));
        }
    }
    None
}
