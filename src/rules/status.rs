//! Board evaluation

use crate::board::{Board, Cell, Player};
use crate::error::BoardError;

use super::win::check_winner;

/// Classification of a board. Derived from the cells alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    XWins,
    OWins,
    Draw,
}

impl GameStatus {
    /// Status for a win by `player`
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::X => GameStatus::XWins,
            Player::O => GameStatus::OWins,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::XWins => Some(Player::X),
            GameStatus::OWins => Some(Player::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Classify a board.
///
/// A completed line wins (first in scan order), otherwise a full board is a
/// draw, otherwise the game is still in progress. The X/O balance is not
/// checked.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(player) = check_winner(board) {
        return GameStatus::win_for(player);
    }

    if board.is_full() {
        return GameStatus::Draw;
    }

    GameStatus::InProgress
}

/// Validating entry point for untrusted cell sequences.
pub fn evaluate_cells(cells: &[Cell]) -> Result<GameStatus, BoardError> {
    let board = Board::try_from_slice(cells)?;
    Ok(evaluate(&board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::WINNING_LINES;

    const E: Cell = Cell::Empty;
    const X: Cell = Cell::X;
    const O: Cell = Cell::O;

    fn eval(cells: [Cell; 9]) -> GameStatus {
        evaluate(&Board::from_cells(cells))
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(eval([E; 9]), GameStatus::InProgress);
    }

    #[test]
    fn test_top_row_x_wins() {
        assert_eq!(eval([X, X, X, E, O, O, E, E, E]), GameStatus::XWins);
    }

    #[test]
    fn test_full_board_draw() {
        assert_eq!(eval([X, O, X, X, O, O, O, X, X]), GameStatus::Draw);
    }

    #[test]
    fn test_diagonal_x_wins() {
        assert_eq!(eval([X, O, O, E, X, E, E, E, X]), GameStatus::XWins);
    }

    #[test]
    fn test_single_line_wins_for_each_player() {
        for line in WINNING_LINES {
            for (mark, expected) in [(X, GameStatus::XWins), (O, GameStatus::OWins)] {
                let mut cells = [E; 9];
                for idx in line {
                    cells[idx] = mark;
                }
                assert_eq!(eval(cells), expected, "line {line:?}");
            }
        }
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        // Last move completes a line and fills the board
        assert_eq!(eval([X, O, X, O, X, O, O, X, X]), GameStatus::XWins);
    }

    #[test]
    fn test_partial_board_in_progress() {
        assert_eq!(eval([X, O, E, E, X, E, E, E, O]), GameStatus::InProgress);
    }

    #[test]
    fn test_evaluate_is_pure() {
        let board = Board::from_cells([X, O, X, E, O, E, E, E, E]);
        let first = evaluate(&board);
        let second = evaluate(&board);
        assert_eq!(first, second);
        assert_eq!(board, Board::from_cells([X, O, X, E, O, E, E, E, E]));
    }

    #[test]
    fn test_evaluate_cells_validates_length() {
        assert_eq!(evaluate_cells(&[E; 9]), Ok(GameStatus::InProgress));
        assert_eq!(
            evaluate_cells(&[X, X, X]),
            Err(BoardError::InvalidLength { expected: 9, found: 3 })
        );
        assert!(evaluate_cells(&[E; 10]).is_err());
    }

    #[test]
    fn test_status_helpers() {
        assert_eq!(GameStatus::XWins.winner(), Some(Player::X));
        assert_eq!(GameStatus::Draw.winner(), None);
        assert!(GameStatus::Draw.is_over());
        assert!(!GameStatus::InProgress.is_over());
        assert_eq!(GameStatus::win_for(Player::O), GameStatus::OWins);
    }
}
