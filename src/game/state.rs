//! Immutable game snapshots

use tracing::debug;

use crate::board::{Board, Player, Pos};
use crate::error::MoveError;
use crate::rules::{self, GameStatus};

/// One snapshot of a game session.
///
/// Transitions never mutate a snapshot; [`GameState::apply_move`] returns a
/// new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    winning_line: Option<[Pos; 3]>,
    history: Vec<Pos>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Empty board, X to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            winning_line: None,
            history: Vec::new(),
        }
    }

    /// Rebuild a snapshot by replaying moves from an empty board
    pub fn replay(moves: &[Pos]) -> Result<Self, MoveError> {
        moves
            .iter()
            .try_fold(Self::new(), |state, pos| state.apply_move(pos.to_index()))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move next. After a finished game this is the player who
    /// would have moved had play continued.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Line that ended the game, if it was won
    pub fn winning_line(&self) -> Option<[Pos; 3]> {
        self.winning_line
    }

    /// Moves played so far, oldest first
    pub fn history(&self) -> &[Pos] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().copied()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Whether a move at `index` would be accepted
    pub fn can_play(&self, index: usize) -> bool {
        self.check_move(index).is_ok()
    }

    fn check_move(&self, index: usize) -> Result<Pos, MoveError> {
        let pos = Pos::try_from_index(index).ok_or(MoveError::OutOfRange { index })?;
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied { index });
        }
        Ok(pos)
    }

    /// Play the current player's mark at `index` and return the next snapshot
    pub fn apply_move(&self, index: usize) -> Result<GameState, MoveError> {
        let pos = self.check_move(index)?;
        let player = self.current_player;

        let board = self
            .board
            .with_mark(pos, player)
            .ok_or(MoveError::CellOccupied { index })?;
        debug_assert!(board.is_consistent());
        let status = rules::evaluate(&board);
        let winning_line = if status.winner().is_some() {
            rules::find_winning_line(&board)
        } else {
            None
        };

        let mut history = self.history.clone();
        history.push(pos);

        debug!(player = %player, index, ?status, "move applied");

        Ok(GameState {
            board,
            current_player: player.opponent(),
            status,
            winning_line,
            history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.board(), &Board::new());
        assert!(state.history().is_empty());
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_apply_move_alternates_players() {
        let s1 = GameState::new().apply_move(4).unwrap();
        assert_eq!(s1.board().get(Pos::from_index(4)), Cell::X);
        assert_eq!(s1.current_player(), Player::O);

        let s2 = s1.apply_move(0).unwrap();
        assert_eq!(s2.board().get(Pos::from_index(0)), Cell::O);
        assert_eq!(s2.current_player(), Player::X);
        assert_eq!(s2.history(), &[Pos::from_index(4), Pos::from_index(0)]);
        assert!(s2.board().is_consistent());
    }

    #[test]
    fn test_apply_move_does_not_mutate_original() {
        let s0 = GameState::new();
        let _ = s0.apply_move(3).unwrap();
        assert_eq!(s0, GameState::new());
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let s1 = GameState::new().apply_move(4).unwrap();
        assert_eq!(
            s1.apply_move(4),
            Err(MoveError::CellOccupied { index: 4 })
        );
        assert!(!s1.can_play(4));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let s0 = GameState::new();
        assert_eq!(s0.apply_move(9), Err(MoveError::OutOfRange { index: 9 }));
        assert!(!s0.can_play(usize::MAX));
    }

    #[test]
    fn test_win_ends_game() {
        // X: 0, 1, 2  O: 3, 4
        let state = GameState::replay(&[0, 3, 1, 4, 2].map(Pos::from_index)).unwrap();
        assert_eq!(state.status(), GameStatus::XWins);
        assert_eq!(
            state.winning_line(),
            Some([Pos::from_index(0), Pos::from_index(1), Pos::from_index(2)])
        );
        assert_eq!(state.apply_move(8), Err(MoveError::GameOver));
    }

    #[test]
    fn test_no_empty_cell_playable_after_win() {
        let state = GameState::replay(&[0, 3, 1, 4, 2].map(Pos::from_index)).unwrap();
        let open: Vec<usize> = (0..9)
            .filter(|&i| state.board().is_empty(Pos::from_index(i)))
            .collect();
        assert!(!open.is_empty());
        assert!(open.iter().all(|&i| !state.can_play(i)));

        let fresh = GameState::new();
        assert!((0..9).all(|i| fresh.can_play(i)));
    }

    #[test]
    fn test_draw() {
        // X O X / X O O / O X X
        let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8].map(Pos::from_index);
        let state = GameState::replay(&moves).unwrap();
        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(state.winning_line(), None);
        assert_eq!(state.board().to_string(), "XOX/XOO/OXX");
    }

    #[test]
    fn test_replay_rejects_illegal_sequence() {
        let moves = [0, 0].map(Pos::from_index);
        assert_eq!(
            GameState::replay(&moves),
            Err(MoveError::CellOccupied { index: 0 })
        );
    }
}
