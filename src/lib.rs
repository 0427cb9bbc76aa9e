//! Tic-tac-toe with a native GUI
//!
//! Two players share one screen and take turns marking a 3x3 grid. X always
//! moves first; three equal marks in a row, column or diagonal win, and a
//! full board without a line is a draw.
//!
//! # Architecture
//!
//! - [`board`]: Cell, player and position types plus the `Board` value
//! - [`rules`]: Winning lines and board evaluation
//! - [`game`]: Immutable game snapshots and the session controller
//! - [`config`]: TOML configuration loading and validation
//! - [`cli`]: Command-line arguments
//! - [`error`]: Structured error types
//! - [`ui`]: egui/eframe front end
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{evaluate, GameController, GameStatus};
//!
//! let mut game = GameController::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index).unwrap();
//! }
//! assert_eq!(game.state().status(), GameStatus::XWins);
//! assert_eq!(evaluate(game.state().board()), GameStatus::XWins);
//!
//! // Occupied cells and finished games are rejected without changing state
//! assert!(game.apply_move(5).is_err());
//!
//! game.reset();
//! assert_eq!(game.state().status(), GameStatus::InProgress);
//! ```

pub mod board;
pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use error::{BoardError, ConfigError, MoveError};
pub use game::{GameController, GameState};
pub use rules::{evaluate, evaluate_cells, GameStatus};
