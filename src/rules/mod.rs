//! Game rules for tic-tac-toe
//!
//! - Win: three equal marks along a row, column or diagonal
//! - Draw: full board with no completed line

pub mod status;
pub mod win;

// Re-exports for convenient access
pub use status::{evaluate, evaluate_cells, GameStatus};
pub use win::{check_winner, find_winning_line, WINNING_LINES};
