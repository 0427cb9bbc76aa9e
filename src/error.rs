//! Error types for board parsing, moves and configuration

use std::path::PathBuf;

/// Errors raised when a board is built from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must have {expected} cells, got {found}")]
    InvalidLength { expected: usize, found: usize },

    #[error("invalid cell {found:?} at index {index}")]
    InvalidCell { index: usize, found: char },
}

/// Reasons a move request is rejected. The game state is never changed by a
/// rejected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell index {index} is out of range (0-8)")]
    OutOfRange { index: usize },

    #[error("cell {index} is already taken")]
    CellOccupied { index: usize },

    #[error("game is over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
