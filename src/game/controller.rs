//! Session controller: owns the current snapshot and publishes changes

use std::sync::mpsc::{channel, Receiver, Sender};

use tracing::{debug, info};

use super::state::GameState;
use crate::error::MoveError;
use crate::rules::GameStatus;

/// Holds the current [`GameState`] of one session.
///
/// Every accepted action replaces the snapshot and sends a copy to each
/// subscriber. Rejected actions leave the snapshot untouched and publish
/// nothing.
#[derive(Debug, Default)]
pub struct GameController {
    state: GameState,
    subscribers: Vec<Sender<GameState>>,
}

impl GameController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Receive a snapshot after every accepted move, reset or undo
    pub fn subscribe(&mut self) -> Receiver<GameState> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    /// Play the current player's mark at `index`.
    ///
    /// Illegal requests (occupied cell, finished game, index past 8) return
    /// an error and change nothing.
    pub fn apply_move(&mut self, index: usize) -> Result<&GameState, MoveError> {
        let next = match self.state.apply_move(index) {
            Ok(next) => next,
            Err(err) => {
                debug!(index, %err, "move rejected");
                return Err(err);
            }
        };

        match next.status() {
            GameStatus::XWins | GameStatus::OWins => {
                info!(winner = ?next.status().winner(), moves = next.history().len(), "game won");
            }
            GameStatus::Draw => info!("game drawn"),
            GameStatus::InProgress => {}
        }

        self.replace(next);
        Ok(&self.state)
    }

    /// Clear the board and give the first move back to X
    pub fn reset(&mut self) {
        debug!("game reset");
        self.replace(GameState::new());
    }

    /// Take back the last move. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let history = self.state.history();
        let Some((_, kept)) = history.split_last() else {
            return false;
        };

        match GameState::replay(kept) {
            Ok(previous) => {
                debug!(moves = kept.len(), "move undone");
                self.replace(previous);
                true
            }
            Err(err) => {
                // History only ever holds accepted moves
                debug!(%err, "undo replay failed");
                false
            }
        }
    }

    fn replace(&mut self, next: GameState) {
        self.subscribers.retain(|tx| tx.send(next.clone()).is_ok());
        self.state = next;
    }
}
