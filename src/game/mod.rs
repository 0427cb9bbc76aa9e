//! Game session logic: immutable snapshots and the controller that threads
//! them through player actions.

mod controller;
mod state;

pub use controller::GameController;
pub use state::GameState;
