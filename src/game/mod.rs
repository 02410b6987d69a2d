//! Core Connect Four game logic: board representation, player types, game
//! modes, and the game session with immutable transitions.

mod board;
mod mode;
mod player;
mod state;

pub use board::{Board, Cell, MoveError as BoardMoveError, COLS, ROWS};
pub use mode::{Difficulty, GameMode};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError};
