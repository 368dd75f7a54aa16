//! Core value types: coordinates, players, the board, moves and states.
//!
//! Everything here is a plain value. The rules that interpret these values
//! (move generation, scoring, win detection) live in `games::sternhalma`.

pub mod action;
pub mod board;
pub mod coord;
pub mod player;
pub mod state;

pub use action::Move;
pub use board::Board;
pub use coord::{Coord, DIRECTIONS};
pub use player::{Occupant, Player};
pub use state::GameState;
