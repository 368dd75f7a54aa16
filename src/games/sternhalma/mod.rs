//! Two-player Sternhalma (Chinese checkers) on the 121-cell star.
//!
//! - Player A starts in the top corner and races for the bottom one
//! - Player B does the opposite
//! - A move is a single step to an empty neighbor, or any chain of hops
//!   over adjacent marbles of either color
//! - The first player to complete the opponent's corner wins
//!
//! Only two colors are active; the four side corners are transit space.

pub mod game;
pub mod heuristic;
pub mod movegen;
pub mod terminal;

pub use game::Sternhalma;
