//! # sternhalma
//!
//! Rules engine and alpha-beta player for two-player Sternhalma (Chinese
//! checkers) on the 121-cell star board.
//!
//! ## Design Principles
//!
//! 1. **Immutable States**: Applying a move returns a new `GameState`.
//!    Boards are persistent maps (`im-rs`), so copies are O(1) and share
//!    structure with their ancestors.
//!
//! 2. **Deterministic Order**: Marbles are visited row-major, directions in
//!    a fixed order, and jump chains breadth-first. Searches that see the
//!    same position always return the same move.
//!
//! 3. **Rules Behind a Trait**: The search only talks to `RulesEngine`, so
//!    it can be tested on small hand-built trees.
//!
//! ## Modules
//!
//! - `core`: Coordinates, players, the board, moves and states
//! - `zones`: Board geometry (hexagonal core and corner triangles)
//! - `rules`: RulesEngine trait for game implementations
//! - `games`: The Sternhalma rules (moves, heuristic, win detection)
//! - `search`: Alpha-beta and reference minimax search
//! - `error`: Error types

pub mod core;
pub mod error;
pub mod games;
pub mod rules;
pub mod search;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{Board, Coord, GameState, Move, Occupant, Player, DIRECTIONS};

pub use crate::error::{ConfigError, MoveError};

pub use crate::games::sternhalma::Sternhalma;

pub use crate::rules::RulesEngine;

pub use crate::search::{
    alpha_beta_search, AlphaBetaSearch, Score, SearchConfig, SearchResult, SearchStats,
};

pub use crate::zones::Corner;
