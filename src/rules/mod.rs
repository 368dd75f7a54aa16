//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal moves and the successor state each one produces
//! - Win conditions
//! - A heuristic for positions at the search horizon
//!
//! The search calls into `RulesEngine` but never interprets
//! game-specific concepts directly.

pub mod engine;

pub use engine::RulesEngine;
