//! Move selection by depth-limited alpha-beta search.
//!
//! ## Overview
//!
//! - **Deterministic**: ties go to the earliest move in generation order
//! - **Generic**: searches any [`RulesEngine`](crate::rules::RulesEngine)
//! - **Parallel root**: optional, via rayon, with the same result
//! - **Exact scores**: decided games are `Score::Win` / `Score::Loss`, not
//!   sentinel integers
//!
//! ## Usage
//!
//! ```rust
//! use sternhalma::core::{GameState, Player};
//! use sternhalma::games::sternhalma::Sternhalma;
//! use sternhalma::search::{AlphaBetaSearch, SearchConfig};
//!
//! let config = SearchConfig::default().with_depth(2).with_player(Player::A);
//! let mut search = AlphaBetaSearch::new(Sternhalma::new(), config);
//!
//! let result = search.search(&GameState::new());
//! if let Some(mv) = result.best_move {
//!     println!("best move: {} ({})", mv, result.score);
//! }
//! println!("{} nodes", result.stats.nodes);
//! ```

pub mod alphabeta;
pub mod config;
pub mod minimax;
pub mod score;
pub mod stats;

#[cfg(test)]
pub(crate) mod test_tree;

pub use alphabeta::{alpha_beta_search, AlphaBetaSearch, SearchResult};
pub use config::{SearchConfig, MAX_DEPTH};
pub use minimax::{minimax, minimax_root};
pub use score::Score;
pub use stats::SearchStats;
