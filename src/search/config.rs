//! Alpha-beta search configuration.

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::error::ConfigError;

/// Deepest search `validate` accepts.
///
/// The branching factor of the star board grows past a hundred once marbles
/// spread out, so anything deeper does not finish in reasonable time.
pub const MAX_DEPTH: u32 = 8;

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies to look ahead. At 0 the root is only evaluated and no move is
    /// chosen.
    pub depth: u32,

    /// Side to move at the root. Player A maximizes, Player B minimizes.
    pub root_player: Player,

    /// Search root children in parallel on the rayon pool.
    /// Result is identical to the sequential search.
    pub parallel_root: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            root_player: Player::A,
            parallel_root: false,
        }
    }
}

impl SearchConfig {
    /// Set the search depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set the side to move at the root.
    pub fn with_player(mut self, player: Player) -> Self {
        self.root_player = player;
        self
    }

    /// Enable or disable the parallel root.
    pub fn with_parallel_root(mut self, parallel: bool) -> Self {
        self.parallel_root = parallel;
        self
    }

    /// Check the parameters are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "depth must be <= {}, got {}",
                MAX_DEPTH, self.depth
            )));
        }
        Ok(())
    }
}
