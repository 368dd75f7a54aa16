//! Depth-limited minimax with alpha-beta pruning.
//!
//! Player A maximizes and Player B minimizes; every score is from A's point
//! of view. Successors are searched in generation order and a later move
//! replaces the incumbent only when strictly better, so ties go to the
//! earliest move and the result is fully deterministic.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::core::{GameState, Move, Player};
use crate::error::ConfigError;
use crate::games::sternhalma::Sternhalma;
use crate::rules::RulesEngine;

use super::config::SearchConfig;
use super::score::Score;
use super::stats::SearchStats;

/// Outcome of one search.
#[derive(Clone, Debug)]
pub struct SearchResult<M> {
    /// Chosen move. `None` if the root is decided, has no moves, or the
    /// depth is 0.
    pub best_move: Option<M>,

    /// Value of the root, from Player A's point of view.
    pub score: Score,

    /// Counters for this search.
    pub stats: SearchStats,
}

/// Alpha-beta search context.
///
/// Generic over the rules engine type. Holds the configuration and the
/// statistics of the last search.
pub struct AlphaBetaSearch<E: RulesEngine> {
    /// The game rules engine.
    engine: E,

    /// Search configuration.
    config: SearchConfig,

    /// Statistics of the last search.
    stats: SearchStats,
}

impl<E> AlphaBetaSearch<E>
where
    E: RulesEngine + Sync,
    E::State: Send + Sync,
    E::Move: Send + Sync,
{
    /// Create a new search context.
    pub fn new(engine: E, config: SearchConfig) -> Self {
        Self {
            engine,
            config,
            stats: SearchStats::default(),
        }
    }

    /// Create a new search context, rejecting an unusable configuration.
    pub fn try_new(engine: E, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(engine, config))
    }

    /// The rules engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the last search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search for the configured root player.
    pub fn search(&mut self, state: &E::State) -> SearchResult<E::Move> {
        self.search_for(state, self.config.root_player)
    }

    /// Search with `player` to move at the root.
    pub fn search_for(&mut self, state: &E::State, player: Player) -> SearchResult<E::Move> {
        let start = Instant::now();
        self.stats.reset();
        let depth = self.config.depth;

        debug!(depth, %player, parallel = self.config.parallel_root, "alpha-beta search started");

        let (best_move, score) = if let Some(winner) = self.engine.winner(state) {
            self.stats.nodes += 1;
            self.stats.terminals += 1;
            (None, Score::for_winner(winner))
        } else if depth == 0 {
            self.stats.nodes += 1;
            self.stats.leaves += 1;
            (None, Score::Value(self.engine.evaluate(state)))
        } else if self.config.parallel_root {
            self.root_parallel(state, player, depth)
        } else {
            self.root_sequential(state, player, depth)
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;

        debug!(
            depth,
            %player,
            best_move = ?best_move,
            %score,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            time_us = self.stats.time_us,
            "alpha-beta search finished"
        );

        SearchResult {
            best_move,
            score,
            stats: self.stats.clone(),
        }
    }

    fn root_sequential(
        &mut self,
        state: &E::State,
        player: Player,
        depth: u32,
    ) -> (Option<E::Move>, Score) {
        self.stats.nodes += 1;

        let mut alpha = Score::Loss;
        let mut beta = Score::Win;
        let mut best_move = None;
        let mut best = Score::worst_for(player);

        for (child, mv) in self.engine.successors(state, player) {
            let value = alpha_beta(
                &self.engine,
                &child,
                depth - 1,
                alpha,
                beta,
                player.other(),
                &mut self.stats,
            );
            trace!(?mv, %value, "root child searched");

            if best_move.is_none() || value.improves_on(best, player) {
                best_move = Some(mv);
                best = value;
            }

            match player {
                Player::A => {
                    if best >= beta {
                        self.stats.cutoffs += 1;
                        break;
                    }
                    alpha = alpha.max(best);
                }
                Player::B => {
                    if best <= alpha {
                        self.stats.cutoffs += 1;
                        break;
                    }
                    beta = beta.min(best);
                }
            }
        }

        (best_move, best)
    }

    /// Every child gets the full window, so each value is exact and the
    /// first best in generation order matches the sequential choice.
    fn root_parallel(
        &mut self,
        state: &E::State,
        player: Player,
        depth: u32,
    ) -> (Option<E::Move>, Score) {
        self.stats.nodes += 1;

        let engine = &self.engine;
        let successors = engine.successors(state, player);
        let results: Vec<(E::Move, Score, SearchStats)> = successors
            .par_iter()
            .map(|(child, mv)| {
                let mut stats = SearchStats::new();
                let value = alpha_beta(
                    engine,
                    child,
                    depth - 1,
                    Score::Loss,
                    Score::Win,
                    player.other(),
                    &mut stats,
                );
                (*mv, value, stats)
            })
            .collect();

        let mut best_move = None;
        let mut best = Score::worst_for(player);
        for (mv, value, stats) in results {
            trace!(?mv, %value, "root child searched");
            self.stats.merge(&stats);
            if best_move.is_none() || value.improves_on(best, player) {
                best_move = Some(mv);
                best = value;
            }
        }

        (best_move, best)
    }
}

/// Value of `state` with `player` to move, within the window `(alpha, beta)`.
///
/// Fail-soft: a value outside the window is a bound, one inside is exact.
fn alpha_beta<E: RulesEngine>(
    engine: &E,
    state: &E::State,
    depth: u32,
    mut alpha: Score,
    mut beta: Score,
    player: Player,
    stats: &mut SearchStats,
) -> Score {
    stats.nodes += 1;

    if let Some(winner) = engine.winner(state) {
        stats.terminals += 1;
        return Score::for_winner(winner);
    }
    if depth == 0 {
        stats.leaves += 1;
        return Score::Value(engine.evaluate(state));
    }

    // A side with no moves keeps its worst score.
    let mut best = Score::worst_for(player);
    for (child, _) in engine.successors(state, player) {
        let value = alpha_beta(engine, &child, depth - 1, alpha, beta, player.other(), stats);
        match player {
            Player::A => {
                best = best.max(value);
                if best >= beta {
                    stats.cutoffs += 1;
                    return best;
                }
                alpha = alpha.max(best);
            }
            Player::B => {
                best = best.min(value);
                if best <= alpha {
                    stats.cutoffs += 1;
                    return best;
                }
                beta = beta.min(best);
            }
        }
    }
    best
}

/// Pick a move for Player A on the Sternhalma board, searching `depth`
/// plies.
///
/// Returns `None` when A has no move, the game is already over, or `depth`
/// is 0.
///
/// ```
/// use sternhalma::core::{Coord, GameState, Move};
/// use sternhalma::search::alpha_beta_search;
///
/// let state = GameState::new();
/// let mv = alpha_beta_search(&state, 1);
/// assert_eq!(mv, Some(Move::new(Coord::new(8, -2), Coord::new(6, 0))));
/// ```
pub fn alpha_beta_search(state: &GameState, depth: u32) -> Option<Move> {
    let config = SearchConfig::default()
        .with_depth(depth)
        .with_player(Player::A);
    AlphaBetaSearch::new(Sternhalma::new(), config)
        .search(state)
        .best_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::minimax::minimax_root;
    use crate::search::test_tree::TreeGame;

    fn search(tree: &TreeGame, player: Player, depth: u32) -> SearchResult<usize> {
        let config = SearchConfig::default().with_depth(depth).with_player(player);
        AlphaBetaSearch::new(tree.clone(), config).search(&0)
    }

    fn textbook() -> TreeGame {
        TreeGame::two_ply(&[&[3, 12, 8], &[2, 4, 6], &[14, 5, 2]])
    }

    #[test]
    fn test_textbook_tree() {
        let result = search(&textbook(), Player::A, 2);
        assert_eq!(result.best_move, Some(1));
        assert_eq!(result.score, Score::Value(3));
    }

    #[test]
    fn test_textbook_tree_prunes() {
        let result = search(&textbook(), Player::A, 2);
        // Second child stops after its first leaf (2 <= 3), third after
        // its last (2 <= 3).
        assert_eq!(result.stats.leaves, 7);
        assert_eq!(result.stats.cutoffs, 2);
        assert_eq!(result.stats.nodes, 11);
    }

    #[test]
    fn test_minimizer_root_matches_minimax() {
        let tree = textbook();
        let result = search(&tree, Player::B, 2);
        let (mv, score) = minimax_root(&tree, &0, Player::B, 2);
        assert_eq!(result.best_move, mv);
        assert_eq!(result.score, score);
    }

    #[test]
    fn test_ties_go_to_first_move() {
        let tree = TreeGame::two_ply(&[&[5], &[7], &[7]]);
        let result = search(&tree, Player::A, 2);
        assert_eq!(result.best_move, Some(3));
        assert_eq!(result.score, Score::Value(7));
    }

    #[test]
    fn test_first_move_kept_when_all_lose() {
        let mut tree = TreeGame::new();
        let a = tree.add(0, 0);
        let b = tree.add(0, 0);
        tree.set_winner(a, Player::B);
        tree.set_winner(b, Player::B);

        let result = search(&tree, Player::A, 3);
        assert_eq!(result.best_move, Some(a));
        assert_eq!(result.score, Score::Loss);
    }

    #[test]
    fn test_win_cuts_off_root() {
        let mut tree = TreeGame::new();
        tree.add(0, 1);
        let b = tree.add(0, 2);
        tree.add(0, 3);
        tree.set_winner(b, Player::A);

        let result = search(&tree, Player::A, 1);
        assert_eq!(result.best_move, Some(b));
        assert_eq!(result.score, Score::Win);
        // The third child is never looked at.
        assert_eq!(result.stats.nodes, 3);
    }

    #[test]
    fn test_no_move_without_choice() {
        // Depth 0.
        let tree = textbook();
        let result = search(&tree, Player::A, 0);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, Score::Value(0));

        // Decided root.
        let mut tree = textbook();
        tree.set_winner(0, Player::A);
        let result = search(&tree, Player::A, 2);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, Score::Win);
        assert_eq!(result.stats.terminals, 1);

        // No successors.
        let tree = TreeGame::new();
        let result = search(&tree, Player::A, 2);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, Score::Loss);
    }

    #[test]
    fn test_blocked_opponent_is_beaten() {
        let mut tree = TreeGame::new();
        let open = tree.add(0, 0);
        tree.add(open, 100);
        let blocked = tree.add(0, 0);

        let result = search(&tree, Player::A, 2);
        assert_eq!(result.best_move, Some(blocked));
        assert_eq!(result.score, Score::Win);
    }

    #[test]
    fn test_parallel_root_matches_sequential() {
        let tree = textbook();
        for player in Player::ALL {
            let config = SearchConfig::default()
                .with_depth(2)
                .with_player(player)
                .with_parallel_root(true);
            let parallel = AlphaBetaSearch::new(tree.clone(), config).search(&0);
            let sequential = search(&tree, player, 2);
            assert_eq!(parallel.best_move, sequential.best_move);
            assert_eq!(parallel.score, sequential.score);
        }
    }

    #[test]
    fn test_stats_kept_after_search() {
        let mut searcher = AlphaBetaSearch::new(textbook(), SearchConfig::default());
        let result = searcher.search(&0);
        assert_eq!(searcher.stats(), &result.stats);
        assert!(searcher.stats().nodes > 0);
    }

    #[test]
    fn test_try_new_rejects_deep_config() {
        let config = SearchConfig::default().with_depth(50);
        assert!(AlphaBetaSearch::try_new(textbook(), config).is_err());
        assert!(AlphaBetaSearch::try_new(textbook(), SearchConfig::default()).is_ok());
    }
}
