//! Exhaustive minimax without pruning.
//!
//! Visits every node down to the horizon, so it is only practical for
//! shallow searches. Alpha-beta must agree with it on value and move.

use crate::core::Player;
use crate::rules::RulesEngine;

use super::score::Score;

/// Value of `state` with `player` to move, searched `depth` plies deep.
pub fn minimax<E: RulesEngine>(engine: &E, state: &E::State, player: Player, depth: u32) -> Score {
    if let Some(winner) = engine.winner(state) {
        return Score::for_winner(winner);
    }
    if depth == 0 {
        return Score::Value(engine.evaluate(state));
    }

    let mut best = Score::worst_for(player);
    for (child, _) in engine.successors(state, player) {
        let value = minimax(engine, &child, player.other(), depth - 1);
        if value.improves_on(best, player) {
            best = value;
        }
    }
    best
}

/// Best move for `player` and its value.
///
/// The first successor is the incumbent; later ones replace it only when
/// strictly better. No move is returned for a decided position or at depth 0.
pub fn minimax_root<E: RulesEngine>(
    engine: &E,
    state: &E::State,
    player: Player,
    depth: u32,
) -> (Option<E::Move>, Score) {
    if engine.winner(state).is_some() || depth == 0 {
        return (None, minimax(engine, state, player, depth));
    }

    let mut best_move = None;
    let mut best = Score::worst_for(player);
    for (child, mv) in engine.successors(state, player) {
        let value = minimax(engine, &child, player.other(), depth - 1);
        if best_move.is_none() || value.improves_on(best, player) {
            best_move = Some(mv);
            best = value;
        }
    }
    (best_move, best)
}
