//! Move generation: single steps and transitive jump chains.
//!
//! ## Steps
//!
//! A marble may step to any empty neighbor. Off-board neighbors have no
//! occupant at all, so they never qualify.
//!
//! ## Jumps
//!
//! A marble may hop over an adjacent marble (either color) onto the empty
//! cell directly beyond it, and keep hopping from each landing in any
//! direction. The set of reachable landings is a closure over the jump
//! graph, computed breadth-first:
//!
//! - the visited set is seeded with the source cell;
//! - the queue is seeded with the source's landings in canonical direction
//!   order;
//! - each dequeued landing that is not yet visited is recorded, marked, and
//!   its own landings are enqueued, again in canonical order.
//!
//! The board is not modified while the closure runs, so the moving marble
//! still occupies its source and can itself be hopped over later in the
//! chain. The queue order fixes the output order, which the search uses for
//! tie-breaking.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::{Board, Coord, GameState, Move, Player, DIRECTIONS};

/// Empty neighbors of `from`, in canonical direction order.
#[must_use]
pub fn step_destinations(board: &Board, from: Coord) -> SmallVec<[Coord; 6]> {
    from.neighbors()
        .filter(|&n| board.is_empty_cell(n))
        .collect()
}

/// Single-hop landings from `at`, in canonical direction order.
///
/// A landing in direction `d` exists when `at + d` holds a marble and
/// `at + 2d` is on-board and empty.
#[must_use]
pub fn jump_landings(board: &Board, at: Coord) -> SmallVec<[Coord; 6]> {
    DIRECTIONS
        .iter()
        .filter(|&&dir| board.has_marble(at.offset(dir, 1)))
        .map(|&dir| at.offset(dir, 2))
        .filter(|&landing| board.is_empty_cell(landing))
        .collect()
}

/// Every cell reachable from `from` by a chain of one or more hops, in
/// breadth-first discovery order.
///
/// `from` itself is never part of the result. The closure does not require
/// a marble at `from`, so it can be re-run from any landing.
#[must_use]
pub fn jump_destinations(board: &Board, from: Coord) -> Vec<Coord> {
    let mut result = Vec::new();
    let mut visited = FxHashSet::default();
    visited.insert(from);

    let mut queue: VecDeque<Coord> = jump_landings(board, from).into_iter().collect();
    while let Some(cell) = queue.pop_front() {
        if !visited.insert(cell) {
            continue;
        }
        result.push(cell);
        queue.extend(jump_landings(board, cell));
    }

    result
}

/// Legal destinations for the marble at `from`: steps first, then jumps.
///
/// Returns an empty list if `from` is off-board or empty.
#[must_use]
pub fn marble_moves(board: &Board, from: Coord) -> Vec<Coord> {
    if !board.has_marble(from) {
        return Vec::new();
    }

    let mut moves: Vec<Coord> = step_destinations(board, from).into_vec();
    moves.extend(jump_destinations(board, from));
    moves
}

/// Every legal move for `player`, each paired with its successor state.
///
/// Marbles are visited in row-major order and each marble's destinations
/// in [`marble_moves`] order. A player with no marbles has no moves.
#[must_use]
pub fn available_moves(state: &GameState, player: Player) -> Vec<(GameState, Move)> {
    let board = state.board();
    board
        .marbles(player)
        .flat_map(|from| {
            marble_moves(board, from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .map(|mv| (state.apply_move(mv), mv))
        .collect()
}
