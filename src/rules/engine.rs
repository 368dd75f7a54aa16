//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What moves are legal, and the state each one produces
//! - Win conditions
//! - How a non-terminal position is scored at the search horizon

use std::fmt::Debug;

use crate::core::Player;

/// Rules engine trait.
///
/// The search calls these methods and never interprets game-specific
/// concepts directly.
///
/// ## Implementation Notes
///
/// - `successors`: Return empty if the player can't move. Order matters:
///   the search breaks ties in favor of the earliest successor, so the order
///   must be deterministic.
/// - `successors` must not mutate anything shared: every returned state is
///   an independent value.
/// - `winner`: Return `None` while the game continues.
/// - `evaluate`: Positive values favor `Player::A`, the maximizer.
pub trait RulesEngine {
    /// A game position.
    type State: Clone + Debug;

    /// A move, as reported back to the caller.
    type Move: Clone + Copy + Debug + PartialEq;

    /// All moves for `player`, each paired with its resulting state.
    fn successors(&self, state: &Self::State, player: Player) -> Vec<(Self::State, Self::Move)>;

    /// The winner of `state`, if the game is over.
    fn winner(&self, state: &Self::State) -> Option<Player>;

    /// Heuristic value of `state`; positive favors `Player::A`.
    fn evaluate(&self, state: &Self::State) -> i64;

    // === Convenience Methods ===

    /// Check if the game is over.
    fn is_terminal(&self, state: &Self::State) -> bool {
        self.winner(state).is_some()
    }

    /// Enumerate only the moves for `player`.
    fn legal_moves(&self, state: &Self::State, player: Player) -> Vec<Self::Move> {
        self.successors(state, player)
            .into_iter()
            .map(|(_, mv)| mv)
            .collect()
    }
}
