//! Sternhalma bound to the `RulesEngine` seam.

use crate::core::{GameState, Move, Player};
use crate::rules::RulesEngine;

use super::{heuristic, movegen, terminal};

/// The two-player star game.
///
/// Stateless: all position data lives in [`GameState`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sternhalma;

impl Sternhalma {
    /// Create the rules object.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The opening position.
    #[must_use]
    pub fn initial_state(&self) -> GameState {
        GameState::new()
    }
}

impl RulesEngine for Sternhalma {
    type State = GameState;
    type Move = Move;

    fn successors(&self, state: &GameState, player: Player) -> Vec<(GameState, Move)> {
        movegen::available_moves(state, player)
    }

    fn winner(&self, state: &GameState) -> Option<Player> {
        terminal::winner(state.board())
    }

    fn evaluate(&self, state: &GameState) -> i64 {
        heuristic::evaluate(state.board())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;

    #[test]
    fn test_initial_state() {
        let game = Sternhalma::new();
        let state = game.initial_state();
        assert_eq!(state, GameState::new());
        assert!(!game.is_terminal(&state));
        assert_eq!(game.evaluate(&state), 0);
    }

    #[test]
    fn test_opening_moves() {
        let game = Sternhalma::new();
        let state = game.initial_state();
        let moves = game.legal_moves(&state, Player::A);

        assert_eq!(moves.len(), 14);
        // Row -2 marbles can only jump over the front row.
        assert_eq!(moves[0], Move::new(Coord::new(6, -2), Coord::new(4, 0)));
        assert_eq!(moves[1], Move::new(Coord::new(6, -2), Coord::new(6, 0)));

        let steps = moves
            .iter()
            .filter(|mv| mv.from.neighbors().any(|n| n == mv.to))
            .count();
        let empty_neighbors: usize = state
            .board()
            .marbles(Player::A)
            .map(|m| m.neighbors().filter(|&n| state.board().is_empty_cell(n)).count())
            .sum();
        assert_eq!(steps, 8);
        assert_eq!(steps, empty_neighbors);
    }

    #[test]
    fn test_successors_match_state_helper() {
        let game = Sternhalma::new();
        let state = game.initial_state();
        let a = game.successors(&state, Player::B);
        let b = state.available_moves(Player::B);
        assert_eq!(a, b);
    }

    #[test]
    fn test_deterministic_playout() {
        // Always take the first move; two runs must agree ply by ply.
        let game = Sternhalma::new();
        let play = || {
            let mut state = game.initial_state();
            let mut history = Vec::new();
            let mut player = Player::A;
            for _ in 0..20 {
                let Some((next, mv)) = game.successors(&state, player).into_iter().next() else {
                    break;
                };
                history.push(mv);
                state = next;
                player = player.other();
            }
            (state, history)
        };

        assert_eq!(play(), play());
    }
}
