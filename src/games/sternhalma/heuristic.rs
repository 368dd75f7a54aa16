//! Position heuristic used at the search horizon.
//!
//! For each marble, take the largest squared distance to a cell of its
//! target corner that
//!
//! - is not already filled by the marble's own color, and
//! - lies on a row the marble has not yet moved past.
//!
//! A color's progress score is the sum over its marbles (0 for a marble with
//! no qualifying cell). The evaluation is `progress(B) - progress(A)`, so a
//! positive value favors Player A.
//!
//! This is a crude "work remaining" proxy. Search results depend on its
//! exact values.

use crate::core::{Board, Coord, Occupant, Player};

/// Evaluate a board; positive favors Player A.
///
/// ```
/// use sternhalma::core::Board;
/// use sternhalma::games::sternhalma::heuristic::evaluate;
///
/// // The opening is point-symmetric, so neither side is ahead.
/// assert_eq!(evaluate(&Board::new()), 0);
/// ```
#[must_use]
pub fn evaluate(board: &Board) -> i64 {
    progress(board, Player::B) - progress(board, Player::A)
}

/// Sum of per-marble contributions for `player`.
#[must_use]
pub fn progress(board: &Board, player: Player) -> i64 {
    board
        .marbles(player)
        .map(|marble| marble_contribution(board, player, marble))
        .sum()
}

/// Largest squared distance from `marble` to a still-needed target cell.
#[must_use]
pub fn marble_contribution(board: &Board, player: Player, marble: Coord) -> i64 {
    let own = Occupant::Marble(player);
    player
        .target()
        .cells()
        .into_iter()
        .filter(|&t| !has_passed_row(player, marble, t))
        .filter(|&t| board.get(t) != Some(own))
        .map(|t| marble.squared_distance(t))
        .max()
        .unwrap_or(0)
}

/// Whether `marble` is already beyond `target`'s row in `player`'s direction
/// of travel.
fn has_passed_row(player: Player, marble: Coord, target: Coord) -> bool {
    (marble.y - target.y) * player.forward() > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marbles: &[(i32, i32, Player)]) -> Board {
        let mut board = Board::empty_star();
        for &(x, y, p) in marbles {
            board.set(Coord::new(x, y), Occupant::Marble(p));
        }
        board
    }

    #[test]
    fn test_opening_is_balanced() {
        let board = Board::new();
        assert_eq!(progress(&board, Player::A), progress(&board, Player::B));
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn test_single_marbles() {
        // A at the center: farthest bottom cell is (0,12), 16 + 64.
        // B one row lower: farthest top cell is (8,-4), 16 + 81.
        let board = board_with(&[(4, 4, Player::A), (4, 5, Player::B)]);
        assert_eq!(progress(&board, Player::A), 80);
        assert_eq!(progress(&board, Player::B), 97);
        assert_eq!(evaluate(&board), 17);
    }

    #[test]
    fn test_rows_already_passed_are_skipped() {
        // A on row 10: row 9 no longer counts, and its own cell is filled.
        let board = board_with(&[(0, 10, Player::A)]);
        assert_eq!(marble_contribution(&board, Player::A, Coord::new(0, 10)), 4);

        // B travels up: from row -3 only rows -3 and -4 still count.
        // (8,-4) is 1 + 1 away, (8,-3) is 1 + 0.
        let board = board_with(&[(7, -3, Player::B)]);
        assert_eq!(marble_contribution(&board, Player::B, Coord::new(7, -3)), 2);
    }

    #[test]
    fn test_settled_marble_contributes_nothing() {
        let board = board_with(&[(0, 12, Player::A)]);
        assert_eq!(progress(&board, Player::A), 0);
    }

    #[test]
    fn test_opponent_in_target_still_counts() {
        // Target cells held by the opponent are "not yet filled" by us.
        let with_blocker = board_with(&[(4, 4, Player::A), (0, 12, Player::B)]);
        let without = board_with(&[(4, 4, Player::A)]);
        assert_eq!(progress(&with_blocker, Player::A), progress(&without, Player::A));
    }

    #[test]
    fn test_filling_far_cell_lowers_score() {
        // With (0,12) filled by A, the marble at the center measures to the
        // next farthest cell, (0,11): 16 + 49.
        let board = board_with(&[(4, 4, Player::A), (0, 12, Player::A)]);
        assert_eq!(marble_contribution(&board, Player::A, Coord::new(4, 4)), 65);
    }
}
