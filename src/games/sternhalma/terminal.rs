//! Win detection.
//!
//! A player wins once the opponent's home corner has no empty cell left and
//! holds at least one of the player's marbles. The corner does not need to
//! be filled entirely by the winner: a full corner with a single invading
//! marble already counts.
//!
//! The top corner (Player A's home) is checked first, so if both corners
//! qualify at once Player B is reported.

use crate::core::{Board, Occupant, Player};
use crate::zones::Corner;

/// The winner, if any.
#[must_use]
pub fn winner(board: &Board) -> Option<Player> {
    [Player::B, Player::A]
        .into_iter()
        .find(|&player| has_taken(board, player, player.target()))
}

/// Whether `corner` is full and holds at least one of `player`'s marbles.
#[must_use]
pub fn has_taken(board: &Board, player: Player, corner: Corner) -> bool {
    let mut invaded = false;
    for occupant in board.corner(corner) {
        match occupant {
            Occupant::Empty => return false,
            Occupant::Marble(p) if p == player => invaded = true,
            Occupant::Marble(_) => {}
        }
    }
    invaded
}
