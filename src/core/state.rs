//! Game state: an immutable board snapshot.
//!
//! ## GameState
//!
//! Wraps one [`Board`]. States are values: applying a move returns a new
//! state and never touches the original. The search relies on this, since
//! sibling branches all read the same parent.
//!
//! Cloning is O(1) because the board is a persistent map; a successor shares
//! all unchanged structure with its parent.

use serde::{Deserialize, Serialize};

use super::action::Move;
use super::board::Board;
use super::coord::Coord;
use super::player::{Occupant, Player};
use crate::error::MoveError;
use crate::games::sternhalma::{heuristic, movegen, terminal};

/// A position in the game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
}

impl GameState {
    /// Create the opening position.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Wrap an arbitrary board (synthetic positions, tests).
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self { board }
    }

    /// The underlying board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consume the state, returning its board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    // === State Transition ===

    /// Return a new state with the occupants of `mv.from` and `mv.to`
    /// exchanged.
    ///
    /// The move is not validated: callers pass moves produced by the move
    /// generator. No other cell changes.
    #[must_use]
    pub fn apply_move(&self, mv: Move) -> GameState {
        let mut board = self.board.clone();
        let swapped = board.swap(mv.from, mv.to);
        debug_assert!(swapped, "move {} leaves the board", mv);
        GameState { board }
    }

    /// Apply an externally supplied move for `player`.
    ///
    /// Checks that `mv.from` holds one of `player`'s marbles and that
    /// `mv.to` is an empty cell. Reachability is not checked.
    ///
    /// ```
    /// use sternhalma::core::{Coord, GameState, Move, Player};
    /// use sternhalma::error::MoveError;
    ///
    /// let state = GameState::new();
    /// let next = state.play(Player::A, Move::new(Coord::new(5, -1), Coord::new(5, 0)));
    /// assert!(next.is_ok());
    ///
    /// let err = state.play(Player::A, Move::new(Coord::new(4, 4), Coord::new(4, 5)));
    /// assert_eq!(err, Err(MoveError::NoMarble(Coord::new(4, 4))));
    /// ```
    pub fn play(&self, player: Player, mv: Move) -> Result<GameState, MoveError> {
        match self.board.get(mv.from) {
            None => return Err(MoveError::OffBoard(mv.from)),
            Some(Occupant::Empty) => return Err(MoveError::NoMarble(mv.from)),
            Some(Occupant::Marble(owner)) if owner != player => {
                return Err(MoveError::NotOwned {
                    coord: mv.from,
                    owner,
                    player,
                })
            }
            Some(Occupant::Marble(_)) => {}
        }

        match self.board.get(mv.to) {
            None => Err(MoveError::OffBoard(mv.to)),
            Some(Occupant::Marble(_)) => Err(MoveError::Occupied(mv.to)),
            Some(Occupant::Empty) => Ok(self.apply_move(mv)),
        }
    }

    // === Rules ===

    /// Legal destinations of the marble at `from` (steps, then jumps).
    #[must_use]
    pub fn marble_moves(&self, from: Coord) -> Vec<Coord> {
        movegen::marble_moves(&self.board, from)
    }

    /// Every legal move for `player` paired with its successor state.
    #[must_use]
    pub fn available_moves(&self, player: Player) -> Vec<(GameState, Move)> {
        movegen::available_moves(self, player)
    }

    /// The winner, if either home corner has been taken.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        terminal::winner(&self.board)
    }

    /// Positional heuristic; positive favors Player A.
    #[must_use]
    pub fn evaluate(&self) -> i64 {
        heuristic::evaluate(&self.board)
    }
}
