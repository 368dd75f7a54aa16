//! Cell coordinates on the star-shaped board.
//!
//! ## Layout
//!
//! Cells are addressed with axial hex coordinates `(x, y)`. Row `y` grows
//! downward; the six neighbors of a cell are reached through [`DIRECTIONS`].
//!
//! A `Coord` is just a pair of integers. Whether it names a playable cell is
//! decided by the board, which holds the fixed cell set.
//!
//! ## Ordering
//!
//! Coordinates order row-major (by `y`, then `x`). Board enumeration follows
//! this order, which keeps move generation, and therefore the search, fully
//! deterministic.
//!
//! ```
//! use sternhalma::core::Coord;
//!
//! let a = Coord::new(8, -4);
//! let b = Coord::new(0, 0);
//! assert!(a < b); // row -4 comes before row 0
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A cell coordinate `(x, y)` on the axial hex grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// The six hex neighbor offsets in canonical order.
///
/// Step and jump generation both walk this array front to back.
pub const DIRECTIONS: [Coord; 6] = [
    Coord::new(0, -1),
    Coord::new(1, -1),
    Coord::new(-1, 0),
    Coord::new(1, 0),
    Coord::new(-1, 1),
    Coord::new(0, 1),
];

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by `dir` scaled by `steps`.
    ///
    /// ```
    /// use sternhalma::core::{Coord, DIRECTIONS};
    ///
    /// let c = Coord::new(4, 4);
    /// assert_eq!(c.offset(DIRECTIONS[1], 2), Coord::new(6, 2));
    /// ```
    #[must_use]
    pub const fn offset(self, dir: Coord, steps: i32) -> Self {
        Self {
            x: self.x + dir.x * steps,
            y: self.y + dir.y * steps,
        }
    }

    /// Neighbors in canonical direction order (may be off-board).
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        DIRECTIONS.into_iter().map(move |dir| self.offset(dir, 1))
    }

    /// Squared Euclidean distance in raw `(x, y)` space.
    ///
    /// This is the distance the position heuristic uses. It is not the hex
    /// metric.
    #[must_use]
    pub const fn squared_distance(self, other: Coord) -> i64 {
        let dx = (other.x - self.x) as i64;
        let dy = (other.y - self.y) as i64;
        dx * dx + dy * dy
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
