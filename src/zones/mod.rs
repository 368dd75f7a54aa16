//! Board geometry: the hexagonal core and the six corner triangles.
//!
//! ## Key Types
//!
//! - `Corner`: one of the six 10-cell triangles (two homes, four transit)
//! - `hex_core_cells`: the 61 cells of the central hexagon
//! - `star_cells`: every playable cell, in row-major order
//!
//! The board's cell set is derived from these once, at construction.

pub mod corner;

pub use corner::{Corner, CORNER_CELLS};

use crate::core::Coord;

/// Total number of playable cells: the core plus six corners.
pub const STAR_CELLS: usize = HEX_CORE_CELLS + 6 * CORNER_CELLS;

/// Cells in the central hexagon (side length 5).
pub const HEX_CORE_CELLS: usize = 61;

/// The central hexagon, row-major.
///
/// Rows 0..=4 widen from 5 to 9 cells ending at `x = 8`; rows 5..=8 narrow
/// from 8 to 5 cells starting at `x = 0`.
#[must_use]
pub fn hex_core_cells() -> Vec<Coord> {
    let mut cells = Vec::with_capacity(HEX_CORE_CELLS);
    for y in 0..=4 {
        cells.extend((4 - y..=8).map(|x| Coord::new(x, y)));
    }
    for y in 5..=8 {
        cells.extend((0..=12 - y).map(|x| Coord::new(x, y)));
    }
    cells
}

/// Every playable cell of the star, row-major.
#[must_use]
pub fn star_cells() -> Vec<Coord> {
    let mut cells = hex_core_cells();
    for corner in Corner::ALL {
        cells.extend(corner.cells());
    }
    cells.sort();
    cells
}
