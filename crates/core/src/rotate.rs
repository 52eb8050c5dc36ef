//! Grid rotation by quarter turns
//!
//! Rotations are counter-clockwise. With `R` rows and `C` columns in the
//! input, output cell `(i, j)` reads:
//!
//! | rotation | output shape | source cell |
//! |----------|--------------|-------------|
//! | 0 | R x C | `(i, j)` |
//! | 90 | C x R | `(j, C-1-i)` |
//! | 180 | R x C | `(R-1-i, C-1-j)` |
//! | 270 | C x R | `(R-1-j, i)` |
//!
//! An empty or dimensionless grid is returned unchanged.

use crate::grid::Grid;
use crate::types::Rotation;

/// Rotate a grid counter-clockwise, returning a new grid
pub fn rotate(grid: &Grid, rotation: Rotation) -> Grid {
    if grid.is_empty() {
        return grid.clone();
    }

    let rows = grid.rows();
    let cols = grid.cols();

    match rotation {
        Rotation::Deg0 => grid.clone(),
        Rotation::Deg90 => Grid::from_fn(cols, rows, |i, j| grid.at(j, cols - 1 - i)),
        Rotation::Deg180 => Grid::from_fn(rows, cols, |i, j| grid.at(rows - 1 - i, cols - 1 - j)),
        Rotation::Deg270 => Grid::from_fn(cols, rows, |i, j| grid.at(rows - 1 - j, i)),
    }
}

/// Rotate by a raw degree value.
///
/// Anything other than 0, 90, 180 or 270 returns the grid unchanged.
pub fn rotate_degrees(grid: &Grid, degrees: u16) -> Grid {
    match Rotation::from_degrees(degrees) {
        Some(rotation) => rotate(grid, rotation),
        None => grid.clone(),
    }
}
