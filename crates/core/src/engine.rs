//! Move engine - full-grid shift and merge
//!
//! Every direction is reduced to "move left": rotate the grid so the swipe
//! points left, collapse each row, then rotate back.

use crate::collapse::collapse_left_into;
use crate::grid::Grid;
use crate::rotate::rotate;
use crate::types::{Cell, Direction};

/// Result of shifting a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub grid: Grid,
    /// True iff at least one cell differs from the input grid
    pub moved: bool,
}

/// Shift all tiles in `direction`. The input grid is never modified.
pub fn shift(grid: &Grid, direction: Direction) -> MoveOutcome {
    let (forward, inverse) = direction.rotations();
    let rotated = rotate(grid, forward);

    let mut cells = Vec::with_capacity(rotated.cells().len());
    let mut row_buf: Vec<Cell> = Vec::with_capacity(rotated.cols());
    let mut moved = false;

    for row in rotated.iter_rows() {
        moved |= collapse_left_into(row, &mut row_buf);
        cells.extend_from_slice(&row_buf);
    }

    let collapsed = Grid::from_parts(rotated.rows(), rotated.cols(), cells);
    MoveOutcome {
        grid: rotate(&collapsed, inverse),
        moved,
    }
}

/// True if some direction would change the grid.
///
/// Informational only: the game does not end on a stuck board.
pub fn can_move(grid: &Grid) -> bool {
    Direction::ALL.into_iter().any(|dir| shift(grid, dir).moved)
}
