//! Tile spawning and initial board seeding

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::rng::TileRng;
use crate::types::{
    GRID_SIZE, INITIAL_TILES, SPAWN_HIGH_PER_MILLE, SPAWN_HIGH_VALUE, SPAWN_LOW_VALUE,
};

/// Cell count of the game board
pub const BOARD_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// How the value of a spawned tile is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnValue {
    /// Always 2 (initial board)
    Low,
    /// 2 with probability 0.9, 4 with probability 0.1
    Weighted,
}

impl SpawnValue {
    fn roll<R: TileRng + ?Sized>(self, rng: &mut R) -> u32 {
        match self {
            SpawnValue::Low => SPAWN_LOW_VALUE,
            SpawnValue::Weighted => {
                if rng.next_range(1000) < SPAWN_HIGH_PER_MILLE {
                    SPAWN_HIGH_VALUE
                } else {
                    SPAWN_LOW_VALUE
                }
            }
        }
    }
}

/// Empty `(row, col)` positions in row-major order
pub fn empty_cells(grid: &Grid) -> impl Iterator<Item = (usize, usize)> + '_ {
    let cols = grid.cols();
    grid.cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_none())
        .map(move |(i, _)| (i / cols, i % cols))
}

/// Empty positions collected without allocating.
///
/// `None` when the grid has more than [`BOARD_CELLS`] cells.
pub fn empty_cells_on_board(grid: &Grid) -> Option<ArrayVec<(usize, usize), BOARD_CELLS>> {
    if grid.cells().len() > BOARD_CELLS {
        return None;
    }
    Some(empty_cells(grid).collect())
}

fn pick_empty_cell<R: TileRng + ?Sized>(grid: &Grid, rng: &mut R) -> Option<(usize, usize)> {
    if let Some(free) = empty_cells_on_board(grid) {
        if free.is_empty() {
            return None;
        }
        let pick = rng.next_range(free.len() as u32) as usize;
        return free.get(pick).copied();
    }

    // Larger than the board: count, then walk to the pick.
    let free = empty_cells(grid).count();
    if free == 0 {
        return None;
    }
    let pick = rng.next_range(free as u32) as usize;
    empty_cells(grid).nth(pick)
}

/// Put one tile on a uniformly chosen empty cell.
///
/// The cell is drawn first, then the value. Returns where the tile landed,
/// or `None` (grid untouched) when the grid is full.
pub fn place_random_tile<R: TileRng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    value: SpawnValue,
) -> Option<(usize, usize)> {
    let (row, col) = pick_empty_cell(grid, rng)?;
    let tile = value.roll(rng);
    grid.set(row, col, Some(tile));
    Some((row, col))
}

/// Spawn a weighted 2/4 tile on a random empty cell of an owned grid.
///
/// No-op on a full grid.
pub fn spawn_random_tile<R: TileRng + ?Sized>(mut grid: Grid, rng: &mut R) -> Grid {
    place_random_tile(&mut grid, rng, SpawnValue::Weighted);
    grid
}

/// Fresh 4x4 board with exactly two 2-tiles on distinct random cells
pub fn create_initial_grid<R: TileRng + ?Sized>(rng: &mut R) -> Grid {
    let mut grid = Grid::new();
    for _ in 0..INITIAL_TILES {
        place_random_tile(&mut grid, rng, SpawnValue::Low);
    }
    grid
}
