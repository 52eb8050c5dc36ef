//! Grid module - the board of tile values
//!
//! A grid is a rectangular, row-major sequence of cells. The game only ever
//! plays on a 4x4 grid, but the rotator and collapser work on any dimensions
//! (including 0x0) so degenerate input degrades instead of failing.
//! Coordinates: (row, col) where row 0 is the top and col 0 is the left edge.

use std::fmt;

use crate::types::{Cell, GRID_SIZE};

/// Rectangular grid of cells using flat, row-major storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat cells, `row * cols + col`
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty 4x4 game grid
    pub fn new() -> Self {
        Self::with_size(GRID_SIZE, GRID_SIZE)
    }

    /// Create an all-empty grid with the given dimensions
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Build a grid from nested rows.
    ///
    /// The column count is taken from the first row; shorter rows are padded
    /// with empty cells and cells past that width in longer rows are dropped.
    ///
    /// ```
    /// use tui_128_core::Grid;
    ///
    /// let grid = Grid::from_rows(&[[Some(2), None], [None, Some(4)]]);
    /// assert_eq!(grid.rows(), 2);
    /// assert_eq!(grid.get(1, 1), Some(Some(4)));
    /// ```
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Self {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            cells.extend((0..cols).map(|c| row.get(c).copied().flatten()));
        }
        Self {
            rows: rows.len(),
            cols,
            cells,
        }
    }

    /// Build a grid by evaluating `f(row, col)` for every cell
    pub(crate) fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> Cell) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                cells.push(f(r, c));
            }
        }
        Self { rows, cols, cells }
    }

    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the grid has no cells at all
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Cell at `(row, col)` without bounds checking against the shape.
    #[inline(always)]
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Get cell at `(row, col)`; `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Set cell at `(row, col)`; returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// One row as a slice; `None` if out of bounds
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Iterate rows top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.rows).filter_map(move |r| self.row(r))
    }

    /// All cells, row-major (the flattened grid)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of non-empty cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Whether any cell holds exactly `value`
    pub fn contains(&self, value: u32) -> bool {
        self.cells.contains(&Some(value))
    }

    /// Largest tile on the board
    pub fn max_tile(&self) -> Option<u32> {
        self.cells.iter().flatten().copied().max()
    }

    /// Convert to nested rows
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.iter_rows().map(|r| r.to_vec()).collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact text form, one line per row, `.` for empty cells.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(v) => write!(f, "{v:>4}")?,
                    None => write!(f, "{:>4}", ".")?,
                }
            }
        }
        Ok(())
    }
}
