//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the input mapping, and the terminal view alike.
//!
//! # Board
//!
//! - **Size**: 4x4 cells, indexed `(row, col)` from the top-left corner
//! - **Cells**: empty, or a positive power of two (2, 4, 8, ...)
//! - **Target**: the game ends once a [`TARGET_TILE`] (128) appears anywhere
//!
//! # Spawning
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPAWN_LOW_VALUE` | 2 | Common spawn value |
//! | `SPAWN_HIGH_VALUE` | 4 | Rare spawn value |
//! | `SPAWN_HIGH_PER_MILLE` | 100 | Chance of the rare value, per thousand |
//! | `INITIAL_TILES` | 2 | Tiles placed on a fresh board |
//!
//! # Examples
//!
//! ```
//! use tui_128_types::{Direction, Rotation, GRID_SIZE, TARGET_TILE};
//!
//! let (forward, inverse) = Direction::Up.rotations();
//! assert_eq!(forward, Rotation::Deg90);
//! assert_eq!(inverse, Rotation::Deg270);
//! assert_eq!(forward.inverse(), inverse);
//!
//! assert_eq!(GRID_SIZE, 4);
//! assert_eq!(TARGET_TILE, 128);
//! ```

/// Board side length in cells (4x4)
pub const GRID_SIZE: usize = 4;

/// Tile value that ends the game
pub const TARGET_TILE: u32 = 128;

/// Value placed by most spawns
pub const SPAWN_LOW_VALUE: u32 = 2;

/// Value placed by the rare spawn branch
pub const SPAWN_HIGH_VALUE: u32 = 4;

/// Probability of [`SPAWN_HIGH_VALUE`], in thousandths (10%)
pub const SPAWN_HIGH_PER_MILLE: u32 = 100;

/// Number of tiles on a freshly created board
pub const INITIAL_TILES: usize = 2;

/// A single board cell: `None` when empty, otherwise the tile value.
pub type Cell = Option<u32>;


/// The four swipe directions
///
/// Every move is implemented as "move left" on a rotated copy of the grid;
/// [`Direction::rotations`] gives the pair of rotations that does that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Counter-clockwise rotations `(forward, inverse)` that turn this
    /// direction into "left" and back.
    ///
    /// | direction | forward | inverse |
    /// |-----------|---------|---------|
    /// | left | 0 | 0 |
    /// | up | 90 | 270 |
    /// | right | 180 | 180 |
    /// | down | 270 | 90 |
    pub fn rotations(&self) -> (Rotation, Rotation) {
        match self {
            Direction::Left => (Rotation::Deg0, Rotation::Deg0),
            Direction::Up => (Rotation::Deg90, Rotation::Deg270),
            Direction::Right => (Rotation::Deg180, Rotation::Deg180),
            Direction::Down => (Rotation::Deg270, Rotation::Deg90),
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Counter-clockwise quarter turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Map a degree value to a rotation.
    ///
    /// Only exact multiples of 90 in `0..360` are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_128_types::Rotation;
    ///
    /// assert_eq!(Rotation::from_degrees(90), Some(Rotation::Deg90));
    /// assert_eq!(Rotation::from_degrees(91), None);
    /// ```
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }

    pub fn degrees(&self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// The rotation that undoes this one
    pub fn inverse(&self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg0,
            Rotation::Deg90 => Rotation::Deg270,
            Rotation::Deg180 => Rotation::Deg180,
            Rotation::Deg270 => Rotation::Deg90,
        }
    }
}

/// Player actions applied to the game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Shift all tiles up
    MoveUp,
    /// Shift all tiles down
    MoveDown,
    /// Shift all tiles left
    MoveLeft,
    /// Shift all tiles right
    MoveRight,
    /// Start a new board (when game over or at any time)
    Restart,
}

impl GameAction {
    /// The swipe direction carried by a move action
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::Restart => None,
        }
    }

    /// Convert to camelCase string (used in logs)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Restart => "restart",
        }
    }
}
