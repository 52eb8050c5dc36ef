//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the grid transformation engine of the 128 puzzle and the
//! small controller that drives it. It has **no dependencies** on UI, input,
//! or I/O, which keeps it:
//!
//! - **Deterministic**: the same seed produces the same game
//! - **Testable**: randomness is injected through [`TileRng`]
//! - **Portable**: runs in the terminal binary, benches, or headless tests
//!
//! # Module Structure
//!
//! - [`grid`]: rectangular board of tile values
//! - [`rotate`]: counter-clockwise quarter-turn rotation
//! - [`collapse`]: slide and merge one row toward the left
//! - [`engine`]: directional moves built from rotation + row collapse
//! - [`spawn`]: random tile placement and initial board seeding
//! - [`rng`]: the [`TileRng`] seam and a seeded LCG
//! - [`game_state`]: turn logic, game-over detection, restart
//!
//! # Game Rules
//!
//! - A fresh board has two 2-tiles on random cells
//! - A move slides every tile as far as possible; equal neighbours merge,
//!   and a merged tile does not merge again in the same move
//! - A move that changes the board spawns a 2 (90%) or a 4 (10%)
//! - The game is over once a 128 tile exists
//!
//! # Example
//!
//! ```
//! use tui_128_core::GameState;
//! use tui_128_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.grid().tile_count(), 2);
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::MoveUp);
//!
//! assert!(!game.game_over());
//! ```

pub mod collapse;
pub mod engine;
pub mod game_state;
pub mod grid;
pub mod rng;
pub mod rotate;
pub mod snapshot;
pub mod spawn;

pub use tui_128_types as types;

// Re-export commonly used types for convenience
pub use collapse::{collapse_left, collapse_left_into};
pub use engine::{can_move, shift, MoveOutcome};
pub use game_state::{is_terminal, GameState, GameStatus};
pub use grid::Grid;
pub use rng::{SimpleRng, TileRng};
pub use rotate::{rotate, rotate_degrees};
pub use snapshot::GameSnapshot;
pub use spawn::{
    create_initial_grid, empty_cells, empty_cells_on_board, place_random_tile, spawn_random_tile,
    SpawnValue,
};
