//! Game state module - owns the board and runs one turn per action
//!
//! A turn is: shift the grid, spawn a tile if anything moved, then end the
//! game if a 128 tile exists. Once the game is over, moves are ignored until
//! a restart.

use log::{debug, info};

use crate::engine::{can_move, shift, MoveOutcome};
use crate::grid::Grid;
use crate::rng::{SimpleRng, TileRng};
use crate::snapshot::GameSnapshot;
use crate::spawn::{create_initial_grid, spawn_random_tile};
use crate::types::{Direction, GameAction, GRID_SIZE, TARGET_TILE};

/// Whether the game still accepts moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// True iff a 128 tile exists anywhere on the grid
pub fn is_terminal(grid: &Grid) -> bool {
    grid.contains(TARGET_TILE)
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R: TileRng = SimpleRng> {
    grid: Grid,
    status: GameStatus,
    rng: R,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Accepted moves in the current episode.
    moves: u32,
}

impl GameState<SimpleRng> {
    /// Create a new game seeded with `seed`
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: TileRng> GameState<R> {
    /// Create a new game drawing all randomness from `rng`
    pub fn with_rng(mut rng: R) -> Self {
        let grid = create_initial_grid(&mut rng);
        Self {
            grid,
            status: GameStatus::Playing,
            rng,
            episode_id: 0,
            moves: 0,
        }
    }

    /// Resume from an existing grid (status derived from the grid)
    pub fn from_grid(grid: Grid, rng: R) -> Self {
        let status = if is_terminal(&grid) {
            GameStatus::GameOver
        } else {
            GameStatus::Playing
        };
        Self {
            grid,
            status,
            rng,
            episode_id: 0,
            moves: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Run one turn in `direction`.
    ///
    /// Returns whether the grid changed. Ignored (returns false) after game over.
    pub fn try_move(&mut self, direction: Direction) -> bool {
        if self.game_over() {
            debug!("ignoring {} after game over", direction.as_str());
            return false;
        }

        let MoveOutcome { grid, moved } = shift(&self.grid, direction);
        let reached_target = is_terminal(&grid);

        if moved {
            self.grid = spawn_random_tile(grid, &mut self.rng);
            self.moves += 1;
            debug!(
                "move {} #{}: {} tiles",
                direction.as_str(),
                self.moves,
                self.grid.tile_count()
            );
        } else {
            debug!("move {} changed nothing", direction.as_str());
        }

        if reached_target {
            self.status = GameStatus::GameOver;
            info!(
                "reached {} after {} moves (episode {})",
                TARGET_TILE, self.moves, self.episode_id
            );
        }

        moved
    }

    /// Start a new board, keeping the RNG stream
    pub fn restart(&mut self) {
        self.grid = create_initial_grid(&mut self.rng);
        self.status = GameStatus::Playing;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.moves = 0;
        info!("restart: episode {}", self.episode_id);
    }

    /// Apply a player action. Returns whether the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action.direction() {
            Some(direction) => self.try_move(direction),
            None => {
                self.restart();
                true
            }
        }
    }

    /// Fill an existing snapshot (no allocation)
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        for (r, row) in self.grid.iter_rows().take(GRID_SIZE).enumerate() {
            for (c, &cell) in row.iter().take(GRID_SIZE).enumerate() {
                out.board[r][c] = cell;
            }
        }
        out.game_over = self.game_over();
        out.can_move = can_move(&self.grid);
        out.episode_id = self.episode_id;
        out.moves = self.moves;
        out.max_tile = self.grid.max_tile();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
