use crate::types::{Cell, GRID_SIZE};

/// Plain copy of everything the view needs to draw a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; GRID_SIZE]; GRID_SIZE],
    pub game_over: bool,
    /// False when no direction would change the board
    pub can_move: bool,
    pub episode_id: u32,
    pub moves: u32,
    pub max_tile: Option<u32>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[None; GRID_SIZE]; GRID_SIZE];
        self.game_over = false;
        self.can_move = true;
        self.episode_id = 0;
        self.moves = 0;
        self.max_tile = None;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; GRID_SIZE]; GRID_SIZE],
            game_over: false,
            can_move: true,
            episode_id: 0,
            moves: 0,
            max_tile: None,
        }
    }
}
