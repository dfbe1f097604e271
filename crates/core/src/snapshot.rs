//! Snapshot module - a plain-data copy of the game for renderers and observers.

use crate::types::{DEFAULT_GOAL, DEFAULT_GRID_SIZE, MAX_GRID_SIZE};

/// Copyable view of a game for renderers.
///
/// `board[y][x]` holds the magnitude at (x, y), `0` for empty. Only the top-left
/// `size x size` corner is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u32; MAX_GRID_SIZE]; MAX_GRID_SIZE],
    pub size: usize,
    pub goal: u32,
    pub max_tile: u32,
    pub won: bool,
    pub game_over: bool,
    pub episode_id: u32,
    pub seed: u32,
    pub moves: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Magnitude at (x, y), `0` for empty or outside the board.
    pub fn value_at(&self, x: usize, y: usize) -> u32 {
        if x >= self.size || y >= self.size {
            return 0;
        }
        self.board[y][x]
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u32; MAX_GRID_SIZE]; MAX_GRID_SIZE],
            size: DEFAULT_GRID_SIZE,
            goal: DEFAULT_GOAL,
            max_tile: 0,
            won: false,
            game_over: false,
            episode_id: 0,
            seed: 0,
            moves: 0,
        }
    }
}
