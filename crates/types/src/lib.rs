//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rule engine, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The board is always square. The classic game is played on 4x4, but the rule
//! engine works for any size in `MIN_GRID_SIZE..=MAX_GRID_SIZE`:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRID_SIZE` | 4 | Classic board |
//! | `MIN_GRID_SIZE` | 2 | Smallest board that can still merge |
//! | `MAX_GRID_SIZE` | 8 | Upper bound for stack-allocated lines |
//! | `DEFAULT_GOAL` | 2048 | Magnitude that wins the game |
//! | `INITIAL_TILES` | 2 | Tiles spawned by a reset |
//!
//! # Spawn Policy
//!
//! After every effective move one tile is spawned. Its magnitude is 2 or 4,
//! chosen by [`SpawnWeights`] (90/10 by default).
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, DEFAULT_GOAL, DEFAULT_GRID_SIZE};
//!
//! // Parse a direction (case-insensitive)
//! let dir = Direction::from_str("Up").unwrap();
//! assert_eq!(dir, Direction::Up);
//! assert_eq!(dir.opposite(), Direction::Down);
//!
//! // Parse game action
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Left));
//!
//! assert_eq!(DEFAULT_GRID_SIZE, 4);
//! assert_eq!(DEFAULT_GOAL, 2048);
//! ```

/// Classic board edge length (4x4)
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Smallest supported board edge length
pub const MIN_GRID_SIZE: usize = 2;

/// Largest supported board edge length.
///
/// Lines are stored in fixed-capacity arrays of this length.
pub const MAX_GRID_SIZE: usize = 8;

/// Goal magnitude that signals a win (2048)
pub const DEFAULT_GOAL: u32 = 2048;

/// Number of tiles spawned when a game is (re)initialized
pub const INITIAL_TILES: usize = 2;

/// Default spawn weights: 90% twos, 10% fours
pub const DEFAULT_SPAWN_WEIGHTS: SpawnWeights = SpawnWeights { two: 90, four: 10 };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_defaults() {
        assert_eq!(DEFAULT_GRID_SIZE, 4);
        assert_eq!(DEFAULT_GOAL, 2048);
        assert_eq!(INITIAL_TILES, 2);
        assert_eq!(DEFAULT_SPAWN_WEIGHTS, SpawnWeights::default());
        assert_eq!(DEFAULT_SPAWN_WEIGHTS.total(), 100);
        assert_eq!(
            SpawnWeights::new(u32::MAX, u32::MAX).total(),
            2 * u64::from(u32::MAX)
        );
        assert!((MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&DEFAULT_GRID_SIZE));
    }

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn action_round_trips_through_str() {
        for dir in Direction::ALL {
            let action = GameAction::Move(dir);
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
        assert_eq!(
            GameAction::from_str(GameAction::Restart.as_str()),
            Some(GameAction::Restart)
        );
    }
}

/// The four slide directions
///
/// Every direction is realized by rotating the board so that the move becomes a
/// slide to the left, sliding, and rotating back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in the order the engine probes them.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "left" | "l", "right" | "r", "up" | "u", "down" | "d"
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("D"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// These actions are produced by the input layer and consumed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles in the given direction
    Move(Direction),
    /// Clear the board and start a new game
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveUp"), Some(GameAction::Move(Direction::Up)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::Move(Direction::Left)),
            "moveright" => Some(GameAction::Move(Direction::Right)),
            "moveup" => Some(GameAction::Move(Direction::Up)),
            "movedown" => Some(GameAction::Move(Direction::Down)),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Restart => "restart",
        }
    }
}

/// Relative weights for the magnitude of a spawned tile
///
/// A spawned tile is a 2 with probability `two / (two + four)` and a 4 otherwise.
/// Weights are plain integers so the policy can be changed without touching
/// any call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnWeights {
    pub two: u32,
    pub four: u32,
}

impl SpawnWeights {
    pub const fn new(two: u32, four: u32) -> Self {
        Self { two, four }
    }

    /// Sum of both weights (the range a random roll is drawn from)
    ///
    /// Widened so that two `u32::MAX` weights still mean 50/50.
    pub fn total(&self) -> u64 {
        u64::from(self.two) + u64::from(self.four)
    }
}

impl Default for SpawnWeights {
    fn default() -> Self {
        DEFAULT_SPAWN_WEIGHTS
    }
}
