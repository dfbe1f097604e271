//! Error types for the rule engine.
//!
//! Every error here is a contract violation by the caller. Nothing is clamped or
//! retried; normal play never produces one.

use crate::types::{MAX_GRID_SIZE, MIN_GRID_SIZE};

/// Errors raised by tile, board and engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("cannot rotate by {0} degrees (only 90, 180 and 270 are supported)")]
    InvalidRotation(u32),

    #[error("cell ({x}, {y}) is outside a {size}x{size} board")]
    OutOfBounds { x: usize, y: usize, size: usize },

    #[error("line index {index} is outside a {size}x{size} board")]
    LineOutOfBounds { index: usize, size: usize },

    #[error("line holds {actual} tiles but the board is {expected} wide")]
    LineLength { expected: usize, actual: usize },

    #[error("board is {actual}x{actual} but the game is configured for {expected}x{expected}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("{0} is not a tile magnitude (expected a power of two >= 2)")]
    InvalidMagnitude(u32),

    #[error("cannot double an empty tile")]
    DoubleEmpty,

    #[error("doubling {0} exceeds the largest supported magnitude")]
    MagnitudeOverflow(u32),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while validating a [`GameConfig`](crate::GameConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size {0} is outside {MIN_GRID_SIZE}..={MAX_GRID_SIZE}")]
    Size(usize),

    #[error("goal {0} must be a power of two of at least 4")]
    Goal(u32),

    #[error("spawn weights must not both be zero")]
    SpawnWeights,
}

pub type Result<T, E = CoreError> = std::result::Result<T, E>;
