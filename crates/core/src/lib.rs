//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on UI, terminal or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: The line algorithm is a pure row-to-row function
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Size-generic**: Any square board from 2x2 to 8x8
//!
//! # Module Structure
//!
//! - [`tile`]: power-of-two tile values
//! - [`board`]: N x N grid, row access and clockwise rotation
//! - [`line`]: compress + merge, the single slide-left algorithm
//! - [`game_state`]: moves, spawning, win signal and game-over detection
//! - [`rng`]: seeded LCG and a scripted source for tests
//! - [`config`]: board size, goal and spawn policy
//!
//! # Game Rules
//!
//! - **Slide**: a move packs every tile toward one edge and merges equal neighbours
//! - **One merge per tile**: a tile produced by a merge does not merge again in the same move
//! - **Spawn**: a move that changes the board spawns one tile (2 or 4) in a random empty cell
//! - **Win**: a merge that produces the goal magnitude (2048 by default)
//! - **Game over**: the board is full and no two neighbours are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, GameAction};
//!
//! let mut game = GameState::with_seed(12345);
//! assert_eq!(game.board().occupied_count(), 2);
//!
//! // Apply game actions
//! game.apply_action(GameAction::Move(Direction::Left)).unwrap();
//! let outcome = game.apply_move(Direction::Up).unwrap();
//! if outcome.moved {
//!     assert!(outcome.spawned.is_some());
//! }
//!
//! assert!(game.can_move());
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod line;
pub mod rng;
pub mod snapshot;
pub mod tile;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Quarter};
pub use config::GameConfig;
pub use error::{ConfigError, CoreError, Result};
pub use game_state::{slide_board, BoardSlide, GameState, MoveOutcome, Spawned};
pub use line::{compress, merge, slide_left, Line, Slide};
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use snapshot::GameSnapshot;
pub use tile::Tile;
