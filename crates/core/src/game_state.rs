//! Game state module - the board engine
//!
//! This module ties together the board, the line algorithm, the RNG and the
//! configuration. It applies moves, spawns tiles, raises the win signal and
//! answers whether the game is over.
//!
//! Win and loss are reported differently on purpose: a win is an event that
//! happens during a merge and is reported in the [`MoveOutcome`] of that move,
//! while game over is a property of the board that callers poll with
//! [`GameState::is_game_over`].

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::board::{Board, Quarter};
use crate::config::GameConfig;
use crate::error::{CoreError, Result};
use crate::line;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::tile::Tile;
use crate::types::{Direction, GameAction, INITIAL_TILES, MAX_GRID_SIZE};

/// A tile placed by the spawn step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawned {
    pub x: usize,
    pub y: usize,
    pub tile: Tile,
}

/// What a single move did.
///
/// A no-op move returns `MoveOutcome::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// The board changed (and a tile was spawned if room remained)
    pub moved: bool,
    /// Number of merges across all lines
    pub merges: u32,
    /// Number of merges that produced the goal; each one is a win signal
    pub goal_reached: u32,
    pub spawned: Option<Spawned>,
}

/// Board after sliding in one direction, before any spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSlide {
    pub board: Board,
    pub merges: u32,
    pub goal_reached: u32,
}

/// Rotation into left-facing orientation and the rotation back.
fn orientation(direction: Direction) -> Option<(Quarter, Quarter)> {
    match direction {
        Direction::Left => None,
        Direction::Right => Some((Quarter::Cw180, Quarter::Cw180)),
        Direction::Up => Some((Quarter::Cw270, Quarter::Cw90)),
        Direction::Down => Some((Quarter::Cw90, Quarter::Cw270)),
    }
}

/// Slide every row of `board` to the left.
fn slide_rows_left(mut board: Board, goal: u32) -> Result<BoardSlide> {
    let mut merges = 0;
    let mut goal_reached = 0;

    for i in 0..board.size() {
        let row = board.row(i)?;
        let slide = line::slide_left(&row)?;
        board.set_row(i, &slide.line)?;
        merges += slide.merges.len() as u32;
        goal_reached += slide.goal_hits(goal) as u32;
    }

    Ok(BoardSlide {
        board,
        merges,
        goal_reached,
    })
}

/// Slide `board` in `direction` without spawning.
///
/// Left slides rows directly; every other direction rotates the board so the
/// move becomes a left slide, slides, and rotates back.
///
/// # Examples
///
/// ```
/// use tui_2048_core::{slide_board, Board};
/// use tui_2048_core::types::Direction;
///
/// let board = Board::from_values(2, &[2, 0, 2, 4]).unwrap();
/// let slid = slide_board(&board, Direction::Up, 2048).unwrap();
/// assert_eq!(slid.board.to_values(), vec![vec![4, 4], vec![0, 0]]);
/// assert_eq!(slid.merges, 1);
/// ```
pub fn slide_board(board: &Board, direction: Direction, goal: u32) -> Result<BoardSlide> {
    match orientation(direction) {
        None => slide_rows_left(board.clone(), goal),
        Some((forward, back)) => {
            let mut slid = slide_rows_left(board.rotated(forward), goal)?;
            slid.board = slid.board.rotated(back);
            Ok(slid)
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    config: GameConfig,
    board: Board,
    rng: R,
    /// Seed the RNG was created from (0 when the caller supplied the RNG).
    seed: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Effective moves in the current episode.
    moves: u32,
    /// Sticky: set by the first goal merge, cleared by a reset.
    won: bool,
    /// Outcome of the last effective move (consumed by observers).
    last_outcome: Option<MoveOutcome>,
}

impl GameState<SimpleRng> {
    /// Create a classic 4x4 game with the given RNG seed
    pub fn with_seed(seed: u32) -> Self {
        Self::build(GameConfig::default(), SimpleRng::new(seed), seed)
    }

    /// Create a game with custom rules and a seeded RNG
    pub fn seeded(config: GameConfig, seed: u32) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, SimpleRng::new(seed), seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a game drawing all randomness from `rng`.
    ///
    /// The board starts with two spawned tiles.
    pub fn new(config: GameConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, rng, 0))
    }

    /// Resume from an existing board. Nothing is spawned.
    pub fn from_board(config: GameConfig, board: Board, rng: R) -> Result<Self> {
        config.validate()?;
        if board.size() != config.size {
            return Err(CoreError::SizeMismatch {
                expected: config.size,
                actual: board.size(),
            });
        }
        Ok(Self {
            config,
            board,
            rng,
            seed: 0,
            episode_id: 0,
            moves: 0,
            won: false,
            last_outcome: None,
        })
    }

    /// `config` must already be validated.
    fn build(config: GameConfig, rng: R, seed: u32) -> Self {
        let mut state = Self {
            board: Board::blank(config.size),
            config,
            rng,
            seed,
            episode_id: 0,
            moves: 0,
            won: false,
            last_outcome: None,
        };
        state.populate();
        state
    }

    /// Clear the board and spawn the opening tiles.
    fn populate(&mut self) {
        self.board.clear();
        self.moves = 0;
        self.won = false;
        self.last_outcome = None;
        for _ in 0..INITIAL_TILES {
            self.spawn_tile();
        }
    }

    /// Start a new episode on the same rules and RNG stream
    pub fn reset(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.populate();
        info!(
            "episode {} started on a {}x{} board (goal {})",
            self.episode_id, self.config.size, self.config.size, self.config.goal
        );
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn goal(&self) -> u32 {
        self.config.goal
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// True once any merge in this episode produced the goal.
    pub fn won(&self) -> bool {
        self.won
    }

    /// Tile at (x, y)
    pub fn tile_at(&self, x: usize, y: usize) -> Result<Tile> {
        self.board.get(x, y)
    }

    /// True while some move can still change the board.
    pub fn can_move(&self) -> bool {
        self.board.can_move()
    }

    pub fn is_game_over(&self) -> bool {
        !self.can_move()
    }

    /// Take and clear the outcome of the last effective move.
    pub fn take_last_outcome(&mut self) -> Option<MoveOutcome> {
        self.last_outcome.take()
    }

    /// Place one random tile into a uniformly chosen empty cell.
    ///
    /// Returns `None` when the board is full.
    pub fn spawn_tile(&mut self) -> Option<Spawned> {
        let empty: ArrayVec<usize, { MAX_GRID_SIZE * MAX_GRID_SIZE }> =
            self.board.empty_indices().collect();
        if empty.is_empty() {
            return None;
        }

        let index = empty[self.rng.next_range(empty.len() as u32) as usize];
        let tile = Tile::random(&mut self.rng, self.config.spawn);
        self.board.set_index(index, tile);

        let (x, y) = self.board.position(index);
        debug!("spawned {} at ({}, {})", tile, x, y);
        Some(Spawned { x, y, tile })
    }

    /// Slide all tiles in `direction`.
    ///
    /// If the board changes, exactly one tile is spawned. A move that changes
    /// nothing leaves the state untouched and returns a default outcome.
    pub fn apply_move(&mut self, direction: Direction) -> Result<MoveOutcome> {
        let slid = slide_board(&self.board, direction, self.config.goal)?;
        if slid.board == self.board {
            debug!("move {} changed nothing", direction.as_str());
            return Ok(MoveOutcome::default());
        }

        self.board = slid.board;
        self.moves = self.moves.wrapping_add(1);

        for _ in 0..slid.goal_reached {
            info!("merge reached the goal {} on move {}", self.config.goal, self.moves);
        }
        if slid.goal_reached > 0 {
            self.won = true;
        }

        let spawned = self.spawn_tile();
        let outcome = MoveOutcome {
            moved: true,
            merges: slid.merges,
            goal_reached: slid.goal_reached,
            spawned,
        };
        self.last_outcome = Some(outcome);

        if self.is_game_over() {
            info!(
                "game over after {} moves, best tile {}",
                self.moves,
                self.board.max_tile()
            );
        }

        Ok(outcome)
    }

    /// Apply an input action. Returns whether the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> Result<bool> {
        match action {
            GameAction::Move(direction) => Ok(self.apply_move(direction)?.moved),
            GameAction::Restart => {
                self.reset();
                Ok(true)
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        let size = self.board.size();
        for (i, tile) in self.board.cells().iter().enumerate() {
            out.board[i / size][i % size] = tile.raw();
        }
        out.size = size;
        out.goal = self.config.goal;
        out.max_tile = self.board.max_tile().raw();
        out.won = self.won;
        out.game_over = self.is_game_over();
        out.episode_id = self.episode_id;
        out.seed = self.seed;
        out.moves = self.moves;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceRng;
    use crate::types::SpawnWeights;

    fn state_from(
        size: usize,
        goal: u32,
        values: &[u32],
        script: Vec<u32>,
    ) -> GameState<SequenceRng> {
        let config = GameConfig::default().with_size(size).with_goal(goal);
        let board = Board::from_values(size, values).unwrap();
        GameState::from_board(config, board, SequenceRng::new(script)).unwrap()
    }

    #[test]
    fn test_new_game_has_two_tiles() {
        let state = GameState::with_seed(12345);
        assert_eq!(state.board().occupied_count(), 2);
        assert!(state
            .board()
            .cells()
            .iter()
            .all(|t| t.is_empty() || *t == Tile::TWO || *t == Tile::FOUR));
        assert!(!state.won());
        assert!(state.can_move());
        assert_eq!(state.moves(), 0);
        assert_eq!(state.seed(), 12345);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = GameState::with_seed(7);
        let mut b = GameState::with_seed(7);
        assert_eq!(a.board(), b.board());
        for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
            a.apply_move(dir).unwrap();
            b.apply_move(dir).unwrap();
            assert_eq!(a.board(), b.board());
        }
    }

    #[test]
    fn test_reset_increments_episode() {
        let mut state = GameState::with_seed(1);
        state.apply_move(Direction::Left).unwrap();
        state.apply_move(Direction::Up).unwrap();
        state.reset();
        assert_eq!(state.episode_id(), 1);
        assert_eq!(state.moves(), 0);
        assert_eq!(state.board().occupied_count(), 2);
        assert!(state.take_last_outcome().is_none());
    }

    #[test]
    fn test_left_spawns_into_scripted_cell() {
        // Row 0 [2,2,0,0] slides to [4,0,0,0]; 15 cells are then empty.
        // Script: pick empty index 0 (cell (1,0)), roll 95 (a four).
        let mut state = state_from(
            4,
            2048,
            &[2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            vec![0, 95],
        );
        let outcome = state.apply_move(Direction::Left).unwrap();
        assert!(outcome.moved);
        assert_eq!(outcome.merges, 1);
        assert_eq!(outcome.goal_reached, 0);
        assert_eq!(
            outcome.spawned,
            Some(Spawned {
                x: 1,
                y: 0,
                tile: Tile::FOUR
            })
        );
        assert_eq!(state.tile_at(0, 0).unwrap().value(), Some(4));
        assert_eq!(state.tile_at(1, 0).unwrap(), Tile::FOUR);
        assert_eq!(state.moves(), 1);
        assert_eq!(state.take_last_outcome(), Some(outcome));
        assert_eq!(state.take_last_outcome(), None);
    }

    #[test]
    fn test_noop_move_changes_nothing() {
        let values = [2, 4, 0, 0, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        let mut state = state_from(4, 2048, &values, vec![0, 0]);
        let before = state.board().clone();

        let outcome = state.apply_move(Direction::Left).unwrap();
        assert_eq!(outcome, MoveOutcome::default());
        assert_eq!(state.board(), &before);
        assert_eq!(state.moves(), 0);
        assert!(state.take_last_outcome().is_none());
        // No randomness consumed by a no-op.
        assert_eq!(state.rng.draws(), 0);
    }

    #[test]
    fn test_win_fires_once_per_goal_merge() {
        let mut state = state_from(
            4,
            4,
            &[2, 2, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            vec![5, 0],
        );
        assert!(!state.won());
        let outcome = state.apply_move(Direction::Left).unwrap();
        // Spawn goes to empty index 5 of 14, i.e. flat index 7 = (3, 1).
        assert_eq!(state.board().to_values()[0], vec![4, 4, 0, 0]);
        assert_eq!(outcome.goal_reached, 1);
        assert!(state.won());
    }

    #[test]
    fn test_no_win_below_goal() {
        let mut state = state_from(
            4,
            2048,
            &[2, 2, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            vec![5, 0],
        );
        let outcome = state.apply_move(Direction::Left).unwrap();
        assert_eq!(outcome.goal_reached, 0);
        assert!(!state.won());
    }

    #[test]
    fn test_two_goal_merges_in_one_move() {
        let mut state = state_from(
            4,
            4,
            &[2, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            vec![0, 0],
        );
        let outcome = state.apply_move(Direction::Left).unwrap();
        assert_eq!(outcome.goal_reached, 2);
    }

    #[test]
    fn test_game_over_detection() {
        let full = [2, 4, 2, 4, 4, 2, 4, 2, 2, 4, 2, 4, 4, 2, 4, 2];
        let state = state_from(4, 2048, &full, vec![]);
        assert!(!state.can_move());
        assert!(state.is_game_over());

        let mut pair = full;
        pair[1] = 2; // (0,0) and (1,0) are now equal
        let state = state_from(4, 2048, &pair, vec![]);
        assert!(state.can_move());

        let mut hole = full;
        hole[5] = 0;
        let state = state_from(4, 2048, &hole, vec![]);
        assert!(state.can_move());
    }

    #[test]
    fn test_game_over_board_rejects_every_move() {
        let full = [2, 4, 2, 4, 4, 2, 4, 2, 2, 4, 2, 4, 4, 2, 4, 2];
        let mut state = state_from(4, 2048, &full, vec![]);
        for dir in Direction::ALL {
            assert!(!state.apply_move(dir).unwrap().moved);
        }
    }

    #[test]
    fn test_full_board_after_merge_has_room_for_spawn() {
        // Full board with one mergeable pair; the merge frees exactly one cell.
        let values = [2, 2, 4, 8, 4, 8, 16, 32, 8, 16, 32, 64, 16, 32, 64, 128];
        let mut state = state_from(4, 2048, &values, vec![0, 0]);
        let outcome = state.apply_move(Direction::Left).unwrap();
        assert!(outcome.moved);
        assert_eq!(outcome.spawned.map(|s| (s.x, s.y)), Some((3, 0)));
        assert!(state.board().is_full());
    }

    #[test]
    fn test_apply_action_restart() {
        let mut state = GameState::with_seed(3);
        assert!(state.apply_action(GameAction::Restart).unwrap());
        assert_eq!(state.episode_id(), 1);
        assert_eq!(state.board().occupied_count(), 2);
    }

    #[test]
    fn test_apply_action_move() {
        // Each spawn takes the first empty cell and rolls a two.
        let mut state = state_from(2, 2048, &[0, 2, 0, 0], vec![0, 0]);
        let left = GameAction::Move(Direction::Left);
        assert!(state.apply_action(left).unwrap());
        assert_eq!(state.board().to_values(), vec![vec![2, 2], vec![0, 0]]);
        assert!(state.apply_action(left).unwrap());
        assert_eq!(state.board().to_values(), vec![vec![4, 2], vec![0, 0]]);
        assert!(!state.apply_action(left).unwrap());
        assert_eq!(state.moves(), 2);
    }

    #[test]
    fn test_from_board_size_mismatch() {
        let board = Board::new(3).unwrap();
        let err = GameState::from_board(GameConfig::default(), board, SequenceRng::new(vec![]))
            .unwrap_err();
        assert_eq!(err, CoreError::SizeMismatch { expected: 4, actual: 3 });
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig::default().with_spawn(SpawnWeights::new(0, 0));
        assert!(GameState::seeded(config, 1).is_err());
        assert!(GameState::new(GameConfig::default().with_size(12), SimpleRng::new(1)).is_err());
    }

    #[test]
    fn test_tile_at_out_of_bounds() {
        let state = GameState::with_seed(1);
        assert_eq!(
            state.tile_at(4, 0),
            Err(CoreError::OutOfBounds { x: 4, y: 0, size: 4 })
        );
    }

    #[test]
    fn test_snapshot_mirrors_board() {
        let state = state_from(3, 8, &[2, 0, 0, 0, 8, 0, 0, 0, 4], vec![]);
        let snap = state.snapshot();
        assert_eq!(snap.size, 3);
        assert_eq!(snap.value_at(0, 0), 2);
        assert_eq!(snap.value_at(1, 1), 8);
        assert_eq!(snap.value_at(2, 2), 4);
        assert_eq!(snap.value_at(3, 0), 0);
        assert_eq!(snap.max_tile, 8);
        // Winning takes a merge; a goal tile already on the board does not count.
        assert!(!snap.won);
        assert!(!snap.game_over);
    }

    #[test]
    fn test_orientation_pairs_are_inverse() {
        for dir in Direction::ALL {
            if let Some((forward, back)) = orientation(dir) {
                assert_eq!(forward.inverse(), back);
            }
        }
    }
}
