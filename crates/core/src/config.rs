//! Game configuration: board size, goal magnitude and spawn policy.

use crate::error::ConfigError;
use crate::types::{
    SpawnWeights, DEFAULT_GOAL, DEFAULT_GRID_SIZE, DEFAULT_SPAWN_WEIGHTS, MAX_GRID_SIZE,
    MIN_GRID_SIZE,
};

/// Rules a [`GameState`](crate::GameState) is created with.
///
/// # Examples
///
/// ```
/// use tui_2048_core::GameConfig;
///
/// let config = GameConfig::default().with_size(5).with_goal(4096);
/// assert!(config.validate().is_ok());
/// assert!(GameConfig::default().with_goal(1000).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    pub size: usize,
    pub goal: u32,
    pub spawn: SpawnWeights,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            goal: DEFAULT_GOAL,
            spawn: DEFAULT_SPAWN_WEIGHTS,
        }
    }
}

impl GameConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_goal(mut self, goal: u32) -> Self {
        self.goal = goal;
        self
    }

    pub fn with_spawn(mut self, spawn: SpawnWeights) -> Self {
        self.spawn = spawn;
        self
    }

    /// Check every field.
    ///
    /// The goal must be reachable by a merge, so it is at least 4.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.size) {
            return Err(ConfigError::Size(self.size));
        }
        if self.goal < 4 || !self.goal.is_power_of_two() {
            return Err(ConfigError::Goal(self.goal));
        }
        if self.spawn.total() == 0 {
            return Err(ConfigError::SpawnWeights);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic() {
        let c = GameConfig::default();
        assert_eq!(c.size, 4);
        assert_eq!(c.goal, 2048);
        assert_eq!(c.spawn, SpawnWeights::new(90, 10));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_bad_sizes() {
        assert_eq!(GameConfig::default().with_size(1).validate(), Err(ConfigError::Size(1)));
        assert_eq!(GameConfig::default().with_size(9).validate(), Err(ConfigError::Size(9)));
        assert!(GameConfig::default().with_size(2).validate().is_ok());
        assert!(GameConfig::default().with_size(8).validate().is_ok());
    }

    #[test]
    fn rejects_bad_goals() {
        for goal in [0, 1, 2, 3, 6, 1000, 2047] {
            assert_eq!(
                GameConfig::default().with_goal(goal).validate(),
                Err(ConfigError::Goal(goal))
            );
        }
        for goal in [4, 8, 2048, 65536] {
            assert!(GameConfig::default().with_goal(goal).validate().is_ok());
        }
    }

    #[test]
    fn rejects_zero_spawn_weights() {
        let c = GameConfig::default().with_spawn(SpawnWeights::new(0, 0));
        assert_eq!(c.validate(), Err(ConfigError::SpawnWeights));
        let only_fours = GameConfig::default().with_spawn(SpawnWeights::new(0, 1));
        assert!(only_fours.validate().is_ok());
    }
}
