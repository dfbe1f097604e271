//! Tile module - a single board cell
//!
//! A tile is either empty or holds a power-of-two magnitude >= 2. The magnitude is
//! stored as its base-2 exponent, so a non-power-of-two value cannot be represented.

use std::fmt;

use crate::error::{CoreError, Result};
use crate::rng::RandomSource;
use crate::types::SpawnWeights;

/// Largest exponent whose magnitude still fits in a `u32` (2^31).
const MAX_EXPONENT: u8 = 31;

/// An immutable board cell.
///
/// Equality is structural: two empty tiles are equal, an empty tile never equals
/// a filled one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tile {
    /// 0 = empty, otherwise magnitude = 2^exp
    exp: u8,
}

impl Tile {
    pub const EMPTY: Tile = Tile { exp: 0 };
    pub const TWO: Tile = Tile { exp: 1 };
    pub const FOUR: Tile = Tile { exp: 2 };

    /// Build a tile from a magnitude. `0` means empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Tile;
    ///
    /// assert_eq!(Tile::from_value(0).unwrap(), Tile::EMPTY);
    /// assert_eq!(Tile::from_value(8).unwrap().value(), Some(8));
    /// assert!(Tile::from_value(6).is_err());
    /// assert!(Tile::from_value(1).is_err());
    /// ```
    pub fn from_value(value: u32) -> Result<Self> {
        if value == 0 {
            return Ok(Self::EMPTY);
        }
        if value < 2 || !value.is_power_of_two() {
            return Err(CoreError::InvalidMagnitude(value));
        }
        Ok(Self {
            exp: value.trailing_zeros() as u8,
        })
    }

    /// Draw a fresh non-empty tile: 2 or 4 according to `weights`.
    ///
    /// All randomness comes from `rng`; the tile itself holds no state.
    /// Zero total weight falls back to a 2.
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R, weights: SpawnWeights) -> Self {
        let total = weights.total();
        if total == 0 {
            return Self::TWO;
        }
        let roll = match u32::try_from(total) {
            Ok(range) => u64::from(rng.next_range(range)),
            // Same multiply-shift as `next_range`, over the widened range.
            Err(_) => (u64::from(rng.next_u32()) * total) >> 32,
        };
        if roll < u64::from(weights.two) {
            Self::TWO
        } else {
            Self::FOUR
        }
    }

    pub fn is_empty(&self) -> bool {
        self.exp == 0
    }

    /// Magnitude, or `None` for an empty tile.
    pub fn value(&self) -> Option<u32> {
        if self.is_empty() {
            None
        } else {
            Some(1u32 << self.exp)
        }
    }

    /// Magnitude with `0` standing in for empty.
    pub fn raw(&self) -> u32 {
        self.value().unwrap_or(0)
    }

    /// Base-2 exponent of the magnitude (0 for empty).
    pub fn exponent(&self) -> u8 {
        self.exp
    }

    /// The tile a merge of two copies of `self` produces.
    pub fn doubled(&self) -> Result<Self> {
        if self.is_empty() {
            return Err(CoreError::DoubleEmpty);
        }
        if self.exp >= MAX_EXPONENT {
            return Err(CoreError::MagnitudeOverflow(self.raw()));
        }
        Ok(Self { exp: self.exp + 1 })
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("."),
        }
    }
}
