//! Board module - manages the game grid
//!
//! The board is an N x N grid where each cell holds one [`Tile`] (possibly empty).
//! Uses a flat array in row-major order for cache locality.
//! Coordinates: (x, y) where x is the column (left to right) and y the row
//! (top to bottom); the flat index is `x + y * N`.
//!
//! Besides cell access this module owns the grid geometry the move algorithm is
//! built on: row/column extraction, row replacement and clockwise rotation.

use std::fmt;

use crate::error::{ConfigError, CoreError, Result};
use crate::line::Line;
use crate::tile::Tile;
use crate::types::{MAX_GRID_SIZE, MIN_GRID_SIZE};

/// A clockwise quarter-turn multiple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quarter {
    Cw90,
    Cw180,
    Cw270,
}

impl Quarter {
    /// Parse an angle in degrees. Only 90, 180 and 270 are accepted.
    pub fn from_degrees(degrees: u32) -> Result<Self> {
        match degrees {
            90 => Ok(Quarter::Cw90),
            180 => Ok(Quarter::Cw180),
            270 => Ok(Quarter::Cw270),
            other => Err(CoreError::InvalidRotation(other)),
        }
    }

    pub fn degrees(&self) -> u32 {
        match self {
            Quarter::Cw90 => 90,
            Quarter::Cw180 => 180,
            Quarter::Cw270 => 270,
        }
    }

    /// The rotation that undoes this one.
    pub fn inverse(&self) -> Self {
        match self {
            Quarter::Cw90 => Quarter::Cw270,
            Quarter::Cw180 => Quarter::Cw180,
            Quarter::Cw270 => Quarter::Cw90,
        }
    }

    /// Exact (cos, sin) of the angle.
    #[inline(always)]
    fn cos_sin(&self) -> (isize, isize) {
        match self {
            Quarter::Cw90 => (0, 1),
            Quarter::Cw180 => (-1, 0),
            Quarter::Cw270 => (0, -1),
        }
    }

    /// Translation that brings rotated coordinates back into [0, last].
    #[inline(always)]
    fn offsets(&self, last: isize) -> (isize, isize) {
        match self {
            Quarter::Cw90 => (last, 0),
            Quarter::Cw180 => (last, last),
            Quarter::Cw270 => (0, last),
        }
    }
}

/// The game board - N x N tiles using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    /// Flat array of tiles, row-major order (y * size + x)
    cells: Vec<Tile>,
}

impl Board {
    /// Create a new empty board
    pub fn new(size: usize) -> Result<Self> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            return Err(ConfigError::Size(size).into());
        }
        Ok(Self::blank(size))
    }

    /// Empty board without the size check; `size` must already be validated.
    pub(crate) fn blank(size: usize) -> Self {
        Self {
            size,
            cells: vec![Tile::EMPTY; size * size],
        }
    }

    /// Build a board from row-major magnitudes, `0` meaning empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Board;
    ///
    /// let board = Board::from_values(2, &[2, 0, 4, 8]).unwrap();
    /// assert_eq!(board.get(0, 1).unwrap().value(), Some(4));
    /// assert!(board.get(1, 0).unwrap().is_empty());
    /// ```
    pub fn from_values(size: usize, values: &[u32]) -> Result<Self> {
        let mut board = Self::new(size)?;
        if values.len() != size * size {
            return Err(CoreError::LineLength {
                expected: size * size,
                actual: values.len(),
            });
        }
        for (cell, &v) in board.cells.iter_mut().zip(values) {
            *cell = Tile::from_value(v)?;
        }
        Ok(board)
    }

    /// Row-major magnitudes, `0` meaning empty.
    pub fn to_values(&self) -> Vec<Vec<u32>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(Tile::raw).collect())
            .collect()
    }

    /// Edge length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(x + y * self.size)
    }

    /// (x, y) of a flat index
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index % self.size, index / self.size)
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> CoreError {
        CoreError::OutOfBounds {
            x,
            y,
            size: self.size,
        }
    }

    fn check_line_index(&self, index: usize) -> Result<()> {
        if index >= self.size {
            return Err(CoreError::LineOutOfBounds {
                index,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Get tile at position (x, y)
    pub fn get(&self, x: usize, y: usize) -> Result<Tile> {
        self.index(x, y)
            .map(|idx| self.cells[idx])
            .ok_or_else(|| self.out_of_bounds(x, y))
    }

    /// Set tile at position (x, y)
    pub fn set(&mut self, x: usize, y: usize, tile: Tile) -> Result<()> {
        let idx = self.index(x, y).ok_or_else(|| self.out_of_bounds(x, y))?;
        self.cells[idx] = tile;
        Ok(())
    }

    /// Overwrite the tile at a flat index. Callers must pass an index below N².
    pub(crate) fn set_index(&mut self, index: usize, tile: Tile) {
        self.cells[index] = tile;
    }

    /// Copy of row `index`, columns left to right.
    pub fn row(&self, index: usize) -> Result<Line> {
        self.check_line_index(index)?;
        let start = index * self.size;
        Ok(self.cells[start..start + self.size].iter().copied().collect())
    }

    /// Copy of column `index`, rows top to bottom.
    pub fn column(&self, index: usize) -> Result<Line> {
        self.check_line_index(index)?;
        Ok(self
            .cells
            .iter()
            .skip(index)
            .step_by(self.size)
            .copied()
            .collect())
    }

    /// Replace row `index` with `tiles`.
    pub fn set_row(&mut self, index: usize, tiles: &[Tile]) -> Result<()> {
        self.check_line_index(index)?;
        if tiles.len() != self.size {
            return Err(CoreError::LineLength {
                expected: self.size,
                actual: tiles.len(),
            });
        }
        let start = index * self.size;
        self.cells[start..start + self.size].copy_from_slice(tiles);
        Ok(())
    }

    /// Rotate clockwise by 90, 180 or 270 degrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Board;
    ///
    /// let board = Board::from_values(2, &[2, 4, 8, 16]).unwrap();
    /// let turned = board.rotate(90).unwrap();
    /// assert_eq!(turned.to_values(), vec![vec![8, 2], vec![16, 4]]);
    /// assert!(board.rotate(45).is_err());
    /// ```
    pub fn rotate(&self, degrees: u32) -> Result<Board> {
        Ok(self.rotated(Quarter::from_degrees(degrees)?))
    }

    /// Rotate clockwise by a quarter-turn multiple.
    ///
    /// newX = x*cos - y*sin + offX, newY = x*sin + y*cos + offY
    pub fn rotated(&self, quarter: Quarter) -> Board {
        let n = self.size as isize;
        let (cos, sin) = quarter.cos_sin();
        let (off_x, off_y) = quarter.offsets(n - 1);

        let mut cells = vec![Tile::EMPTY; self.cells.len()];
        for y in 0..n {
            for x in 0..n {
                let new_x = x * cos - y * sin + off_x;
                let new_y = x * sin + y * cos + off_y;
                cells[(new_x + new_y * n) as usize] = self.cells[(x + y * n) as usize];
            }
        }

        Board {
            size: self.size,
            cells,
        }
    }

    /// Flat indices of all empty cells, in row-major order
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_empty())
            .map(|(i, _)| i)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|t| t.is_empty()).count()
    }

    /// Number of non-empty tiles
    pub fn occupied_count(&self) -> usize {
        self.cells.len() - self.empty_count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|t| !t.is_empty())
    }

    /// True if two horizontally or vertically adjacent cells hold the same
    /// non-empty tile.
    pub fn has_adjacent_pair(&self) -> bool {
        let n = self.size;
        for y in 0..n {
            for x in 0..n {
                let t = self.cells[x + y * n];
                if t.is_empty() {
                    continue;
                }
                if (x + 1 < n && t == self.cells[x + 1 + y * n])
                    || (y + 1 < n && t == self.cells[x + (y + 1) * n])
                {
                    return true;
                }
            }
        }
        false
    }

    /// True while at least one move can still change the board.
    pub fn can_move(&self) -> bool {
        !self.is_full() || self.has_adjacent_pair()
    }

    /// Largest tile on the board (empty if the board is empty)
    pub fn max_tile(&self) -> Tile {
        self.cells
            .iter()
            .copied()
            .max_by_key(Tile::exponent)
            .unwrap_or(Tile::EMPTY)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Tile::EMPTY);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.size).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for (j, tile) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>5}", tile.to_string())?;
            }
        }
        Ok(())
    }
}
