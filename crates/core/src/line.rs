//! Line module - the slide-left algorithm on a single row
//!
//! Every move reduces to sliding rows to the left, so this is the only place the
//! merge rules live. Both passes are pure row-to-row functions:
//!
//! 1. [`compress`]: stable left-pack of the non-empty tiles.
//! 2. [`merge`]: one left-to-right sweep with a single lookahead. Equal neighbours
//!    collapse into one doubled tile and the sweep skips past both, so a tile made
//!    by a merge is never merged again in the same move (`[2,2,2,2]` becomes
//!    `[4,4,0,0]`, not `[8,0,0,0]`).
//!
//! Lines live on the stack; no pass allocates.

use arrayvec::ArrayVec;

use crate::error::{CoreError, Result};
use crate::tile::Tile;
use crate::types::MAX_GRID_SIZE;

/// One row (or rotated column) of tiles.
pub type Line = ArrayVec<Tile, MAX_GRID_SIZE>;

/// Tiles produced by merges during one slide, in left-to-right order.
pub type Merges = ArrayVec<Tile, { MAX_GRID_SIZE / 2 }>;

/// Result of sliding one line to the left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub line: Line,
    pub merges: Merges,
}

impl Slide {
    /// Number of merges that produced exactly `goal`.
    pub fn goal_hits(&self, goal: u32) -> usize {
        self.merges.iter().filter(|t| t.raw() == goal).count()
    }
}

/// Lines longer than the widest supported board are rejected up front.
fn check_width(line: &[Tile]) -> Result<()> {
    if line.len() > MAX_GRID_SIZE {
        return Err(CoreError::LineLength {
            expected: MAX_GRID_SIZE,
            actual: line.len(),
        });
    }
    Ok(())
}

fn push(line: &mut Line, tile: Tile, width: usize) -> Result<()> {
    line.try_push(tile).map_err(|_| CoreError::LineLength {
        expected: MAX_GRID_SIZE,
        actual: width,
    })
}

/// Pad `line` on the right with empty tiles up to `width`.
fn pad(line: &mut Line, width: usize) -> Result<()> {
    while line.len() < width {
        push(line, Tile::EMPTY, width)?;
    }
    Ok(())
}

/// Move every non-empty tile to the left, keeping their order.
///
/// # Examples
///
/// ```
/// use tui_2048_core::line::compress;
/// use tui_2048_core::Tile;
///
/// let row = [Tile::EMPTY, Tile::TWO, Tile::EMPTY, Tile::FOUR];
/// let packed = compress(&row).unwrap();
/// assert_eq!(packed.as_slice(), &[Tile::TWO, Tile::FOUR, Tile::EMPTY, Tile::EMPTY]);
/// assert!(compress(&[Tile::TWO; 9]).is_err());
/// ```
pub fn compress(line: &[Tile]) -> Result<Line> {
    check_width(line)?;
    let mut out = Line::new();
    for &tile in line.iter().filter(|t| !t.is_empty()) {
        push(&mut out, tile, line.len())?;
    }
    pad(&mut out, line.len())?;
    Ok(out)
}

/// Merge adjacent equal tiles in a compressed line, left to right.
///
/// Expects the output of [`compress`]; on an uncompressed line only touching
/// pairs are merged.
pub fn merge(line: &[Tile]) -> Result<Slide> {
    check_width(line)?;
    let mut out = Line::new();
    let mut merges = Merges::new();

    let mut i = 0;
    while i < line.len() {
        let current = line[i];
        match line.get(i + 1) {
            Some(&next) if !current.is_empty() && current == next => {
                let merged = current.doubled()?;
                push(&mut out, merged, line.len())?;
                // At most one merge per pair, so a checked width fits.
                merges.try_push(merged).map_err(|_| CoreError::LineLength {
                    expected: MAX_GRID_SIZE,
                    actual: line.len(),
                })?;
                i += 2;
            }
            _ => {
                push(&mut out, current, line.len())?;
                i += 1;
            }
        }
    }

    pad(&mut out, line.len())?;
    Ok(Slide { line: out, merges })
}

/// Compress then merge: the full slide-left of one line.
///
/// # Examples
///
/// ```
/// use tui_2048_core::line::slide_left;
/// use tui_2048_core::Tile;
///
/// let row = [Tile::TWO; 4];
/// let slide = slide_left(&row).unwrap();
/// assert_eq!(slide.line.as_slice(), &[Tile::FOUR, Tile::FOUR, Tile::EMPTY, Tile::EMPTY]);
/// assert_eq!(slide.merges.len(), 2);
/// ```
pub fn slide_left(line: &[Tile]) -> Result<Slide> {
    merge(&compress(line)?)
}
