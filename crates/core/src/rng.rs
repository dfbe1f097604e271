//! RNG module - the engine's single source of randomness
//!
//! Spawning draws twice per tile: once for the empty cell, once for the magnitude.
//! Both draws go through [`RandomSource`], so a game is fully reproducible from
//! its seed and tests can script the exact sequence with [`SequenceRng`].

/// A source of uniformly distributed `u32` values.
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits of the generator (multiply-shift), which are far better
    /// distributed than the low bits of an LCG. `max` must be non-zero.
    fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current generator state; feeding it back into `new` resumes the sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// `next_range(max)` returns `value % max`, so scripted values map directly onto
/// cell indices and spawn-weight rolls.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<u32>,
    pos: usize,
}

impl SequenceRng {
    /// An empty list behaves like an endless stream of zeros.
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, pos: 0 }
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            self.pos += 1;
            return 0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }

    fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}
