//! RNG module - injectable randomness for tile spawning
//!
//! Everything random in the game (which empty cell receives a tile, and
//! whether it is a 2 or a 4) is drawn through the [`TileRng`] trait, so the
//! game state can be driven by a seeded generator in play and by a scripted
//! sequence in tests.
//!
//! Also provides a simple LCG for deterministic play.

/// Source of uniform random integers
pub trait TileRng {
    /// Uniform value in `[0, max)`. Callers never pass `max == 0`.
    fn next_range(&mut self, max: u32) -> u32;
}

impl<R: TileRng + ?Sized> TileRng for &mut R {
    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl TileRng for SimpleRng {
    /// Multiply-shift reduction: uses the high bits, which have a much longer
    /// period than the low bits of a power-of-two LCG.
    fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
