//! RNG module - seeded color source for deals and refills
//!
//! The engine never reaches for global randomness. Every color it assigns,
//! on a new deal or when a column refills from the top, is drawn from the
//! `SimpleRng` the engine owns, so a seed fully determines a game.

use crate::types::{DotColor, NUM_COLORS};

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

    /// Generate random value in range [0, max)
    ///
    /// Scales by multiply-shift so the result comes from the high bits; the
    /// low bits of an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Draw a uniformly random dot color
    pub fn next_color(&mut self) -> DotColor {
        let index = self.next_range(NUM_COLORS as u32) as u8;
        DotColor::from_index(index).unwrap_or(DotColor::Red)
    }

    /// Current internal state (seed for an identical continuation)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
