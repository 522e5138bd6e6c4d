//! RNG module - 7-bag random piece generation
//!
//! Each bag contains one of each piece (I, O, T, S, Z, J, L), shuffled.
//! Draws from the bag until empty, then shuffles a fresh bag.
//!
//! The shuffle is driven by a small seedable LCG so a seed reproduces a whole game.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, max)`
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct Bag {
    /// Current shuffled bag
    pieces: [PieceKind; 7],
    /// Number of pieces already drawn from `pieces`
    drawn: usize,
    rng: SimpleRng,
}

impl Bag {
    /// Create an empty bag; the first draw shuffles a fresh one
    pub fn new(seed: u32) -> Self {
        Self {
            pieces: PieceKind::ALL,
            drawn: PieceKind::ALL.len(),
            rng: SimpleRng::new(seed),
        }
    }

    fn refill(&mut self) {
        self.pieces = PieceKind::ALL;
        self.rng.shuffle(&mut self.pieces);
        self.drawn = 0;
    }

    /// Draw the next piece, refilling when the bag runs out
    pub fn next(&mut self) -> PieceKind {
        if self.is_empty() {
            self.refill();
        }
        let piece = self.pieces[self.drawn];
        self.drawn += 1;
        piece
    }

    /// Pieces left before the next refill
    pub fn remaining(&self) -> &[PieceKind] {
        &self.pieces[self.drawn..]
    }

    pub fn is_empty(&self) -> bool {
        self.drawn >= self.pieces.len()
    }

    /// Current RNG state (feeding it back to `new` continues the same stream)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for Bag {
    fn default() -> Self {
        Self::new(1)
    }
}
