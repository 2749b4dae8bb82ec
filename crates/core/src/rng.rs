//! RNG module - injectable piece selection
//!
//! The engine draws every new piece from a [`PieceSource`]. The default source
//! is a seeded LCG picking uniformly among the seven kinds, so the same seed
//! always produces the same game. Tests and replays can script the sequence
//! with [`ScriptedSource`].

use crate::types::PieceKind;

/// Supplies the kind of each newly spawned piece.
pub trait PieceSource {
    fn next_piece(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for &mut S {
    fn next_piece(&mut self) -> PieceKind {
        (**self).next_piece()
    }
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_piece(&mut self) -> PieceKind {
        (**self).next_piece()
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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low bits of a power-of-two LCG have short periods; use the high half.
        (self.next_u32() >> 16) % max
    }

    /// Current internal state (reseeding with it continues the sequence).
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for SimpleRng {
    fn next_piece(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}

/// Cycles through a fixed list of kinds.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    pieces: Vec<PieceKind>,
    next: usize,
}

impl ScriptedSource {
    /// Create a source repeating `pieces` forever.
    ///
    /// An empty list yields `I` pieces.
    pub fn new(pieces: impl Into<Vec<PieceKind>>) -> Self {
        Self {
            pieces: pieces.into(),
            next: 0,
        }
    }

    /// A source that only ever yields `kind`.
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl PieceSource for ScriptedSource {
    fn next_piece(&mut self) -> PieceKind {
        if self.pieces.is_empty() {
            return PieceKind::I;
        }
        let kind = self.pieces[self.next % self.pieces.len()];
        self.next = (self.next + 1) % self.pieces.len();
        kind
    }
}
