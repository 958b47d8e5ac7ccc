//! RNG module - where new pieces come from
//!
//! The session asks a [`PieceSource`] for the next kind each time a piece
//! locks. Production play uses [`RandomPieces`], a uniform pick over the seven
//! kinds driven by a small seeded LCG so games can be replayed from the seed.
//! [`SequencePieces`] feeds a fixed script, which tests use to build exact
//! scenarios.

use std::collections::VecDeque;

use crate::types::PieceKind;

/// Supplies the kind of each newly spawned piece.
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Uniform random piece kinds, independent per draw.
#[derive(Debug, Clone)]
pub struct RandomPieces {
    rng: SimpleRng,
    seed: u32,
}

impl RandomPieces {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl PieceSource for RandomPieces {
    fn next_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }
}

/// A fixed script of kinds, repeated from the start once exhausted.
#[derive(Debug, Clone)]
pub struct SequencePieces {
    script: Vec<PieceKind>,
    pending: VecDeque<PieceKind>,
}

impl SequencePieces {
    /// Panics if `script` is empty.
    pub fn new(script: impl Into<Vec<PieceKind>>) -> Self {
        let script = script.into();
        assert!(!script.is_empty(), "piece script must not be empty");
        Self {
            pending: script.iter().copied().collect(),
            script,
        }
    }

    /// A script that yields the same kind forever.
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl PieceSource for SequencePieces {
    fn next_kind(&mut self) -> PieceKind {
        if self.pending.is_empty() {
            self.pending.extend(self.script.iter().copied());
        }
        // Refilled above from a non-empty script.
        self.pending.pop_front().unwrap_or(self.script[0])
    }
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), rng.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_random_pieces_cover_all_kinds() {
        let mut source = RandomPieces::new(42);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let kind = source.next_kind();
            let idx = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "every kind should appear: {:?}", seen);
    }

    #[test]
    fn test_random_pieces_replay_from_seed() {
        let mut a = RandomPieces::new(99);
        let mut b = RandomPieces::new(a.seed());
        for _ in 0..50 {
            assert_eq!(a.next_kind(), b.next_kind());
        }
    }

    #[test]
    fn test_sequence_pieces_cycle() {
        let mut source = SequencePieces::new(vec![PieceKind::I, PieceKind::O]);
        assert_eq!(source.next_kind(), PieceKind::I);
        assert_eq!(source.next_kind(), PieceKind::O);
        assert_eq!(source.next_kind(), PieceKind::I);
    }
}
