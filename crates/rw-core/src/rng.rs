//! Random sources for the path finder.
//!
//! # Injection
//!
//! The walk never owns a random generator.  Callers hand it something that
//! implements [`StepPicker`], which answers one question: "which of the `len`
//! outgoing roads do we take?".  Production code passes a [`WalkRng`];
//! tests pass a scripted picker and assert on exact routes.
//!
//! # Determinism
//!
//! `WalkRng` wraps a `SmallRng`.  Seeded with [`WalkRng::new`] the same seed
//! always yields the same walk over the same graph.  [`WalkRng::from_entropy`]
//! is there for callers that want a fresh walk every run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── StepPicker ────────────────────────────────────────────────────────────────

/// Chooses which outgoing road the walk takes next.
pub trait StepPicker {
    /// Return an index uniformly distributed in `0..len`.
    ///
    /// The walk only calls this with `len >= 1`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<P: StepPicker + ?Sized> StepPicker for &mut P {
    #[inline]
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

// ── WalkRng ───────────────────────────────────────────────────────────────────

/// Default [`StepPicker`]: a seeded `SmallRng`.
///
/// Not `Sync`; give each walking thread its own instance, derived with
/// [`WalkRng::child`] when runs must stay reproducible.
pub struct WalkRng(SmallRng);

impl WalkRng {
    pub fn new(seed: u64) -> Self {
        WalkRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        WalkRng(SmallRng::from_entropy())
    }

    /// Derive a child `WalkRng` with a different seed offset, e.g. one per
    /// concurrent walker.
    pub fn child(&mut self, offset: u64) -> WalkRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        WalkRng(SmallRng::seed_from_u64(child_seed))
    }
}

impl StepPicker for WalkRng {
    #[inline]
    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}
