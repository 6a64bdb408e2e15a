//! Seeded random streams.
//!
//! Each slot draws from its own generator seeded with `base_seed ^ slot_index`,
//! so slots can be generated in any order, or concurrently, with identical output.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::ids::SlotId;

#[derive(Clone, Debug)]
pub struct SlotRng {
    inner: Xoshiro256PlusPlus,
}

impl SlotRng {
    pub fn for_slot(base_seed: u64, slot: SlotId) -> Self {
        Self {
            inner: Xoshiro256PlusPlus::seed_from_u64(base_seed ^ u64::from(slot.0)),
        }
    }

    /// Uniform float in `[lo, hi]`; returns `lo` for an empty range.
    pub fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        self.inner.random_range(lo..=hi)
    }

    /// Uniform integer in `[lo, hi]`; returns `lo` when the bounds coincide.
    pub fn step(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        self.inner.random_range(lo..=hi)
    }
}

/// Seed for interactive use when the caller does not care about reproducibility.
pub fn entropy_seed() -> u64 {
    rand::rng().random()
}
