//! RNG module - injectable random sources
//!
//! The automaton never reaches for a global generator. Callers hand in a
//! [`RandomSource`]: [`SimpleRng`] for deterministic tests and replays, or
//! `rand`'s [`StdRng`] for live runs.

use rand::rngs::StdRng;
use rand::{Rng, RngCore};

/// Uniform integer source used for grid and config randomization.
pub trait RandomSource {
    /// Next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[lo, hi]`. Returns `lo` when `hi < lo`.
    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        // Scale by the high bits; the low bits of an LCG have short periods.
        let span = (hi as i64 - lo as i64 + 1) as u64;
        let offset = ((self.next_u32() as u64) * span) >> 32;
        (lo as i64 + offset as i64) as i32
    }

    /// Uniform value in `[lo, hi)`. Returns `lo` when `hi <= lo`.
    fn range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.range_inclusive(lo, hi - 1)
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

    /// Current internal state (a seed that reproduces the remaining sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for StdRng {
    fn next_u32(&mut self) -> u32 {
        RngCore::next_u32(self)
    }

    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.gen_range(lo..=hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_not_degenerate() {
        let mut rng = SimpleRng::new(0);
        assert_eq!(rng.state(), 1);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_range_inclusive_bounds() {
        let mut rng = SimpleRng::new(7);
        let mut seen_lo = false;
        let mut seen_hi = false;
        for _ in 0..2000 {
            let v = rng.range_inclusive(-3, 3);
            assert!((-3..=3).contains(&v));
            seen_lo |= v == -3;
            seen_hi |= v == 3;
        }
        assert!(seen_lo && seen_hi);
    }

    #[test]
    fn test_coin_flips_do_not_alternate() {
        let mut rng = SimpleRng::new(5);
        let flips: Vec<i32> = (0..16).map(|_| rng.range_inclusive(0, 1)).collect();
        let alternating: Vec<i32> = (0..16).map(|i| i % 2).collect();
        let inverted: Vec<i32> = (0..16).map(|i| 1 - i % 2).collect();
        assert_ne!(flips, alternating);
        assert_ne!(flips, inverted);
        assert!(flips.contains(&0) && flips.contains(&1));
    }

    #[test]
    fn test_range_is_half_open() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            let v = rng.range(10, 12);
            assert!(v == 10 || v == 11);
        }
    }

    #[test]
    fn test_degenerate_ranges_return_lo() {
        let mut rng = SimpleRng::new(5);
        assert_eq!(rng.range(4, 4), 4);
        assert_eq!(rng.range(4, 2), 4);
        assert_eq!(rng.range_inclusive(4, 4), 4);
        assert_eq!(rng.range_inclusive(4, 1), 4);
    }

    #[test]
    fn test_full_i32_span_does_not_overflow() {
        let mut rng = SimpleRng::new(3);
        for _ in 0..100 {
            let _ = rng.range_inclusive(i32::MIN, i32::MAX);
        }
    }

    #[test]
    fn test_std_rng_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = RandomSource::range_inclusive(&mut rng, 0, 10);
            assert!((0..=10).contains(&v));
        }
        assert_eq!(RandomSource::range(&mut rng, 3, 3), 3);
    }
}
