//! Seeded smoothing noise keyed by (year, dimension).
//!
//! Each draw reseeds a ChaCha8 stream from the ruleset seed mixed with the
//! year and the dimension, so a value never depends on which other years
//! or dimensions were computed before it.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use yinyang_base::JitterRules;

use crate::dimension::Dimension;

const YEAR_MIX: u64 = 0x9E37_79B9_7F4A_7C15;
const DIMENSION_MIX: u64 = 0xD1B5_4A32_D192_ED03;

/// Reproducible per-year noise source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jitter {
    rules: JitterRules,
}

impl Jitter {
    pub const fn new(rules: JitterRules) -> Self {
        Self { rules }
    }

    pub const fn amplitude(&self, dimension: Dimension) -> i32 {
        match dimension {
            Dimension::Overall => self.rules.overall_amplitude,
            Dimension::Parents | Dimension::Children => self.rules.family_amplitude,
            _ => self.rules.dimension_amplitude,
        }
    }

    /// Offset in `-a..a` for amplitude `a`; zero when disabled.
    pub fn offset(&self, year: i32, dimension: Dimension) -> i32 {
        let amplitude = self.amplitude(dimension);
        if !self.rules.enabled || amplitude <= 0 {
            return 0;
        }
        let seed = self.rules.seed
            ^ (year as i64 as u64).wrapping_mul(YEAR_MIX)
            ^ (dimension.index() as u64 + 1).wrapping_mul(DIMENSION_MIX);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.gen_range(-amplitude..amplitude)
    }
}
