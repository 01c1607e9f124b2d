//! Immutable lookup tables
//!
//! The easing table shapes progress over time, the gamma table maps linear
//! brightness to perceptually even output levels. Both are validated in
//! `const fn` constructors, so a malformed `static` table is a build error
//! rather than garbage on the PWM pin.

use crate::{LEVEL_COUNT, MAX_LEVEL};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/tables.rs"));
}

/// Cosine ease-in/ease-out curve, 256 samples
pub static S_CURVE: EasingTable = EasingTable::new(&generated::S_CURVE_SAMPLES);

/// Constant-rate curve, 256 samples
pub static LINEAR: EasingTable = EasingTable::new(&generated::LINEAR_SAMPLES);

/// Gamma 2.2 correction over the full 12-bit domain
pub static GAMMA_2_2: GammaTable = GammaTable::new(&generated::GAMMA_2_2_LEVELS);

/// Precomputed progress samples taken at uniform time steps
#[derive(Debug, Clone, Copy)]
pub struct EasingTable {
    samples: &'static [f32],
}

impl EasingTable {
    /// Wrap a sample slice.
    ///
    /// Panics (at compile time for `static` tables) unless the slice has at
    /// least two samples, starts at `0.0`, ends at `1.0` and never decreases.
    #[allow(clippy::float_cmp)]
    pub const fn new(samples: &'static [f32]) -> Self {
        assert!(samples.len() >= 2, "easing table needs at least two samples");
        assert!(samples[0] == 0.0, "easing table must start at 0.0");
        assert!(
            samples[samples.len() - 1] == 1.0,
            "easing table must end at 1.0"
        );
        let mut i = 1;
        while i < samples.len() {
            assert!(
                samples[i] >= samples[i - 1],
                "easing table must be non-decreasing"
            );
            i += 1;
        }
        Self { samples }
    }

    /// Number of samples
    pub const fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false, tables hold at least two samples
    pub const fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Index of the sample for `elapsed_ms` out of `duration_ms`.
    ///
    /// Floor division: the last sample is only reached once `elapsed_ms`
    /// reaches `duration_ms`, which also marks the end of the curve.
    /// Returns the index and whether the end was reached.
    #[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
    pub const fn index_at(&self, elapsed_ms: u64, duration_ms: u64) -> (usize, bool) {
        let last = self.samples.len() - 1;
        if elapsed_ms >= duration_ms {
            return (last, true);
        }
        let index = (last as u128 * elapsed_ms as u128) / duration_ms as u128;
        (index as usize, false)
    }

    /// Progress fraction at a sample index
    pub const fn fraction(&self, index: usize) -> f32 {
        self.samples[index]
    }
}

/// Linear-to-perceptual output mapping, one entry per brightness level
#[derive(Debug, Clone, Copy)]
pub struct GammaTable {
    levels: &'static [u16; LEVEL_COUNT],
}

impl GammaTable {
    /// Wrap a level table.
    ///
    /// Panics (at compile time for `static` tables) if the entries decrease.
    pub const fn new(levels: &'static [u16; LEVEL_COUNT]) -> Self {
        let mut i = 1;
        while i < LEVEL_COUNT {
            assert!(levels[i] >= levels[i - 1], "gamma table must be non-decreasing");
            i += 1;
        }
        Self { levels }
    }

    /// Corrected output level for a linear brightness level.
    ///
    /// `level` above [`MAX_LEVEL`] is an invariant violation and panics.
    pub fn correct(&self, level: u16) -> u16 {
        assert!(
            level <= MAX_LEVEL,
            "brightness level outside of the gamma table"
        );
        self.levels[usize::from(level)]
    }

    /// Largest value this table can emit
    pub const fn max_output(&self) -> u16 {
        self.levels[LEVEL_COUNT - 1]
    }
}
