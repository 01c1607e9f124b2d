//! PWM slice timing
//!
//! The counter wraps at `MAX_LEVEL - 1`, so a level of `MAX_LEVEL` gives
//! 100% duty. The clock divider is 8.4 fixed point (integer part plus
//! sixteenths).

use crate::MAX_LEVEL;

/// Clock divider settings for a PWM slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PwmConfig {
    /// Integer part of the divider
    pub clock_divider_int: u8,
    /// Fractional part of the divider, in sixteenths
    pub clock_divider_frac: u8,
}

impl PwmConfig {
    /// Divider 3.0, about 10.17 kHz from a 125 MHz system clock
    pub const DEFAULT: Self = Self {
        clock_divider_int: 3,
        clock_divider_frac: 0,
    };

    /// Counter TOP value to program into the slice
    pub const fn wrap(self) -> u16 {
        MAX_LEVEL - 1
    }

    /// Divider scaled by 16
    #[allow(clippy::cast_lossless)]
    const fn divider_x16(self) -> u32 {
        self.clock_divider_int as u32 * 16 + (self.clock_divider_frac & 0x0f) as u32
    }

    /// Resulting PWM frequency in hertz.
    ///
    /// Returns 0 for a zero divider.
    #[allow(clippy::cast_lossless)]
    pub const fn frequency_hz(self, sys_clock_hz: u32) -> u32 {
        let divider_x16 = self.divider_x16() as u64;
        if divider_x16 == 0 {
            return 0;
        }
        let period = (self.wrap() as u64 + 1) * divider_x16;
        #[allow(clippy::cast_possible_truncation)]
        let hz = (sys_clock_hz as u64 * 16 / period) as u32;
        hz
    }
}

impl Default for PwmConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
