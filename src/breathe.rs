//! Endless fade up and down on one fader
//!
//! Re-arms the fader towards full brightness and back to off each time
//! the previous leg settles.

use embassy_time::{Duration, Instant};

use crate::animation::AnimationStatus;
use crate::fader::Fader;
use crate::{MAX_LEVEL, PwmDriver};

#[derive(Debug, Clone, Copy)]
pub struct Breathe {
    /// Duration of each leg
    period: Duration,
    rising: bool,
}

impl Breathe {
    /// Start with a rising leg
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            rising: true,
        }
    }

    /// Whether the next leg to be armed fades up
    pub const fn is_rising(&self) -> bool {
        self.rising
    }

    /// Arm the next leg if needed, then advance the fader
    pub fn drive<D: PwmDriver>(
        &mut self,
        fader: &mut Fader,
        now: Instant,
        driver: &mut D,
    ) -> AnimationStatus {
        if !fader.is_active() {
            let target = if self.rising { MAX_LEVEL } else { 0 };
            fader.arm(u32::from(target), self.period, now);
            self.rising = !self.rising;
        }
        fader.advance(now, driver)
    }
}
