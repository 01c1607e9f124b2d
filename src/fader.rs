//! Eased brightness transition for a single PWM channel
//!
//! A [`Fader`] tracks one in-flight transition. Each call to
//! [`Fader::advance`] maps elapsed time through the easing table,
//! interpolates the logical level and writes the gamma-corrected duty
//! cycle to the driver.
//!
//! Time comes from the caller as [`Instant`], a 64-bit tick counter, so
//! the 49-day wrap of a 32-bit millisecond counter does not apply. A
//! `now` earlier than the arm time counts as zero elapsed time.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::AnimationStatus;
use crate::table::{EasingTable, GAMMA_2_2, GammaTable, S_CURVE};
use crate::{ChannelId, PwmDriver, clamp_level};

/// Configuration shared by faders
#[derive(Debug, Clone, Copy)]
pub struct FaderConfig {
    /// Progress curve
    pub easing: &'static EasingTable,
    /// Output correction, `None` drives the PWM with linear levels
    pub gamma: Option<&'static GammaTable>,
}

impl FaderConfig {
    /// S-curve easing with gamma 2.2 correction
    pub const DEFAULT: Self = Self {
        easing: &S_CURVE,
        gamma: Some(&GAMMA_2_2),
    };
}

impl Default for FaderConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Brightness transition state for one output
#[derive(Debug, Clone)]
pub struct Fader {
    channel: ChannelId,
    easing: &'static EasingTable,
    gamma: Option<&'static GammaTable>,
    /// Logical brightness, never gamma corrected
    current: u16,
    target: u16,
    /// Snapshot of `current` taken when the transition was armed
    start: u16,
    start_time: Instant,
    duration: Duration,
    active: bool,
}

impl Fader {
    /// Create a settled fader at level 0
    pub const fn new(channel: ChannelId, config: &FaderConfig) -> Self {
        Self {
            channel,
            easing: config.easing,
            gamma: config.gamma,
            current: 0,
            target: 0,
            start: 0,
            start_time: Instant::from_millis(0),
            duration: Duration::from_millis(0),
            active: false,
        }
    }

    /// Channel this fader drives
    pub const fn channel(&self) -> ChannelId {
        self.channel
    }

    /// Current logical brightness
    pub const fn current_level(&self) -> u16 {
        self.current
    }

    /// Brightness the transition is heading to
    pub const fn target_level(&self) -> u16 {
        self.target
    }

    /// Brightness at the moment the transition was armed
    pub const fn start_level(&self) -> u16 {
        self.start
    }

    /// Check if a transition is in progress
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Transition status
    pub const fn status(&self) -> AnimationStatus {
        if self.active {
            AnimationStatus::Active
        } else {
            AnimationStatus::Stopped
        }
    }

    /// Physical level for the current brightness
    pub fn output_level(&self) -> u16 {
        match self.gamma {
            Some(gamma) => gamma.correct(self.current),
            None => self.current,
        }
    }

    /// Start a transition from the current level.
    ///
    /// `target` above [`crate::MAX_LEVEL`] is clamped. A zero `duration` jumps on
    /// the next [`Fader::advance`]. Re-arming mid-transition restarts from
    /// the partially eased level.
    pub fn arm(&mut self, target: u32, duration: Duration, now: Instant) {
        self.start = self.current;
        self.target = clamp_level(target);
        self.duration = duration;
        self.start_time = now;
        self.active = true;

        #[cfg(feature = "esp32-log")]
        println!(
            "[Fader.arm] channel {} from {} to {} over {}ms",
            self.channel,
            self.start,
            self.target,
            duration.as_millis()
        );
    }

    /// Settle at `level` right away and write it to the driver
    pub fn set_immediate<D: PwmDriver>(&mut self, level: u32, driver: &mut D) {
        let level = clamp_level(level);
        self.current = level;
        self.target = level;
        self.start = level;
        self.active = false;
        driver.set_level(self.channel, self.output_level());
    }

    /// Update transition state
    ///
    /// Call this once per tick. Writes exactly one level to the driver while
    /// a transition is active and nothing once settled.
    pub fn advance<D: PwmDriver>(&mut self, now: Instant, driver: &mut D) -> AnimationStatus {
        if !self.active {
            return AnimationStatus::Stopped;
        }

        // Sub-millisecond durations count as instant
        let duration_ms = self.duration.as_millis();
        if duration_ms == 0 {
            self.current = self.target;
            self.active = false;
        } else {
            let elapsed = now.saturating_duration_since(self.start_time);
            let (index, complete) = self.easing.index_at(elapsed.as_millis(), duration_ms);
            self.current = interpolate(self.start, self.target, self.easing.fraction(index));
            if complete {
                self.active = false;
            }
        }

        driver.set_level(self.channel, self.output_level());
        self.status()
    }
}

/// Level between `start` and `target` at `fraction`, rounded half away from zero
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn interpolate(start: u16, target: u16, fraction: f32) -> u16 {
    let delta = i32::from(target) - i32::from(start);
    let level = libm::roundf(f32::from(start) + delta as f32 * fraction);
    let (low, high) = if start <= target {
        (start, target)
    } else {
        (target, start)
    };
    (level as u16).clamp(low, high)
}

