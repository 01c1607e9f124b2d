//! Tick scheduling and timing utilities.
//!
//! Provides portable tick pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between ticks.

use embassy_time::{Duration, Instant};

use crate::animation::AnimationStatus;
use crate::{Controller, PwmDriver};

/// Default tick rate (200 Hz).
pub const DEFAULT_TICK_HZ: u64 = 200;

/// Default tick duration based on the tick rate.
pub const DEFAULT_TICK_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_TICK_HZ);

/// Result of a scheduler tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Whether any channel is still fading.
    pub status: AnimationStatus,
}

/// Portable tick scheduler that manages timing without async.
///
/// This scheduler:
/// - Tracks tick timing with drift correction
/// - Calls the controller with the PWM driver
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = TickScheduler::new(controller, driver);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct TickScheduler<'a, D: PwmDriver, const N: usize, const Q: usize> {
    driver: D,
    controller: Controller<'a, N, Q>,
    next_tick: Instant,
    tick_duration: Duration,
}

impl<'a, D: PwmDriver, const N: usize, const Q: usize> TickScheduler<'a, D, N, Q> {
    /// Create a new tick scheduler.
    ///
    /// Uses `DEFAULT_TICK_DURATION` (200 Hz) for tick timing.
    pub fn new(controller: Controller<'a, N, Q>, driver: D) -> Self {
        Self::with_tick_duration(controller, driver, DEFAULT_TICK_DURATION)
    }

    /// Create a new tick scheduler with custom tick duration.
    pub fn with_tick_duration(
        controller: Controller<'a, N, Q>,
        driver: D,
        tick_duration: Duration,
    ) -> Self {
        Self {
            driver,
            controller,
            next_tick: Instant::from_millis(0),
            tick_duration,
        }
    }

    /// Run one tick and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Advances every fader and writes their levels
    /// 3. Returns the deadline for the next tick
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        // Skip the backlog after a stall instead of bursting to catch up
        let max_drift = self.tick_duration * 2;
        if now > self.next_tick + max_drift {
            self.next_tick = now;
        }

        let status = self.controller.tick(now, &mut self.driver);

        self.next_tick += self.tick_duration;

        let sleep_duration = self.next_tick.saturating_duration_since(now);

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
            status,
        }
    }

    /// Get a reference to the controller.
    pub fn controller(&self) -> &Controller<'a, N, Q> {
        &self.controller
    }

    /// Get a mutable reference to the controller.
    pub fn controller_mut(&mut self) -> &mut Controller<'a, N, Q> {
        &mut self.controller
    }

    /// Get a reference to the driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
