//! Synchronised brightness transition
//!
//! Drives every registered output towards the same target with shared
//! timing. Each output keeps its own [`Fader`] state, so outputs that
//! started from different levels still arrive together.

use embassy_time::{Duration, Instant};
use heapless::Vec;

use super::{Animation, AnimationStatus};
use crate::fader::{Fader, FaderConfig};
use crate::{ChannelId, PwmDriver};

/// Transition animation over up to `N` outputs
#[derive(Debug, Clone)]
pub struct TransitionAnimation<const N: usize> {
    config: FaderConfig,
    outputs: Vec<Fader, N>,
    /// Sum of every `dt` seen so far
    clock: Instant,
}

impl<const N: usize> TransitionAnimation<N> {
    /// Create an animation with no outputs
    pub const fn new(config: FaderConfig) -> Self {
        Self {
            config,
            outputs: Vec::new(),
            clock: Instant::from_millis(0),
        }
    }

    /// Start a transition on every registered output
    ///
    /// # Arguments
    /// * `target` - Target brightness, clamped to `MAX_LEVEL`
    /// * `duration` - Transition duration
    pub fn set(&mut self, target: u32, duration: Duration) {
        for fader in &mut self.outputs {
            fader.arm(target, duration, self.clock);
        }
    }

    /// Registered outputs in visiting order
    pub fn outputs(&self) -> &[Fader] {
        &self.outputs
    }

    /// Time accumulated through [`Animation::advance`]
    pub const fn elapsed(&self) -> Duration {
        Duration::from_ticks(self.clock.as_ticks())
    }
}

impl<const N: usize> Animation for TransitionAnimation<N> {
    fn register_output(&mut self, channel: ChannelId) -> Result<(), ChannelId> {
        self.outputs
            .push(Fader::new(channel, &self.config))
            .map_err(|fader| fader.channel())
    }

    fn advance<D: PwmDriver>(&mut self, dt: Duration, driver: &mut D) -> AnimationStatus {
        self.clock += dt;
        let now = self.clock;
        self.outputs
            .iter_mut()
            .fold(AnimationStatus::Stopped, |status, fader| {
                status.merge(fader.advance(now, driver))
            })
    }
}
