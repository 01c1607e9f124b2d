use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::AnimationStatus;
use crate::command::FadeCommand;
use crate::fader::{Fader, FaderConfig};
use crate::queue::CommandQueue;
use crate::{ChannelId, PwmDriver};

/// Fader bank - the main orchestrator
///
/// Owns one [`Fader`] per channel `0..N` for the lifetime of the program
/// and applies commands from a queue of size Q.
pub struct Controller<'a, const N: usize, const Q: usize> {
    // External dependencies
    commands: &'a CommandQueue<Q>,

    // Internal state
    faders: [Fader; N],
}

impl<'a, const N: usize, const Q: usize> Controller<'a, N, Q> {
    /// Create a controller with every channel settled at level 0
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(commands: &'a CommandQueue<Q>, config: &FaderConfig) -> Self {
        assert!(
            N <= usize::from(ChannelId::MAX) + 1,
            "more faders than channel ids"
        );
        Self {
            commands,
            faders: core::array::from_fn(|channel| Fader::new(channel as ChannelId, config)),
        }
    }

    /// Drive every channel to level 0
    ///
    /// Call once after the PWM hardware is configured.
    pub fn init<D: PwmDriver>(&mut self, driver: &mut D) {
        for fader in &mut self.faders {
            fader.set_immediate(0, driver);
        }
    }

    /// Fader for a channel
    pub fn fader(&self, channel: ChannelId) -> Option<&Fader> {
        self.faders.get(usize::from(channel))
    }

    /// Mutable fader for a channel
    pub fn fader_mut(&mut self, channel: ChannelId) -> Option<&mut Fader> {
        self.faders.get_mut(usize::from(channel))
    }

    /// All faders in channel order
    pub fn faders(&self) -> &[Fader] {
        &self.faders
    }

    /// Start a transition on one channel
    ///
    /// Returns the channel if it is not driven by this controller
    pub fn arm(
        &mut self,
        channel: ChannelId,
        level: u32,
        duration: Duration,
        now: Instant,
    ) -> Result<(), ChannelId> {
        let fader = self.fader_mut(channel).ok_or(channel)?;
        fader.arm(level, duration, now);
        Ok(())
    }

    /// Process one tick
    ///
    /// This is the main control loop step. Call this continuously.
    pub fn tick<D: PwmDriver>(&mut self, now: Instant, driver: &mut D) -> AnimationStatus {
        self.process_commands(now);

        self.faders
            .iter_mut()
            .fold(AnimationStatus::Stopped, |status, fader| {
                status.merge(fader.advance(now, driver))
            })
    }

    /// Apply pending commands from the queue (non-blocking)
    fn process_commands(&mut self, now: Instant) {
        while let Some(command) = self.commands.take() {
            self.apply(command, now);
        }
    }

    fn apply(&mut self, command: FadeCommand, now: Instant) {
        let result = self.arm(command.channel, command.level, command.duration, now);

        #[cfg(feature = "esp32-log")]
        if let Err(channel) = result {
            println!("[Controller.apply] no fader for channel {}", channel);
        }
        #[cfg(not(feature = "esp32-log"))]
        let _ = result;
    }
}
