#![no_std]

pub mod animation;
pub mod breathe;
pub mod command;
pub mod controller;
pub mod fader;
pub mod pwm;
pub mod queue;
pub mod scheduler;
pub mod table;

pub use animation::{Animation, AnimationSlot, AnimationStatus, TransitionAnimation};
pub use breathe::Breathe;
pub use command::{CommandError, FadeCommand, LineReader};
pub use controller::Controller;
pub use fader::{Fader, FaderConfig};
pub use pwm::PwmConfig;
pub use queue::{CommandProducer, CommandQueue};
pub use scheduler::{TickResult, TickScheduler};
pub use table::{EasingTable, GAMMA_2_2, GammaTable, LINEAR, S_CURVE};

pub use embassy_time::{Duration, Instant};

/// Highest logical brightness level (12-bit PWM resolution)
pub const MAX_LEVEL: u16 = (1 << 12) - 1;

/// Number of distinct brightness levels
pub const LEVEL_COUNT: usize = MAX_LEVEL as usize + 1;

/// Hardware PWM channel identifier
pub type ChannelId = u8;

/// Abstract PWM output trait
///
/// Implement this trait to support different hardware platforms.
/// The channel must already be configured for [`MAX_LEVEL`] resolution.
pub trait PwmDriver {
    /// Assert a duty-cycle level on a channel
    fn set_level(&mut self, channel: ChannelId, level: u16);
}

/// Clamp a requested brightness into `0..=MAX_LEVEL`
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn clamp_level(level: u32) -> u16 {
    if level > MAX_LEVEL as u32 {
        MAX_LEVEL
    } else {
        level as u16
    }
}
