//! Animation system with compile-time known variants
//!
//! All animations are stored in an enum to avoid heap allocations.
//! Each animation implements the `Animation` trait.

mod transition;

use embassy_time::Duration;
pub use transition::TransitionAnimation;

use crate::{ChannelId, PwmDriver};

/// Aggregate progress of an animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStatus {
    /// At least one output is still moving
    Active,
    /// Every output has settled
    Stopped,
}

impl AnimationStatus {
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Combine the status of two outputs driven together
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        if self.is_active() || other.is_active() {
            Self::Active
        } else {
            Self::Stopped
        }
    }
}

/// Time-driven behaviour over one or more PWM outputs
pub trait Animation {
    /// Attach another output.
    ///
    /// Outputs are visited in registration order. Returns the channel back
    /// if the animation has no room left.
    fn register_output(&mut self, channel: ChannelId) -> Result<(), ChannelId>;

    /// Advance every registered output by `dt`
    fn advance<D: PwmDriver>(&mut self, dt: Duration, driver: &mut D) -> AnimationStatus;
}

/// Animation slot - enum containing all possible animations
///
/// N is the number of outputs an animation can drive
#[derive(Debug, Clone)]
pub enum AnimationSlot<const N: usize> {
    /// Eased two-point brightness transition
    Transition(TransitionAnimation<N>),
}

impl<const N: usize> Animation for AnimationSlot<N> {
    fn register_output(&mut self, channel: ChannelId) -> Result<(), ChannelId> {
        match self {
            Self::Transition(animation) => animation.register_output(channel),
        }
    }

    fn advance<D: PwmDriver>(&mut self, dt: Duration, driver: &mut D) -> AnimationStatus {
        match self {
            Self::Transition(animation) => animation.advance(dt, driver),
        }
    }
}

impl<const N: usize> From<TransitionAnimation<N>> for AnimationSlot<N> {
    fn from(animation: TransitionAnimation<N>) -> Self {
        Self::Transition(animation)
    }
}
