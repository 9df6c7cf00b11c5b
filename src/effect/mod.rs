//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait.
//!
//! An effect renders one *pass* of its animation frame by frame. The
//! controller keeps asking for frames until the effect reports the pass as
//! complete, then rewinds it for the next pass.

mod breathe;
mod off;
mod rainbow;
mod walk;

use embassy_time::Duration;

pub use breathe::{BreatheEffect, BreathePhase};
pub use off::OffEffect;
pub use rainbow::{CHASE_STAGES, ChaseStage, RainbowChaseEffect};
pub use walk::{CrossfadeWalkEffect, WALK_LEDS, WALK_STAGES, WalkStage};

use crate::color::Rgb;

pub trait Effect {
    /// Render the next frame of the current pass
    ///
    /// Returns how long the frame should be held, or `None` once the pass
    /// is complete. Nothing is written in the `None` case.
    fn render(&mut self, leds: &mut [Rgb]) -> Option<Duration>;

    /// Start the next pass
    fn rewind(&mut self) {}
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Full strip solid color ramping up and down
    Breathe(BreatheEffect),
    /// Single moving head cycling through the hue wheel
    RainbowChase(RainbowChaseEffect),
    /// Six LEDs handing a hue on to each other
    CrossfadeWalk(CrossfadeWalkEffect),
    /// Static all-off frame
    Off(OffEffect),
}

impl Default for EffectSlot {
    fn default() -> Self {
        Self::Off(OffEffect::new())
    }
}

impl EffectSlot {
    /// Render the next frame of the current effect
    pub fn render(&mut self, leds: &mut [Rgb]) -> Option<Duration> {
        match self {
            Self::Breathe(effect) => effect.render(leds),
            Self::RainbowChase(effect) => effect.render(leds),
            Self::CrossfadeWalk(effect) => effect.render(leds),
            Self::Off(effect) => effect.render(leds),
        }
    }

    /// Start the next pass of the current effect
    pub fn rewind(&mut self) {
        match self {
            Self::Breathe(effect) => Effect::rewind(effect),
            Self::RainbowChase(effect) => Effect::rewind(effect),
            Self::CrossfadeWalk(effect) => Effect::rewind(effect),
            Self::Off(effect) => Effect::rewind(effect),
        }
    }
}
