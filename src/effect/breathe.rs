//! Solid color breathe
//!
//! Fills the whole strip with one hue whose channels ramp from zero up to
//! the ceiling and back down, one step per frame.

use embassy_time::Duration;

use super::Effect;
use crate::color::{Channels, Rgb};
use crate::ramp::Ramp;

/// Where a breathe pass currently is
#[derive(Debug, Clone)]
pub enum BreathePhase {
    /// Counting up from zero to the ceiling, both included
    RampUp(Ramp),
    /// Counting down from just below the ceiling to zero
    RampDown(Ramp),
    /// Pass complete
    Idle,
}

/// Breathe effect - every LED shows the same pulsing color
#[derive(Debug, Clone)]
pub struct BreatheEffect {
    channels: Channels,
    ceiling: u8,
    delay: Duration,
    phase: BreathePhase,
}

impl BreatheEffect {
    /// Create a breathe effect at the start of its ramp
    ///
    /// # Arguments
    /// * `channels` - Channels that follow the ramp
    /// * `ceiling` - Peak channel value
    /// * `delay` - Hold time of each frame
    pub const fn new(channels: Channels, ceiling: u8, delay: Duration) -> Self {
        Self {
            channels,
            ceiling,
            delay,
            phase: Self::start(ceiling),
        }
    }

    pub const fn channels(&self) -> Channels {
        self.channels
    }

    pub const fn phase(&self) -> &BreathePhase {
        &self.phase
    }

    #[allow(clippy::cast_lossless)]
    const fn start(ceiling: u8) -> BreathePhase {
        BreathePhase::RampUp(Ramp::up(0, ceiling as u16 + 1))
    }

    #[allow(clippy::cast_lossless)]
    const fn descent(ceiling: u8) -> BreathePhase {
        BreathePhase::RampDown(Ramp::down(ceiling.saturating_sub(1), ceiling as u16))
    }

    /// Next channel level of the pass
    fn next_level(&mut self) -> Option<u8> {
        loop {
            match &mut self.phase {
                BreathePhase::RampUp(ramp) => match ramp.next() {
                    Some(level) => return Some(level),
                    None => self.phase = Self::descent(self.ceiling),
                },
                BreathePhase::RampDown(ramp) => match ramp.next() {
                    Some(level) => return Some(level),
                    None => self.phase = BreathePhase::Idle,
                },
                BreathePhase::Idle => return None,
            }
        }
    }
}

impl Effect for BreatheEffect {
    fn render(&mut self, leds: &mut [Rgb]) -> Option<Duration> {
        let level = self.next_level()?;
        leds.fill(self.channels.at_level(level));

        Some(self.delay)
    }

    fn rewind(&mut self) {
        self.phase = Self::start(self.ceiling);
    }
}
