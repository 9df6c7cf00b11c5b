//! Cross-fade walk
//!
//! Six LEDs take turns: during each stage one LED ramps in from black to its
//! own hue while the LED before it cross-fades from its hue into another.
//! Strips longer than six LEDs repeat the pattern every six positions.

use embassy_time::Duration;

use super::Effect;
use crate::color::{BLACK, Channels, Rgb};
use crate::ramp::Ramp;

/// Number of LEDs in one walk group, also the number of stages
pub const WALK_LEDS: usize = 6;

/// One stage of the walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkStage {
    /// LED ramping in from black
    pub rising: usize,
    /// Hue the rising LED ends on
    pub hue: Channels,
    /// Hue the fading LED starts from
    pub fade_from: Channels,
    /// Hue the fading LED ends on
    pub fade_to: Channels,
}

impl WalkStage {
    const fn new(rising: usize, hue: Channels, fade_from: Channels, fade_to: Channels) -> Self {
        Self {
            rising,
            hue,
            fade_from,
            fade_to,
        }
    }

    /// LED cross-fading out, the one before the rising LED
    pub const fn fading(self) -> usize {
        (self.rising + WALK_LEDS - 1) % WALK_LEDS
    }

    /// Colors of the fading and rising LED at `level` of `ceiling`
    pub const fn colors(self, level: u8, ceiling: u8) -> (Rgb, Rgb) {
        let from = self.fade_from.at_level(ceiling.saturating_sub(level));
        let to = self.fade_to.at_level(level);
        let fading = Rgb {
            r: from.r.saturating_add(to.r),
            g: from.g.saturating_add(to.g),
            b: from.b.saturating_add(to.b),
        };
        (fading, self.hue.at_level(level))
    }
}

/// Stages in walk order
pub const WALK_STAGES: [WalkStage; WALK_LEDS] = [
    WalkStage::new(0, Channels::RED, Channels::CYAN, Channels::RED),
    WalkStage::new(1, Channels::GREEN, Channels::RED, Channels::GREEN),
    WalkStage::new(2, Channels::BLUE, Channels::GREEN, Channels::BLUE),
    WalkStage::new(3, Channels::YELLOW, Channels::BLUE, Channels::RED),
    WalkStage::new(4, Channels::PURPLE, Channels::YELLOW, Channels::BLUE),
    WalkStage::new(5, Channels::CYAN, Channels::PURPLE, Channels::GREEN),
];

/// Cross-fade walk effect
///
/// A pass runs all six stages once, starting from `first_stage`. Until the
/// first stage of the first pass is over nothing is lit behind the rising
/// LED, so that stage leaves its fading LED alone.
#[derive(Debug, Clone)]
pub struct CrossfadeWalkEffect {
    ceiling: u8,
    delay: Duration,
    first_stage: usize,
    /// Stages done in the current pass
    done: usize,
    ramp: Ramp,
    started: bool,
    warm: bool,
}

impl CrossfadeWalkEffect {
    pub const fn new(ceiling: u8, delay: Duration, first_stage: usize) -> Self {
        Self {
            ceiling,
            delay,
            first_stage: first_stage % WALK_LEDS,
            done: 0,
            ramp: Self::stage_ramp(ceiling),
            started: false,
            warm: false,
        }
    }

    /// Stage the next frame belongs to, `None` once the pass is complete
    pub fn stage(&self) -> Option<WalkStage> {
        if self.done >= WALK_LEDS {
            return None;
        }
        WALK_STAGES
            .get((self.first_stage + self.done) % WALK_LEDS)
            .copied()
    }

    /// Levels `1..=ceiling`
    #[allow(clippy::cast_lossless)]
    const fn stage_ramp(ceiling: u8) -> Ramp {
        Ramp::up(1, ceiling as u16)
    }

    fn next_level(&mut self) -> Option<(WalkStage, u8)> {
        loop {
            let stage = self.stage()?;
            if let Some(level) = self.ramp.next() {
                return Some((stage, level));
            }
            self.done += 1;
            self.warm = true;
            self.ramp = Self::stage_ramp(self.ceiling);
        }
    }
}

impl Effect for CrossfadeWalkEffect {
    fn render(&mut self, leds: &mut [Rgb]) -> Option<Duration> {
        let (stage, level) = self.next_level()?;
        if !self.started {
            self.started = true;
            leds.fill(BLACK);
        }

        let (fading, rising) = stage.colors(level, self.ceiling);
        for group in leds.chunks_mut(WALK_LEDS) {
            if self.warm {
                if let Some(led) = group.get_mut(stage.fading()) {
                    *led = fading;
                }
            }
            if let Some(led) = group.get_mut(stage.rising) {
                *led = rising;
            }
        }

        Some(self.delay)
    }

    fn rewind(&mut self) {
        self.done = 0;
        self.ramp = Self::stage_ramp(self.ceiling);
    }
}
