//! Rainbow chase
//!
//! A single head LED walks along the strip, one position per frame, while
//! its color travels around the hue wheel: red, yellow, green, cyan, blue,
//! magenta and back to red. Each leg of the trip ramps exactly one channel
//! and holds the other two.
//!
//! Only the head slot is written. LEDs behind the head keep whatever color
//! they were given when the head passed, which leaves a fading-hue trail.

use embassy_time::Duration;

use super::Effect;
use crate::color::{Channel, Rgb};
use crate::ramp::{Direction, Ramp};

/// One leg of the hue cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChaseStage {
    /// Channel that ramps during this leg
    pub channel: Channel,
    pub direction: Direction,
}

impl ChaseStage {
    const fn new(channel: Channel, direction: Direction) -> Self {
        Self { channel, direction }
    }

    /// Ramp of the moving channel
    ///
    /// Rising legs yield `0..ceiling`, falling legs `ceiling..=1`.
    #[allow(clippy::cast_lossless)]
    const fn ramp(self, ceiling: u8) -> Ramp {
        match self.direction {
            Direction::Up => Ramp::up(0, ceiling as u16),
            Direction::Down => Ramp::down(ceiling, ceiling as u16),
        }
    }

    /// Value the moving channel settles on once the leg is over
    const fn settled(self, ceiling: u8) -> u8 {
        match self.direction {
            Direction::Up => ceiling,
            Direction::Down => 0,
        }
    }
}

/// Legs of the hue cycle, starting from red
pub const CHASE_STAGES: [ChaseStage; 6] = [
    // red -> yellow
    ChaseStage::new(Channel::Green, Direction::Up),
    // yellow -> green
    ChaseStage::new(Channel::Red, Direction::Down),
    // green -> cyan
    ChaseStage::new(Channel::Blue, Direction::Up),
    // cyan -> blue
    ChaseStage::new(Channel::Green, Direction::Down),
    // blue -> magenta
    ChaseStage::new(Channel::Red, Direction::Up),
    // magenta -> red
    ChaseStage::new(Channel::Blue, Direction::Down),
];

/// Rainbow chase effect
#[derive(Debug, Clone)]
pub struct RainbowChaseEffect {
    ceiling: u8,
    delay: Duration,
    /// Next LED to be written
    head: usize,
    /// Index into [`CHASE_STAGES`], equal to its length once the pass is over
    stage: usize,
    ramp: Ramp,
    color: Rgb,
}

impl RainbowChaseEffect {
    /// Create a chase with the head on the first LED
    pub const fn new(ceiling: u8, delay: Duration) -> Self {
        Self::with_head(ceiling, delay, 0)
    }

    /// Create a chase with the head on a given LED
    pub const fn with_head(ceiling: u8, delay: Duration, head: usize) -> Self {
        Self {
            ceiling,
            delay,
            head,
            stage: 0,
            ramp: CHASE_STAGES[0].ramp(ceiling),
            color: Self::initial_color(ceiling),
        }
    }

    /// Position the next frame will write to
    pub const fn head(&self) -> usize {
        self.head
    }

    /// Current leg, `None` once the pass is complete
    pub fn stage(&self) -> Option<ChaseStage> {
        CHASE_STAGES.get(self.stage).copied()
    }

    const fn initial_color(ceiling: u8) -> Rgb {
        Rgb {
            r: ceiling,
            g: 0,
            b: 0,
        }
    }

    /// Color of the next frame
    fn next_color(&mut self) -> Option<Rgb> {
        loop {
            let stage = self.stage()?;
            if let Some(value) = self.ramp.next() {
                stage.channel.set(&mut self.color, value);
                return Some(self.color);
            }
            stage
                .channel
                .set(&mut self.color, stage.settled(self.ceiling));
            self.stage += 1;
            if let Some(next) = self.stage() {
                self.ramp = next.ramp(self.ceiling);
            }
        }
    }
}

impl Effect for RainbowChaseEffect {
    fn render(&mut self, leds: &mut [Rgb]) -> Option<Duration> {
        let color = self.next_color()?;

        if !leds.is_empty() {
            let head = self.head % leds.len();
            leds[head] = color;
            self.head = (head + 1) % leds.len();
        }

        Some(self.delay)
    }

    fn rewind(&mut self) {
        self.stage = 0;
        self.ramp = CHASE_STAGES[0].ramp(self.ceiling);
        self.color = Self::initial_color(self.ceiling);
    }
}
