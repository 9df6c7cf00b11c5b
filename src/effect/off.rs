//! All-off fallback
//!
//! Rendered whenever the selected mode index is outside the mode set. A pass
//! is a single black frame with no hold time.

use embassy_time::Duration;

use super::Effect;
use crate::color::{BLACK, Rgb};

/// Off effect - blanks the strip once per pass
#[derive(Debug, Clone, Default)]
pub struct OffEffect {
    rendered: bool,
}

impl OffEffect {
    pub const fn new() -> Self {
        Self { rendered: false }
    }
}

impl Effect for OffEffect {
    fn render(&mut self, leds: &mut [Rgb]) -> Option<Duration> {
        if self.rendered {
            return None;
        }
        self.rendered = true;
        leds.fill(BLACK);

        Some(Duration::from_ticks(0))
    }

    fn rewind(&mut self) {
        self.rendered = false;
    }
}
