//! Linear integer ramps
//!
//! Every animation in the crate is built from channel values that count up
//! or down by one per frame. A [`Ramp`] is that counter: an iterator over a
//! fixed number of consecutive values.

/// Direction a ramp counts in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Counter yielding `steps` consecutive values starting at `from`
#[derive(Debug, Clone)]
pub struct Ramp {
    value: u8,
    remaining: u16,
    direction: Direction,
}

impl Ramp {
    /// Ramp yielding `from, from + 1, ...`
    pub const fn up(from: u8, steps: u16) -> Self {
        Self::new(from, steps, Direction::Up)
    }

    /// Ramp yielding `from, from - 1, ...`
    pub const fn down(from: u8, steps: u16) -> Self {
        Self::new(from, steps, Direction::Down)
    }

    /// Create a ramp
    ///
    /// `steps` is cut down so the ramp never leaves the `u8` range.
    #[allow(clippy::cast_lossless)]
    pub const fn new(from: u8, steps: u16, direction: Direction) -> Self {
        let headroom = match direction {
            Direction::Up => u8::MAX - from,
            Direction::Down => from,
        };
        let room = headroom as u16 + 1;
        Self {
            value: from,
            remaining: if steps < room { steps } else { room },
            direction,
        }
    }
}

impl Iterator for Ramp {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.value;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.value = match self.direction {
                Direction::Up => self.value + 1,
                Direction::Down => self.value - 1,
            };
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.remaining);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Ramp {}
