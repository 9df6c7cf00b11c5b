use crate::color::Rgb;

/// A single color channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Write this channel into a color
    pub const fn set(self, color: &mut Rgb, value: u8) {
        match self {
            Self::Red => color.r = value,
            Self::Green => color.g = value,
            Self::Blue => color.b = value,
        }
    }
}

/// Set of channels that ramp together
///
/// A breathe hue is described by the channels it drives: red alone, red and
/// green for yellow, all three for white and so on. Channels outside the set
/// stay at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channels {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl Channels {
    pub const RED: Self = Self::new(true, false, false);
    pub const YELLOW: Self = Self::new(true, true, false);
    pub const GREEN: Self = Self::new(false, true, false);
    pub const CYAN: Self = Self::new(false, true, true);
    pub const BLUE: Self = Self::new(false, false, true);
    pub const PURPLE: Self = Self::new(true, false, true);
    pub const WHITE: Self = Self::new(true, true, true);

    pub const fn new(red: bool, green: bool, blue: bool) -> Self {
        Self { red, green, blue }
    }

    /// Color with every channel of the set at `level`, the rest at zero
    pub const fn at_level(self, level: u8) -> Rgb {
        Rgb {
            r: if self.red { level } else { 0 },
            g: if self.green { level } else { 0 },
            b: if self.blue { level } else { 0 },
        }
    }
}
