mod channels;

pub use channels::{Channel, Channels};
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Default brightness ceiling.
///
/// 50 of 255 already looks close to full brightness on WS2812 parts and keeps
/// the current draw of a long strip low.
pub const DEFAULT_MAX_BRIGHTNESS: u8 = 50;

/// Clamp every channel of `color` to `ceiling`
pub const fn clamp_to_ceiling(color: Rgb, ceiling: u8) -> Rgb {
    Rgb {
        r: min_u8(color.r, ceiling),
        g: min_u8(color.g, ceiling),
        b: min_u8(color.b, ceiling),
    }
}

const fn min_u8(a: u8, b: u8) -> u8 {
    if a < b { a } else { b }
}
