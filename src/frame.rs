//! Fixed-size frame buffer and its wire encoding
//!
//! The buffer holds one logical color per LED, indexed by the physical
//! position along the strip. WS2812-class strips expect the channels of each
//! pixel in green, red, blue order; that ordering only exists in the encoded
//! wire bytes and never in the pixel values themselves.

use crate::color::{BLACK, Rgb};

/// Bytes per pixel on the wire
pub const BYTES_PER_PIXEL: usize = 3;

/// Frame buffer for a strip of `N` LEDs
///
/// The length is part of the type, so the buffer can never be resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer<const N: usize> {
    pixels: [Rgb; N],
    wire: [[u8; BYTES_PER_PIXEL]; N],
}

impl<const N: usize> Default for FrameBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FrameBuffer<N> {
    /// Create a zeroed (all off) frame buffer
    pub const fn new() -> Self {
        Self {
            pixels: [BLACK; N],
            wire: [[0; BYTES_PER_PIXEL]; N],
        }
    }

    /// Number of LEDs in the strip
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Color of the LED at `index`, `None` past the end of the strip
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.pixels.get(index).copied()
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Encode the frame in wire order and return the bytes to transmit
    ///
    /// The result is exactly `N * 3` bytes long.
    pub fn encode(&mut self) -> &[u8] {
        for (bytes, pixel) in self.wire.iter_mut().zip(self.pixels.iter()) {
            *bytes = grb(*pixel);
        }
        self.wire.as_flattened()
    }
}

/// Wire bytes of a single pixel
pub const fn grb(color: Rgb) -> [u8; BYTES_PER_PIXEL] {
    [color.g, color.r, color.b]
}

/// Decode wire bytes back into pixels
///
/// Trailing bytes that do not form a whole pixel are ignored.
pub fn decode_grb(wire: &[u8]) -> impl Iterator<Item = Rgb> + '_ {
    wire.chunks_exact(BYTES_PER_PIXEL).map(|chunk| Rgb {
        r: chunk[1],
        g: chunk[0],
        b: chunk[2],
    })
}
