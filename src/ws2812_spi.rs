//! WS2812 transmitter on top of an SPI bus
//!
//! Every wire bit becomes a nibble on MOSI: `1000` for a zero and `1110` for
//! a one. With the SPI clock at about 3.2 MHz a nibble lasts 1.25 µs, which
//! gives the 0.3 µs / 0.9 µs high times the strip expects. The hardware
//! shifts the bytes out, so the timing does not depend on the CPU.
//!
//! A frame is encoded in full, reset tail included, and handed to the bus in
//! a single write. Gaps between bus calls would stretch the low time between
//! two bits and could latch the strip half way through a frame.

use embedded_hal::spi::SpiBus;

use crate::transmit::Transmitter;

/// SPI clock the encoding is designed for
pub const SPI_FREQUENCY_HZ: u32 = 3_200_000;

/// Zero bytes sent after the frame, about 140 µs of low line at 3.2 MHz
pub const RESET_LEN: usize = 56;

/// SPI bytes per wire byte
pub const SPI_BYTES_PER_BYTE: usize = 4;

/// Two wire bits per SPI byte, indexed by the bit pair
const PATTERNS: [u8; 4] = [0b1000_1000, 0b1000_1110, 0b1110_1000, 0b1110_1110];

/// Encode one wire byte as four SPI bytes, most significant bit first
pub const fn encode_byte(mut byte: u8) -> [u8; SPI_BYTES_PER_BYTE] {
    let mut out = [0; SPI_BYTES_PER_BYTE];
    let mut i = 0;
    while i < SPI_BYTES_PER_BYTE {
        out[i] = PATTERNS[((byte & 0b1100_0000) >> 6) as usize];
        byte <<= 2;
        i += 1;
    }
    out
}

/// SPI buffer length needed for a strip of `leds` pixels
pub const fn buffer_len(leds: usize) -> usize {
    leds * 3 * SPI_BYTES_PER_BYTE + RESET_LEN
}

/// Errors of the SPI strip driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ws2812SpiError<E> {
    /// The SPI bus failed
    Spi(E),
    /// The frame does not fit the encode buffer
    BufferTooSmall { needed: usize },
}

/// WS2812 strip driven through SPI MOSI
///
/// `BUF` is the encode buffer length; use [`buffer_len`] to size it for the
/// strip, e.g. `Ws2812Spi::<_, { buffer_len(60) }>::new(spi)`.
pub struct Ws2812Spi<SPI, const BUF: usize> {
    spi: SPI,
    buffer: [u8; BUF],
}

impl<SPI: SpiBus, const BUF: usize> Ws2812Spi<SPI, BUF> {
    /// Wrap an SPI bus configured for [`SPI_FREQUENCY_HZ`], mode 0
    pub const fn new(spi: SPI) -> Self {
        Self {
            spi,
            buffer: [0; BUF],
        }
    }

    pub fn release(self) -> SPI {
        self.spi
    }

    /// Encode `wire` plus the reset tail, returning the used length
    fn encode(&mut self, wire: &[u8]) -> Result<usize, usize> {
        let data_len = wire.len() * SPI_BYTES_PER_BYTE;
        let needed = data_len + RESET_LEN;
        if needed > BUF {
            return Err(needed);
        }

        for (chunk, byte) in self.buffer[..data_len]
            .chunks_exact_mut(SPI_BYTES_PER_BYTE)
            .zip(wire)
        {
            chunk.copy_from_slice(&encode_byte(*byte));
        }
        self.buffer[data_len..needed].fill(0);

        Ok(needed)
    }
}

impl<SPI: SpiBus, const BUF: usize> Transmitter for Ws2812Spi<SPI, BUF> {
    type Error = Ws2812SpiError<SPI::Error>;

    fn transmit(&mut self, wire: &[u8]) -> Result<(), Self::Error> {
        let len = self
            .encode(wire)
            .map_err(|needed| Ws2812SpiError::BufferTooSmall { needed })?;
        self.spi
            .write(&self.buffer[..len])
            .map_err(Ws2812SpiError::Spi)?;
        self.spi.flush().map_err(Ws2812SpiError::Spi)
    }
}
