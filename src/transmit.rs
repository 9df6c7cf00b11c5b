//! Pixel transmitter abstraction
//!
//! The one-wire LED protocol derives its bit timing from the sender, so a
//! transmission that gets interrupted half way corrupts the whole frame.
//! [`send_frame`] therefore runs the transmitter inside a critical section,
//! which keeps interrupt handlers (and any scheduler driven by them) off the
//! CPU until the last bit is out.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

/// Minimum low time after a frame before the strip latches it
pub const LATCH_GAP: Duration = Duration::from_micros(50);

/// Abstract pixel transmitter
///
/// Implement this trait to support different strip drivers. `wire` holds
/// three bytes per LED in green, red, blue order and must be emitted in one
/// uninterrupted burst.
pub trait Transmitter {
    type Error;

    /// Emit the whole frame
    fn transmit(&mut self, wire: &[u8]) -> Result<(), Self::Error>;
}

impl<T: Transmitter + ?Sized> Transmitter for &mut T {
    type Error = T::Error;

    fn transmit(&mut self, wire: &[u8]) -> Result<(), Self::Error> {
        T::transmit(self, wire)
    }
}

/// Send one frame without preemption, then hold the line for the latch gap
pub fn send_frame<T: Transmitter, D: DelayNs>(
    transmitter: &mut T,
    delay: &mut D,
    wire: &[u8],
    latch: Duration,
) -> Result<(), T::Error> {
    let result = critical_section::with(|_| transmitter.transmit(wire));
    sleep(delay, latch);

    result
}

/// Block for `duration` using the delay provider
///
/// Zero durations do not touch the delay at all.
#[allow(clippy::cast_possible_truncation)]
pub fn sleep<D: DelayNs>(delay: &mut D, duration: Duration) {
    let micros = duration.as_micros();
    if micros == 0 {
        return;
    }
    if micros % 1000 == 0 {
        delay.delay_ms((micros / 1000).min(u64::from(u32::MAX)) as u32);
    } else {
        delay.delay_us(micros.min(u64::from(u32::MAX)) as u32);
    }
}
