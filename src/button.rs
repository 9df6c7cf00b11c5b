//! Button input sampling with software debounce
//!
//! The buttons sit on a parallel port with pull-ups, so the port reads all
//! ones while nothing is pressed. The sampler does not care which button was
//! pressed: any stable change away from idle counts as one advance.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::transmit::sleep;

/// Port value with no button pressed
pub const IDLE: u8 = 0xFF;

/// Time a changed sample has to persist before it is accepted
pub const DEBOUNCE: Duration = Duration::from_millis(10);

/// 8-bit parallel input port
pub trait InputPort {
    /// Sample the whole port
    fn read(&mut self) -> u8;
}

impl<P: InputPort + ?Sized> InputPort for &mut P {
    fn read(&mut self) -> u8 {
        P::read(self)
    }
}

/// Input port assembled from up to eight individual pins
///
/// Pin `i` drives bit `i`. Bits without a pin read high, as does a pin whose
/// read fails, so a broken input can never look like a press.
pub struct PinPort<P, const K: usize> {
    pins: [P; K],
}

impl<P: InputPin, const K: usize> PinPort<P, K> {
    pub const fn new(pins: [P; K]) -> Self {
        const { assert!(K <= 8, "a port has at most eight pins") };
        Self { pins }
    }

    pub fn release(self) -> [P; K] {
        self.pins
    }
}

impl<P: InputPin, const K: usize> InputPort for PinPort<P, K> {
    fn read(&mut self) -> u8 {
        let mut value = IDLE;
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            if let Ok(true) = pin.is_low() {
                value &= !(1 << bit);
            }
        }
        value
    }
}

/// Debounced edge detector over an [`InputPort`]
#[derive(Debug)]
pub struct ButtonSampler<P> {
    port: P,
    idle: u8,
    debounce: Duration,
    /// Last raw sample
    raw: u8,
    /// Last accepted (debounced) sample
    accepted: u8,
}

impl<P: InputPort> ButtonSampler<P> {
    /// Create a sampler with the default idle value and debounce interval
    pub const fn new(port: P) -> Self {
        Self::with_settings(port, IDLE, DEBOUNCE)
    }

    pub const fn with_settings(port: P, idle: u8, debounce: Duration) -> Self {
        Self {
            port,
            idle,
            debounce,
            raw: idle,
            accepted: idle,
        }
    }

    /// Check the port for a mode-advance edge
    ///
    /// Reads the port once. If the value differs from idle and from the last
    /// accepted value, waits for the debounce interval and reads again; the
    /// edge is reported only if the second read returns the same value.
    pub fn poll<D: DelayNs>(&mut self, delay: &mut D) -> bool {
        let first = self.sample();
        if !self.is_candidate(first) {
            return false;
        }

        sleep(delay, self.debounce);

        let second = self.sample();
        if second != first {
            return false;
        }

        self.accepted = second;
        true
    }

    /// Last raw sample read from the port
    pub const fn raw(&self) -> u8 {
        self.raw
    }

    /// Last accepted sample
    pub const fn accepted(&self) -> u8 {
        self.accepted
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    fn sample(&mut self) -> u8 {
        self.raw = self.port.read();
        self.raw
    }

    const fn is_candidate(&self, value: u8) -> bool {
        value != self.idle && value != self.accepted
    }
}
