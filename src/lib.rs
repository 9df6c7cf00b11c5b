//! Bias light controller for a short WS2812 strip
//!
//! A set of buttons on a parallel input port cycles through a fixed list of
//! lighting modes: seven breathing solid colors and a rainbow chase, or the
//! six stages of a cross-fade walk, with an all-off fallback. The library is
//! platform independent; hardware is reached through three seams:
//!
//! * [`InputPort`] - the button port, idle value `0xFF`
//! * [`Transmitter`] - the strip driver, fed GRB wire bytes
//! * [`embedded_hal::delay::DelayNs`] - blocking delays
//!
//! [`Controller::run`] is the firmware main loop.
#![no_std]

pub mod button;
pub mod color;
pub mod config;
pub mod controller;
pub mod effect;
pub mod frame;
pub mod ramp;
pub mod sequencer;
pub mod transmit;
pub mod ws2812_spi;

pub use button::{ButtonSampler, InputPort, PinPort};
pub use color::{Channel, Channels, Rgb};
pub use config::{LightConfig, Responsiveness};
pub use controller::{Controller, PassResult};
pub use effect::{CrossfadeWalkEffect, Effect, EffectSlot};
pub use frame::FrameBuffer;
pub use sequencer::{ModeId, ModeSequencer, ModeSet};
pub use transmit::{Transmitter, send_frame};
pub use ws2812_spi::{Ws2812Spi, Ws2812SpiError};

pub use embassy_time::Duration;
