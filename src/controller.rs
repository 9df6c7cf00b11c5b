use embedded_hal::delay::DelayNs;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::button::{ButtonSampler, InputPort};
use crate::color::clamp_to_ceiling;
use crate::config::{LightConfig, Responsiveness};
use crate::effect::EffectSlot;
use crate::frame::FrameBuffer;
use crate::sequencer::{ModeId, ModeSequencer};
use crate::transmit::{Transmitter, send_frame, sleep};

/// Outcome of one main loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassResult {
    /// Mode that was rendered during the pass
    pub mode: ModeId,
    /// A button edge selected a new mode before the pass
    pub advanced: bool,
    /// Frames sent to the transmitter
    pub frames: u32,
    /// The pass was cut short by a button edge
    pub interrupted: bool,
}

/// Bias light controller - the main orchestrator
///
/// Owns the frame buffer, the button state, the mode index and the active
/// effect. Every piece of mutable state lives here and is only reached
/// through `&mut self`.
pub struct Controller<P, T, D, const N: usize> {
    // External dependencies and configuration
    sampler: ButtonSampler<P>,
    transmitter: T,
    delay: D,
    config: LightConfig,

    // Internal state
    sequencer: ModeSequencer,
    mode: ModeId,
    effect: EffectSlot,
    frame: FrameBuffer<N>,
    dropped_frames: u32,
}

impl<P, T, D, const N: usize> Controller<P, T, D, N>
where
    P: InputPort,
    T: Transmitter,
    D: DelayNs,
{
    /// Create a controller parked on the off fallback
    ///
    /// The first button press selects mode 0.
    pub fn new(port: P, transmitter: T, delay: D, config: &LightConfig) -> Self {
        Self::with_sequencer(
            port,
            transmitter,
            delay,
            config,
            ModeSequencer::new(config.mode_set),
        )
    }

    /// Create a controller on mode `index` of the configured mode set
    pub fn starting_at(port: P, transmitter: T, delay: D, config: &LightConfig, index: u8) -> Self {
        Self::with_sequencer(
            port,
            transmitter,
            delay,
            config,
            ModeSequencer::starting_at(index, config.mode_set),
        )
    }

    fn with_sequencer(
        port: P,
        transmitter: T,
        delay: D,
        config: &LightConfig,
        sequencer: ModeSequencer,
    ) -> Self {
        let mode = sequencer.current();
        Self {
            sampler: ButtonSampler::with_settings(port, config.idle, config.debounce),
            transmitter,
            delay,
            config: *config,
            sequencer,
            mode,
            effect: mode.to_slot(config),
            frame: FrameBuffer::new(),
            dropped_frames: 0,
        }
    }

    /// Run forever
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// One main loop iteration
    ///
    /// Polls the buttons, switches mode on an edge, then renders one full
    /// pass of the active effect.
    pub fn step(&mut self) -> PassResult {
        let advanced = self.poll_buttons();
        let mode = self.mode;
        let (frames, interrupted) = self.render_pass();

        PassResult {
            mode,
            advanced,
            frames,
            interrupted,
        }
    }

    /// Mode being rendered
    pub const fn mode(&self) -> ModeId {
        self.mode
    }

    pub const fn sequencer(&self) -> &ModeSequencer {
        &self.sequencer
    }

    pub const fn frame(&self) -> &FrameBuffer<N> {
        &self.frame
    }

    /// Frames the transmitter failed to send
    pub const fn dropped_frames(&self) -> u32 {
        self.dropped_frames
    }

    pub const fn transmitter(&self) -> &T {
        &self.transmitter
    }

    pub const fn delay(&self) -> &D {
        &self.delay
    }

    /// Select the next mode, restarting its animation from the beginning
    pub fn advance(&mut self) {
        self.sequencer.advance();
        self.mode = self.sequencer.current();
        self.effect = self.mode.to_slot(&self.config);

        #[cfg(feature = "esp32-log")]
        println!(
            "[Controller.advance] mode {} ({})",
            self.sequencer.index(),
            self.mode.as_str()
        );
    }

    /// Check the buttons and advance on an edge
    fn poll_buttons(&mut self) -> bool {
        if !self.sampler.poll(&mut self.delay) {
            return false;
        }
        self.advance();
        true
    }

    /// Render frames until the effect completes its pass
    ///
    /// Returns the number of frames sent and whether a button edge cut the
    /// pass short.
    fn render_pass(&mut self) -> (u32, bool) {
        let per_frame = self.config.responsiveness == Responsiveness::PerFrame;
        let mut frames: u32 = 0;

        loop {
            if per_frame && frames > 0 && self.poll_buttons() {
                return (frames, true);
            }

            let Some(hold) = self.effect.render(self.frame.pixels_mut()) else {
                break;
            };
            self.show_frame();
            frames = frames.saturating_add(1);
            sleep(&mut self.delay, hold);
        }

        self.effect.rewind();
        (frames, false)
    }

    /// Clamp the frame to the ceiling and push it out
    fn show_frame(&mut self) {
        let ceiling = self.config.max_brightness;
        for pixel in self.frame.pixels_mut() {
            *pixel = clamp_to_ceiling(*pixel, ceiling);
        }

        let wire = self.frame.encode();
        let result = send_frame(
            &mut self.transmitter,
            &mut self.delay,
            wire,
            self.config.latch_gap,
        );
        if result.is_err() {
            // The strip keeps showing the previous frame
            self.dropped_frames = self.dropped_frames.saturating_add(1);

            #[cfg(feature = "esp32-log")]
            println!("[Controller.show_frame] transmit failed, frame dropped");
        }
    }
}
