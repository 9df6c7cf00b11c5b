//! Desktop preview app for bias-light modes
//!
//! Runs the real controller on a background thread with a simulated button
//! port and strip, and paints the strip in a window.

use std::convert::Infallible;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration as StdDuration;

use bias_light::button::IDLE;
use bias_light::frame::decode_grb;
use bias_light::{
    Controller, InputPort, LightConfig, ModeId, Responsiveness, Rgb, Transmitter,
};
use eframe::egui::{self};
use embedded_hal::delay::DelayNs;

/// Number of LEDs in the simulated strip
const LED_COUNT: usize = 60;

/// Number of simulated push buttons
const BUTTON_COUNT: usize = 4;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Button port backed by an atomic the UI writes to
struct SharedPort(Arc<AtomicU8>);

impl InputPort for SharedPort {
    fn read(&mut self) -> u8 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Strip that decodes the wire bytes back into colors for painting
struct SharedStrip(Arc<Mutex<Vec<Rgb>>>);

impl Transmitter for SharedStrip {
    type Error = Infallible;

    fn transmit(&mut self, wire: &[u8]) -> Result<(), Self::Error> {
        if let Ok(mut leds) = self.0.lock() {
            leds.clear();
            leds.extend(decode_grb(wire));
        }
        Ok(())
    }
}

/// Blocking delay on the controller thread
struct ThreadDelay;

impl DelayNs for ThreadDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(StdDuration::from_nanos(u64::from(ns)));
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 400.0])
            .with_title("Bias Light Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "bias-light-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

/// Controller thread handles shared with the UI
struct Simulation {
    port: Arc<AtomicU8>,
    leds: Arc<Mutex<Vec<Rgb>>>,
    mode: Arc<Mutex<ModeId>>,
}

impl Simulation {
    fn spawn(config: LightConfig) -> Self {
        let port = Arc::new(AtomicU8::new(IDLE));
        let leds = Arc::new(Mutex::new(vec![Rgb::default(); LED_COUNT]));
        let mode = Arc::new(Mutex::new(ModeId::Off));

        let mut controller = Controller::<_, _, _, LED_COUNT>::new(
            SharedPort(Arc::clone(&port)),
            SharedStrip(Arc::clone(&leds)),
            ThreadDelay,
            &config,
        );
        let current = Arc::clone(&mode);
        thread::spawn(move || {
            loop {
                let result = controller.step();
                if let Ok(mut mode) = current.lock() {
                    *mode = if result.interrupted {
                        controller.mode()
                    } else {
                        result.mode
                    };
                }
            }
        });

        Self { port, leds, mode }
    }
}

struct PreviewApp {
    simulation: Simulation,
    /// Buttons currently held down
    held: [bool; BUTTON_COUNT],
    responsiveness: Responsiveness,
}

impl PreviewApp {
    fn new() -> Self {
        let config = LightConfig::DEFAULT.with_responsiveness(Responsiveness::PerFrame);
        Self {
            simulation: Simulation::spawn(config),
            held: [false; BUTTON_COUNT],
            responsiveness: config.responsiveness,
        }
    }

    /// Port value for the buttons currently held, active low
    fn port_value(&self) -> u8 {
        self.held
            .iter()
            .enumerate()
            .filter(|(_, held)| **held)
            .fold(IDLE, |value, (bit, _)| value & !(1 << bit))
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let frame = self
            .simulation
            .leds
            .lock()
            .map(|leds| leds.clone())
            .unwrap_or_default();
        let mode = self
            .simulation
            .mode
            .lock()
            .map(|mode| *mode)
            .unwrap_or(ModeId::Off);

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Buttons:");
                for (index, held) in self.held.iter_mut().enumerate() {
                    let response = ui.button(format!("SW{index}"));
                    *held = response.is_pointer_button_down_on();
                }
            });
            self.simulation
                .port
                .store(self.port_value(), Ordering::Relaxed);

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label(format!("Mode: {}", mode.as_str()));
                ui.add_space(8.0);
                let polling = match self.responsiveness {
                    Responsiveness::PerPass => "per pass",
                    Responsiveness::PerFrame => "per frame",
                };
                ui.label(format!("Input polled {polling}"));
            });

            ui.add_space(16.0);

            // === LED Display ===
            let available_width = ui.available_width();
            let led_pitch = LED_SIZE + LED_GAP;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = frame.len().div_ceil(leds_per_row).max(1);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) = ui.allocate_painter(
                egui::vec2(available_width, height),
                egui::Sense::hover(),
            );
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in frame.iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(LED_SIZE, LED_SIZE),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 3.0, color);
            }
        });
    }
}
