use embassy_time::Duration;

use crate::button::{DEBOUNCE, IDLE};
use crate::color::DEFAULT_MAX_BRIGHTNESS;
use crate::sequencer::ModeSet;
use crate::transmit::LATCH_GAP;

/// Delay between breathe frames
pub const BREATHE_FRAME_DELAY: Duration = Duration::from_millis(10);

/// Delay between rainbow chase steps
pub const CHASE_FRAME_DELAY: Duration = Duration::from_millis(25);

/// Delay between cross-fade walk steps
pub const WALK_FRAME_DELAY: Duration = Duration::from_millis(100);

/// When button input is looked at while an animation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Responsiveness {
    /// Poll once per animation pass; a press takes effect after the running
    /// ramps have finished
    PerPass,
    /// Poll before every frame; a press cuts the running pass short
    PerFrame,
}

/// Configuration for the light controller
#[derive(Debug, Clone, Copy)]
pub struct LightConfig {
    /// Brightness ceiling for every channel
    pub max_brightness: u8,
    /// Hold time of each breathe frame
    pub breathe_delay: Duration,
    /// Hold time of each rainbow chase frame
    pub chase_delay: Duration,
    /// Hold time of each cross-fade walk frame
    pub walk_delay: Duration,
    /// Debounce interval for the buttons
    pub debounce: Duration,
    /// Line low time after every transmitted frame
    pub latch_gap: Duration,
    /// Input port value with no button pressed
    pub idle: u8,
    /// Modes the buttons cycle through
    pub mode_set: ModeSet,
    pub responsiveness: Responsiveness,
}

impl LightConfig {
    pub const DEFAULT: Self = Self {
        max_brightness: DEFAULT_MAX_BRIGHTNESS,
        breathe_delay: BREATHE_FRAME_DELAY,
        chase_delay: CHASE_FRAME_DELAY,
        walk_delay: WALK_FRAME_DELAY,
        debounce: DEBOUNCE,
        latch_gap: LATCH_GAP,
        idle: IDLE,
        mode_set: ModeSet::Primary,
        responsiveness: Responsiveness::PerPass,
    };

    /// Six-LED cross-fade walk, input checked every frame
    pub const WALK: Self = Self::DEFAULT
        .with_mode_set(ModeSet::Walk)
        .with_responsiveness(Responsiveness::PerFrame);

    #[must_use]
    pub const fn with_max_brightness(mut self, max_brightness: u8) -> Self {
        self.max_brightness = max_brightness;
        self
    }

    #[must_use]
    pub const fn with_frame_delays(mut self, breathe: Duration, chase: Duration) -> Self {
        self.breathe_delay = breathe;
        self.chase_delay = chase;
        self
    }

    #[must_use]
    pub const fn with_walk_delay(mut self, walk: Duration) -> Self {
        self.walk_delay = walk;
        self
    }

    #[must_use]
    pub const fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    #[must_use]
    pub const fn with_latch_gap(mut self, latch_gap: Duration) -> Self {
        self.latch_gap = latch_gap;
        self
    }

    #[must_use]
    pub const fn with_idle(mut self, idle: u8) -> Self {
        self.idle = idle;
        self
    }

    #[must_use]
    pub const fn with_mode_set(mut self, mode_set: ModeSet) -> Self {
        self.mode_set = mode_set;
        self
    }

    #[must_use]
    pub const fn with_responsiveness(mut self, responsiveness: Responsiveness) -> Self {
        self.responsiveness = responsiveness;
        self
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
