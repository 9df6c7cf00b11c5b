//! Mode selection
//!
//! Modes form a closed, ordered set. The sequencer only stores an index into
//! it; turning the index into something that renders is done by
//! [`ModeId::to_slot`].

use crate::color::Channels;
use crate::config::LightConfig;
use crate::effect::{
    BreatheEffect, CrossfadeWalkEffect, EffectSlot, OffEffect, RainbowChaseEffect, WALK_LEDS,
};

const MODE_NAME_RED: &str = "red";
const MODE_NAME_YELLOW: &str = "yellow";
const MODE_NAME_GREEN: &str = "green";
const MODE_NAME_CYAN: &str = "cyan";
const MODE_NAME_BLUE: &str = "blue";
const MODE_NAME_PURPLE: &str = "purple";
const MODE_NAME_WHITE: &str = "white";
const MODE_NAME_RAINBOW: &str = "rainbow";
const MODE_NAME_WALK: &str = "walk";
const MODE_NAME_OFF: &str = "off";

/// Modes of the primary set, in button order
const PRIMARY_MODES: [ModeId; 8] = [
    ModeId::Red,
    ModeId::Yellow,
    ModeId::Green,
    ModeId::Cyan,
    ModeId::Blue,
    ModeId::Purple,
    ModeId::White,
    ModeId::Rainbow,
];

/// Number of modes in the primary set
pub const MODE_COUNT: u8 = 8;

/// Number of modes in the walk set, one per walk stage
#[allow(clippy::cast_possible_truncation)]
pub const WALK_MODE_COUNT: u8 = WALK_LEDS as u8;

/// Known modes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeId {
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    White,
    Rainbow,
    /// Cross-fade walk entered at the given stage
    Walk(u8),
    /// Fallback for any index outside the mode set
    Off,
}

impl ModeId {
    /// Channels driven by a breathe mode, `None` for the other modes
    pub const fn breathe_channels(self) -> Option<Channels> {
        Some(match self {
            Self::Red => Channels::RED,
            Self::Yellow => Channels::YELLOW,
            Self::Green => Channels::GREEN,
            Self::Cyan => Channels::CYAN,
            Self::Blue => Channels::BLUE,
            Self::Purple => Channels::PURPLE,
            Self::White => Channels::WHITE,
            Self::Rainbow | Self::Walk(_) | Self::Off => return None,
        })
    }

    /// Build the effect that renders this mode, with its phase at the start
    pub fn to_slot(self, config: &LightConfig) -> EffectSlot {
        if let Some(channels) = self.breathe_channels() {
            return EffectSlot::Breathe(BreatheEffect::new(
                channels,
                config.max_brightness,
                config.breathe_delay,
            ));
        }
        match self {
            Self::Rainbow => EffectSlot::RainbowChase(RainbowChaseEffect::new(
                config.max_brightness,
                config.chase_delay,
            )),
            Self::Walk(stage) => EffectSlot::CrossfadeWalk(CrossfadeWalkEffect::new(
                config.max_brightness,
                config.walk_delay,
                stage as usize,
            )),
            _ => EffectSlot::Off(OffEffect::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => MODE_NAME_RED,
            Self::Yellow => MODE_NAME_YELLOW,
            Self::Green => MODE_NAME_GREEN,
            Self::Cyan => MODE_NAME_CYAN,
            Self::Blue => MODE_NAME_BLUE,
            Self::Purple => MODE_NAME_PURPLE,
            Self::White => MODE_NAME_WHITE,
            Self::Rainbow => MODE_NAME_RAINBOW,
            Self::Walk(_) => MODE_NAME_WALK,
            Self::Off => MODE_NAME_OFF,
        }
    }
}

/// Closed set of modes the buttons cycle through
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeSet {
    /// Seven breathing hues and the rainbow chase
    Primary,
    /// The six-LED cross-fade walk, one mode per entry stage
    Walk,
}

impl ModeSet {
    pub const fn mode_count(self) -> u8 {
        match self {
            Self::Primary => MODE_COUNT,
            Self::Walk => WALK_MODE_COUNT,
        }
    }

    /// Map an index to a mode, [`ModeId::Off`] past the end of the set
    pub const fn mode(self, index: u8) -> ModeId {
        if index >= self.mode_count() {
            return ModeId::Off;
        }
        match self {
            Self::Primary => PRIMARY_MODES[index as usize],
            Self::Walk => ModeId::Walk(index),
        }
    }
}

/// Current mode index with wrapping advance
#[derive(Debug, Clone)]
pub struct ModeSequencer {
    index: u8,
    set: ModeSet,
}

impl ModeSequencer {
    /// Create a sequencer parked on the fallback index
    ///
    /// Until the first advance the active mode is [`ModeId::Off`]; the first
    /// advance wraps to mode 0.
    pub const fn new(set: ModeSet) -> Self {
        Self {
            index: set.mode_count(),
            set,
        }
    }

    /// Create a sequencer on a specific index
    pub const fn starting_at(index: u8, set: ModeSet) -> Self {
        Self { index, set }
    }

    /// Move to the next mode, wrapping after the last one
    pub const fn advance(&mut self) {
        let next = self.index.saturating_add(1);
        self.index = if next >= self.set.mode_count() { 0 } else { next };
    }

    pub const fn index(&self) -> u8 {
        self.index
    }

    pub const fn set(&self) -> ModeSet {
        self.set
    }

    /// Mode selected by the current index
    pub const fn current(&self) -> ModeId {
        self.set.mode(self.index)
    }
}
