//! Pattern library with compile-time known pattern variants
//!
//! All patterns are stored in an enum to avoid heap allocations.
//! Each pattern implements the `Pattern` trait and owns its progress
//! counters, which live only while the pattern is active.

mod fill;
mod mirrored;
mod segmented;
mod sweep;
mod walker;

use embassy_time::Duration;
use heapless::Vec;

pub use fill::{BlinkPattern, GlowPattern, SolidPattern};
pub use mirrored::{DROP_FILL_HOLD, DropFillPattern, DropPattern, RedBlueBouncePattern};
pub use segmented::{OutlinePattern, StripesPattern, TreeStepsPattern};
pub use sweep::{GradientPattern, RainbowPattern, RandomPattern};
pub use walker::{
    ChasePattern, DoubleChasePattern, PropellerPattern, RainbowLoopPattern,
    RotatingRedBluePattern,
};

use crate::frame::Frame;

/// Delay returned by patterns that drew a single static frame
pub const STATIC_FRAME: Duration = Duration::from_ticks(0);

const PATTERN_NAME_BLINK: &str = "blink";
const PATTERN_NAME_CHASE: &str = "chase";
const PATTERN_NAME_DOUBLE_CHASE: &str = "double_chase";
const PATTERN_NAME_DROP: &str = "drop";
const PATTERN_NAME_DROP_FILL: &str = "drop_fill";
const PATTERN_NAME_GLOW: &str = "glow";
const PATTERN_NAME_GRADIENT: &str = "gradient";
const PATTERN_NAME_OUTLINE: &str = "outline";
const PATTERN_NAME_PROPELLER: &str = "propeller";
const PATTERN_NAME_RAINBOW: &str = "rainbow";
const PATTERN_NAME_RAINBOW_LOOP: &str = "rainbow_loop";
const PATTERN_NAME_RANDOM: &str = "random";
const PATTERN_NAME_RED_BLUE_BOUNCE: &str = "red_blue_bounce";
const PATTERN_NAME_ROTATING_RED_BLUE: &str = "rotating_red_blue";
const PATTERN_NAME_STRIPES: &str = "stripes";
const PATTERN_NAME_TREE: &str = "tree";
const PATTERN_NAME_TREE_STEPS: &str = "tree_steps";

const PATTERN_ID_BLINK: u8 = 0;
const PATTERN_ID_CHASE: u8 = 1;
const PATTERN_ID_DOUBLE_CHASE: u8 = 2;
const PATTERN_ID_DROP: u8 = 3;
const PATTERN_ID_DROP_FILL: u8 = 4;
const PATTERN_ID_GLOW: u8 = 5;
const PATTERN_ID_GRADIENT: u8 = 6;
const PATTERN_ID_OUTLINE: u8 = 7;
const PATTERN_ID_PROPELLER: u8 = 8;
const PATTERN_ID_RAINBOW: u8 = 9;
const PATTERN_ID_RAINBOW_LOOP: u8 = 10;
const PATTERN_ID_RANDOM: u8 = 11;
const PATTERN_ID_RED_BLUE_BOUNCE: u8 = 12;
const PATTERN_ID_ROTATING_RED_BLUE: u8 = 13;
const PATTERN_ID_STRIPES: u8 = 14;
const PATTERN_ID_TREE: u8 = 15;
const PATTERN_ID_TREE_STEPS: u8 = 16;

/// Number of patterns in the library
pub const PATTERN_COUNT: usize = 17;

pub trait Pattern {
    /// Render the next frame
    ///
    /// `first_call` is set on the first invocation after the pattern became
    /// active (or the strip was powered on or resized); the pattern must then
    /// reinitialize its counters and clear or seed the frame.
    ///
    /// Returns how long the caller must wait before rendering again;
    /// [`STATIC_FRAME`] means the frame stays as drawn.
    fn render(&mut self, frame: &mut Frame<'_>, first_call: bool) -> Duration;
}

/// Known pattern ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PatternId {
    Blink = PATTERN_ID_BLINK,
    Chase = PATTERN_ID_CHASE,
    DoubleChase = PATTERN_ID_DOUBLE_CHASE,
    Drop = PATTERN_ID_DROP,
    DropFill = PATTERN_ID_DROP_FILL,
    Glow = PATTERN_ID_GLOW,
    Gradient = PATTERN_ID_GRADIENT,
    Outline = PATTERN_ID_OUTLINE,
    Propeller = PATTERN_ID_PROPELLER,
    Rainbow = PATTERN_ID_RAINBOW,
    RainbowLoop = PATTERN_ID_RAINBOW_LOOP,
    Random = PATTERN_ID_RANDOM,
    RedBlueBounce = PATTERN_ID_RED_BLUE_BOUNCE,
    RotatingRedBlue = PATTERN_ID_ROTATING_RED_BLUE,
    Stripes = PATTERN_ID_STRIPES,
    Tree = PATTERN_ID_TREE,
    TreeSteps = PATTERN_ID_TREE_STEPS,
}

impl PatternId {
    /// Every pattern, in index order
    pub const ALL: [Self; PATTERN_COUNT] = [
        Self::Blink,
        Self::Chase,
        Self::DoubleChase,
        Self::Drop,
        Self::DropFill,
        Self::Glow,
        Self::Gradient,
        Self::Outline,
        Self::Propeller,
        Self::Rainbow,
        Self::RainbowLoop,
        Self::Random,
        Self::RedBlueBounce,
        Self::RotatingRedBlue,
        Self::Stripes,
        Self::Tree,
        Self::TreeSteps,
    ];

    /// Strict lookup by numeric id
    pub fn from_raw(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    /// Lookup by numeric id, clamping out-of-range values to the last pattern
    pub fn by_index(value: u8) -> Self {
        Self::from_raw(value).unwrap_or(Self::ALL[PATTERN_COUNT - 1])
    }

    /// Case-insensitive lookup by name
    pub fn by_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str().eq_ignore_ascii_case(name))
    }

    /// Numeric id
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blink => PATTERN_NAME_BLINK,
            Self::Chase => PATTERN_NAME_CHASE,
            Self::DoubleChase => PATTERN_NAME_DOUBLE_CHASE,
            Self::Drop => PATTERN_NAME_DROP,
            Self::DropFill => PATTERN_NAME_DROP_FILL,
            Self::Glow => PATTERN_NAME_GLOW,
            Self::Gradient => PATTERN_NAME_GRADIENT,
            Self::Outline => PATTERN_NAME_OUTLINE,
            Self::Propeller => PATTERN_NAME_PROPELLER,
            Self::Rainbow => PATTERN_NAME_RAINBOW,
            Self::RainbowLoop => PATTERN_NAME_RAINBOW_LOOP,
            Self::Random => PATTERN_NAME_RANDOM,
            Self::RedBlueBounce => PATTERN_NAME_RED_BLUE_BOUNCE,
            Self::RotatingRedBlue => PATTERN_NAME_ROTATING_RED_BLUE,
            Self::Stripes => PATTERN_NAME_STRIPES,
            Self::Tree => PATTERN_NAME_TREE,
            Self::TreeSteps => PATTERN_NAME_TREE_STEPS,
        }
    }

    /// Names of all patterns, in index order, for discovery consumers
    pub fn list_names() -> Vec<&'static str, PATTERN_COUNT> {
        Self::ALL.iter().map(|id| id.as_str()).collect()
    }

    /// Create a fresh pattern instance
    pub fn to_slot(self) -> PatternSlot {
        match self {
            Self::Blink => PatternSlot::Blink(BlinkPattern::default()),
            Self::Chase => PatternSlot::Chase(ChasePattern::default()),
            Self::DoubleChase => PatternSlot::DoubleChase(DoubleChasePattern::default()),
            Self::Drop => PatternSlot::Drop(DropPattern::default()),
            Self::DropFill => PatternSlot::DropFill(DropFillPattern::default()),
            Self::Glow => PatternSlot::Glow(GlowPattern::default()),
            Self::Gradient => PatternSlot::Gradient(GradientPattern::default()),
            Self::Outline => PatternSlot::Outline(OutlinePattern::default()),
            Self::Propeller => PatternSlot::Propeller(PropellerPattern::default()),
            Self::Rainbow => PatternSlot::Rainbow(RainbowPattern::default()),
            Self::RainbowLoop => PatternSlot::RainbowLoop(RainbowLoopPattern::default()),
            Self::Random => PatternSlot::Random(RandomPattern::default()),
            Self::RedBlueBounce => PatternSlot::RedBlueBounce(RedBlueBouncePattern::default()),
            Self::RotatingRedBlue => {
                PatternSlot::RotatingRedBlue(RotatingRedBluePattern::default())
            }
            Self::Stripes => PatternSlot::Stripes(StripesPattern::default()),
            Self::Tree => PatternSlot::Tree(SolidPattern::default()),
            Self::TreeSteps => PatternSlot::TreeSteps(TreeStepsPattern::default()),
        }
    }
}

impl core::fmt::Display for PatternId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pattern slot - enum containing all possible patterns
#[derive(Debug, Clone)]
pub enum PatternSlot {
    Blink(BlinkPattern),
    Chase(ChasePattern),
    DoubleChase(DoubleChasePattern),
    Drop(DropPattern),
    DropFill(DropFillPattern),
    Glow(GlowPattern),
    Gradient(GradientPattern),
    Outline(OutlinePattern),
    Propeller(PropellerPattern),
    Rainbow(RainbowPattern),
    RainbowLoop(RainbowLoopPattern),
    Random(RandomPattern),
    RedBlueBounce(RedBlueBouncePattern),
    RotatingRedBlue(RotatingRedBluePattern),
    Stripes(StripesPattern),
    Tree(SolidPattern),
    TreeSteps(TreeStepsPattern),
}

impl Default for PatternSlot {
    fn default() -> Self {
        PatternId::Blink.to_slot()
    }
}

impl PatternSlot {
    /// Render the current pattern
    pub fn render(&mut self, frame: &mut Frame<'_>, first_call: bool) -> Duration {
        match self {
            Self::Blink(pattern) => pattern.render(frame, first_call),
            Self::Chase(pattern) => pattern.render(frame, first_call),
            Self::DoubleChase(pattern) => pattern.render(frame, first_call),
            Self::Drop(pattern) => pattern.render(frame, first_call),
            Self::DropFill(pattern) => pattern.render(frame, first_call),
            Self::Glow(pattern) => pattern.render(frame, first_call),
            Self::Gradient(pattern) => pattern.render(frame, first_call),
            Self::Outline(pattern) => pattern.render(frame, first_call),
            Self::Propeller(pattern) => pattern.render(frame, first_call),
            Self::Rainbow(pattern) => pattern.render(frame, first_call),
            Self::RainbowLoop(pattern) => pattern.render(frame, first_call),
            Self::Random(pattern) => pattern.render(frame, first_call),
            Self::RedBlueBounce(pattern) => pattern.render(frame, first_call),
            Self::RotatingRedBlue(pattern) => pattern.render(frame, first_call),
            Self::Stripes(pattern) => pattern.render(frame, first_call),
            Self::Tree(pattern) => pattern.render(frame, first_call),
            Self::TreeSteps(pattern) => pattern.render(frame, first_call),
        }
    }

    /// Get the pattern ID for external observation
    pub fn id(&self) -> PatternId {
        match self {
            Self::Blink(_) => PatternId::Blink,
            Self::Chase(_) => PatternId::Chase,
            Self::DoubleChase(_) => PatternId::DoubleChase,
            Self::Drop(_) => PatternId::Drop,
            Self::DropFill(_) => PatternId::DropFill,
            Self::Glow(_) => PatternId::Glow,
            Self::Gradient(_) => PatternId::Gradient,
            Self::Outline(_) => PatternId::Outline,
            Self::Propeller(_) => PatternId::Propeller,
            Self::Rainbow(_) => PatternId::Rainbow,
            Self::RainbowLoop(_) => PatternId::RainbowLoop,
            Self::Random(_) => PatternId::Random,
            Self::RedBlueBounce(_) => PatternId::RedBlueBounce,
            Self::RotatingRedBlue(_) => PatternId::RotatingRedBlue,
            Self::Stripes(_) => PatternId::Stripes,
            Self::Tree(_) => PatternId::Tree,
            Self::TreeSteps(_) => PatternId::TreeSteps,
        }
    }

    /// Whether the pattern drives the global brightness itself
    pub fn controls_brightness(&self) -> bool {
        matches!(self, Self::Glow(_))
    }
}
