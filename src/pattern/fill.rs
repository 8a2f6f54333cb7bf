//! Whole-strip fills: blink, solid and glow

use embassy_time::Duration;

use super::{Pattern, STATIC_FRAME};
use crate::{
    color::{BLACK, ColorCycle, Rgb},
    frame::Frame,
    math8::Triangle8,
};

const BLINK_PERIOD: Duration = Duration::from_millis(1000);
const GLOW_FRAME: Duration = Duration::from_millis(20);
/// Brightness change per glow frame
const GLOW_STEP: u8 = 5;

/// Alternates the whole strip between a cycled color and black
#[derive(Debug, Clone, Default)]
pub struct BlinkPattern {
    lit: bool,
    colors: ColorCycle,
}

impl Pattern for BlinkPattern {
    fn render(&mut self, frame: &mut Frame<'_>, first_call: bool) -> Duration {
        if first_call {
            self.lit = false;
        }

        self.lit = !self.lit;
        if self.lit {
            frame.fill(self.colors.next_color());
        } else {
            frame.clear();
        }

        BLINK_PERIOD
    }
}

/// Single static frame of one color
#[derive(Debug, Clone)]
pub struct SolidPattern {
    color: Rgb,
    colors: ColorCycle,
}

impl Default for SolidPattern {
    fn default() -> Self {
        Self {
            color: BLACK,
            colors: ColorCycle::new(),
        }
    }
}

impl Pattern for SolidPattern {
    fn render(&mut self, frame: &mut Frame<'_>, first_call: bool) -> Duration {
        if first_call {
            self.color = self.colors.next_color();
        }
        frame.fill(self.color);

        STATIC_FRAME
    }
}

/// Solid color whose global brightness ramps up and down
///
/// Owns the global brightness while active; the player restores the
/// ceiling when switching away.
#[derive(Debug, Clone)]
pub struct GlowPattern {
    color: Rgb,
    wave: Triangle8,
    colors: ColorCycle,
}

impl Default for GlowPattern {
    fn default() -> Self {
        Self {
            color: BLACK,
            wave: Triangle8::new(0),
            colors: ColorCycle::new(),
        }
    }
}

impl Pattern for GlowPattern {
    fn render(&mut self, frame: &mut Frame<'_>, first_call: bool) -> Duration {
        if first_call {
            self.color = self.colors.next_color();
            self.wave = Triangle8::new(0);
        }

        frame.fill(self.color);
        let level = self.wave.step(GLOW_STEP, frame.max_brightness());
        frame.set_brightness(level);

        GLOW_FRAME
    }
}
