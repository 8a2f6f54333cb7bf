//! Patterns drawn over layout segments: outline, tiers and stripes

use embassy_time::Duration;

use super::{Pattern, STATIC_FRAME};
use crate::{
    color::{BLACK, BLUE, ColorCycle, GRAY, GREEN, RED, Rgb},
    frame::{Frame, TIER_COUNT},
};

const TREE_STEP_PERIOD: Duration = Duration::from_millis(1000);
const STRIPES_FRAME: Duration = Duration::from_millis(100);

/// Colors of the rolling stripes, in strip order
const STRIPE_COLORS: [Rgb; 3] = [RED, GREEN, BLUE];

/// Static outline of the strip in a cycled color
#[derive(Debug, Clone)]
pub struct OutlinePattern {
    color: Rgb,
    colors: ColorCycle,
}

impl Default for OutlinePattern {
    fn default() -> Self {
        Self {
            color: BLACK,
            colors: ColorCycle::new(),
        }
    }
}

impl Pattern for OutlinePattern {
    fn render(&mut self, frame: &mut Frame<'_>, first_call: bool) -> Duration {
        if first_call {
            self.color = self.colors.next_color();
        }
        let edge = frame.layout().edge();
        frame.clear();
        frame.fill_path(edge, self.color);

        STATIC_FRAME
    }
}

/// Lights the tiers one per second from the top, then starts over
#[derive(Debug, Clone)]
pub struct TreeStepsPattern {
    step: usize,
    color: Rgb,
    colors: ColorCycle,
}

impl Default for TreeStepsPattern {
    fn default() -> Self {
        Self {
            step: 0,
            color: BLACK,
            colors: ColorCycle::new(),
        }
    }
}

impl Pattern for TreeStepsPattern {
    fn render(&mut self, frame: &mut Frame<'_>, first_call: bool) -> Duration {
        if first_call {
            self.step = 0;
        }

        let layout = frame.layout();
        if self.step == 0 {
            frame.clear();
            self.color = self.colors.next_color();
        }
        frame.fill_path(layout.tier(self.step), self.color);
        if self.step == TIER_COUNT - 1 {
            frame.fill_path(layout.accent(), GRAY);
        }
        self.step = (self.step + 1) % TIER_COUNT;

        TREE_STEP_PERIOD
    }
}

/// Red, green and blue stripes rolling along the strip
#[derive(Debug, Clone, Default)]
pub struct StripesPattern {
    offset: usize,
}

impl Pattern for StripesPattern {
    fn render(&mut self, frame: &mut Frame<'_>, first_call: bool) -> Duration {
        if first_call {
            self.offset = 0;
        } else {
            self.offset = (self.offset + 1) % STRIPE_COLORS.len();
        }

        let offset = self.offset;
        for (i, led) in frame.leds_mut().iter_mut().enumerate() {
            *led = STRIPE_COLORS[(i + offset) % STRIPE_COLORS.len()];
        }

        STRIPES_FRAME
    }
}
