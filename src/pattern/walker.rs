//! Patterns that move a few lit pixels along the strip

use embassy_time::Duration;

use super::Pattern;
use crate::{
    color::{BLACK, BLUE, ColorCycle, HUE_BLUE, HUE_GREEN, HUE_RED, RED, Rgb, hue},
    frame::{Frame, opposite_of},
};

const CHASE_FRAME: Duration = Duration::from_millis(100);
const SPIN_FRAME: Duration = Duration::from_millis(25);
/// Hue advance per painted pixel of the rainbow loop
const RAINBOW_LOOP_HUE_STEP: u8 = 10;

/// Single pixel walking the strip outline
#[derive(Debug, Clone)]
pub struct ChasePattern {
    index: usize,
    color: Rgb,
    colors: ColorCycle,
}

impl Default for ChasePattern {
    fn default() -> Self {
        Self {
            index: 0,
            color: BLACK,
            colors: ColorCycle::new(),
        }
    }
}

impl Pattern for ChasePattern {
    fn render(&mut self, frame: &mut Frame<'_>, first_call: bool) -> Duration {
        let path = frame.layout().edge();
        let len = path.len();

        if first_call {
            frame.clear();
            self.index = 0;
            self.color = self.colors.next_color();
        } else if len > 0 {
            if let Some(previous) = path.get(self.index) {
                frame.set(previous, BLACK);
            }
            self.index = (self.index + 1) % len;
        }

        if let Some(index) = path.get(self.index) {
            frame.set(index, self.color);
        }

        CHASE_FRAME
    }
}

/// Two pixels entering the outline from both ends, recolored every step
#[derive(Debug, Clone, Default)]
pub struct DoubleChasePattern {
    index: usize,
    colors: ColorCycle,
}

impl DoubleChasePattern {
    /// Path positions of the forward and the mirrored pixel
    fn positions(&self, len: usize) -> [usize; 2] {
        let index = self.index.min(len - 1);
        [index, len - 1 - index]
    }
}

impl Pattern for DoubleChasePattern {
    fn render(&mut self, frame: &mut Frame<'_>, first_call: bool) -> Duration {
        let path = frame.layout().edge();
        let len = path.len();

        if first_call {
            frame.clear();
            self.index = 0;
        } else if len > 0 {
            for position in self.positions(len) {
                if let Some(index) = path.get(position) {
                    frame.set(index, BLACK);
                }
            }
            self.index = (self.index + 1) % len;
        }

        if len > 0 {
            let color = self.colors.next_color();
            for position in self.positions(len) {
                if let Some(index) = path.get(position) {
                    frame.set(index, color);
                }
            }
        }

        CHASE_FRAME
    }
}

/// Red and blue pixels on opposite sides of a closed loop
#[derive(Debug, Clone, Default)]
pub struct RotatingRedBluePattern {
    index: usize,
}

impl Pattern for RotatingRedBluePattern {
    fn render(&mut self, frame: &mut Frame<'_>, first_call: bool) -> Duration {
        let count = frame.len();

        if first_call {
            frame.clear();
            self.index = 0;
        } else if count > 0 {
            frame.set(self.index, BLACK);
            frame.set(opposite_of(self.index, count), BLACK);
            self.index = (self.index + 1) % count;
        }

        if count > 0 {
            frame.set(self.index, RED);
            frame.set(opposite_of(self.index, count), BLUE);
        }

        SPIN_FRAME
    }
}

/// Three colored blades spaced a third of the strip apart
#[derive(Debug, Clone, Default)]
pub struct PropellerPattern {
    index: usize,
}

impl Pattern for PropellerPattern {
    fn render(&mut self, frame: &mut Frame<'_>, first_call: bool) -> Duration {
        let count = frame.len();
        let blade = count / 3;

        if first_call {
            self.index = 0;
        } else if count > 0 {
            self.index = (self.index + 1) % count;
        }

        frame.clear();
        if blade == 0 {
            return SPIN_FRAME;
        }

        // Blades lead the rotation by a twelfth of the strip
        let lead = count / 12;
        let colors = [hue(HUE_RED), hue(HUE_GREEN), hue(HUE_BLUE)];
        for i in 0..blade {
            let first = (self.index + i + count - lead) % count;
            for (n, color) in colors.iter().enumerate() {
                frame.set((first + blade * n) % count, *color);
            }
        }

        SPIN_FRAME
    }
}

/// Paints the strip pixel by pixel while the hue advances
#[derive(Debug, Clone, Default)]
pub struct RainbowLoopPattern {
    index: usize,
    hue: u8,
}

impl Pattern for RainbowLoopPattern {
    fn render(&mut self, frame: &mut Frame<'_>, first_call: bool) -> Duration {
        let count = frame.len();

        if first_call {
            frame.clear();
            self.index = 0;
            self.hue = 0;
        } else if count > 0 {
            self.index = (self.index + 1) % count;
            self.hue = self.hue.wrapping_add(RAINBOW_LOOP_HUE_STEP);
        }

        frame.set(self.index, hue(self.hue));

        SPIN_FRAME
    }
}
