//! Patterns mirrored around the middle of the strip

use embassy_time::Duration;

use super::Pattern;
use crate::{
    color::{BLACK, BLUE, ColorCycle, RED, Rgb},
    frame::{Frame, IndexPath, opposite_of},
};

const DROP_FRAME: Duration = Duration::from_millis(100);
const BOUNCE_FRAME: Duration = Duration::from_millis(25);
/// Pause on a completely filled strip before starting over
pub const DROP_FILL_HOLD: Duration = Duration::from_millis(1500);

/// Steps needed to walk both falling paths to their end
fn falling_len(left: IndexPath, right: IndexPath) -> usize {
    left.len().max(right.len())
}

fn paint_pair(frame: &mut Frame<'_>, left: IndexPath, right: IndexPath, step: usize, color: Rgb) {
    if let Some(index) = left.get(step) {
        frame.set(index, color);
    }
    if let Some(index) = right.get(step) {
        frame.set(index, color);
    }
}

/// A pair of pixels falling down both edges at once
#[derive(Debug, Clone)]
pub struct DropPattern {
    index: usize,
    color: Rgb,
    colors: ColorCycle,
}

impl Default for DropPattern {
    fn default() -> Self {
        Self {
            index: 0,
            color: BLACK,
            colors: ColorCycle::new(),
        }
    }
}

impl Pattern for DropPattern {
    fn render(&mut self, frame: &mut Frame<'_>, first_call: bool) -> Duration {
        let layout = frame.layout();
        let (left, right) = (layout.left_edge(), layout.right_edge());
        let len = falling_len(left, right);

        if first_call {
            frame.clear();
            self.index = 0;
            self.color = self.colors.next_color();
        } else if len > 0 {
            paint_pair(frame, left, right, self.index, BLACK);
            self.index = (self.index + 1) % len;
        }

        paint_pair(frame, left, right, self.index, self.color);

        DROP_FRAME
    }
}

/// Falling pixels that leave a trail until both edges are lit
///
/// Holds the full strip for [`DROP_FILL_HOLD`] before clearing and
/// starting over with the next color.
#[derive(Debug, Clone)]
pub struct DropFillPattern {
    index: usize,
    holding: bool,
    color: Rgb,
    colors: ColorCycle,
}

impl Default for DropFillPattern {
    fn default() -> Self {
        Self {
            index: 0,
            holding: false,
            color: BLACK,
            colors: ColorCycle::new(),
        }
    }
}

impl Pattern for DropFillPattern {
    fn render(&mut self, frame: &mut Frame<'_>, first_call: bool) -> Duration {
        let layout = frame.layout();
        let (left, right) = (layout.left_edge(), layout.right_edge());
        let len = falling_len(left, right);

        if first_call || self.holding {
            frame.clear();
            self.index = 0;
            self.holding = false;
            self.color = self.colors.next_color();
        } else {
            self.index += 1;
        }

        paint_pair(frame, left, right, self.index, self.color);

        if self.index + 1 >= len {
            self.holding = true;
            return DROP_FILL_HOLD;
        }

        DROP_FRAME
    }
}

/// Blue pixel bouncing between the ends with a red one opposite
#[derive(Debug, Clone)]
pub struct RedBlueBouncePattern {
    index: usize,
    forward: bool,
}

impl Default for RedBlueBouncePattern {
    fn default() -> Self {
        Self {
            index: 0,
            forward: true,
        }
    }
}

impl Pattern for RedBlueBouncePattern {
    fn render(&mut self, frame: &mut Frame<'_>, first_call: bool) -> Duration {
        let count = frame.len();
        frame.clear();
        if count == 0 {
            return BOUNCE_FRAME;
        }

        if first_call {
            self.index = 0;
            self.forward = true;
        } else {
            self.index = self.index.min(count - 1);
            if self.forward {
                if self.index + 1 < count {
                    self.index += 1;
                } else {
                    self.forward = false;
                    self.index = self.index.saturating_sub(1);
                }
            } else if self.index > 0 {
                self.index -= 1;
            } else {
                self.forward = true;
                self.index = usize::from(count > 1);
            }
        }

        frame.set(self.index, BLUE);
        frame.set(opposite_of(self.index, count), RED);

        BOUNCE_FRAME
    }
}
