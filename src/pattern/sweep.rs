//! Full-strip color sweeps and random sparkles

use embassy_time::Duration;

use super::Pattern;
use crate::{
    color::{GradientDirection, Hsv, fill_gradient_fp, hue},
    frame::Frame,
    math8::position8,
};

const RAINBOW_FRAME: Duration = Duration::from_millis(20);
const GRADIENT_FRAME: Duration = Duration::from_millis(30);
const SPARKLE_FRAME: Duration = Duration::from_millis(25);

/// Hue shift per gradient frame
const GRADIENT_STEP: u8 = 2;
/// Hue span between both ends of the gradient
const GRADIENT_SPAN: u8 = 128;

/// Full color wheel spread over the strip, rotating one hue per frame
#[derive(Debug, Clone, Default)]
pub struct RainbowPattern {
    phase: u8,
}

impl Pattern for RainbowPattern {
    fn render(&mut self, frame: &mut Frame<'_>, first_call: bool) -> Duration {
        if first_call {
            self.phase = 0;
        }

        let count = frame.len();
        for (i, led) in frame.leds_mut().iter_mut().enumerate() {
            *led = hue(position8(i, count).wrapping_add(self.phase));
        }
        self.phase = self.phase.wrapping_add(1);

        RAINBOW_FRAME
    }
}

/// Half-wheel gradient drifting along the strip
#[derive(Debug, Clone, Default)]
pub struct GradientPattern {
    phase: u8,
}

impl Pattern for GradientPattern {
    fn render(&mut self, frame: &mut Frame<'_>, first_call: bool) -> Duration {
        if first_call {
            self.phase = 0;
        }

        let start = Hsv {
            hue: self.phase,
            sat: 255,
            val: 255,
        };
        let end = Hsv {
            hue: self.phase.wrapping_add(GRADIENT_SPAN),
            ..start
        };
        fill_gradient_fp(frame.leds_mut(), start, end, GradientDirection::Forward);
        self.phase = self.phase.wrapping_add(GRADIENT_STEP);

        GRADIENT_FRAME
    }
}

/// Lights one random pixel in a random hue every frame
#[derive(Debug, Clone, Default)]
pub struct RandomPattern {
    state: u64,
}

impl RandomPattern {
    /// SplitMix64-style mixing folded down to u32
    #[inline]
    const fn hash(x: u64) -> u32 {
        let mut z = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        #[allow(clippy::cast_possible_truncation)]
        {
            (z ^ (z >> 31)) as u32
        }
    }
}

impl Pattern for RandomPattern {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, frame: &mut Frame<'_>, first_call: bool) -> Duration {
        if first_call {
            frame.clear();
            self.state = u64::from(frame.seed()) << 32;
        }

        let count = frame.len();
        if count == 0 {
            return SPARKLE_FRAME;
        }

        self.state = self.state.wrapping_add(1);
        let roll = Self::hash(self.state);
        let index = roll as usize % count;
        frame.set(index, hue((roll >> 16) as u8));

        SPARKLE_FRAME
    }
}
