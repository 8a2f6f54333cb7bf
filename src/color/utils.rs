pub use smart_leds::hsv::hsv2rgb;

use crate::color::{BLUE, DARK_RED, GREEN, Hsv, Rgb, WHITE};

/// Palette walked by [`ColorCycle`]
const CYCLE_PALETTE: [Rgb; 4] = [DARK_RED, GREEN, BLUE, WHITE];

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Fully saturated, full value color at `hue`
#[inline]
pub fn hue(hue: u8) -> Rgb {
    hsv2rgb(Hsv {
        hue,
        sat: 255,
        val: 255,
    })
}

/// Whether every channel is off
#[inline]
pub const fn is_black(color: Rgb) -> bool {
    color.r == 0 && color.g == 0 && color.b == 0
}

/// Steps through a fixed palette, one color per call
///
/// Each pattern owns its own cycle, so switching patterns never skips or
/// repeats colors of another pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorCycle {
    index: u8,
}

impl ColorCycle {
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Return the next palette color
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_color(&mut self) -> Rgb {
        self.index = (self.index + 1) % CYCLE_PALETTE.len() as u8;
        CYCLE_PALETTE[self.index as usize]
    }
}
