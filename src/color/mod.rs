mod gradient;
mod utils;

use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub use gradient::{GradientDirection, fill_gradient_fp};
pub use utils::{ColorCycle, hsv2rgb, hue, is_black, rgb_from_u32};

pub type Rgb = RGB8;
pub type Hsv = HSV;

pub const BLACK: Rgb = rgb_from_u32(0x00_0000);
pub const WHITE: Rgb = rgb_from_u32(0xFF_FFFF);
pub const RED: Rgb = rgb_from_u32(0xFF_0000);
pub const DARK_RED: Rgb = rgb_from_u32(0x8B_0000);
pub const GREEN: Rgb = rgb_from_u32(0x00_8000);
pub const BLUE: Rgb = rgb_from_u32(0x00_00FF);
pub const GRAY: Rgb = rgb_from_u32(0x80_8080);
pub const ORANGE: Rgb = rgb_from_u32(0xFF_A500);

/// Hue positions on the 0-255 wheel
pub const HUE_RED: u8 = 0;
pub const HUE_GREEN: u8 = 96;
pub const HUE_BLUE: u8 = 160;
