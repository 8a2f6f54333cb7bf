use smart_leds::hsv::hsv2rgb;

use crate::color::{Hsv, Rgb};

/// Way around the hue circle a gradient takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientDirection {
    Forward,
    Backward,
    Shortest,
}

impl GradientDirection {
    /// Signed hue distance in 8.7 fixed point
    fn hue_distance87(self, from: u8, to: u8) -> i32 {
        let forward = to.wrapping_sub(from);
        let go_forward = match self {
            Self::Forward => true,
            Self::Backward => false,
            Self::Shortest => forward <= 127,
        };
        if go_forward {
            i32::from(forward) << 7
        } else {
            -(i32::from(0u8.wrapping_sub(forward)) << 7)
        }
    }
}

/// Fill the whole slice with an HSV gradient from `start` to `end`
///
/// Uses 8.24 fixed-point accumulators so long strips step smoothly.
/// Black or grey endpoints borrow the hue of the other endpoint.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn fill_gradient_fp(leds: &mut [Rgb], mut start: Hsv, mut end: Hsv, direction: GradientDirection) {
    if leds.is_empty() {
        return;
    }

    if end.val == 0 || end.sat == 0 {
        end.hue = start.hue;
    }
    if start.val == 0 || start.sat == 0 {
        start.hue = end.hue;
    }

    let steps = i64::try_from(leds.len() - 1).unwrap_or(i64::MAX).max(1);
    let delta824 = |distance87: i32| (((i64::from(distance87) * 65536) / steps) * 2) as u32;

    let hue_delta = delta824(direction.hue_distance87(start.hue, end.hue));
    let sat_delta = delta824((i32::from(end.sat) - i32::from(start.sat)) << 7);
    let val_delta = delta824((i32::from(end.val) - i32::from(start.val)) << 7);

    let mut hue824 = u32::from(start.hue) << 24;
    let mut sat824 = u32::from(start.sat) << 24;
    let mut val824 = u32::from(start.val) << 24;

    for led in leds.iter_mut() {
        *led = hsv2rgb(Hsv {
            hue: (hue824 >> 24) as u8,
            sat: (sat824 >> 24) as u8,
            val: (val824 >> 24) as u8,
        });
        hue824 = hue824.wrapping_add(hue_delta);
        sat824 = sat824.wrapping_add(sat_delta);
        val824 = val824.wrapping_add(val_delta);
    }
}
