//! 8-bit fixed-point helpers shared by the patterns

/// Map `index` of `count` onto the 0-255 circle
///
/// Returns 0 for an empty range.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn position8(index: usize, count: usize) -> u8 {
    if count == 0 {
        return 0;
    }
    ((index * 256 / count) & 0xFF) as u8
}

/// Triangle-wave stepper between `0` and an upper bound
///
/// Climbs by `step` until it reaches the bound, then descends to zero and
/// flips again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle8 {
    value: u8,
    rising: bool,
}

impl Triangle8 {
    /// Start at `value`, moving up
    pub const fn new(value: u8) -> Self {
        Self {
            value,
            rising: true,
        }
    }

    /// Current value
    pub const fn value(self) -> u8 {
        self.value
    }

    /// Whether the next step increases the value
    pub const fn is_rising(self) -> bool {
        self.rising
    }

    /// Advance one step, clamping to `[0, max]`
    pub fn step(&mut self, step: u8, max: u8) -> u8 {
        if self.value > max {
            self.value = max;
        }
        if self.rising {
            self.value = self.value.saturating_add(step).min(max);
            if self.value == max {
                self.rising = false;
            }
        } else {
            self.value = self.value.saturating_sub(step);
            if self.value == 0 {
                self.rising = true;
            }
        }
        self.value
    }
}
