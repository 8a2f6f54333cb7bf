//! Frame buffer, strip layouts and the per-render view handed to patterns

use crate::color::{BLACK, Rgb};

/// Fixed-capacity pixel buffer with a runtime active length
#[derive(Debug, Clone)]
pub struct FrameBuffer<const MAX_LEDS: usize> {
    pixels: [Rgb; MAX_LEDS],
    len: usize,
}

impl<const MAX_LEDS: usize> FrameBuffer<MAX_LEDS> {
    /// Create a blank buffer with `len` active pixels (clamped to capacity)
    pub const fn new(len: usize) -> Self {
        let len = if len > MAX_LEDS { MAX_LEDS } else { len };
        Self {
            pixels: [BLACK; MAX_LEDS],
            len,
        }
    }

    /// Number of active pixels
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Change the active length
    ///
    /// Pixels that drop out of the active range are blanked so a later grow
    /// never resurrects stale colors.
    pub fn resize(&mut self, len: usize) {
        let len = len.min(MAX_LEDS);
        if len < self.len {
            self.pixels[len..self.len].fill(BLACK);
        }
        self.len = len;
    }

    /// Blank the active pixels
    pub fn clear(&mut self) {
        self.pixels[..self.len].fill(BLACK);
    }

    /// Active pixels
    pub fn as_slice(&self) -> &[Rgb] {
        &self.pixels[..self.len]
    }

    /// Active pixels, mutable
    pub fn as_mut_slice(&mut self) -> &mut [Rgb] {
        &mut self.pixels[..self.len]
    }
}

/// Index diametrically opposite to `index` on a closed loop of `count`
pub const fn opposite_of(index: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (index + count / 2) % count
}

// Tree wiring: left edge top to bottom
const TREE_LEFT_EDGE: [u8; 15] = [24, 23, 22, 17, 16, 15, 14, 13, 6, 5, 4, 3, 2, 1, 0];
// Tree wiring: right edge top to bottom
const TREE_RIGHT_EDGE: [u8; 15] = [
    25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39,
];
// Tree wiring: outline, clockwise
const TREE_EDGE: [u8; 45] = [
    0, 1, 2, 3, 4, 5, 6, 12, 13, 14, 15, 16, 17, 21, 22, 23, 24, 25, 26, 27, 18, 28, 29, 30, 31,
    32, 7, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 44, 45, 46, 47, 48, 50, 51, 52,
];
const TREE_TIER_TOP: [u8; 10] = [18, 19, 20, 21, 22, 23, 24, 25, 26, 27];
const TREE_TIER_MIDDLE: [u8; 16] = [
    7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 28, 29, 30, 31, 32,
];
const TREE_TIER_BOTTOM: [u8; 27] = [
    0, 1, 2, 3, 4, 5, 6, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50,
    51, 52,
];
// Trunk pixels inside the bottom tier
const TREE_ACCENT: [u8; 5] = [44, 45, 46, 47, 48];

/// Number of tiers every layout provides
pub const TIER_COUNT: usize = 3;

/// Physical arrangement of the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutPreset {
    /// Plain strip: paths are derived from the LED count
    #[default]
    Linear,
    /// 53-pixel tree wiring with explicit edge and tier tables
    Tree,
}

/// Ordered walk over pixel indices
///
/// Table entries at or beyond the active LED count are skipped, so a path
/// never yields an index outside the frame.
#[derive(Debug, Clone, Copy)]
pub enum IndexPath {
    /// `start..end`
    Forward { start: usize, end: usize },
    /// `end..start`, walked from `start - 1` down to `end`
    Backward { start: usize, end: usize },
    /// Explicit index table
    Table {
        indices: &'static [u8],
        limit: usize,
    },
}

impl IndexPath {
    const EMPTY: Self = Self::Table {
        indices: &[],
        limit: 0,
    };

    /// Number of reachable indices
    pub fn len(&self) -> usize {
        match *self {
            Self::Forward { start, end } => end.saturating_sub(start),
            Self::Backward { start, end } => start.saturating_sub(end),
            Self::Table { .. } => self.iter().count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pixel index of the `n`-th step
    pub fn get(&self, n: usize) -> Option<usize> {
        match *self {
            Self::Forward { start, end } => {
                let i = start + n;
                (i < end).then_some(i)
            }
            Self::Backward { start, end } => {
                (n < start.saturating_sub(end)).then(|| start - 1 - n)
            }
            Self::Table { .. } => self.iter().nth(n),
        }
    }

    /// Iterate pixel indices in path order
    pub fn iter(&self) -> PathIter {
        PathIter {
            path: *self,
            cursor: 0,
        }
    }
}

/// Iterator over an [`IndexPath`]
#[derive(Debug, Clone)]
pub struct PathIter {
    path: IndexPath,
    cursor: usize,
}

impl Iterator for PathIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self.path {
            IndexPath::Table { indices, limit } => {
                while let Some(&index) = indices.get(self.cursor) {
                    self.cursor += 1;
                    if usize::from(index) < limit {
                        return Some(usize::from(index));
                    }
                }
                None
            }
            path => {
                let index = path.get(self.cursor)?;
                self.cursor += 1;
                Some(index)
            }
        }
    }
}

/// Index paths for the active strip
#[derive(Debug, Clone, Copy)]
pub struct StripLayout {
    preset: LayoutPreset,
    led_count: usize,
}

impl StripLayout {
    pub const fn new(preset: LayoutPreset, led_count: usize) -> Self {
        Self { preset, led_count }
    }

    pub const fn led_count(&self) -> usize {
        self.led_count
    }

    pub const fn preset(&self) -> LayoutPreset {
        self.preset
    }

    const fn table(&self, indices: &'static [u8]) -> IndexPath {
        IndexPath::Table {
            indices,
            limit: self.led_count,
        }
    }

    /// Outline of the strip, walked clockwise
    pub const fn edge(&self) -> IndexPath {
        match self.preset {
            LayoutPreset::Linear => IndexPath::Forward {
                start: 0,
                end: self.led_count,
            },
            LayoutPreset::Tree => self.table(&TREE_EDGE),
        }
    }

    /// Left falling path (center towards the first pixel on a plain strip)
    pub const fn left_edge(&self) -> IndexPath {
        match self.preset {
            LayoutPreset::Linear => IndexPath::Backward {
                start: self.led_count / 2,
                end: 0,
            },
            LayoutPreset::Tree => self.table(&TREE_LEFT_EDGE),
        }
    }

    /// Right falling path (center towards the last pixel on a plain strip)
    pub const fn right_edge(&self) -> IndexPath {
        match self.preset {
            LayoutPreset::Linear => IndexPath::Forward {
                start: self.led_count / 2,
                end: self.led_count,
            },
            LayoutPreset::Tree => self.table(&TREE_RIGHT_EDGE),
        }
    }

    /// One of [`TIER_COUNT`] disjoint groups, top tier first
    pub const fn tier(&self, tier: usize) -> IndexPath {
        match self.preset {
            LayoutPreset::Linear => {
                let third = self.led_count / TIER_COUNT;
                let tier = tier % TIER_COUNT;
                // Top tier is the far end of the strip
                let end = if tier == 0 {
                    self.led_count
                } else {
                    self.led_count - third * tier
                };
                let start = if tier == TIER_COUNT - 1 {
                    0
                } else {
                    end - third
                };
                IndexPath::Forward { start, end }
            }
            LayoutPreset::Tree => match tier % TIER_COUNT {
                0 => self.table(&TREE_TIER_TOP),
                1 => self.table(&TREE_TIER_MIDDLE),
                _ => self.table(&TREE_TIER_BOTTOM),
            },
        }
    }

    /// Pixels drawn in a contrasting color on top of the last tier
    pub const fn accent(&self) -> IndexPath {
        match self.preset {
            LayoutPreset::Linear => IndexPath::EMPTY,
            LayoutPreset::Tree => self.table(&TREE_ACCENT),
        }
    }
}

/// View over the active frame handed to a pattern's render call
pub struct Frame<'a> {
    leds: &'a mut [Rgb],
    layout: StripLayout,
    brightness: &'a mut u8,
    max_brightness: u8,
    seed: u32,
}

impl<'a> Frame<'a> {
    pub fn new(
        leds: &'a mut [Rgb],
        layout: StripLayout,
        brightness: &'a mut u8,
        max_brightness: u8,
        seed: u32,
    ) -> Self {
        Self {
            leds,
            layout,
            brightness,
            max_brightness,
            seed,
        }
    }

    pub fn len(&self) -> usize {
        self.leds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leds.is_empty()
    }

    pub fn layout(&self) -> StripLayout {
        self.layout
    }

    /// Entropy for patterns that draw random pixels
    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn leds(&self) -> &[Rgb] {
        &*self.leds
    }

    pub fn leds_mut(&mut self) -> &mut [Rgb] {
        &mut *self.leds
    }

    pub fn clear(&mut self) {
        self.leds.fill(BLACK);
    }

    pub fn fill(&mut self, color: Rgb) {
        self.leds.fill(color);
    }

    /// Set one pixel; out-of-range indices are ignored
    pub fn set(&mut self, index: usize, color: Rgb) {
        if let Some(led) = self.leds.get_mut(index) {
            *led = color;
        }
    }

    pub fn get(&self, index: usize) -> Rgb {
        self.leds.get(index).copied().unwrap_or(BLACK)
    }

    /// Paint every index of `path`
    pub fn fill_path(&mut self, path: IndexPath, color: Rgb) {
        for index in path.iter() {
            self.set(index, color);
        }
    }

    /// Current global brightness
    pub fn brightness(&self) -> u8 {
        *self.brightness
    }

    /// Configured brightness ceiling
    pub fn max_brightness(&self) -> u8 {
        self.max_brightness
    }

    /// Change the global brightness, clamped to `[0, max_brightness]`
    pub fn set_brightness(&mut self, brightness: u8) {
        *self.brightness = brightness.min(self.max_brightness);
    }
}
