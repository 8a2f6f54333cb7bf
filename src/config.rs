//! Compile-time defaults and the player configuration

use crate::frame::LayoutPreset;
use crate::pattern::PatternId;
use crate::settings::PlaybackSettings;

/// Frame buffer capacity used by the default configuration
pub const MAX_LEDS: usize = 100;
/// LED count used when the store has no value
pub const DEFAULT_LED_COUNT: u8 = 50;
/// Playlist step duration used when the store has no value
pub const DEFAULT_DURATION_SECS: u8 = 30;
/// Global brightness ceiling
pub const DEFAULT_BRIGHTNESS: u8 = 200;

/// Shortest allowed playlist step, in seconds
pub const MIN_DURATION_SECS: u8 = 5;
/// Longest allowed playlist step, in seconds
pub const MAX_DURATION_SECS: u8 = 60;

/// Configuration for the player
#[derive(Debug, Clone, Copy)]
pub struct PlayerConfig {
    /// Settings used for keys missing from the store
    pub defaults: PlaybackSettings,
    /// Global brightness ceiling handed to the driver
    pub max_brightness: u8,
    /// Optional current limit for the driver, in milliamps
    pub power_limit_milliamps: Option<u32>,
    /// Physical arrangement of the strip
    pub layout: LayoutPreset,
    /// Patterns visited by the playlist, in order
    pub playlist: &'static [PatternId],
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            defaults: PlaybackSettings::default(),
            max_brightness: DEFAULT_BRIGHTNESS,
            power_limit_milliamps: None,
            layout: LayoutPreset::Linear,
            playlist: &PatternId::ALL,
        }
    }
}

/// Clamp a playlist duration into the allowed range
pub const fn clamp_duration(secs: u8) -> u8 {
    if secs < MIN_DURATION_SECS {
        MIN_DURATION_SECS
    } else if secs > MAX_DURATION_SECS {
        MAX_DURATION_SECS
    } else {
        secs
    }
}

/// Clamp an LED count to the buffer capacity
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn clamp_led_count(count: u32, max_leds: usize) -> u8 {
    let max = if max_leds > u8::MAX as usize {
        u8::MAX
    } else {
        max_leds as u8
    };
    if count > max as u32 { max } else { count as u8 }
}
