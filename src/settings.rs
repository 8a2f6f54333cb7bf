//! Playback settings and their mapping onto a key-value store

use core::ops::{BitOr, BitOrAssign};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::{
    DEFAULT_DURATION_SECS, DEFAULT_LED_COUNT, clamp_duration, clamp_led_count,
};
use crate::error::PersistenceError;
use crate::pattern::PatternId;

pub const KEY_POWER: &str = "led.on";
pub const KEY_LED_COUNT: &str = "led.count";
pub const KEY_PATTERN: &str = "led.pattern";
pub const KEY_PLAYLIST: &str = "led.playlist";
pub const KEY_DURATION: &str = "led.duration";

/// Persistent key-value store
///
/// Implement this trait for flash, NVS or an in-memory map. Values written
/// with `set` only become durable after `commit`.
pub trait SettingsStore {
    /// Read a stored value
    fn get(&self, key: &str) -> Option<u32>;

    /// Stage a value for the next commit
    fn set(&mut self, key: &str, value: u32);

    /// Flush staged values
    fn commit(&mut self) -> Result<(), PersistenceError>;
}

/// Persisted and observable playback settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSettings {
    pub power: bool,
    pub led_count: u8,
    pub pattern: PatternId,
    pub playlist: bool,
    pub duration_secs: u8,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            power: true,
            led_count: DEFAULT_LED_COUNT,
            pattern: PatternId::Blink,
            playlist: false,
            duration_secs: DEFAULT_DURATION_SECS,
        }
    }
}

impl PlaybackSettings {
    /// Same settings with every numeric field inside its allowed range
    pub fn clamped(self, max_leds: usize) -> Self {
        Self {
            led_count: clamp_led_count(u32::from(self.led_count), max_leds),
            duration_secs: clamp_duration(self.duration_secs),
            ..self
        }
    }

    /// Fields that differ from `previous`
    pub fn changes_from(&self, previous: &Self) -> StatusChanges {
        let mut changes = StatusChanges::NONE;
        if self.power != previous.power {
            changes |= StatusChanges::POWER;
        }
        if self.pattern != previous.pattern {
            changes |= StatusChanges::PATTERN;
        }
        if self.led_count != previous.led_count {
            changes |= StatusChanges::LED_COUNT;
        }
        if self.playlist != previous.playlist {
            changes |= StatusChanges::PLAYLIST;
        }
        if self.duration_secs != previous.duration_secs {
            changes |= StatusChanges::DURATION;
        }
        changes
    }
}

/// Set of settings fields touched by a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusChanges(u8);

impl StatusChanges {
    pub const NONE: Self = Self(0);
    pub const POWER: Self = Self(1 << 0);
    pub const PATTERN: Self = Self(1 << 1);
    pub const LED_COUNT: Self = Self(1 << 2);
    pub const PLAYLIST: Self = Self(1 << 3);
    pub const DURATION: Self = Self(1 << 4);
    pub const ALL: Self = Self(0b1_1111);

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for StatusChanges {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for StatusChanges {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Maps [`PlaybackSettings`] to store keys
///
/// Keeps a snapshot of the last persisted settings so `save` writes only
/// the fields that changed and commits once.
pub struct SettingsAdapter<S: SettingsStore> {
    store: S,
    saved: Option<PlaybackSettings>,
}

impl<S: SettingsStore> SettingsAdapter<S> {
    pub const fn new(store: S) -> Self {
        Self { store, saved: None }
    }

    /// Read settings, falling back to `defaults` for missing keys
    ///
    /// Out-of-range values are clamped. The clamped result becomes the
    /// saved snapshot, so saving it back writes nothing.
    pub fn load(&mut self, defaults: &PlaybackSettings, max_leds: usize) -> PlaybackSettings {
        let defaults = defaults.clamped(max_leds);
        let flag = |key, default| self.store.get(key).map_or(default, |value| value != 0);
        let byte = |key, default| {
            self.store
                .get(key)
                .map_or(default, |value| u8::try_from(value).unwrap_or(u8::MAX))
        };

        let settings = PlaybackSettings {
            power: flag(KEY_POWER, defaults.power),
            led_count: self
                .store
                .get(KEY_LED_COUNT)
                .map_or(defaults.led_count, |value| clamp_led_count(value, max_leds)),
            pattern: PatternId::by_index(byte(KEY_PATTERN, defaults.pattern.index())),
            playlist: flag(KEY_PLAYLIST, defaults.playlist),
            duration_secs: clamp_duration(byte(KEY_DURATION, defaults.duration_secs)),
        };

        #[cfg(feature = "esp32-log")]
        println!(
            "settings: loaded pattern={} leds={} on={} playlist={} duration={}",
            settings.pattern.as_str(),
            settings.led_count,
            settings.power,
            settings.playlist,
            settings.duration_secs
        );

        self.saved = Some(settings);
        settings
    }

    /// Write changed fields and commit once
    ///
    /// Returns `Ok(false)` when nothing differed from the saved snapshot.
    /// A failed commit drops the snapshot, so the next save rewrites every
    /// field and overwrites whatever the failed write left staged.
    pub fn save(&mut self, settings: &PlaybackSettings) -> Result<bool, PersistenceError> {
        let changes = match &self.saved {
            Some(saved) => settings.changes_from(saved),
            None => StatusChanges::ALL,
        };
        if changes.is_empty() {
            return Ok(false);
        }

        if changes.contains(StatusChanges::POWER) {
            self.store.set(KEY_POWER, u32::from(settings.power));
        }
        if changes.contains(StatusChanges::LED_COUNT) {
            self.store.set(KEY_LED_COUNT, u32::from(settings.led_count));
        }
        if changes.contains(StatusChanges::PATTERN) {
            self.store.set(KEY_PATTERN, u32::from(settings.pattern.index()));
        }
        if changes.contains(StatusChanges::PLAYLIST) {
            self.store.set(KEY_PLAYLIST, u32::from(settings.playlist));
        }
        if changes.contains(StatusChanges::DURATION) {
            self.store.set(KEY_DURATION, u32::from(settings.duration_secs));
        }

        if let Err(error) = self.store.commit() {
            #[cfg(feature = "esp32-log")]
            println!("settings: commit failed: {}", error);

            self.saved = None;
            return Err(error);
        }

        self.saved = Some(*settings);
        Ok(true)
    }

    /// Last successfully persisted settings
    pub fn saved(&self) -> Option<&PlaybackSettings> {
        self.saved.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
