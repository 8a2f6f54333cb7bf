#![no_std]

pub mod color;
pub mod command;
pub mod config;
pub mod console;
pub mod error;
pub mod frame;
pub mod math8;
pub mod pattern;
pub mod player;
pub mod scheduler;
pub mod settings;
pub mod sync;

pub use command::{Command, CommandQueue, CommandReceiver, CommandSender};
pub use config::PlayerConfig;
pub use error::{CommandError, PersistenceError};
pub use frame::{Frame, LayoutPreset, StripLayout};
pub use pattern::{Pattern, PatternId, PatternSlot};
pub use player::{PlaybackMode, Player};
pub use scheduler::TickScheduler;
pub use settings::{PlaybackSettings, SettingsAdapter, SettingsStore, StatusChanges};
pub use sync::MessageBus;

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The player is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);

    /// Set the global brightness applied by the driver
    fn set_brightness(&mut self, _brightness: u8) {}

    /// Limit the strip current, in milliamps
    fn set_power_limit(&mut self, _milliamps: u32) {}
}
