use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::{ORANGE, Rgb};
use crate::command::{Command, CommandReceiver};
use crate::config::{PlayerConfig, clamp_duration, clamp_led_count};
use crate::error::CommandError;
use crate::frame::{Frame, FrameBuffer, StripLayout};
use crate::pattern::{PatternId, PatternSlot};
use crate::settings::{PlaybackSettings, SettingsAdapter, SettingsStore, StatusChanges};
use crate::sync::{self, MessageBus};

/// Externally visible playback mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    /// Strip powered off or without LEDs; nothing renders
    Off,
    /// A pattern chosen by hand
    Manual(PatternId),
    /// Patterns rotate on a timer
    Playlist(PatternId),
}

/// Pattern playback engine - the main orchestrator
///
/// Owns the frame buffer, the active pattern and the playback settings.
/// State-changing commands persist through the settings adapter first,
/// then update memory and the strip, then publish the changed fields to
/// the bus. A failed save leaves everything as it was.
pub struct Player<
    'a,
    D: OutputDriver,
    S: SettingsStore,
    B: MessageBus,
    const MAX_LEDS: usize,
    const QUEUE_SIZE: usize,
> {
    // External dependencies and configuration
    driver: D,
    store: SettingsAdapter<S>,
    bus: B,
    commands: CommandReceiver<'a, QUEUE_SIZE>,
    config: PlayerConfig,

    // Playback state
    settings: PlaybackSettings,
    pattern: PatternSlot,
    frame: FrameBuffer<MAX_LEDS>,
    brightness: u8,
    first_call_pending: bool,
    frame_delay: Duration,
    last_frame: Instant,
    last_advance: Option<Instant>,
}

impl<'a, D, S, B, const MAX_LEDS: usize, const QUEUE_SIZE: usize>
    Player<'a, D, S, B, MAX_LEDS, QUEUE_SIZE>
where
    D: OutputDriver,
    S: SettingsStore,
    B: MessageBus,
{
    /// Create a player from persisted settings
    ///
    /// Missing keys fall back to `config.defaults`. The strip shows a boot
    /// color until the first tick renders the active pattern.
    pub fn new(
        mut driver: D,
        store: S,
        bus: B,
        commands: CommandReceiver<'a, QUEUE_SIZE>,
        config: &PlayerConfig,
    ) -> Self {
        let mut store = SettingsAdapter::new(store);
        let settings = store.load(&config.defaults, MAX_LEDS);

        driver.set_brightness(config.max_brightness);
        if let Some(limit) = config.power_limit_milliamps {
            driver.set_power_limit(limit);
        }

        let mut frame = FrameBuffer::new(usize::from(settings.led_count));
        if settings.power {
            frame.as_mut_slice().fill(ORANGE);
        }
        driver.write(frame.as_slice());

        #[cfg(feature = "esp32-log")]
        println!(
            "player: initialized leds={} patterns={} on={} pattern={}",
            settings.led_count,
            PatternId::ALL.len(),
            settings.power,
            settings.pattern.as_str()
        );

        Self {
            driver,
            store,
            bus,
            commands,
            config: *config,
            pattern: settings.pattern.to_slot(),
            settings,
            frame,
            brightness: config.max_brightness,
            first_call_pending: true,
            frame_delay: Duration::from_ticks(0),
            last_frame: Instant::from_ticks(0),
            last_advance: None,
        }
    }

    /// Run one step of the playback loop
    ///
    /// Drains queued commands, advances the playlist when its step elapsed
    /// and renders the active pattern when a frame is due. Returns whether
    /// a frame was transmitted.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.process_commands();

        if !self.settings.power || self.settings.led_count == 0 {
            return false;
        }

        if self.settings.playlist {
            self.process_playlist(now);
        } else {
            self.last_advance = None;
        }

        let due = self.first_call_pending
            || (self.frame_delay.as_ticks() > 0
                && now.saturating_duration_since(self.last_frame) >= self.frame_delay);
        if !due {
            return false;
        }

        self.render(now);
        true
    }

    /// Apply one command
    ///
    /// Returns the settings fields that changed. On a persistence failure the
    /// player keeps its previous state and nothing is published.
    pub fn apply(&mut self, command: Command) -> Result<StatusChanges, CommandError> {
        match command {
            Command::SetPower(on) => self.set_power(on),
            Command::SelectPattern(id) => self.select_pattern(id),
            Command::EnablePlaylist(enabled) => self.enable_playlist(enabled),
            Command::SetPlaylistDuration(secs) => self.set_playlist_duration(secs),
            Command::SetLedCount(count) => self.set_led_count(count),
            Command::NextPattern => self.next_pattern(),
        }
    }

    /// Turn the strip on or off
    ///
    /// Turning off transmits a blank frame right away.
    pub fn set_power(&mut self, on: bool) -> Result<StatusChanges, CommandError> {
        if self.settings.power == on {
            return Ok(StatusChanges::NONE);
        }

        #[cfg(feature = "esp32-log")]
        println!("player: power {}", if on { "on" } else { "off" });

        let changes = self.persist(PlaybackSettings {
            power: on,
            ..self.settings
        })?;

        self.settings.power = on;
        if on {
            self.first_call_pending = true;
            self.last_advance = None;
        } else {
            self.blank();
        }

        Ok(self.publish(changes))
    }

    /// Show a pattern manually
    ///
    /// Selecting a different pattern leaves the playlist. Selecting the
    /// current one changes nothing.
    pub fn select_pattern(&mut self, id: PatternId) -> Result<StatusChanges, CommandError> {
        if self.settings.pattern == id {
            return Ok(StatusChanges::NONE);
        }

        let changes = self.persist(PlaybackSettings {
            pattern: id,
            playlist: false,
            ..self.settings
        })?;

        self.settings.playlist = false;
        self.last_advance = None;
        self.switch_pattern(id);

        Ok(self.publish(changes))
    }

    /// Start or stop automatic rotation
    ///
    /// The step timer is armed on the first tick after enabling; the
    /// current pattern keeps playing.
    pub fn enable_playlist(&mut self, enabled: bool) -> Result<StatusChanges, CommandError> {
        if self.settings.playlist == enabled {
            return Ok(StatusChanges::NONE);
        }

        let changes = self.persist(PlaybackSettings {
            playlist: enabled,
            ..self.settings
        })?;

        self.settings.playlist = enabled;
        self.last_advance = None;

        Ok(self.publish(changes))
    }

    /// Change the playlist step duration, clamped to the allowed range
    pub fn set_playlist_duration(&mut self, secs: u8) -> Result<StatusChanges, CommandError> {
        let secs = clamp_duration(secs);
        if self.settings.duration_secs == secs {
            return Ok(StatusChanges::NONE);
        }

        let changes = self.persist(PlaybackSettings {
            duration_secs: secs,
            ..self.settings
        })?;

        self.settings.duration_secs = secs;

        Ok(self.publish(changes))
    }

    /// Change the active strip length, clamped to the buffer capacity
    ///
    /// While powered, the old strip length is blanked before resizing. The
    /// active pattern restarts either way.
    pub fn set_led_count(&mut self, count: u8) -> Result<StatusChanges, CommandError> {
        let count = clamp_led_count(u32::from(count), MAX_LEDS);
        if self.settings.led_count == count {
            return Ok(StatusChanges::NONE);
        }

        #[cfg(feature = "esp32-log")]
        println!("player: led count {} -> {}", self.settings.led_count, count);

        let changes = self.persist(PlaybackSettings {
            led_count: count,
            ..self.settings
        })?;

        if self.settings.power {
            self.blank();
        }
        self.frame.resize(usize::from(count));
        self.settings.led_count = count;
        self.first_call_pending = true;

        Ok(self.publish(changes))
    }

    /// Advance to the next playlist pattern right away
    ///
    /// Works whether or not the playlist is enabled and leaves the flag as
    /// it is.
    pub fn next_pattern(&mut self) -> Result<StatusChanges, CommandError> {
        let id = self.playlist_successor();
        let changes = self.persist(PlaybackSettings {
            pattern: id,
            ..self.settings
        })?;

        self.switch_pattern(id);
        self.last_advance = None;

        Ok(self.publish(changes))
    }

    /// Subscribe to every topic and publish the full state
    pub fn on_bus_connected(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("player: bus connected");

        sync::subscribe_all(&mut self.bus);
        sync::publish_all(&mut self.bus, &self.settings);
    }

    /// Handle an inbound bus message
    ///
    /// An unknown pattern name re-publishes the current pattern so
    /// observers drop their stale value.
    pub fn on_bus_message(
        &mut self,
        topic: &str,
        payload: &str,
    ) -> Result<StatusChanges, CommandError> {
        match sync::parse_bus_message(topic, payload) {
            Ok(command) => self.apply(command),
            Err(error) => {
                #[cfg(feature = "esp32-log")]
                println!("player: ignoring {}={}: {}", topic, payload, error);

                if error == CommandError::UnknownPattern {
                    sync::publish_changes(&mut self.bus, &self.settings, StatusChanges::PATTERN);
                }
                Err(error)
            }
        }
    }

    pub fn mode(&self) -> PlaybackMode {
        if !self.settings.power || self.settings.led_count == 0 {
            PlaybackMode::Off
        } else if self.settings.playlist {
            PlaybackMode::Playlist(self.settings.pattern)
        } else {
            PlaybackMode::Manual(self.settings.pattern)
        }
    }

    pub fn settings(&self) -> &PlaybackSettings {
        &self.settings
    }

    pub fn pattern(&self) -> PatternId {
        self.pattern.id()
    }

    /// Active pixels as last rendered
    pub fn frame(&self) -> &[Rgb] {
        self.frame.as_slice()
    }

    /// Current global brightness
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Whether the next render restarts the pattern
    pub fn is_first_call_pending(&self) -> bool {
        self.first_call_pending
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn store(&self) -> &S {
        self.store.store()
    }

    pub fn store_mut(&mut self) -> &mut S {
        self.store.store_mut()
    }

    /// Drain the command queue (non-blocking)
    fn process_commands(&mut self) {
        while let Some(command) = self.commands.try_receive() {
            if let Err(_error) = self.apply(command) {
                #[cfg(feature = "esp32-log")]
                println!("player: command {:?} failed: {}", command, _error);
            }
        }
    }

    fn process_playlist(&mut self, now: Instant) {
        let step = Duration::from_secs(u64::from(self.settings.duration_secs));
        match self.last_advance {
            None => self.last_advance = Some(now),
            Some(since) if now.saturating_duration_since(since) >= step => {
                if let Err(_error) = self.next_pattern() {
                    #[cfg(feature = "esp32-log")]
                    println!("player: playlist advance failed: {}", _error);
                }
                self.last_advance = Some(now);
            }
            Some(_) => {}
        }
    }

    /// Pattern following the current one in the configured rotation
    fn playlist_successor(&self) -> PatternId {
        let rotation = if self.config.playlist.is_empty() {
            &PatternId::ALL[..]
        } else {
            self.config.playlist
        };

        rotation
            .iter()
            .position(|id| *id == self.settings.pattern)
            .map_or(rotation[0], |position| {
                rotation[(position + 1) % rotation.len()]
            })
    }

    fn switch_pattern(&mut self, id: PatternId) {
        #[cfg(feature = "esp32-log")]
        println!(
            "player: pattern {} -> {}",
            self.settings.pattern.as_str(),
            id.as_str()
        );

        if self.pattern.controls_brightness() && self.brightness != self.config.max_brightness {
            self.brightness = self.config.max_brightness;
            self.driver.set_brightness(self.brightness);
        }

        self.settings.pattern = id;
        self.pattern = id.to_slot();
        self.first_call_pending = true;
        self.frame_delay = Duration::from_ticks(0);
    }

    fn render(&mut self, now: Instant) {
        let first_call = core::mem::take(&mut self.first_call_pending);
        let brightness = self.brightness;

        let layout = StripLayout::new(self.config.layout, self.frame.len());
        let mut frame = Frame::new(
            self.frame.as_mut_slice(),
            layout,
            &mut self.brightness,
            self.config.max_brightness,
            frame_seed(now),
        );
        self.frame_delay = self.pattern.render(&mut frame, first_call);
        self.last_frame = now;

        if self.brightness != brightness {
            self.driver.set_brightness(self.brightness);
        }
        self.driver.write(self.frame.as_slice());
    }

    /// Clear the frame and transmit it
    fn blank(&mut self) {
        self.frame.clear();
        self.driver.write(self.frame.as_slice());
    }

    /// Write the settings a command is about to apply
    ///
    /// Returns the fields that differ from the current state. Nothing in
    /// memory changes here, so an error leaves the player untouched.
    fn persist(&mut self, next: PlaybackSettings) -> Result<StatusChanges, CommandError> {
        let changes = next.changes_from(&self.settings);
        if !changes.is_empty() {
            self.store.save(&next)?;
        }
        Ok(changes)
    }

    /// Tell observers about fields that were applied
    fn publish(&mut self, changes: StatusChanges) -> StatusChanges {
        if !changes.is_empty() {
            sync::publish_changes(&mut self.bus, &self.settings, changes);
        }
        changes
    }
}

/// Entropy for the random pattern derived from the frame time
#[allow(clippy::cast_possible_truncation)]
fn frame_seed(now: Instant) -> u32 {
    let ticks = now.as_ticks();
    (ticks ^ (ticks >> 32)) as u32
}
