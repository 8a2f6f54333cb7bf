//! Message bus synchronization
//!
//! Publishes playback settings to the bus and turns inbound bus messages
//! into [`Command`]s.

use core::fmt::Write;

use heapless::String;

use crate::command::Command;
use crate::error::CommandError;
use crate::pattern::PatternId;
use crate::settings::{PlaybackSettings, StatusChanges};

pub const TOPIC_LIGHT: &str = "light";
pub const TOPIC_PATTERN: &str = "pattern";
pub const TOPIC_LED_COUNT: &str = "numleds";
pub const TOPIC_PLAYLIST: &str = "playlist";
pub const TOPIC_DURATION: &str = "patternduration";

/// Every topic the player subscribes to
pub const TOPICS: [&str; 5] = [
    TOPIC_LIGHT,
    TOPIC_PATTERN,
    TOPIC_LED_COUNT,
    TOPIC_PLAYLIST,
    TOPIC_DURATION,
];

/// Suffix accepted on inbound command topics
const SET_SUFFIX: &str = "/set";

/// Payload asking the player to advance the playlist
pub const PAYLOAD_NEXT: &str = "next";

/// Message bus client
pub trait MessageBus {
    /// Publish a retained status value
    fn publish(&mut self, topic: &str, payload: &str);

    /// Start receiving messages on a topic
    fn subscribe(&mut self, topic: &str);
}

type Payload = String<8>;

fn flag_payload(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

fn number_payload(value: u8) -> Payload {
    let mut payload = Payload::new();
    // Three digits always fit
    let _ = write!(payload, "{value}");
    payload
}

/// Subscribe to every topic
pub fn subscribe_all<B: MessageBus>(bus: &mut B) {
    for topic in TOPICS {
        bus.subscribe(topic);
    }
}

/// Publish every field
pub fn publish_all<B: MessageBus>(bus: &mut B, settings: &PlaybackSettings) {
    publish_changes(bus, settings, StatusChanges::ALL);
}

/// Publish the fields named in `changes`
pub fn publish_changes<B: MessageBus>(
    bus: &mut B,
    settings: &PlaybackSettings,
    changes: StatusChanges,
) {
    if changes.contains(StatusChanges::POWER) {
        bus.publish(TOPIC_LIGHT, flag_payload(settings.power));
    }
    if changes.contains(StatusChanges::PATTERN) {
        bus.publish(TOPIC_PATTERN, settings.pattern.as_str());
    }
    if changes.contains(StatusChanges::LED_COUNT) {
        bus.publish(TOPIC_LED_COUNT, &number_payload(settings.led_count));
    }
    if changes.contains(StatusChanges::PLAYLIST) {
        bus.publish(TOPIC_PLAYLIST, flag_payload(settings.playlist));
    }
    if changes.contains(StatusChanges::DURATION) {
        bus.publish(TOPIC_DURATION, &number_payload(settings.duration_secs));
    }
}

/// Parse a `0`/`1` flag
pub fn parse_flag(value: &str) -> Result<bool, CommandError> {
    match value.trim() {
        "1" => Ok(true),
        "0" => Ok(false),
        _ => Err(CommandError::InvalidArgument),
    }
}

/// Parse an unsigned number, saturating at `u8::MAX`
pub fn parse_count(value: &str) -> Result<u8, CommandError> {
    let value: u32 = value
        .trim()
        .parse()
        .map_err(|_| CommandError::InvalidArgument)?;
    Ok(u8::try_from(value).unwrap_or(u8::MAX))
}

/// Parse a pattern reference: `next`, a numeric index or a name
pub fn parse_pattern(value: &str) -> Result<Command, CommandError> {
    let value = value.trim();
    if value.eq_ignore_ascii_case(PAYLOAD_NEXT) {
        return Ok(Command::NextPattern);
    }
    if let Ok(index) = value.parse::<u32>() {
        let index = u8::try_from(index).unwrap_or(u8::MAX);
        return Ok(Command::SelectPattern(PatternId::by_index(index)));
    }
    PatternId::by_name(value)
        .map(Command::SelectPattern)
        .ok_or(CommandError::UnknownPattern)
}

/// Turn an inbound bus message into a command
pub fn parse_bus_message(topic: &str, payload: &str) -> Result<Command, CommandError> {
    let topic = topic.strip_suffix(SET_SUFFIX).unwrap_or(topic);
    match topic {
        TOPIC_LIGHT => parse_flag(payload).map(Command::SetPower),
        TOPIC_PATTERN => parse_pattern(payload),
        TOPIC_LED_COUNT => parse_count(payload).map(Command::SetLedCount),
        TOPIC_PLAYLIST => parse_flag(payload).map(Command::EnablePlaylist),
        TOPIC_DURATION => parse_count(payload).map(Command::SetPlaylistDuration),
        _ => Err(CommandError::UnknownCommand),
    }
}
