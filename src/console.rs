//! Text console commands
//!
//! Every command prints the state line followed by `+OK`, or a single
//! `-ERROR: <reason>` line.

use core::fmt::{self, Write};

use crate::OutputDriver;
use crate::command::Command;
use crate::error::CommandError;
use crate::player::Player;
use crate::settings::{PlaybackSettings, SettingsStore, StatusChanges};
use crate::sync::{MessageBus, parse_count, parse_flag, parse_pattern};

pub const COMMAND_INFO: &str = "info";
pub const COMMAND_PATTERN: &str = "pattern";
pub const COMMAND_LED_COUNT: &str = "numLEDs";
pub const COMMAND_POWER: &str = "on";
pub const COMMAND_PLAYLIST: &str = "playlist";
pub const COMMAND_DURATION: &str = "patternDuration";

/// Command names for registration with a console host
pub const CONSOLE_COMMANDS: [&str; 6] = [
    COMMAND_INFO,
    COMMAND_PATTERN,
    COMMAND_LED_COUNT,
    COMMAND_POWER,
    COMMAND_PLAYLIST,
    COMMAND_DURATION,
];

const USAGE_INFO: &str = "info";
const USAGE_PATTERN: &str = "pattern <index|name|next>";
const USAGE_LED_COUNT: &str = "numLEDs <count>";
const USAGE_POWER: &str = "on <0|1>";
const USAGE_PLAYLIST: &str = "playlist <0|1>";
const USAGE_DURATION: &str = "patternDuration <seconds>";

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

/// Write the one-line state summary
pub fn write_state_line<W: Write>(out: &mut W, settings: &PlaybackSettings) -> fmt::Result {
    writeln!(
        out,
        "{}, {} leds, {}, playlist {}, patternDuration={}",
        settings.pattern.as_str(),
        settings.led_count,
        on_off(settings.power),
        on_off(settings.playlist),
        settings.duration_secs
    )
}

/// Parse a console argument vector into a command
///
/// `argv[0]` is the command name, matched case-insensitively. `info` maps
/// to `None` and takes no arguments.
pub fn parse_console(argv: &[&str]) -> Result<Option<Command>, CommandError> {
    let Some((name, args)) = argv.split_first() else {
        return Err(CommandError::UnknownCommand);
    };

    let single = |usage: &'static str| match args {
        [value] => Ok(*value),
        _ => Err(CommandError::Usage(usage)),
    };

    if name.eq_ignore_ascii_case(COMMAND_INFO) {
        return if args.is_empty() {
            Ok(None)
        } else {
            Err(CommandError::Usage(USAGE_INFO))
        };
    }

    let command = if name.eq_ignore_ascii_case(COMMAND_PATTERN) {
        parse_pattern(single(USAGE_PATTERN)?)?
    } else if name.eq_ignore_ascii_case(COMMAND_LED_COUNT) {
        Command::SetLedCount(parse_count(single(USAGE_LED_COUNT)?)?)
    } else if name.eq_ignore_ascii_case(COMMAND_POWER) {
        Command::SetPower(parse_flag(single(USAGE_POWER)?)?)
    } else if name.eq_ignore_ascii_case(COMMAND_PLAYLIST) {
        Command::EnablePlaylist(parse_flag(single(USAGE_PLAYLIST)?)?)
    } else if name.eq_ignore_ascii_case(COMMAND_DURATION) {
        Command::SetPlaylistDuration(parse_count(single(USAGE_DURATION)?)?)
    } else {
        return Err(CommandError::UnknownCommand);
    };

    Ok(Some(command))
}

impl<D, S, B, const MAX_LEDS: usize, const QUEUE_SIZE: usize>
    Player<'_, D, S, B, MAX_LEDS, QUEUE_SIZE>
where
    D: OutputDriver,
    S: SettingsStore,
    B: MessageBus,
{
    /// Run a console command and print its outcome to `out`
    pub fn run_console<W: Write>(
        &mut self,
        argv: &[&str],
        out: &mut W,
    ) -> Result<StatusChanges, CommandError> {
        let result = match parse_console(argv) {
            Ok(Some(command)) => self.apply(command),
            Ok(None) => Ok(StatusChanges::NONE),
            Err(error) => Err(error),
        };

        // Console output is best effort
        let _ = match &result {
            Ok(_) => write_state_line(out, self.settings()).and_then(|()| writeln!(out, "+OK")),
            Err(error) => writeln!(out, "-ERROR: {error}"),
        };

        result
    }
}
