#![allow(dead_code)]

use std::collections::HashMap;

use embassy_time::Instant;
use myrtio_strip_player::{
    CommandQueue, MessageBus, OutputDriver, PersistenceError, Player, PlayerConfig, Rgb,
    SettingsStore,
};

pub const TEST_MAX_LEDS: usize = 100;
pub const TEST_QUEUE_SIZE: usize = 4;

pub type TestQueue = CommandQueue<TEST_QUEUE_SIZE>;
pub type TestPlayer<'a> =
    Player<'a, RecordingDriver, MemoryStore, RecordingBus, TEST_MAX_LEDS, TEST_QUEUE_SIZE>;

/// Driver that keeps every transmitted frame
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub frames: Vec<Vec<Rgb>>,
    pub brightness: Vec<u8>,
    pub power_limit: Option<u32>,
}

impl RecordingDriver {
    pub fn last_frame(&self) -> &[Rgb] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl OutputDriver for RecordingDriver {
    fn write(&mut self, colors: &[Rgb]) {
        self.frames.push(colors.to_vec());
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness.push(brightness);
    }

    fn set_power_limit(&mut self, milliamps: u32) {
        self.power_limit = Some(milliamps);
    }
}

/// In-memory key-value store
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub values: HashMap<String, u32>,
    pub writes: Vec<(String, u32)>,
    pub commits: usize,
    pub fail_commit: bool,
}

impl MemoryStore {
    pub fn with(values: &[(&str, u32)]) -> Self {
        Self {
            values: values
                .iter()
                .map(|(key, value)| (key.to_string(), *value))
                .collect(),
            ..Self::default()
        }
    }

    pub fn value(&self, key: &str) -> Option<u32> {
        self.values.get(key).copied()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<u32> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u32) {
        self.values.insert(key.to_string(), value);
        self.writes.push((key.to_string(), value));
    }

    fn commit(&mut self) -> Result<(), PersistenceError> {
        if self.fail_commit {
            return Err(PersistenceError::Driver);
        }
        self.commits += 1;
        Ok(())
    }
}

/// Bus client that records traffic
#[derive(Debug, Default)]
pub struct RecordingBus {
    pub published: Vec<(String, String)>,
    pub subscribed: Vec<String>,
}

impl RecordingBus {
    pub fn last(&self, topic: &str) -> Option<&str> {
        self.published
            .iter()
            .rev()
            .find(|(t, _)| t == topic)
            .map(|(_, payload)| payload.as_str())
    }
}

impl MessageBus for RecordingBus {
    fn publish(&mut self, topic: &str, payload: &str) {
        self.published.push((topic.to_string(), payload.to_string()));
    }

    fn subscribe(&mut self, topic: &str) {
        self.subscribed.push(topic.to_string());
    }
}

pub fn player<'a>(queue: &'a TestQueue, store: MemoryStore, config: &PlayerConfig) -> TestPlayer<'a> {
    Player::new(
        RecordingDriver::default(),
        store,
        RecordingBus::default(),
        queue.receiver(),
        config,
    )
}

pub fn at(millis: u64) -> Instant {
    Instant::from_millis(millis)
}

pub fn is_lit(frame: &[Rgb]) -> bool {
    !frame.is_empty() && frame.iter().all(|led| *led != Rgb::default())
}

pub fn is_blank(frame: &[Rgb]) -> bool {
    frame.iter().all(|led| *led == Rgb::default())
}
