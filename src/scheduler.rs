//! Tick pacing without async/await or platform-specific timers.
//!
//! The caller is responsible for sleeping between ticks.

use embassy_time::{Duration, Instant};

use crate::OutputDriver;
use crate::player::Player;
use crate::settings::SettingsStore;
use crate::sync::MessageBus;

/// Default polling interval; shorter than the fastest pattern frame.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Result of a scheduled tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// Deadline of the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
    /// Whether the player transmitted a frame.
    pub transmitted: bool,
}

/// Calls [`Player::tick`] at a fixed cadence with drift correction.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = TickScheduler::new(player);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     Timer::after(result.sleep_duration).await;
/// }
/// ```
pub struct TickScheduler<
    'a,
    D: OutputDriver,
    S: SettingsStore,
    B: MessageBus,
    const MAX_LEDS: usize,
    const QUEUE_SIZE: usize,
> {
    player: Player<'a, D, S, B, MAX_LEDS, QUEUE_SIZE>,
    next_tick: Option<Instant>,
    interval: Duration,
}

impl<'a, D, S, B, const MAX_LEDS: usize, const QUEUE_SIZE: usize>
    TickScheduler<'a, D, S, B, MAX_LEDS, QUEUE_SIZE>
where
    D: OutputDriver,
    S: SettingsStore,
    B: MessageBus,
{
    /// Create a scheduler ticking every [`DEFAULT_TICK_INTERVAL`].
    pub fn new(player: Player<'a, D, S, B, MAX_LEDS, QUEUE_SIZE>) -> Self {
        Self::with_interval(player, DEFAULT_TICK_INTERVAL)
    }

    pub fn with_interval(
        player: Player<'a, D, S, B, MAX_LEDS, QUEUE_SIZE>,
        interval: Duration,
    ) -> Self {
        Self {
            player,
            next_tick: None,
            interval,
        }
    }

    /// Tick the player and report how long to sleep.
    ///
    /// Falling more than two intervals behind restarts the cadence from
    /// `now` instead of firing a burst of catch-up ticks.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        let max_drift = self.interval + self.interval;
        let deadline = match self.next_tick {
            Some(deadline) if now.saturating_duration_since(deadline) <= max_drift => deadline,
            _ => now,
        };

        let transmitted = self.player.tick(now);

        let next_deadline = deadline + self.interval;
        self.next_tick = Some(next_deadline);

        TickResult {
            next_deadline,
            sleep_duration: next_deadline.saturating_duration_since(now),
            transmitted,
        }
    }

    pub fn player(&self) -> &Player<'a, D, S, B, MAX_LEDS, QUEUE_SIZE> {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player<'a, D, S, B, MAX_LEDS, QUEUE_SIZE> {
        &mut self.player
    }
}
