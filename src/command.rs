//! Engine commands and the queue that carries them into `tick`.
//!
//! The queue is a bounded deque behind a `critical-section` mutex, so bus
//! callbacks and interrupt handlers can enqueue commands while the player
//! drains them at the start of every tick.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::error::CommandError;
use crate::pattern::PatternId;

/// A state change requested by the bus, the console or the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Turn the strip on or off
    SetPower(bool),
    /// Show a pattern manually, leaving the playlist
    SelectPattern(PatternId),
    /// Start or stop automatic rotation
    EnablePlaylist(bool),
    /// Seconds per playlist step (clamped)
    SetPlaylistDuration(u8),
    /// Active strip length (clamped to the buffer capacity)
    SetLedCount(u8),
    /// Advance to the next playlist pattern right away
    NextPattern,
}

/// Bounded command queue shared between producers and the player
pub struct CommandQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<Command, SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Producer handle; any number may coexist
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { queue: self }
    }

    /// Consumer handle, normally owned by the player
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { queue: self }
    }

    /// Enqueue a command, failing when the queue is full
    pub fn try_send(&self, command: Command) -> Result<(), CommandError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue
                .push_back(command)
                .map_err(|_| CommandError::QueueFull)
        })
    }

    /// Take the oldest command, if any
    pub fn try_receive(&self) -> Option<Command> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    /// Number of queued commands
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    pub fn try_send(&self, command: Command) -> Result<(), CommandError> {
        self.queue.try_send(command)
    }
}

#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Option<Command> {
        self.queue.try_receive()
    }
}
