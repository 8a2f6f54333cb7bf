use core::fmt;

/// Error returned by the settings store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceError {
    /// Store is handling another request
    Busy,
    /// Underlying storage driver failed
    Driver,
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy => f.write_str("storage busy"),
            Self::Driver => f.write_str("storage driver error"),
        }
    }
}

/// Error returned when a command cannot be applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number of arguments; carries the expected usage
    Usage(&'static str),
    /// Argument could not be parsed
    InvalidArgument,
    /// No pattern with the given name
    UnknownPattern,
    /// No console command or bus topic with the given name
    UnknownCommand,
    /// The state was applied in memory but could not be persisted
    Persistence(PersistenceError),
    /// The command queue is full
    QueueFull,
}

impl From<PersistenceError> for CommandError {
    fn from(error: PersistenceError) -> Self {
        Self::Persistence(error)
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(usage) => write!(f, "usage: {usage}"),
            Self::InvalidArgument => f.write_str("invalid argument"),
            Self::UnknownPattern => f.write_str("unknown pattern"),
            Self::UnknownCommand => f.write_str("unknown command"),
            Self::Persistence(error) => write!(f, "failed to persist settings: {error}"),
            Self::QueueFull => f.write_str("command queue full"),
        }
    }
}
