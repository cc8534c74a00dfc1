//! Log sinks invoked when a maker constructs an error.
//!
//! A sink receives the error's message and its arguments as a flat list of
//! pairs. The order of the pairs is unspecified. Sinks are shared across
//! threads by every clone of a maker, so they must be `Send + Sync`.

use std::sync::Mutex;

use tracing::Level;

use crate::arg::ErrorArg;

/// A structured logging capability.
pub trait LogSink: Send + Sync {
    /// Record one error. Called synchronously before the maker returns.
    fn emit(&self, message: &str, args: &[ErrorArg]);
}

impl<F> LogSink for F
where
    F: Fn(&str, &[ErrorArg]) + Send + Sync,
{
    fn emit(&self, message: &str, args: &[ErrorArg]) {
        self(message, args)
    }
}

// ---------------------------------------------------------------------------
// TracingSink
// ---------------------------------------------------------------------------

/// Forwards errors to the `tracing` ecosystem.
///
/// Each emission is a single event whose message is the error message and
/// whose `args` field lists the pairs as `key=value`, sorted by key.
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    level: Level,
}

impl TracingSink {
    pub fn new() -> Self {
        Self { level: Level::ERROR }
    }

    pub fn with_level(level: Level) -> Self {
        Self { level }
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for TracingSink {
    fn emit(&self, message: &str, args: &[ErrorArg]) {
        let mut sorted: Vec<&ErrorArg> = args.iter().collect();
        sorted.sort_unstable_by(|a, b| a.key.cmp(&b.key));
        let fields = sorted
            .iter()
            .map(|a| format!("{}={}", a.key, a.value))
            .collect::<Vec<_>>()
            .join(" ");

        // `tracing` macros need a constant level.
        match self.level {
            Level::ERROR => tracing::error!(args = %fields, "{message}"),
            Level::WARN => tracing::warn!(args = %fields, "{message}"),
            Level::INFO => tracing::info!(args = %fields, "{message}"),
            Level::DEBUG => tracing::debug!(args = %fields, "{message}"),
            _ => tracing::trace!(args = %fields, "{message}"),
        }
    }
}

// ---------------------------------------------------------------------------
// MemorySink
// ---------------------------------------------------------------------------

/// One emission captured by a [`MemorySink`].
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub message: String,
    pub args: Vec<ErrorArg>,
}

/// Collects emissions in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records so far, in emission order.
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<LogRecord>> {
        // Records are pushed whole, so a poisoned lock still holds valid data.
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl LogSink for MemorySink {
    fn emit(&self, message: &str, args: &[ErrorArg]) {
        self.lock().push(LogRecord {
            message: message.to_string(),
            args: args.to_vec(),
        });
    }
}
