//! Trace sinks: the observability side channel of dispatch.
//!
//! Handlers never print directly. They hand a [`TraceEntry`] to whatever
//! [`TraceSink`] the dispatcher was constructed with:
//! - [`LogSink`]: Forwards entries to `tracing` at a fixed level
//! - [`Silent`]: Discards everything
//! - [`Recorder`]: Keeps entries in memory for inspection
//!
//! Swapping the sink never changes dispatch behaviour.

mod config;

pub use config::{ConfigError, TraceConfig, TRACE_ENV};

use crate::event::EventKind;
use tracing::Level;

/// One observable step of dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEntry {
    /// A participant's handler ran for an event.
    Handled {
        /// Participant name.
        participant: &'static str,
        /// Event kind handled.
        event: EventKind,
    },

    /// A state machine rebound its active state.
    Transition {
        /// State machine name.
        machine: &'static str,
        /// State active before the event.
        from: &'static str,
        /// State active after the event.
        to: &'static str,
    },
}

impl TraceEntry {
    /// Shorthand for [`TraceEntry::Handled`].
    pub const fn handled(participant: &'static str, event: EventKind) -> Self {
        Self::Handled { participant, event }
    }

    /// Shorthand for [`TraceEntry::Transition`].
    pub const fn transition(machine: &'static str, from: &'static str, to: &'static str) -> Self {
        Self::Transition { machine, from, to }
    }
}

/// Destination for trace entries.
pub trait TraceSink {
    /// Record one entry.
    fn record(&mut self, entry: TraceEntry);
}

impl<S: TraceSink + ?Sized> TraceSink for &mut S {
    fn record(&mut self, entry: TraceEntry) {
        (**self).record(entry);
    }
}

impl<S: TraceSink + ?Sized> TraceSink for Box<S> {
    fn record(&mut self, entry: TraceEntry) {
        (**self).record(entry);
    }
}

/// Sink that emits each entry as a `tracing` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSink {
    level: Level,
}

impl LogSink {
    /// Create a sink emitting at `level`.
    pub const fn new(level: Level) -> Self {
        Self { level }
    }

    /// Level entries are emitted at.
    pub const fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new(Level::INFO)
    }
}

// `tracing::event!` needs the level as a constant.
macro_rules! emit {
    ($level:expr, $($rest:tt)+) => {
        let level = $level;
        if level == Level::ERROR {
            tracing::event!(Level::ERROR, $($rest)+);
        } else if level == Level::WARN {
            tracing::event!(Level::WARN, $($rest)+);
        } else if level == Level::INFO {
            tracing::event!(Level::INFO, $($rest)+);
        } else if level == Level::DEBUG {
            tracing::event!(Level::DEBUG, $($rest)+);
        } else {
            tracing::event!(Level::TRACE, $($rest)+);
        }
    };
}

impl TraceSink for LogSink {
    fn record(&mut self, entry: TraceEntry) {
        match entry {
            TraceEntry::Handled { participant, event } => {
                emit!(self.level, participant, %event, "{participant}: {event}");
            }
            TraceEntry::Transition { machine, from, to } => {
                emit!(self.level, machine, from, to, "{machine}: {from} -> {to}");
            }
        }
    }
}

/// Sink that discards every entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Silent;

impl TraceSink for Silent {
    #[inline]
    fn record(&mut self, _entry: TraceEntry) {}
}

/// Sink that keeps every entry in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Recorder {
    entries: Vec<TraceEntry>,
}

impl Recorder {
    /// Create an empty recorder.
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// All entries recorded so far.
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// Events handled by `participant`, in order.
    pub fn handled_by(&self, participant: &str) -> Vec<EventKind> {
        self.entries
            .iter()
            .filter_map(|entry| match *entry {
                TraceEntry::Handled { participant: p, event } if p == participant => Some(event),
                _ => None,
            })
            .collect()
    }

    /// Only the `Handled` entries, as `(participant, event)` pairs.
    pub fn handled(&self) -> Vec<(&'static str, EventKind)> {
        self.entries
            .iter()
            .filter_map(|entry| match *entry {
                TraceEntry::Handled { participant, event } => Some((participant, event)),
                TraceEntry::Transition { .. } => None,
            })
            .collect()
    }

    /// Take all entries, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<TraceEntry> {
        std::mem::take(&mut self.entries)
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TraceSink for Recorder {
    fn record(&mut self, entry: TraceEntry) {
        self.entries.push(entry);
    }
}
