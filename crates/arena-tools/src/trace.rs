use arena_core::{DebugEvent, DebugShape, DebugSink};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Keeps every event in memory, in emission order.
#[derive(Debug, Default)]
pub struct VecDebugSink {
    pub events: Vec<DebugEvent>,
}

impl VecDebugSink {
    pub fn statuses(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match &e.shape {
            DebugShape::Status { text } => Some(text.as_ref()),
            DebugShape::Line { .. } => None,
        })
    }

    pub fn into_log(self) -> DebugLog {
        DebugLog {
            events: self.events,
        }
    }
}

impl DebugSink for VecDebugSink {
    fn emit(&mut self, event: DebugEvent) {
        self.events.push(event);
    }
}

/// Forwards status text to `tracing` at `debug` and lines at `trace`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDebugSink;

impl DebugSink for TracingDebugSink {
    fn emit(&mut self, event: DebugEvent) {
        match event.shape {
            DebugShape::Status { text } => {
                tracing::debug!(tick = event.tick, status = %text, "bot status");
            }
            DebugShape::Line { from, to, color } => {
                tracing::trace!(
                    tick = event.tick,
                    from = ?from,
                    to = ?to,
                    rgb = ?(color.r, color.g, color.b),
                    "debug line"
                );
            }
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DebugLog {
    pub events: Vec<DebugEvent>,
}

impl DebugLog {
    pub fn push(&mut self, event: DebugEvent) {
        self.events.push(event);
    }

    /// Events emitted during one tick.
    pub fn at_tick(&self, tick: u64) -> impl Iterator<Item = &DebugEvent> {
        self.events.iter().filter(move |e| e.tick == tick)
    }
}
