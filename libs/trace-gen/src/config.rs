use crate::TraceGenError;

/// Number of events in a trace when nothing else is configured.
pub const DEFAULT_NUM_EVENTS: usize = 400;
/// Payload length of each event when nothing else is configured.
pub const DEFAULT_EVENT_SIZE: usize = 600;

/// Shape of a generated trace document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceConfig {
    /// Number of `<event>` elements between the root tags.
    pub num_events: usize,
    /// Exact length of every event payload.
    pub event_size: usize,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            num_events: DEFAULT_NUM_EVENTS,
            event_size: DEFAULT_EVENT_SIZE,
        }
    }
}

impl TraceConfig {
    pub const fn new(num_events: usize, event_size: usize) -> Self {
        Self { num_events, event_size }
    }

    /// Build a config from signed values as they arrive from flags or TOML.
    ///
    /// Negative values are rejected with [`TraceGenError::InvalidConfig`].
    pub fn from_raw(num_events: i64, event_size: i64) -> Result<Self, TraceGenError> {
        Ok(Self {
            num_events: non_negative("num_events", num_events)?,
            event_size: non_negative("event_size", event_size)?,
        })
    }
}

fn non_negative(field: &'static str, value: i64) -> Result<usize, TraceGenError> {
    usize::try_from(value).map_err(|_| TraceGenError::InvalidConfig { field, value })
}
