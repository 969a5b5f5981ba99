use std::io::Write;

use rand::Rng;
use serde::Serialize;

use crate::{PayloadAlphabet, TraceConfig, TraceGenError, TraceWriter};

/// Summary of one generated trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraceStats {
    pub num_events: usize,
    pub event_size: usize,
    pub bytes_written: u64,
}

/// Write a complete trace document to `out`.
///
/// Payloads are drawn from `rng` one character at a time; only a single
/// payload buffer is held in memory regardless of `config.num_events`.
pub fn generate<R, W>(config: &TraceConfig, rng: &mut R, out: W) -> Result<TraceStats, TraceGenError>
where
    R: Rng + ?Sized,
    W: Write,
{
    let alphabet = PayloadAlphabet::new();
    let mut writer = TraceWriter::new(out);
    let mut payload = String::with_capacity(config.event_size);

    writer.begin()?;
    for _ in 0..config.num_events {
        alphabet.fill(rng, config.event_size, &mut payload);
        writer.write_event(&payload)?;
    }
    writer.finish()?;

    let stats = TraceStats {
        num_events: writer.events_written(),
        event_size: config.event_size,
        bytes_written: writer.bytes_written(),
    };
    tracing::debug!(
        num_events = stats.num_events,
        event_size = stats.event_size,
        bytes = stats.bytes_written,
        "trace generated"
    );
    Ok(stats)
}
