use std::io::{self, Write};

use crate::TraceGenError;

pub const TRACE_OPEN: &str = "<trace>";
pub const TRACE_CLOSE: &str = "</trace>";
pub const EVENT_OPEN: &str = "<event>#";
pub const EVENT_SEPARATOR: char = '?';
pub const EVENT_CLOSE: &str = "</event>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Pending,
    Open,
    Closed,
}

/// Incremental writer for a trace document.
///
/// Each call goes straight to the underlying stream; nothing but counters is
/// kept between events. Event indices are assigned here, starting at 0.
pub struct TraceWriter<W: Write> {
    out: Counting<W>,
    state: State,
    events: usize,
}

impl<W: Write> TraceWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Counting { inner: out, bytes: 0 },
            state: State::Pending,
            events: 0,
        }
    }

    /// Write the `<trace>` line.
    pub fn begin(&mut self) -> Result<(), TraceGenError> {
        if self.state != State::Pending {
            return Err(TraceGenError::State("trace already started"));
        }
        writeln!(self.out, "{TRACE_OPEN}")?;
        self.state = State::Open;
        Ok(())
    }

    /// Write one `<event>#{index}?{payload}</event>` line and return its index.
    pub fn write_event(&mut self, payload: &str) -> Result<usize, TraceGenError> {
        match self.state {
            State::Open => {}
            State::Pending => return Err(TraceGenError::State("event before trace start")),
            State::Closed => return Err(TraceGenError::State("event after trace end")),
        }
        let index = self.events;
        writeln!(self.out, "{EVENT_OPEN}{index}{EVENT_SEPARATOR}{payload}{EVENT_CLOSE}")?;
        self.events += 1;
        Ok(index)
    }

    /// Write the `</trace>` line and flush.
    pub fn finish(&mut self) -> Result<(), TraceGenError> {
        if self.state != State::Open {
            return Err(TraceGenError::State("finish without an open trace"));
        }
        writeln!(self.out, "{TRACE_CLOSE}")?;
        self.out.flush()?;
        self.state = State::Closed;
        Ok(())
    }

    pub fn events_written(&self) -> usize {
        self.events
    }

    pub fn bytes_written(&self) -> u64 {
        self.out.bytes
    }

    pub fn into_inner(self) -> W {
        self.out.inner
    }
}

struct Counting<W> {
    inner: W,
    bytes: u64,
}

impl<W: Write> Write for Counting<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.bytes += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
