//! Synthetic XML-like trace generator.
//!
//! A trace document is a `<trace>` root holding `num_events` lines of the form
//! `<event>#{index}?{payload}</event>`, where every payload is `event_size`
//! characters drawn uniformly from code points 48..=126.
//!
//! ```
//! use trace_gen::{generate, trace_rng, TraceConfig};
//!
//! let mut out = Vec::new();
//! let stats = generate(&TraceConfig::new(2, 3), &mut trace_rng(Some(1)), &mut out).unwrap();
//! assert_eq!(stats.num_events, 2);
//! assert!(out.starts_with(b"<trace>\n<event>#0?"));
//! ```

pub mod config;
pub mod error;
mod generate;
mod payload;
mod writer;

pub use config::{TraceConfig, DEFAULT_EVENT_SIZE, DEFAULT_NUM_EVENTS};
pub use error::TraceGenError;
pub use generate::{generate, TraceStats};
pub use payload::{trace_rng, PayloadAlphabet, PAYLOAD_MAX, PAYLOAD_MIN};
pub use writer::{TraceWriter, EVENT_CLOSE, EVENT_OPEN, EVENT_SEPARATOR, TRACE_CLOSE, TRACE_OPEN};
