use std::io::{self, Write};

use proptest::prelude::*;
use trace_gen::{
    generate, trace_rng, PayloadAlphabet, TraceConfig, TraceGenError, TraceWriter,
};

/// Split a trace into `(index, payload)` pairs, asserting the root tags.
fn parse_events(doc: &str) -> Vec<(usize, String)> {
    let body = doc
        .strip_prefix("<trace>\n")
        .expect("document should open with <trace>");
    let body = body
        .strip_suffix("</trace>\n")
        .expect("document should close with </trace>");

    body.lines()
        .map(|line| {
            let inner = line
                .strip_prefix("<event>#")
                .and_then(|rest| rest.strip_suffix("</event>"))
                .unwrap_or_else(|| panic!("malformed event line: {line}"));
            let (index, payload) = inner.split_once('?').expect("missing separator");
            (index.parse().expect("index should be numeric"), payload.to_string())
        })
        .collect()
}

fn render(config: TraceConfig, seed: u64) -> String {
    let mut out = Vec::new();
    generate(&config, &mut trace_rng(Some(seed)), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn reference_trace_shape() {
    let doc = render(TraceConfig::default(), 2024);
    let events = parse_events(&doc);
    assert_eq!(events.len(), 400);
    assert!(events.iter().all(|(_, payload)| payload.len() == 600));
    assert_eq!(events.last().map(|(index, _)| *index), Some(399));
}

#[test]
fn zero_events() {
    assert_eq!(render(TraceConfig::new(0, 10), 1), "<trace>\n</trace>\n");
}

#[test]
fn zero_size_payloads() {
    let doc = render(TraceConfig::new(3, 0), 1);
    assert_eq!(
        doc,
        "<trace>\n<event>#0?</event>\n<event>#1?</event>\n<event>#2?</event>\n</trace>\n"
    );
}

#[test]
fn same_seed_is_reproducible() {
    let config = TraceConfig::new(20, 50);
    assert_eq!(render(config, 77), render(config, 77));
}

#[test]
fn different_seeds_differ() {
    let config = TraceConfig::new(20, 50);
    assert_ne!(render(config, 1), render(config, 2));
}

#[test]
fn unseeded_runs_keep_structure() {
    let mut out = Vec::new();
    let stats = generate(&TraceConfig::new(5, 8), &mut trace_rng(None), &mut out).unwrap();
    let events = parse_events(std::str::from_utf8(&out).unwrap());
    assert_eq!(events.len(), 5);
    assert_eq!(stats.bytes_written, out.len() as u64);
}

struct FailingWriter {
    budget: usize,
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.budget == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"));
        }
        let n = buf.len().min(self.budget);
        self.budget -= n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_propagates() {
    let err = generate(
        &TraceConfig::new(10, 100),
        &mut trace_rng(Some(5)),
        FailingWriter { budget: 64 },
    )
    .unwrap_err();
    match err {
        TraceGenError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn writer_accepts_external_payloads() {
    let mut writer = TraceWriter::new(Vec::new());
    writer.begin().unwrap();
    writer.write_event("xyz").unwrap();
    writer.write_event("abc").unwrap();
    writer.finish().unwrap();
    let doc = String::from_utf8(writer.into_inner()).unwrap();
    assert_eq!(
        parse_events(&doc),
        vec![(0, "xyz".to_string()), (1, "abc".to_string())]
    );
}

proptest! {
    #[test]
    fn prop_structure_holds(num_events in 0usize..60, event_size in 0usize..120, seed in any::<u64>()) {
        let doc = render(TraceConfig::new(num_events, event_size), seed);
        let events = parse_events(&doc);

        prop_assert_eq!(events.len(), num_events);
        for (expected, (index, payload)) in events.iter().enumerate() {
            prop_assert_eq!(*index, expected);
            prop_assert_eq!(payload.len(), event_size);
            prop_assert!(payload.chars().all(PayloadAlphabet::contains));
        }
    }

    #[test]
    fn prop_negative_values_rejected(num_events in i64::MIN..0, event_size in 0i64..1000) {
        let is_invalid = matches!(
            TraceConfig::from_raw(num_events, event_size),
            Err(TraceGenError::InvalidConfig { field: "num_events", .. })
        );
        prop_assert!(is_invalid);
    }
}
