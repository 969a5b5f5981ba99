use std::io::{BufWriter, Write};

use trace_gen::{generate, trace_rng, TraceStats};

use super::config::Effective;
use super::error::TraceGenCliError;

/// Generate the trace to stdout; stats go to stderr when requested.
pub fn run(eff: &Effective) -> Result<(), TraceGenCliError> {
    let stdout = std::io::stdout();
    let stats = run_to(eff, BufWriter::new(stdout.lock()))?;

    if eff.stats {
        eprintln!("{}", stats_line(&stats)?);
    }
    Ok(())
}

pub fn run_to<W: Write>(eff: &Effective, out: W) -> Result<TraceStats, TraceGenCliError> {
    tracing::info!(
        num_events = eff.trace.num_events,
        event_size = eff.trace.event_size,
        seed = ?eff.seed,
        "generating trace"
    );
    let mut rng = trace_rng(eff.seed);
    let stats = generate(&eff.trace, &mut rng, out)?;
    tracing::info!(bytes = stats.bytes_written, "trace complete");
    Ok(stats)
}

pub fn stats_line(stats: &TraceStats) -> Result<String, TraceGenCliError> {
    Ok(serde_json::to_string(stats)?)
}
