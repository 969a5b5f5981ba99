use std::path::Path;

use clap::Args;
use serde::Deserialize;
use trace_gen::{TraceConfig, DEFAULT_EVENT_SIZE, DEFAULT_NUM_EVENTS};

use super::error::TraceGenCliError;

// ═══════════════════════════════════════════════════════════════
//  Config file (TOML)
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub num_events: Option<i64>,
    pub event_size: Option<i64>,
    pub seed: Option<u64>,
}

pub fn load_config(path: &str) -> Result<Config, TraceGenCliError> {
    let content = std::fs::read_to_string(path).map_err(|e| TraceGenCliError::Config {
        context: "read",
        detail: format!("'{path}': {e}"),
    })?;
    parse_config(&content, path)
}

pub fn parse_config(content: &str, path: &str) -> Result<Config, TraceGenCliError> {
    toml::from_str(content).map_err(|e| TraceGenCliError::Config {
        context: "parse",
        detail: format!("'{path}': {e}"),
    })
}

// ═══════════════════════════════════════════════════════════════
//  CLI args
// ═══════════════════════════════════════════════════════════════

#[derive(Args, Clone, Debug)]
pub struct GenArgs {
    /// Path to an optional TOML config file
    #[arg(long, default_value = "trace-gen.toml", env = "TRACE_GEN_CONFIG")]
    pub config: String,

    /// Number of events in the trace [default: 400]
    #[arg(long, env = "TRACE_GEN_EVENTS", allow_negative_numbers = true)]
    pub events: Option<i64>,

    /// Payload length of every event [default: 600]
    #[arg(long, env = "TRACE_GEN_EVENT_SIZE", allow_negative_numbers = true)]
    pub event_size: Option<i64>,

    /// RNG seed for a reproducible trace (random when omitted)
    #[arg(long, env = "TRACE_GEN_SEED")]
    pub seed: Option<u64>,

    /// Print run stats as a JSON line on stderr
    #[arg(long)]
    pub stats: bool,
}

// ═══════════════════════════════════════════════════════════════
//  Effective — merged config
// ═══════════════════════════════════════════════════════════════

/// Final settings: defaults < config file < env/CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effective {
    pub trace: TraceConfig,
    pub seed: Option<u64>,
    pub stats: bool,
}

impl Effective {
    pub fn new(args: &GenArgs) -> Result<Self, TraceGenCliError> {
        let cfg = match load_config(&args.config) {
            Ok(c) => c,
            Err(e) => {
                if Path::new(&args.config).exists() {
                    return Err(e);
                }
                tracing::debug!(config = %args.config, "no config file, using defaults");
                Config::default()
            }
        };
        Self::merge(args, cfg)
    }

    pub fn merge(args: &GenArgs, cfg: Config) -> Result<Self, TraceGenCliError> {
        let num_events = args.events.or(cfg.num_events).unwrap_or(DEFAULT_NUM_EVENTS as i64);
        let event_size = args.event_size.or(cfg.event_size).unwrap_or(DEFAULT_EVENT_SIZE as i64);

        Ok(Self {
            trace: TraceConfig::from_raw(num_events, event_size)?,
            seed: args.seed.or(cfg.seed),
            stats: args.stats,
        })
    }
}
