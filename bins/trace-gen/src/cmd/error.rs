use trace_gen::TraceGenError;

#[derive(Debug, thiserror::Error)]
pub enum TraceGenCliError {
    #[error("config ({context}): {detail}")]
    Config { context: &'static str, detail: String },

    #[error("{0}")]
    Trace(#[from] TraceGenError),

    #[error("stats: {0}")]
    Stats(#[from] serde_json::Error),
}
