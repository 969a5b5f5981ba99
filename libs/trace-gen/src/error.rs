#[derive(Debug, thiserror::Error)]
pub enum TraceGenError {
    #[error("invalid {field}: {value} (expected a non-negative count)")]
    InvalidConfig { field: &'static str, value: i64 },

    #[error("trace writer: {0}")]
    State(&'static str),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
