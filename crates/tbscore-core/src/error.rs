use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(
        "invalid risk thresholds: moderate threshold {moderate} exceeds high threshold {high}"
    )]
    InvalidThresholds { moderate: u32, high: u32 },
}
