use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    /// The model artifacts were not loaded at startup.
    #[error("model unavailable")]
    ModelUnavailable,

    /// The model was loaded but a prediction call failed.
    #[error("inference failed: {0}")]
    InferenceFailed(String),

    #[error("invalid model artifacts: {0}")]
    Load(String),

    #[error("tensor error: {0}")]
    Candle(#[from] candle_core::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
