use thiserror::Error;

#[derive(Debug, Error)]
pub enum HomeCostError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Non-amortizing configuration: {0}")]
    NonAmortizing(String),

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for HomeCostError {
    fn from(e: serde_json::Error) -> Self {
        HomeCostError::SerializationError(e.to_string())
    }
}
