/// Convenience result type used across Splice.
pub type SpliceResult<T> = Result<T, SpliceError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum SpliceError {
    /// Invalid caller-provided arguments or sequence data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing snapshots and results.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpliceError {
    /// Build a [`SpliceError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpliceError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
