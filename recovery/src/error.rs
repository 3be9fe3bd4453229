use thiserror::Error;

use math::error::{MathError, RadixError};

/// Result type specialized for recovery operations.
pub type RecoveryResult<T> = std::result::Result<T, RecoveryError>;

/// Errors that can arise while recovering a secret from a test case.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error("root {index}: {source}")]
    BadRoot { index: u64, source: RadixError },
    #[error("root {index}: base {base:?} is not an integer")]
    BadBase { index: u64, base: String },
    #[error("not enough valid points: need {required}, got {provided}")]
    InsufficientPoints { required: usize, provided: usize },
    #[error("invalid threshold configuration: k = {k}, n = {n}")]
    InvalidThreshold { k: usize, n: u64 },
    #[error(transparent)]
    Math(#[from] MathError),
    #[error("malformed test case: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
