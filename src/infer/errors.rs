//! Inference input errors

use thiserror::Error;

/// Result type for inference over untyped input
pub type InferResult<T> = Result<T, InferError>;

/// Raised when the input to inference is not a sequence of scalars.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InferError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl InferError {
    /// The input itself is not a sequence
    pub fn invalid_argument(kind: &str) -> Self {
        InferError::InvalidArgument {
            reason: format!("expected a sequence of values, got {}", kind),
        }
    }

    /// An element of the sequence is not a scalar
    pub fn invalid_element(index: usize, kind: &str) -> Self {
        InferError::InvalidArgument {
            reason: format!("element at index {} is not a scalar value ({})", index, kind),
        }
    }
}
