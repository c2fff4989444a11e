//! Error types for sqlfrag

use thiserror::Error;

/// Result type alias for sqlfrag operations
pub type FragResult<T> = Result<T, FragError>;

/// Error types for fragment construction.
///
/// Fragment building is total over its inputs: every value kind, including
/// absent values and empty fragments, produces well-defined output. The only
/// failure mode is the shape-dispatching [`join_args`](crate::join_args)
/// entry receiving a first argument it cannot interpret.
#[derive(Debug, Error)]
pub enum FragError {
    /// Combinator called with an unrecognized argument shape
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl FragError {
    /// Create an invalid-arguments error
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::InvalidArguments(message.into())
    }

    /// Check if this is an invalid-arguments error
    pub fn is_invalid_arguments(&self) -> bool {
        matches!(self, Self::InvalidArguments(_))
    }
}
