//! Error types for mainprint.
//!
//! All errors are strongly typed using thiserror. Dispatch failures are
//! surfaced only by [`MainHandle::post`](crate::MainHandle::post) and the
//! context servicing calls; the print strategies themselves are best-effort
//! and never return them.

use thiserror::Error;

/// Validation errors that occur while constructing input values.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Tag cannot be empty")]
    EmptyTag,
}

/// Dispatch errors that occur while interacting with the main context.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Main context queue is full (capacity: {capacity})")]
    QueueFull {
        capacity: usize,
    },

    #[error("Main context is gone: queue disconnected")]
    Disconnected,

    #[error("Called from a thread that is not the bound main context")]
    NotMainContext,
}

/// Top-level error type for mainprint.
#[derive(Debug, Error)]
pub enum MainPrintError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}

impl MainPrintError {
    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a dispatch error.
    #[must_use]
    pub const fn is_dispatch(&self) -> bool {
        matches!(self, Self::Dispatch(_))
    }

    /// Returns true if retrying the operation later could succeed.
    ///
    /// Only a full queue is transient; a disconnected context never comes
    /// back and validation failures will not change on retry.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Validation(_) => false,
            Self::Dispatch(e) => matches!(e, DispatchError::QueueFull { .. }),
        }
    }
}

/// Result type alias for mainprint operations.
pub type MainPrintResult<T> = Result<T, MainPrintError>;
