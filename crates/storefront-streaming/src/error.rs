//! Streaming errors.

use storefront_core::PageError;
use thiserror::Error;

/// Errors raised by the streaming sink.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StreamError {
    #[error("Shell must be sent before streaming sections")]
    ShellNotSent,

    #[error("Shell already sent")]
    ShellAlreadySent,

    #[error("Stream already completed")]
    Completed,

    #[error("Write failed: {0}")]
    Write(String),
}

impl From<StreamError> for PageError {
    fn from(err: StreamError) -> Self {
        PageError::Render(err.to_string())
    }
}
