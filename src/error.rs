//! Error types for cmdwire.

use thiserror::Error;

/// Main error type for all cmdwire operations.
#[derive(Debug, Error)]
pub enum CmdwireError {
    /// I/O error while reading or writing a line stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error while converting a structured property value.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The line does not have the `::name ...::message` shape at all.
    ///
    /// Recoverable and expected: the caller should fall back to treating
    /// the line as ordinary text, not surface a failure.
    #[error("not a command line")]
    NotACommand,

    /// A property segment had an empty key (e.g. `=value`); the whole
    /// parse fails.
    #[error("empty property key in segment {0:?}")]
    EmptyKey(String),

    /// A handler rejected the command it was invoked with.
    #[error("handler error: {0}")]
    Handler(String),
}

impl CmdwireError {
    /// True for the recoverable "this line is plain text" case.
    ///
    /// Consumers use this to distinguish non-protocol lines (print them,
    /// move on) from malformed commands.
    pub fn is_not_a_command(&self) -> bool {
        matches!(self, Self::NotACommand)
    }
}

/// Result type alias using CmdwireError.
pub type Result<T> = std::result::Result<T, CmdwireError>;
