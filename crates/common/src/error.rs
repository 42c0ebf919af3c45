//! Error types for daemon state acquisition.
//!
//! Anything that materializes or reads keepalived state (signalling the
//! daemon, reading its dump files, decoding its JSON output) reports
//! failures through [`Error`].

use std::fmt;

/// A specialized Result type for state acquisition.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure raised while acquiring daemon state.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Signal error: {0}")]
    Signal(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Other(String),
}

impl Error {
    /// Create a new signal error (daemon could not be told to dump its state).
    pub fn signal(msg: impl fmt::Display) -> Self {
        Error::Signal(msg.to_string())
    }

    /// Create a new parse error (dump output was malformed).
    pub fn parse(msg: impl fmt::Display) -> Self {
        Error::Parse(msg.to_string())
    }

    /// Create a new other error.
    pub fn other(msg: impl fmt::Display) -> Self {
        Error::Other(msg.to_string())
    }
}
