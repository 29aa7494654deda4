//! Error types shared between client and server.
//!
//! `QuoteError` covers the failures both sides run into on the critical path:
//! file I/O, JSON decoding, HTTP transport and missed deadlines.
use std::io;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error while creating or writing local files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Transport failure reported by the HTTP client (connect, send, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A fixed deadline expired before the operation completed.
    /// Carries the name of the hop that timed out.
    #[error("Deadline exceeded: {0}")]
    Timeout(String),
}

impl QuoteError {
    /// Returns `true` for deadline failures, whether detected by our own timer
    /// or reported by the HTTP client.
    pub fn is_timeout(&self) -> bool {
        match self {
            QuoteError::Timeout(_) => true,
            QuoteError::Http(e) => e.is_timeout(),
            _ => false,
        }
    }
}
