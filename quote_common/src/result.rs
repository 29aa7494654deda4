//! Result type alias shared across the workspace.
//!
//! Functions return `Result<T>` and get `QuoteError` as the error type unless
//! they name another one.
use crate::error::QuoteError;

/// Workspace-wide `Result` alias with `QuoteError` as the default error.
pub type Result<T, E = QuoteError> = std::result::Result<T, E>;
