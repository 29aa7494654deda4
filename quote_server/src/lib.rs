//! Quote server library.
//!
//! Proxies the USD-BRL quote API over `GET /cotacao` and records every
//! accepted bid into SQLite on a detached task:
//!
//! - `router` — axum router and the request handler.
//! - `upstream` — deadline-bound call to the quote API and bid extraction.
//! - `persist` — fire-and-forget insert with its own deadline.
//! - `store` — `QuoteStore` seam and its SQLite implementation.
//! - `error` — `ServerError` and its HTTP mapping.
#![warn(missing_docs)]
pub mod error;
pub mod persist;
pub mod router;
pub mod store;
pub mod upstream;

pub use error::ServerError;
