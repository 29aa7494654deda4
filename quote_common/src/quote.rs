//! Quote value and its JSON wire form.
//!
//! A `Quote` is created by the server once the upstream bid has been extracted
//! and is never modified afterwards. Clients only ever see `QuoteResponse`.
use chrono::{DateTime, Utc};
use serde::Serialize;

/// USD-BRL bid observed at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// Decimal bid exactly as the upstream sent it.
    pub bid: String,
    /// Moment the server accepted the bid.
    pub observed_at: DateTime<Utc>,
}

impl Quote {
    /// Creates a quote stamped with the current UTC time.
    pub fn new(bid: impl Into<String>) -> Self {
        Self {
            bid: bid.into(),
            observed_at: Utc::now(),
        }
    }

    /// Wire payload returned to HTTP callers.
    pub fn to_response(&self) -> QuoteResponse {
        QuoteResponse {
            bid: self.bid.clone(),
        }
    }
}

/// Body of a successful `GET /cotacao`: `{"bid": "<decimal>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteResponse {
    /// Decimal bid as text.
    pub bid: String,
}
