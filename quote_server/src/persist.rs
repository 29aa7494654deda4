//! Detached, best-effort persistence of accepted quotes.
//!
//! Each attempt runs on its own task with a fresh `STORE_DEADLINE` that starts
//! when the task starts. Nothing waits for it: the outcome is only logged.
//! Dropping the request that triggered it has no effect on the attempt.
use std::sync::Arc;

use log::{error, info, warn};
use quote_common::Quote;
use quote_common::net::STORE_DEADLINE;
use tokio::task::JoinHandle;
use tokio::time::timeout;

use crate::store::QuoteStore;

/// How a persistence attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    /// Row written.
    Saved,
    /// Deadline expired; the write was dropped.
    TimedOut,
    /// The store reported an error; the write was dropped.
    Failed,
}

/// Spawns a detached persistence attempt for `quote`.
///
/// The request handler discards the returned handle. It is only useful to
/// observers that want to wait for the outcome.
pub fn spawn_persist(store: Arc<dyn QuoteStore>, quote: Quote) -> JoinHandle<PersistOutcome> {
    tokio::spawn(async move { persist(&*store, &quote).await })
}

/// Single insert under `STORE_DEADLINE`. No retry.
pub async fn persist(store: &dyn QuoteStore, quote: &Quote) -> PersistOutcome {
    match timeout(STORE_DEADLINE, store.insert(quote)).await {
        Ok(Ok(())) => {
            info!("Quote {} saved to the database", quote.bid);
            PersistOutcome::Saved
        }
        Ok(Err(e)) => {
            error!("Failed to insert quote {}: {}", quote.bid, e);
            PersistOutcome::Failed
        }
        Err(_) => {
            warn!(
                "Timed out saving quote {} to the database ({:?})",
                quote.bid, STORE_DEADLINE
            );
            PersistOutcome::TimedOut
        }
    }
}
