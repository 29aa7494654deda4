//! HTTP surface of the quote server: one route, `GET /cotacao`.
use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use quote_common::net::QUOTE_PATH;
use quote_common::{Quote, QuoteResponse};

use crate::error::ServerError;
use crate::persist::spawn_persist;
use crate::store::QuoteStore;
use crate::upstream::UpstreamClient;

/// State shared by all in-flight requests.
#[derive(Clone)]
pub struct QuoteState {
    /// Upstream quote API.
    pub upstream: UpstreamClient,
    /// Process-wide datastore handle.
    pub store: Arc<dyn QuoteStore>,
}

impl QuoteState {
    /// Bundles the upstream client and the store.
    pub fn new(upstream: UpstreamClient, store: Arc<dyn QuoteStore>) -> Self {
        Self { upstream, store }
    }
}

/// Builds the server router.
pub fn quote_router(state: QuoteState) -> Router {
    Router::new()
        .route(QUOTE_PATH, get(get_quote))
        .with_state(state)
}

/// Fetches the bid upstream, answers with it and records it in the background.
pub async fn get_quote(
    State(state): State<QuoteState>,
) -> Result<Json<QuoteResponse>, ServerError> {
    let bid = state.upstream.fetch_bid().await?;
    let quote = Quote::new(bid);

    // Detached: the handle is dropped and the response does not wait.
    drop(spawn_persist(Arc::clone(&state.store), quote.clone()));

    Ok(Json(quote.to_response()))
}
