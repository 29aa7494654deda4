//! Client for the third-party USD-BRL quote API.
//!
//! One call per handled request, bounded by `UPSTREAM_DEADLINE` from the moment
//! the request is sent until the body has been read. The HTTP status is not
//! inspected: whatever comes back must decode as an `UpstreamPayload`.
use std::sync::Arc;

use bytes::Bytes;
use log::debug;
use quote_common::net::UPSTREAM_DEADLINE;
use serde::Deserialize;
use tokio::time::timeout;

use crate::error::ServerError;

/// Document returned by `GET /json/last/USD-BRL`. Other fields are ignored.
#[derive(Debug, Deserialize)]
pub struct UpstreamPayload {
    /// Quote for the USD-BRL pair.
    #[serde(rename = "USDBRL")]
    pub usd_brl: UpstreamQuote,
}

/// Nested quote object. Only the bid is used.
#[derive(Debug, Default, Deserialize)]
pub struct UpstreamQuote {
    /// Decimal bid as text; absent decodes as empty.
    #[serde(default)]
    pub bid: String,
}

/// Thin wrapper around a shared `reqwest::Client` and the upstream URL.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    url: Arc<str>,
}

impl UpstreamClient {
    /// Builds a client targeting `url`.
    pub fn new(url: &str) -> Result<Self, ServerError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("quote_server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ServerError::RequestBuild)?;
        Ok(Self::with_client(client, url))
    }

    /// Reuses an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, url: &str) -> Self {
        Self {
            client,
            url: Arc::from(url),
        }
    }

    /// Target URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches the latest quote and returns its non-empty bid.
    pub async fn fetch_bid(&self) -> Result<String, ServerError> {
        let request = self
            .client
            .get(self.url())
            .build()
            .map_err(ServerError::RequestBuild)?;

        let body = timeout(UPSTREAM_DEADLINE, self.execute(request))
            .await
            .map_err(|_| ServerError::UpstreamTimeout(UPSTREAM_DEADLINE))??;

        extract_bid(&body)
    }

    async fn execute(&self, request: reqwest::Request) -> Result<Bytes, ServerError> {
        let response = self
            .client
            .execute(request)
            .await
            .map_err(ServerError::UpstreamUnavailable)?;
        debug!("Upstream {} answered {}", self.url, response.status());
        response
            .bytes()
            .await
            .map_err(ServerError::UpstreamUnavailable)
    }
}

/// Decodes an upstream body and rejects an empty bid.
pub fn extract_bid(body: &[u8]) -> Result<String, ServerError> {
    let payload: UpstreamPayload = serde_json::from_slice(body)?;
    if payload.usd_brl.bid.is_empty() {
        return Err(ServerError::InvalidQuote);
    }
    Ok(payload.usd_brl.bid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_nested_bid_and_ignores_other_fields() {
        let body = br#"{"USDBRL":{"code":"USD","codein":"BRL","bid":"5.43","ask":"5.44"}}"#;
        assert_eq!(extract_bid(body).unwrap(), "5.43");
    }

    #[test]
    fn empty_or_missing_bid_is_invalid() {
        assert!(matches!(
            extract_bid(br#"{"USDBRL":{"bid":""}}"#),
            Err(ServerError::InvalidQuote)
        ));
        assert!(matches!(
            extract_bid(br#"{"USDBRL":{"ask":"5.44"}}"#),
            Err(ServerError::InvalidQuote)
        ));
    }

    #[test]
    fn other_shapes_fail_decode() {
        assert!(matches!(
            extract_bid(br#"{"status":404,"code":"CoinNotExists"}"#),
            Err(ServerError::Decode(_))
        ));
        assert!(matches!(extract_bid(b"<html>"), Err(ServerError::Decode(_))));
    }
}
