//! Fetching the current quote from the quote server over HTTP.
//!
//! One GET, no retry. The whole exchange (connect, send, body read) must finish
//! within `CLIENT_DEADLINE`.
use std::collections::HashMap;

use log::{debug, info};
use quote_common::QuoteError;
use quote_common::Result;
use quote_common::net::CLIENT_DEADLINE;
use tokio::time::timeout;

/// Helper type for requesting quotes from the server.
pub struct QuoteFetcher {
    client: reqwest::Client,
}

impl QuoteFetcher {
    /// Builds a fetcher with its own HTTP client.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("quote_client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Requests `url` and returns the decoded bid.
    pub async fn fetch_bid(&self, url: &str) -> Result<String> {
        let body = self.fetch_body(url).await?;
        decode_bid(&body)
    }

    /// Requests `url` and returns the raw response body.
    pub async fn fetch_body(&self, url: &str) -> Result<Vec<u8>> {
        let request = self.client.get(url).build()?;
        info!("Sending GET {}", url);

        timeout(CLIENT_DEADLINE, self.execute(request))
            .await
            .map_err(|_| QuoteError::Timeout(format!("GET {} after {:?}", url, CLIENT_DEADLINE)))?
    }

    async fn execute(&self, request: reqwest::Request) -> Result<Vec<u8>> {
        let response = self.client.execute(request).await?;
        debug!("Server answered {}", response.status());
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}

/// Decodes a flat string map and returns its `bid`, or `""` when absent.
///
/// Only malformed JSON (or a non-string value) is an error.
pub fn decode_bid(body: &[u8]) -> Result<String> {
    let mut fields: HashMap<String, String> = serde_json::from_slice(body)?;
    Ok(fields.remove("bid").unwrap_or_default())
}
