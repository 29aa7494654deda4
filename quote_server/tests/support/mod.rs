#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use quote_common::Quote;
use quote_server::ServerError;
use quote_server::store::{QuoteStore, SqliteStore};
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("listener has no local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server failed");
    });
    format!("http://{}", addr)
}

/// URL of the test database inside `dir`.
pub fn database_url(dir: &TempDir) -> String {
    format!("sqlite://{}", dir.path().join("cotacoes.db").display())
}

/// Opens a fresh SQLite store inside `dir`.
pub async fn temp_store(dir: &TempDir) -> SqliteStore {
    SqliteStore::open(&database_url(dir))
        .await
        .expect("failed to open temp store")
}

/// Keeps every inserted quote in memory.
#[derive(Default)]
pub struct RecordingStore {
    pub quotes: Mutex<Vec<Quote>>,
}

impl RecordingStore {
    pub fn bids(&self) -> Vec<String> {
        self.quotes
            .lock()
            .unwrap()
            .iter()
            .map(|q| q.bid.clone())
            .collect()
    }
}

#[async_trait]
impl QuoteStore for RecordingStore {
    async fn insert(&self, quote: &Quote) -> Result<(), ServerError> {
        self.quotes.lock().unwrap().push(quote.clone());
        Ok(())
    }
}

/// Sleeps before delegating, to push inserts past the store deadline.
pub struct DelayedStore {
    pub inner: Arc<dyn QuoteStore>,
    pub delay: Duration,
}

#[async_trait]
impl QuoteStore for DelayedStore {
    async fn insert(&self, quote: &Quote) -> Result<(), ServerError> {
        tokio::time::sleep(self.delay).await;
        self.inner.insert(quote).await
    }
}

/// Polls `check` every 10 ms for up to one second.
pub async fn eventually<F: Fn() -> bool>(check: F) -> bool {
    for _ in 0..100 {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}
