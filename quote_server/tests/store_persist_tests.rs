mod support;

use std::sync::Arc;
use std::time::Duration;

use quote_common::Quote;
use quote_server::persist::{PersistOutcome, persist, spawn_persist};
use quote_server::store::QuoteStore;
use sqlx::{Connection, SqliteConnection};
use support::{DelayedStore, database_url, temp_store};
use tempfile::TempDir;

#[tokio::test]
async fn schema_init_is_idempotent_and_keeps_rows() {
    let dir = TempDir::new().unwrap();
    let store = temp_store(&dir).await;

    store.insert(&Quote::new("5.43")).await.unwrap();
    store.init_schema().await.unwrap();
    store.init_schema().await.unwrap();

    let rows = store.rows().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].bid, "5.43");
}

#[tokio::test]
async fn reopening_existing_database_keeps_rows() {
    let dir = TempDir::new().unwrap();
    let first = temp_store(&dir).await;
    first.insert(&Quote::new("5.01")).await.unwrap();
    first.close().await;

    let second = temp_store(&dir).await;
    assert_eq!(second.count().await.unwrap(), 1);
}

#[tokio::test]
async fn rows_are_appended_with_timestamps() {
    let dir = TempDir::new().unwrap();
    let store = temp_store(&dir).await;

    let first = Quote::new("5.43");
    let second = Quote::new("5.43");
    store.insert(&first).await.unwrap();
    store.insert(&second).await.unwrap();

    let rows = store.rows().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].id < rows[1].id);
    assert_eq!(
        rows[0].data.timestamp_millis(),
        first.observed_at.timestamp_millis()
    );
    assert_eq!(
        rows[1].data.timestamp_millis(),
        second.observed_at.timestamp_millis()
    );
}

#[tokio::test]
async fn fast_insert_is_saved() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(temp_store(&dir).await);

    let outcome = spawn_persist(store.clone(), Quote::new("5.43")).await.unwrap();
    assert_eq!(outcome, PersistOutcome::Saved);

    let rows = store.rows().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].bid, "5.43");
}

#[tokio::test]
async fn insert_slower_than_deadline_is_dropped() {
    let dir = TempDir::new().unwrap();
    let sqlite = Arc::new(temp_store(&dir).await);
    let delayed = Arc::new(DelayedStore {
        inner: sqlite.clone(),
        delay: Duration::from_millis(50),
    });

    let outcome = spawn_persist(delayed, Quote::new("5.43")).await.unwrap();
    assert_eq!(outcome, PersistOutcome::TimedOut);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(sqlite.count().await.unwrap(), 0);
}

#[tokio::test]
async fn store_error_is_reported_as_failed() {
    let dir = TempDir::new().unwrap();
    let store = temp_store(&dir).await;
    store.close().await;

    let outcome = persist(&store, &Quote::new("5.43")).await;
    assert_eq!(outcome, PersistOutcome::Failed);
}

#[tokio::test]
async fn deadline_starts_when_the_attempt_starts() {
    let dir = TempDir::new().unwrap();
    let sqlite = Arc::new(temp_store(&dir).await);
    let delayed = Arc::new(DelayedStore {
        inner: sqlite.clone(),
        delay: Duration::from_millis(2),
    });

    // A quote observed well before the attempt still gets the full budget.
    let quote = Quote::new("5.43");
    tokio::time::sleep(Duration::from_millis(50)).await;

    let outcome = spawn_persist(delayed, quote).await.unwrap();
    assert_eq!(outcome, PersistOutcome::Saved);
    assert_eq!(sqlite.count().await.unwrap(), 1);
}

#[tokio::test]
async fn write_blocked_past_deadline_never_commits() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(temp_store(&dir).await);

    let mut holder = SqliteConnection::connect(&database_url(&dir)).await.unwrap();
    sqlx::query("BEGIN IMMEDIATE").execute(&mut holder).await.unwrap();

    let outcome = spawn_persist(store.clone(), Quote::new("5.43")).await.unwrap();
    assert_ne!(outcome, PersistOutcome::Saved);

    tokio::time::sleep(Duration::from_millis(200)).await;
    sqlx::query("COMMIT").execute(&mut holder).await.unwrap();
    holder.close().await.unwrap();

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(store.count().await.unwrap(), 0);
}
