//! Shared endpoint constants and per-hop deadlines used by client and server.
//!
//! Deadlines are fixed. Each hop starts its own timer; none inherits the budget
//! of another.
use std::time::Duration;

/// Default TCP port of the quote server.
pub const SERVER_PORT: u16 = 8080;
/// Path of the only route exposed by the server.
pub const QUOTE_PATH: &str = "/cotacao";
/// Upstream endpoint returning the latest USD-BRL quote.
pub const UPSTREAM_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";

/// Budget for a whole client -> server exchange, body included.
pub const CLIENT_DEADLINE: Duration = Duration::from_millis(300);
/// Budget for the server -> upstream call, body included.
pub const UPSTREAM_DEADLINE: Duration = Duration::from_millis(200);
/// Budget for a single insert into the quote store.
pub const STORE_DEADLINE: Duration = Duration::from_millis(10);

/// Helper to format a host and port like "host:port".
pub fn addr(host: &str, port: u16) -> String {
    format!("{}:{}", host, port)
}

/// Builds the quote URL served at `host:port`.
pub fn quote_url(host: &str, port: u16) -> String {
    format!("http://{}{}", addr(host, port), QUOTE_PATH)
}
