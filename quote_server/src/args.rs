//! Command-line arguments for the quote server.
use clap::Parser;
use quote_common::net::{SERVER_PORT, UPSTREAM_URL, addr};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address the HTTP listener binds to.
    #[clap(long, default_value_t = addr("0.0.0.0", SERVER_PORT))]
    pub listen_addr: String,

    /// SQLite database URL; the file is created if missing.
    #[clap(long, default_value = "sqlite://cotacoes.db")]
    pub database_url: String,

    /// Upstream endpoint returning the USD-BRL quote.
    #[clap(long, default_value = UPSTREAM_URL)]
    pub upstream_url: String,
}
