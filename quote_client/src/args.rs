//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;

use clap::Parser;
use quote_common::net::{SERVER_PORT, quote_url};

use quote_client::output::OUTPUT_FILE;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Full URL of the server's quote endpoint.
    #[clap(long, default_value_t = quote_url("localhost", SERVER_PORT))]
    pub server_url: String,

    /// File the quote line is written to. Created or truncated on success.
    #[clap(long, default_value = OUTPUT_FILE)]
    pub output: PathBuf,
}
