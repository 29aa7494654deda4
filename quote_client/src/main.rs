//! Quote Client — asks the quote server for the current USD-BRL bid once and
//! writes it to `cotacao.txt` as `Dólar: <bid>`.
//!
//! The request has a 300 ms budget. A timeout, transport error, malformed body
//! or file error logs the cause and exits with a non-zero status; the output
//! file is left as it was unless the failure happened while writing it.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --server-url http://localhost:8080/cotacao --output cotacao.txt
//! ```
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use clap::Parser;
use log::{error, info};
use quote_common::Result;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    match quote_client::run(&args.server_url, &args.output).await {
        Ok(bid) => {
            info!("Quote saved to {}: {}", args.output.display(), bid);
            Ok(())
        }
        Err(e) => {
            error!("Quote request to {} failed: {}", args.server_url, e);
            Err(e)
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
