//! Quote client library.
//!
//! Single pass: request the bid from the quote server, decode it, write it to a
//! file. Any failure aborts the pass before the file is touched, except for a
//! failure while writing the file itself.
//!
//! - `fetcher` — deadline-bound GET and body decoding.
//! - `output` — output file format and writer.
#![warn(missing_docs)]
pub mod fetcher;
pub mod output;

use std::path::Path;

use log::debug;
use quote_common::Result;

use crate::fetcher::QuoteFetcher;

/// Fetches the bid from `server_url` and writes it to `output`.
///
/// Returns the saved bid.
pub async fn run(server_url: &str, output: &Path) -> Result<String> {
    let fetcher = QuoteFetcher::new()?;
    let bid = fetcher.fetch_bid(server_url).await?;
    debug!("Decoded bid {:?}", bid);
    output::write_quote(output, &bid)?;
    Ok(bid)
}
