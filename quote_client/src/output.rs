//! Writing the fetched quote to a local text file.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use quote_common::Result;

/// Default output file, relative to the working directory.
pub const OUTPUT_FILE: &str = "cotacao.txt";

/// Line written for a bid.
pub fn format_line(bid: &str) -> String {
    format!("Dólar: {}\n", bid)
}

/// Creates or truncates `path` and writes the single quote line.
pub fn write_quote(path: &Path, bid: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(format_line(bid).as_bytes())?;
    Ok(())
}
