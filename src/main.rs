//! combine-tests - gather test files into a single annotated document
//!
//! combine-tests:
//! - Finds `*.test.<ext>` files under `<root>/__test__` (recursively)
//! - Joins them in sorted path order with `// file: <path>` headers
//! - Prints the result and writes it to `<root>/combined_tests.txt`

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
