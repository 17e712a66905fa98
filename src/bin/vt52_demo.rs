//! VT52 terminal test suite.
//!
//! Walks a connected terminal through control characters, cursor addressing,
//! erase functions, scrolling and box drawing, then disconnects.

use anyhow::Result;
use clap::Parser;

use vt52_terminal::dispatch::{self, logging, Cli};
use vt52_terminal::types::Program;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    dispatch::run(cli, Program::Demo).await?;
    Ok(())
}
