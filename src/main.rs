//! Guess-the-animal game server (default binary).
//!
//! Serves the game to one VT52 on a serial line, or to any number of telnet
//! clients at once.
//!
//! ```bash
//! vt52-game --port /dev/ttyUSB0 --baudrate 9600
//! vt52-game --mode telnet --port 2323
//! ```

use anyhow::Result;
use clap::Parser;

use vt52_terminal::dispatch::{self, logging, Cli};
use vt52_terminal::types::Program;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    dispatch::run(cli, Program::Game).await?;
    Ok(())
}
