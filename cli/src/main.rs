//! MapEdit command-line editor.
//!
//! Usage:
//!   mapedit new level.json --cols 40 --rows 15
//!   mapedit paint level.json --row 14 --col 0 --tool ground
//!   mapedit replay level.json strokes.txt
//!
//! Levels are read and written as the editor's JSON export format.

use anyhow::Result;
use clap::Parser;
use mapedit_cli::{Cli, run};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let mut stdout = std::io::stdout().lock();
    run(&cli, &mut stdout)
}
