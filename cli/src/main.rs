mod commands;
mod terminal;

use anyhow::Context;
use commands::CommandLine;
use greeter_common::config::Config;
use terminal::{logging, print};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();
    debug!(count = commands.ignored.len(), "ignoring arguments");

    let cfg = Config::default();
    print::greeting(&cfg).context("stdout unavailable")?;
    Ok(())
}
