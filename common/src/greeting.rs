use std::io::Write;

use tracing::{debug, trace};

use crate::{config::Config, error::GreetError};

pub const GREETING: &str = "Hello wereld ;)";

/// Full output line for `cfg`, trailing newline included.
pub fn render(cfg: &Config) -> String {
    format!("{}\n", cfg.greeting)
}

/// Writes the greeting line to `out` in one go and flushes it.
///
/// Any I/O error, a closed pipe included, is returned as
/// [`GreetError::Write`] and nothing is retried.
pub fn write_greeting<W: Write>(out: &mut W, cfg: &Config) -> Result<(), GreetError> {
    let line: String = render(cfg);
    trace!(bytes = line.len(), "rendered greeting");

    out.write_all(line.as_bytes()).map_err(GreetError::Write)?;
    out.flush().map_err(GreetError::Write)?;

    debug!("greeting written");
    Ok(())
}
