use std::io::{self, StdoutLock};

use greeter_common::{config::Config, error::GreetError, greeting};

/// Writes the greeting to stdout. This is the only stdout write in the tool.
pub fn greeting(cfg: &Config) -> Result<(), GreetError> {
    let mut handle: StdoutLock<'static> = io::stdout().lock();
    greeting::write_greeting(&mut handle, cfg)
}
