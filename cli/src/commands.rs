use std::ffi::OsString;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "greeter")]
#[command(about = "Prints a fixed greeting.")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CommandLine {
    /// Accepted and ignored, hyphenated tokens included
    #[arg(
        hide = true,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub ignored: Vec<OsString>,
}

impl CommandLine {
    /// Parsed arguments, or an empty `CommandLine` when clap rejects them.
    pub fn parse_args() -> Self {
        Self::try_parse().unwrap_or_default()
    }
}
