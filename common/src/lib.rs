//! Shared pieces of the `greeter` tool: the greeting itself, the config that
//! carries it, and the error raised when it cannot be written out.

pub mod config;
pub mod error;
pub mod greeting;
