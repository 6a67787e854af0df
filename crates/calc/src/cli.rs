//! The `teletraffic` command-line interface.
//!
//! Parsing, execution and output are separate so each can be tested without
//! spawning a process.

mod args;
mod commands;
mod logging;
mod output;

pub use args::{Args, ArgsError, Command};
pub use commands::{execute, run_cli};
pub use logging::init_logging;
pub use output::{help_text, version_text};
