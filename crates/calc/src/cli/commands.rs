//! Command execution.

use std::{error::Error as StdError, process::ExitCode};

use serde::Serialize;
use tracing::debug;

use crate::{CapacitySweep, ComparisonSweep, Error, comparison_table, evaluate_gos};

use super::{
    Args, Command,
    output::{help_text, version_text},
};

/// Runs a parsed command, printing its output or the error chain.
#[must_use]
pub fn run_cli(args: &Args) -> ExitCode {
    match execute(&args.command, args.json) {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

/// Executes `command` and returns what it would print.
///
/// # Errors
///
/// Returns the calculator error for commands whose inputs cannot be evaluated
/// or solved, and [`Error::Json`] if encoding fails.
pub fn execute(command: &Command, json: bool) -> Result<String, Error> {
    debug!(?command, json, "executing");
    match command {
        Command::Gos(request) => {
            let report = evaluate_gos(request)?;
            render(&report, json, |r| format!("{r}\n"))
        }
        Command::Traffic { request, config } => {
            let report = request.solve(config)?;
            render(&report, json, |r| format!("{r}\n"))
        }
        Command::Compare => {
            let rows = ComparisonSweep::default().run()?;
            render(&rows, json, |rows| comparison_table(rows).to_string())
        }
        Command::CapacityTable { config } => {
            let tables = CapacitySweep::default().run(config)?;
            render(&tables, json, |tables| {
                tables
                    .iter()
                    .map(|t| t.to_table().to_string())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
        Command::Help => Ok(help_text()),
        Command::Version => Ok(version_text()),
    }
}

fn render<T>(value: &T, json: bool, text: impl FnOnce(&T) -> String) -> Result<String, Error>
where
    T: Serialize + ?Sized,
{
    if json {
        let mut out = serde_json::to_string_pretty(value)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(text(value))
    }
}
