//! `teletraffic` command-line calculator.

use std::process::ExitCode;

use teletraffic_calc::cli::{self, Args};

fn main() -> ExitCode {
    let args = match Args::parse() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Run `teletraffic help` for usage.");
            return ExitCode::from(2);
        }
    };

    cli::init_logging(args.verbose);
    cli::run_cli(&args)
}
