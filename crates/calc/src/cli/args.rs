//! Argument parsing for the `teletraffic` binary.

use std::{fmt::Display, str::FromStr};

use thiserror::Error;

use teletraffic_core::{GosMethod, GosTarget, LossFormula, Sources, TrafficUnit, Trunks};
use teletraffic_solvers::bisection::Config;

use crate::{CallRate, CapacityRequest, Demand, GosRequest, HoldingTime};

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub command: Command,
    /// Print results as JSON instead of text.
    pub json: bool,
    /// Number of `-v` flags.
    pub verbose: u8,
}

/// Available commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Grade of service for a user population.
    Gos(GosRequest),
    /// Offered traffic at a target grade of service.
    Traffic {
        request: CapacityRequest,
        config: Config,
    },
    /// Method comparison table.
    Compare,
    /// Offered traffic tables for Erlang B and Erlang C.
    CapacityTable { config: Config },
    Help,
    Version,
}

/// Errors from parsing the command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("unexpected argument {0:?}")]
    Unexpected(String),

    #[error("{0} needs a value")]
    MissingValue(String),

    #[error("`{command}` requires {flag}")]
    MissingFlag {
        command: &'static str,
        flag: &'static str,
    },

    #[error("invalid value {value:?} for {flag}: {reason}")]
    InvalidValue {
        flag: &'static str,
        value: String,
        reason: String,
    },
}

impl Args {
    /// Parses the process arguments.
    ///
    /// # Errors
    ///
    /// See [`Args::parse_from`].
    pub fn parse() -> Result<Self, ArgsError> {
        Self::parse_from(std::env::args())
    }

    /// Parses arguments from any iterator; the first item is the program name.
    ///
    /// Global switches (`--json`, `-v`) may appear anywhere. With no command,
    /// the result is [`Command::Help`].
    ///
    /// # Errors
    ///
    /// Returns an [`ArgsError`] for an unknown command or flag, a missing
    /// required flag, or a value that does not parse into its quantity.
    pub fn parse_from<I, S>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut json = false;
        let mut verbose = 0_u8;
        let mut rest = Vec::new();
        for arg in args.into_iter().skip(1) {
            match arg.as_ref() {
                "--json" => json = true,
                "-v" | "--verbose" => verbose = verbose.saturating_add(1),
                "-vv" => verbose = verbose.saturating_add(2),
                other => rest.push(other.to_owned()),
            }
        }

        let Some((name, tail)) = rest.split_first() else {
            return Ok(Self {
                command: Command::Help,
                json,
                verbose,
            });
        };
        let mut flags = Flags::new(tail)?;

        let command = match name.as_str() {
            "gos" => parse_gos(&mut flags)?,
            "traffic" => parse_traffic(&mut flags)?,
            "compare" => Command::Compare,
            "capacity-table" => Command::CapacityTable {
                config: parse_config(&mut flags)?,
            },
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => return Err(ArgsError::UnknownCommand(unknown.to_owned())),
        };
        flags.finish()?;

        Ok(Self {
            command,
            json,
            verbose,
        })
    }
}

fn parse_gos(flags: &mut Flags) -> Result<Command, ArgsError> {
    const COMMAND: &str = "gos";

    let trunks = parse_trunks(flags.require(COMMAND, "--trunks")?)?;
    let users = parse_value("--users", flags.require(COMMAND, "--users")?, |s| {
        Sources::new(parse_number::<u32>(s)?).map_err(|e| e.to_string())
    })?;
    let call_rate = parse_value("--rate", flags.require(COMMAND, "--rate")?, |s| {
        CallRate::per_hour(parse_number(s)?).map_err(|e| e.to_string())
    })?;
    let holding_time = parse_value("--holding", flags.require(COMMAND, "--holding")?, |s| {
        s.parse::<HoldingTime>().map_err(|e| e.to_string())
    })?;
    let method = match flags.take("--method") {
        Some(value) => parse_value("--method", value, |s| {
            s.parse::<GosMethod>().map_err(|e| e.to_string())
        })?,
        None => GosMethod::default(),
    };
    let unit = match flags.take("--unit") {
        Some(value) => parse_value("--unit", value, |s| {
            s.parse::<TrafficUnit>().map_err(|e| e.to_string())
        })?,
        None => TrafficUnit::default(),
    };

    Ok(Command::Gos(GosRequest {
        demand: Demand {
            trunks,
            users,
            call_rate,
            holding_time,
            unit,
        },
        method,
    }))
}

fn parse_traffic(flags: &mut Flags) -> Result<Command, ArgsError> {
    const COMMAND: &str = "traffic";

    let trunks = parse_trunks(flags.require(COMMAND, "--trunks")?)?;
    let target = parse_value("--gos", flags.require(COMMAND, "--gos")?, |s| {
        GosTarget::from_percent(parse_number(s)?).map_err(|e| e.to_string())
    })?;
    let formula = match flags.take("--method") {
        Some(value) => parse_value("--method", value, |s| {
            let method = s.parse::<GosMethod>().map_err(|e| e.to_string())?;
            LossFormula::try_from(method).map_err(|e| e.to_string())
        })?,
        None => LossFormula::default(),
    };
    let config = parse_config(flags)?;

    Ok(Command::Traffic {
        request: CapacityRequest {
            trunks,
            target,
            formula,
        },
        config,
    })
}

fn parse_config(flags: &mut Flags) -> Result<Config, ArgsError> {
    let mut config = Config::default();
    if let Some(value) = flags.take("--max-iters") {
        let max_iters = parse_value("--max-iters", value, parse_number)?;
        config = config.with_max_iters(max_iters);
    }
    if let Some(value) = flags.take("--tol") {
        config = parse_value("--tol", value, move |s| {
            config
                .with_residual_tol(parse_number(s)?)
                .map_err(|e| e.to_string())
        })?;
    }
    Ok(config)
}

/// Trunk counts parse as signed so a negative count gets its own message.
fn parse_trunks(value: String) -> Result<Trunks, ArgsError> {
    parse_value("--trunks", value, |s| {
        Trunks::try_from(parse_number::<i64>(s)?).map_err(|e| e.to_string())
    })
}

fn parse_number<T>(s: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    s.trim().parse().map_err(|e: T::Err| e.to_string())
}

fn parse_value<T>(
    flag: &'static str,
    value: String,
    parse: impl FnOnce(&str) -> Result<T, String>,
) -> Result<T, ArgsError> {
    parse(&value).map_err(|reason| ArgsError::InvalidValue {
        flag,
        value,
        reason,
    })
}

/// `--flag value` and `--flag=value` pairs following a command.
struct Flags {
    pairs: Vec<(String, String)>,
}

impl Flags {
    fn new(args: &[String]) -> Result<Self, ArgsError> {
        let mut pairs = Vec::new();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if !arg.starts_with("--") {
                return Err(ArgsError::Unexpected(arg.clone()));
            }
            if let Some((flag, value)) = arg.split_once('=') {
                pairs.push((flag.to_owned(), value.to_owned()));
            } else {
                let value = iter
                    .next()
                    .ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                pairs.push((arg.clone(), value.clone()));
            }
        }
        Ok(Self { pairs })
    }

    /// Removes and returns the last value given for `flag`.
    fn take(&mut self, flag: &str) -> Option<String> {
        let mut found = None;
        self.pairs.retain(|(name, value)| {
            if name == flag {
                found = Some(value.clone());
                false
            } else {
                true
            }
        });
        found
    }

    fn require(&mut self, command: &'static str, flag: &'static str) -> Result<String, ArgsError> {
        self.take(flag)
            .ok_or(ArgsError::MissingFlag { command, flag })
    }

    /// Rejects flags the command did not consume.
    fn finish(self) -> Result<(), ArgsError> {
        match self.pairs.into_iter().next() {
            Some((flag, _)) => Err(ArgsError::Unexpected(flag)),
            None => Ok(()),
        }
    }
}
