use std::str::FromStr;

use thiserror::Error;
use uom::si::{
    f64::Time,
    time::{hour, minute, second},
};

use teletraffic_core::{
    DomainError, InputError, Sources, Traffic, TrafficUnit, Trunks, formula::Occupancy,
};

/// Mean call attempts per user per hour.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CallRate(pub(crate) f64);

impl CallRate {
    /// Creates a call rate from calls per hour.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if `calls` is negative or not finite.
    pub fn per_hour(calls: f64) -> Result<Self, InputError> {
        non_negative("call rate", calls).map(Self)
    }

    #[must_use]
    pub fn calls_per_hour(self) -> f64 {
        self.0
    }
}

/// Mean duration of one call.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HoldingTime(pub(crate) Time);

impl HoldingTime {
    /// Creates a holding time from a `uom` duration.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the duration is negative or not finite.
    pub fn new(time: Time) -> Result<Self, InputError> {
        non_negative("holding time", time.get::<second>())?;
        Ok(Self(time))
    }

    /// Creates a holding time from minutes.
    ///
    /// # Errors
    ///
    /// Same as [`HoldingTime::new`].
    pub fn minutes(value: f64) -> Result<Self, InputError> {
        Self::new(Time::new::<minute>(value))
    }

    #[must_use]
    pub fn hours(self) -> f64 {
        self.0.get::<hour>()
    }
}

/// Error returned when a holding time cannot be parsed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseHoldingTimeError {
    #[error("holding time {0:?} is not a number with an optional s, min or h suffix")]
    Syntax(String),

    #[error(transparent)]
    Input(#[from] InputError),
}

impl FromStr for HoldingTime {
    type Err = ParseHoldingTimeError;

    /// Parses `180s`, `3min`, `0.05h` or a bare number of hours.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let number = s.trim_end_matches(|c: char| c.is_ascii_alphabetic());
        let suffix = &s[number.len()..];
        let value: f64 = number
            .trim()
            .parse()
            .map_err(|_| ParseHoldingTimeError::Syntax(s.to_owned()))?;

        let time = match suffix {
            "s" | "sec" => Time::new::<second>(value),
            "m" | "min" => Time::new::<minute>(value),
            "" | "h" | "hr" => Time::new::<hour>(value),
            _ => return Err(ParseHoldingTimeError::Syntax(s.to_owned())),
        };
        Ok(Self::new(time)?)
    }
}

/// A user population offering calls to a trunk group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Demand {
    pub trunks: Trunks,
    pub users: Sources,
    pub call_rate: CallRate,
    pub holding_time: HoldingTime,
    /// Unit used when reporting the derived traffic.
    pub unit: TrafficUnit,
}

impl Demand {
    /// Traffic offered by one user, `λ·H`, in Erlangs.
    #[must_use]
    pub fn per_user_erlangs(&self) -> f64 {
        self.call_rate.calls_per_hour() * self.holding_time.hours()
    }

    /// Total offered traffic `A = λ·H·K`.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the product overflows to infinity.
    pub fn traffic(&self) -> Result<Traffic, InputError> {
        Traffic::from_erlangs(self.per_user_erlangs() * f64::from(self.users.get()))
    }

    /// Probability that a single user is busy, for the Binomial model.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OccupancyOutOfRange`] when one user offers more
    /// than one Erlang.
    pub fn occupancy(&self) -> Result<Occupancy, DomainError> {
        Occupancy::new(self.per_user_erlangs())
    }
}

fn non_negative(quantity: &'static str, value: f64) -> Result<f64, InputError> {
    if !value.is_finite() {
        Err(InputError::NotFinite { quantity, value })
    } else if value < 0.0 {
        Err(InputError::Negative { quantity, value })
    } else {
        Ok(value)
    }
}
