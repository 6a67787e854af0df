use std::{cmp::Ordering, fmt, str::FromStr};

use thiserror::Error;

use crate::error::{InputError, check_finite};

/// Centum call seconds in one Erlang.
pub const CCS_PER_ERLANG: f64 = 36.0;

/// Offered traffic intensity, stored in Erlangs.
///
/// One Erlang is one trunk continuously occupied, or equivalently the mean
/// number of calls in progress. The value is always finite and non-negative.
///
/// ```
/// use teletraffic_core::{Traffic, TrafficUnit};
///
/// let a = Traffic::from_erlangs(2.5).unwrap();
/// assert_eq!(a.ccs(), 90.0);
/// assert_eq!(a.in_unit(TrafficUnit::Erlang), 2.5);
///
/// assert!(Traffic::from_erlangs(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct Traffic(f64);

impl Traffic {
    /// No offered traffic.
    pub const ZERO: Self = Self(0.0);

    /// Creates a traffic intensity from a value in Erlangs.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NotFinite`] or [`InputError::Negative`] if the
    /// value cannot be a traffic intensity.
    pub fn from_erlangs(erlangs: f64) -> Result<Self, InputError> {
        let erlangs = check_finite("traffic intensity", erlangs)?;
        if erlangs < 0.0 {
            return Err(InputError::Negative {
                quantity: "traffic intensity",
                value: erlangs,
            });
        }
        Ok(Self(erlangs))
    }

    /// Creates a traffic intensity from a value in centum call seconds.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Traffic::from_erlangs`].
    pub fn from_ccs(ccs: f64) -> Result<Self, InputError> {
        Self::from_erlangs(ccs / CCS_PER_ERLANG)
    }

    /// Returns the intensity in Erlangs.
    #[must_use]
    pub fn erlangs(self) -> f64 {
        self.0
    }

    /// Returns the intensity in centum call seconds.
    #[must_use]
    pub fn ccs(self) -> f64 {
        self.0 * CCS_PER_ERLANG
    }

    /// Returns the intensity expressed in `unit`.
    #[must_use]
    pub fn in_unit(self, unit: TrafficUnit) -> f64 {
        match unit {
            TrafficUnit::Erlang => self.erlangs(),
            TrafficUnit::Ccs => self.ccs(),
        }
    }
}

impl TryFrom<f64> for Traffic {
    type Error = InputError;
    fn try_from(erlangs: f64) -> Result<Self, Self::Error> {
        Traffic::from_erlangs(erlangs)
    }
}

impl From<Traffic> for f64 {
    fn from(traffic: Traffic) -> Self {
        traffic.0
    }
}

// Construction forbids NaN and infinity.
impl Eq for Traffic {}

impl Ord for Traffic {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Traffic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The unit used to report a traffic intensity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TrafficUnit {
    /// Erlangs (mean number of simultaneous calls).
    #[default]
    Erlang,
    /// Centum call seconds per hour, 36 per Erlang.
    Ccs,
}

impl TrafficUnit {
    /// Returns the label shown next to values in this unit.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TrafficUnit::Erlang => "Erlang",
            TrafficUnit::Ccs => "CCS",
        }
    }
}

impl fmt::Display for TrafficUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a traffic unit label is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown traffic unit {0:?} (expected \"erlang\" or \"ccs\")")]
pub struct ParseUnitError(pub String);

impl FromStr for TrafficUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "erlang" | "erlangs" | "e" => Ok(TrafficUnit::Erlang),
            "ccs" => Ok(TrafficUnit::Ccs),
            _ => Err(ParseUnitError(s.to_owned())),
        }
    }
}
