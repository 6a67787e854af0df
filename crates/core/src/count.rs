use std::{fmt, num::NonZeroU32};

use crate::error::InputError;

/// The number of trunks (servers, channels) in a trunk group.
///
/// Each trunk carries one call at a time. Zero trunks is a valid, if
/// degenerate, trunk group.
///
/// ```
/// use teletraffic_core::Trunks;
///
/// let trunks = Trunks::new(10);
/// assert_eq!(trunks.get(), 10);
///
/// assert!(Trunks::try_from(-1_i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Trunks(u32);

impl Trunks {
    /// Creates a trunk count.
    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self(count)
    }

    /// Returns the count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the count as an `f64`, the scale on which traffic is compared.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl From<u32> for Trunks {
    fn from(count: u32) -> Self {
        Self(count)
    }
}

impl TryFrom<i64> for Trunks {
    type Error = InputError;

    fn try_from(count: i64) -> Result<Self, Self::Error> {
        if count < 0 {
            return Err(InputError::NegativeTrunks(count));
        }
        u32::try_from(count)
            .map(Self)
            .map_err(|_| InputError::TooManyTrunks(count))
    }
}

impl fmt::Display for Trunks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The number of traffic sources (users) in a finite population.
///
/// Only the Binomial model uses a finite population, and it needs at least
/// one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct Sources(NonZeroU32);

impl Sources {
    /// Creates a source count.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NoSources`] if `count` is zero.
    pub fn new(count: u32) -> Result<Self, InputError> {
        NonZeroU32::new(count)
            .map(Self)
            .ok_or(InputError::NoSources)
    }

    /// Returns the count.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for Sources {
    type Error = InputError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Sources::new(count)
    }
}

impl From<Sources> for u32 {
    fn from(sources: Sources) -> Self {
        sources.get()
    }
}

impl fmt::Display for Sources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trunks_from_signed() {
        assert_eq!(Trunks::try_from(0_i64), Ok(Trunks::new(0)));
        assert_eq!(Trunks::try_from(24_i64), Ok(Trunks::new(24)));
        assert_eq!(
            Trunks::try_from(-3_i64),
            Err(InputError::NegativeTrunks(-3))
        );
        assert_eq!(
            Trunks::try_from(i64::MAX),
            Err(InputError::TooManyTrunks(i64::MAX))
        );
    }

    #[test]
    fn sources_must_be_positive() {
        assert_eq!(Sources::new(0), Err(InputError::NoSources));
        assert_eq!(Sources::new(50).map(Sources::get), Ok(50));
    }
}
