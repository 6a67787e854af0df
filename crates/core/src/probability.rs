use std::{cmp::Ordering, convert::TryFrom, fmt};

use crate::error::{InputError, check_finite};

/// A probability in `[0.0, 1.0]`.
///
/// Every grade-of-service formula returns a `Probability`: the chance that a
/// call is blocked (loss systems) or delayed (queueing systems).
///
/// Because the wrapped `f64` is always finite, `Probability` implements [`Eq`]
/// and [`Ord`] even though raw `f64` does not.
///
/// # Examples
///
/// ```
/// use teletraffic_core::Probability;
///
/// let p = Probability::new(0.02).unwrap();
/// assert_eq!(p.as_percent(), 2.0);
///
/// let q = Probability::from_percent(50.0).unwrap();
/// assert_eq!(q.get(), 0.5);
///
/// assert!(Probability::new(1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct Probability(f64);

impl Probability {
    /// The impossible event.
    pub const ZERO: Self = Self(0.0);

    /// The certain event.
    pub const ONE: Self = Self(1.0);

    /// Creates a `Probability` if `value` is within `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NotFinite`] if `value` is `NaN` or infinite, and
    /// [`InputError::OutOfRange`] if it lies outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self, InputError> {
        let value = check_finite("probability", value)?;
        if !(0.0..=1.0).contains(&value) {
            return Err(InputError::OutOfRange {
                quantity: "probability",
                value,
                range: "[0, 1]",
            });
        }
        Ok(Self(value))
    }

    /// Creates a `Probability` from a percentage within `[0, 100]`.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Probability::new`].
    pub fn from_percent(percent: f64) -> Result<Self, InputError> {
        Self::new(percent / 100.0)
    }

    /// Wraps a formula result, absorbing rounding that strays past the bounds.
    pub(crate) fn saturating(value: f64) -> Self {
        debug_assert!(!value.is_nan(), "formula produced NaN");
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the inner `f64`.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Returns the probability as a percentage in `[0, 100]`.
    #[must_use]
    pub fn as_percent(self) -> f64 {
        self.0 * 100.0
    }
}

impl TryFrom<f64> for Probability {
    type Error = InputError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Probability::new(value)
    }
}

impl From<Probability> for f64 {
    fn from(p: Probability) -> Self {
        p.0
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Construction forbids NaN and infinity.
impl Eq for Probability {}

impl Ord for Probability {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Probability {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A grade-of-service objective in the right-open interval `[0, 1)`.
///
/// A target of 1 would ask for a trunk group that blocks every call, for which
/// no finite offered traffic is defined, so it is rejected up front.
///
/// # Examples
///
/// ```
/// use teletraffic_core::GosTarget;
///
/// let target = GosTarget::from_percent(2.0).unwrap();
/// assert_eq!(target.get(), 0.02);
///
/// assert!(GosTarget::new(1.0).is_err());
/// assert!(GosTarget::new(-0.1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct GosTarget(f64);

impl GosTarget {
    /// Creates a `GosTarget` if `0 ≤ value < 1`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NotFinite`] for `NaN` or infinities and
    /// [`InputError::OutOfRange`] outside `[0, 1)`.
    pub fn new(value: f64) -> Result<Self, InputError> {
        let value = check_finite("GoS target", value)?;
        if !(0.0..1.0).contains(&value) {
            return Err(InputError::OutOfRange {
                quantity: "GoS target",
                value,
                range: "[0, 1)",
            });
        }
        Ok(Self(value))
    }

    /// Creates a `GosTarget` from a percentage in `[0, 100)`.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`GosTarget::new`].
    pub fn from_percent(percent: f64) -> Result<Self, InputError> {
        Self::new(percent / 100.0)
    }

    /// Returns the inner `f64`.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Returns the target as a percentage.
    #[must_use]
    pub fn as_percent(self) -> f64 {
        self.0 * 100.0
    }
}

impl TryFrom<f64> for GosTarget {
    type Error = InputError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        GosTarget::new(value)
    }
}

impl From<GosTarget> for f64 {
    fn from(target: GosTarget) -> Self {
        target.0
    }
}

impl From<GosTarget> for Probability {
    fn from(target: GosTarget) -> Self {
        Probability(target.0)
    }
}

impl fmt::Display for GosTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn valid_probabilities() {
        assert_eq!(Probability::new(0.0).unwrap().get(), 0.0);
        assert_eq!(Probability::new(1.0).unwrap().get(), 1.0);
        assert_eq!(Probability::new(0.25).unwrap().get(), 0.25);
    }

    #[test]
    fn invalid_probabilities() {
        assert!(matches!(
            Probability::new(-0.01),
            Err(InputError::OutOfRange { .. })
        ));
        assert!(matches!(
            Probability::new(1.01),
            Err(InputError::OutOfRange { .. })
        ));
        assert!(matches!(
            Probability::new(f64::NAN),
            Err(InputError::NotFinite { .. })
        ));
        assert!(matches!(
            Probability::new(f64::INFINITY),
            Err(InputError::NotFinite { .. })
        ));
    }

    #[test]
    fn saturating_clamps_rounding_noise() {
        assert_eq!(Probability::saturating(1.0 + 1e-15).get(), 1.0);
        assert_eq!(Probability::saturating(-1e-18).get(), 0.0);
    }

    #[test]
    fn ordering_is_total() {
        let low = Probability::new(0.1).unwrap();
        let high = Probability::new(0.9).unwrap();
        assert!(low < high);
        assert_eq!(low.max(high), high);
    }

    #[test]
    fn target_is_right_open() {
        assert!(GosTarget::new(0.0).is_ok());
        assert!(GosTarget::new(0.999).is_ok());
        assert!(matches!(
            GosTarget::new(1.0),
            Err(InputError::OutOfRange { .. })
        ));
        assert!(matches!(
            GosTarget::from_percent(100.0),
            Err(InputError::OutOfRange { .. })
        ));
    }

    #[test]
    fn percent_helpers() {
        let target = GosTarget::from_percent(0.5).unwrap();
        assert_eq!(target.get(), 0.005);
        assert_relative_eq!(Probability::from(target).as_percent(), 0.5);
    }
}
