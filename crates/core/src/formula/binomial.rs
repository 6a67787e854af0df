use crate::{DomainError, Probability, Sources, Trunks};

use super::ln_choose;

/// The probability that one traffic source is busy.
///
/// This is a per-source quantity (call rate × holding time for a single
/// user), not an aggregate Erlang value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct Occupancy(f64);

impl Occupancy {
    /// Creates an occupancy from a probability.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OccupancyOutOfRange`] if `value` is not a finite
    /// number in `[0, 1]`.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::OccupancyOutOfRange(value))
        }
    }

    /// Returns the occupancy.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Occupancy {
    type Error = DomainError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Occupancy::new(value)
    }
}

impl From<Occupancy> for f64 {
    fn from(occupancy: Occupancy) -> Self {
        occupancy.0
    }
}

/// Returns the Binomial loss probability for a finite population.
///
/// A call from one of `sources` users is lost when at least `trunks` of the
/// other `M − 1` users are already busy, each independently with probability
/// `occupancy`:
///
/// ```text
/// Loss(N, M, p) = Σ_{i=N}^{M−1} C(M−1, i) · p^i · (1−p)^(M−1−i)
/// ```
///
/// When `trunks >= sources` the sum is empty and the loss is exactly zero.
///
/// ```
/// use teletraffic_core::{Sources, Trunks, formula::{Occupancy, binomial}};
///
/// let p = Occupancy::new(0.25).unwrap();
/// let loss = binomial(Trunks::new(10), Sources::new(10).unwrap(), p);
/// assert_eq!(loss.get(), 0.0);
/// ```
#[must_use]
pub fn binomial(trunks: Trunks, sources: Sources, occupancy: Occupancy) -> Probability {
    let others = sources.get() - 1;
    let first = trunks.get();
    if first > others {
        return Probability::ZERO;
    }
    Probability::saturating(upper_tail(others, first, occupancy.get()))
}

/// `P(X ≥ first)` for `X ~ Binomial(trials, p)`, with `first ≤ trials`.
///
/// Terms are stepped in the log domain using the ratio between successive
/// probability masses.
fn upper_tail(trials: u32, first: u32, p: f64) -> f64 {
    // 0^0 = 1 at both endpoints.
    if p <= 0.0 {
        return if first == 0 { 1.0 } else { 0.0 };
    }
    if p >= 1.0 {
        return 1.0;
    }

    let ln_p = p.ln();
    let ln_q = (-p).ln_1p();
    let ln_odds = ln_p - ln_q;

    let mut ln_term =
        ln_choose(trials, first) + f64::from(first) * ln_p + f64::from(trials - first) * ln_q;
    let mut total = 0.0;
    for i in first..=trials {
        total += ln_term.exp();
        if i < trials {
            ln_term += (f64::from(trials - i) / f64::from(i + 1)).ln() + ln_odds;
        }
    }
    total
}
