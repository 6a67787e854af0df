use crate::{Probability, Traffic, Trunks};

/// Returns the Erlang B blocking probability for `trunks` offered `traffic`.
///
/// This is the probability that a call finds every trunk busy and is lost,
/// assuming infinitely many sources and no queue:
///
/// ```text
/// B(N, A) = (A^N / N!) / Σ_{i=0..N} A^i / i!
/// ```
///
/// It is evaluated with the recurrence
/// `B(0, A) = 1`, `B(n, A) = A·B(n−1, A) / (n + A·B(n−1, A))`,
/// which never forms a factorial and stays accurate for thousands of trunks.
///
/// With zero trunks every call is blocked.
///
/// ```
/// use teletraffic_core::{Traffic, Trunks, formula::erlang_b};
///
/// let b = erlang_b(Trunks::new(10), Traffic::from_erlangs(5.08).unwrap());
/// assert!((b.get() - 0.02).abs() < 1e-3);
/// ```
#[must_use]
pub fn erlang_b(trunks: Trunks, traffic: Traffic) -> Probability {
    Probability::saturating(blocking(trunks.get(), traffic.erlangs()))
}

/// Erlang B recurrence on raw values.
pub(crate) fn blocking(trunks: u32, erlangs: f64) -> f64 {
    (1..=trunks).fold(1.0, |previous, n| {
        let carried = erlangs * previous;
        carried / (f64::from(n) + carried)
    })
}
