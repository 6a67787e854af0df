use crate::{DomainError, Probability, Traffic, Trunks};

use super::blocking;

/// Returns the Erlang C probability that a call has to wait.
///
/// Calls that find every trunk busy queue until one frees up. The queue is
/// only stable while the offered traffic is strictly below the trunk count, so
/// `traffic >= trunks` is rejected. The result is derived from Erlang B:
///
/// ```text
/// C(N, A) = N·B(N, A) / (N − A·(1 − B(N, A)))
/// ```
///
/// Zero trunks returns 0 by convention; it is not a physically meaningful
/// queue and callers that care should reject it themselves.
///
/// # Errors
///
/// Returns [`DomainError::UnstableQueue`] if `traffic >= trunks` for a
/// non-empty trunk group.
///
/// ```
/// use teletraffic_core::{DomainError, Traffic, Trunks, formula::erlang_c};
///
/// let a = Traffic::from_erlangs(3.0).unwrap();
/// let c = erlang_c(Trunks::new(5), a).unwrap();
/// assert!((c.get() - 0.2362).abs() < 1e-4);
///
/// let overloaded = Traffic::from_erlangs(5.0).unwrap();
/// assert!(matches!(
///     erlang_c(Trunks::new(5), overloaded),
///     Err(DomainError::UnstableQueue { .. })
/// ));
/// ```
pub fn erlang_c(trunks: Trunks, traffic: Traffic) -> Result<Probability, DomainError> {
    let n = trunks.get();
    if n == 0 {
        return Ok(Probability::ZERO);
    }

    let servers = trunks.as_f64();
    let a = traffic.erlangs();
    if a >= servers {
        return Err(DomainError::UnstableQueue {
            trunks: n,
            traffic: a,
        });
    }

    let b = blocking(n, a);
    Ok(Probability::saturating(servers * b / (servers - a * (1.0 - b))))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::formula::erlang_b;

    fn traffic(erlangs: f64) -> Traffic {
        Traffic::from_erlangs(erlangs).unwrap()
    }

    /// Summation form: (A^N/N! · N/(N−A)) / (Σ_{i<N} A^i/i! + A^N/N! · N/(N−A)).
    fn by_definition(n: u32, a: f64) -> f64 {
        let mut term = 1.0;
        let mut below = 0.0;
        for i in 0..n {
            if i > 0 {
                term *= a / f64::from(i);
            }
            below += term;
        }
        let top = term * a / f64::from(n) * f64::from(n) / (f64::from(n) - a);
        top / (below + top)
    }

    #[test]
    fn five_trunks_three_erlangs() {
        let c = erlang_c(Trunks::new(5), traffic(3.0)).unwrap();
        assert_abs_diff_eq!(c.get(), 0.236_152, epsilon = 1e-6);
    }

    #[test]
    fn matches_summation_form() {
        for n in 1..=15 {
            for fraction in [0.05, 0.3, 0.6, 0.9, 0.99] {
                let a = fraction * f64::from(n);
                let c = erlang_c(Trunks::new(n), traffic(a)).unwrap();
                assert_relative_eq!(c.get(), by_definition(n, a), max_relative = 1e-10);
            }
        }
    }

    #[test]
    fn never_below_erlang_b() {
        for n in 1..=30 {
            for fraction in [0.0, 0.1, 0.5, 0.8, 0.999] {
                let a = traffic(fraction * f64::from(n));
                let c = erlang_c(Trunks::new(n), a).unwrap();
                let b = erlang_b(Trunks::new(n), a);
                assert!(c >= b, "C < B for N = {n}, A = {}", a.erlangs());
            }
        }
    }

    #[test]
    fn rejects_unstable_queue() {
        for a in [4.0, 4.5, 100.0] {
            let err = erlang_c(Trunks::new(4), traffic(a)).unwrap_err();
            assert_eq!(
                err,
                DomainError::UnstableQueue {
                    trunks: 4,
                    traffic: a
                }
            );
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn no_trunks_means_no_delay() {
        assert_eq!(erlang_c(Trunks::new(0), traffic(2.0)).unwrap().get(), 0.0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn approaches_certain_delay_near_saturation() {
        let c = erlang_c(Trunks::new(3), traffic(3.0 - 1e-9)).unwrap();
        assert!(c.get() > 0.999_999);
        assert_eq!(erlang_c(Trunks::new(3), Traffic::ZERO).unwrap().get(), 0.0);
    }
}
