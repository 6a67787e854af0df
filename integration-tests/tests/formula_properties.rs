use proptest::prelude::*;

use integration_tests::{erlangs, trunks};
use teletraffic_core::{
    Sources,
    formula::{Occupancy, binomial, erlang_b, erlang_c},
};

/// Slack for comparisons between independently rounded results.
const SLACK: f64 = 1e-12;

proptest! {
    #[test]
    fn erlang_b_is_a_probability(n in 0u32..200, a in 0.0f64..500.0) {
        let b = erlang_b(trunks(n), erlangs(a)).get();
        prop_assert!((0.0..=1.0).contains(&b));
    }

    #[test]
    fn erlang_b_grows_with_traffic(n in 0u32..100, a in 0.0f64..100.0, extra in 0.0f64..10.0) {
        let low = erlang_b(trunks(n), erlangs(a)).get();
        let high = erlang_b(trunks(n), erlangs(a + extra)).get();
        prop_assert!(low <= high + SLACK, "B({n}, {a}) = {low} > B({n}, {}) = {high}", a + extra);
    }

    #[test]
    fn erlang_b_shrinks_with_trunks(n in 0u32..100, a in 0.0f64..100.0) {
        let fewer = erlang_b(trunks(n), erlangs(a)).get();
        let more = erlang_b(trunks(n + 1), erlangs(a)).get();
        prop_assert!(more <= fewer + SLACK);
    }

    #[test]
    fn erlang_c_dominates_erlang_b(n in 1u32..100, load in 0.0f64..0.999) {
        let a = erlangs(load * f64::from(n));
        let c = erlang_c(trunks(n), a).unwrap().get();
        let b = erlang_b(trunks(n), a).get();
        prop_assert!((0.0..=1.0).contains(&c));
        prop_assert!(c + SLACK >= b, "C = {c} < B = {b}");
    }

    #[test]
    fn erlang_c_rejects_overload(n in 1u32..100, excess in 0.0f64..50.0) {
        let a = erlangs(f64::from(n) + excess);
        prop_assert!(erlang_c(trunks(n), a).is_err());
    }

    #[test]
    fn binomial_is_a_probability(n in 0u32..60, m in 1u32..400, p in 0.0f64..=1.0) {
        let loss = binomial(trunks(n), Sources::new(m).unwrap(), Occupancy::new(p).unwrap()).get();
        prop_assert!((0.0..=1.0).contains(&loss));
        if n >= m {
            prop_assert_eq!(loss, 0.0);
        }
    }

    #[test]
    fn binomial_shrinks_with_trunks(n in 0u32..60, m in 1u32..400, p in 0.0f64..1.0) {
        let sources = Sources::new(m).unwrap();
        let occupancy = Occupancy::new(p).unwrap();
        let fewer = binomial(trunks(n), sources, occupancy).get();
        let more = binomial(trunks(n + 1), sources, occupancy).get();
        prop_assert!(more <= fewer + SLACK);
    }
}
