//! Shared helpers for the cross-crate tests.

use teletraffic_core::{GosTarget, Traffic, Trunks};

/// Offered traffic in Erlangs; panics on invalid input.
#[must_use]
pub fn erlangs(value: f64) -> Traffic {
    Traffic::from_erlangs(value).expect("valid traffic")
}

/// A GoS target from a percentage; panics on invalid input.
#[must_use]
pub fn percent(value: f64) -> GosTarget {
    GosTarget::from_percent(value).expect("valid target")
}

#[must_use]
pub fn trunks(n: u32) -> Trunks {
    Trunks::new(n)
}
