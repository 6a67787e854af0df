use thiserror::Error;

/// Errors returned when a value cannot represent the requested quantity.
///
/// These are caller mistakes (a negative traffic intensity, a GoS target of
/// 100%, zero traffic sources) and are detected before any formula runs.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum InputError {
    #[error("{quantity} is not finite: {value}")]
    NotFinite { quantity: &'static str, value: f64 },

    #[error("{quantity} must not be negative: {value}")]
    Negative { quantity: &'static str, value: f64 },

    #[error("{quantity} {value} is outside the range {range}")]
    OutOfRange {
        quantity: &'static str,
        value: f64,
        range: &'static str,
    },

    #[error("trunk count must not be negative: {0}")]
    NegativeTrunks(i64),

    #[error("trunk count {0} does not fit in 32 bits")]
    TooManyTrunks(i64),

    #[error("source count must be at least one")]
    NoSources,
}

/// Errors returned when a formula is evaluated outside its mathematical domain.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum DomainError {
    /// Erlang C requires the offered traffic to stay below the trunk count.
    #[error("queue is unstable: {traffic} E offered to {trunks} trunks (need traffic < trunks)")]
    UnstableQueue { trunks: u32, traffic: f64 },

    /// Binomial traffic requires a per-source occupancy in `[0, 1]`.
    #[error("occupancy {0} is not a probability in [0, 1]")]
    OccupancyOutOfRange(f64),
}

/// Rejects NaN and infinities for the named quantity.
pub(crate) fn check_finite(quantity: &'static str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NotFinite { quantity, value })
    }
}
