//! Grade-of-service formulas.
//!
//! - [`erlang_b`] — loss system, infinite sources, blocked calls cleared
//! - [`erlang_c`] — delay system, infinite sources, blocked calls queued
//! - [`binomial`] — loss system, finite sources, per-source occupancy
//!
//! All three are pure functions of validated quantities. None of them
//! evaluates a factorial directly: Erlang B runs its recurrence in the trunk
//! count, Erlang C is derived from Erlang B, and the Binomial terms are summed
//! in the log domain.

mod binomial;
mod combinatorics;
mod erlang_b;
mod erlang_c;

pub use binomial::{Occupancy, binomial};
pub use combinatorics::{choose, ln_choose};
pub use erlang_b::erlang_b;
pub use erlang_c::erlang_c;

pub(crate) use erlang_b::blocking;
