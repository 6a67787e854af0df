//! Numerical solvers for teletraffic.
//!
//! - [`bisection`] — a bracketing root finder over any [`Model`] and
//!   [`EquationProblem`], with observer hooks
//! - [`traffic`] — offered traffic a trunk group supports at a target grade of
//!   service, found by bisecting Erlang B or Erlang C
//!
//! [`Model`]: teletraffic_core::Model
//! [`EquationProblem`]: teletraffic_core::EquationProblem

mod evaluate;

pub mod bisection;
pub mod traffic;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
pub use traffic::{OfferedTraffic, solve_offered_traffic, solve_offered_traffic_observed};
