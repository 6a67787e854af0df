//! Core types and formulas for teletraffic engineering.
//!
//! This crate computes the grade of service (GoS) of a trunk group and defines
//! the abstractions the solvers build on:
//!
//! - [`Trunks`], [`Sources`], [`Traffic`], [`Probability`], [`GosTarget`] —
//!   quantities validated at construction
//! - [`formula`] — Erlang B, Erlang C and Binomial loss formulas
//! - [`GosMethod`], [`LossFormula`] — closed model selectors
//! - [`Model`], [`EquationProblem`], [`Observer`] — the seams a solver uses to
//!   evaluate a curve, measure a residual and report progress
//!
//! Every function here is pure: no global state, no I/O.

pub mod formula;

mod count;
mod error;
mod method;
mod model;
mod observer;
mod probability;
mod problem;
mod traffic;

pub use count::{Sources, Trunks};
pub use error::{DomainError, InputError};
pub use method::{GosMethod, Load, LossFormula, NotInvertible, ParseMethodError};
pub use model::{GosCurve, Model, Snapshot};
pub use observer::Observer;
pub use probability::{GosTarget, Probability};
pub use problem::{EquationProblem, TargetGos};
pub use traffic::{CCS_PER_ERLANG, ParseUnitError, Traffic, TrafficUnit};
