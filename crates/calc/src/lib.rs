//! Grade-of-service calculator for trunk groups.
//!
//! Turns a user population into offered traffic, evaluates it with the
//! formulas from [`teletraffic_core`], and inverts them with
//! [`teletraffic_solvers`]:
//!
//! - [`evaluate_gos`] — GoS of a [`Demand`] under a chosen method
//! - [`CapacityRequest`] — offered traffic a trunk group supports at a target
//! - [`ComparisonSweep`], [`CapacitySweep`] — the batch tables
//! - [`cli`] — the `teletraffic` command-line front end

pub mod cli;
pub mod format;

mod capacity;
mod demand;
mod error;
mod gos;
mod tables;

pub use capacity::{CapacityReport, CapacityRequest};
pub use demand::{CallRate, Demand, HoldingTime, ParseHoldingTimeError};
pub use error::Error;
pub use gos::{GosReport, GosRequest, evaluate_gos};
pub use tables::{
    CapacityRow, CapacitySweep, CapacityTable, ComparisonRow, ComparisonSweep, comparison_table,
};
