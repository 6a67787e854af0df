//! Reusable observers for the teletraffic solvers.
//!
//! Every observer here is generic over capability traits rather than a
//! concrete solver event, so it plugs into [`bisection::solve`] as well as
//! [`solve_offered_traffic_observed`].
//!
//! - [`traits`] — capability traits ([`HasResidual`], [`HasIteration`],
//!   [`CanStopEarly`])
//! - [`TracingObserver`] — logs each step as a `tracing` event
//! - [`History`] — records each step for later inspection
//! - [`GoodEnough`] — stops once the residual is below a looser tolerance
//!
//! [`Observer`]: teletraffic_core::Observer
//! [`bisection::solve`]: teletraffic_solvers::bisection::solve
//! [`solve_offered_traffic_observed`]: teletraffic_solvers::solve_offered_traffic_observed
//! [`HasResidual`]: traits::HasResidual
//! [`HasIteration`]: traits::HasIteration
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod good_enough;
mod history;
mod tracing_observer;

pub use good_enough::GoodEnough;
pub use history::{History, Step};
pub use tracing_observer::TracingObserver;
