//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types so an
//! observer can be written once.
//!
//! # Example
//!
//! ```rust
//! use teletraffic_core::Observer;
//! use teletraffic_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct FirstNegative;
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for FirstNegative {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual() < 0.0).then(A::stop_early)
//!     }
//! }
//! ```

use teletraffic_solvers::bisection;

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An event produced by an iterative solver step.
pub trait HasIteration {
    /// Returns the 1-based iteration number.
    fn iter(&self) -> usize;

    /// Returns the solver variable evaluated at this step.
    fn x(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<I, O> HasResidual for bisection::Event<'_, I, O> {
    fn residual(&self) -> f64 {
        self.residual
    }
}

impl<I, O> HasIteration for bisection::Event<'_, I, O> {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.x
    }
}

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
