use teletraffic_core::Observer;

use crate::traits::{CanStopEarly, HasIteration, HasResidual};

/// Stops a solver once a residual falls within a looser tolerance.
///
/// The solver's own residual tolerance still applies; this only ends a solve
/// sooner when the caller can accept a coarser answer. `min_iters` guards
/// against stopping on a lucky early midpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoodEnough {
    tolerance: f64,
    min_iters: usize,
}

impl GoodEnough {
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            min_iters: 1,
        }
    }

    /// Requires at least `min_iters` steps before stopping.
    #[must_use]
    pub fn min_iters(self, min_iters: usize) -> Self {
        Self { min_iters, ..self }
    }
}

impl<E, A> Observer<E, A> for GoodEnough
where
    E: HasIteration + HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.iter() >= self.min_iters && event.residual().abs() <= self.tolerance)
            .then(A::stop_early)
    }
}
