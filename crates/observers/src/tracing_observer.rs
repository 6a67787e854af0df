use std::marker::PhantomData;

use teletraffic_core::Observer;
use tracing::trace;

use crate::traits::{HasIteration, HasResidual};

/// Emits one `trace`-level event per solver step.
///
/// Never requests an action, so it can be dropped into any solve without
/// changing the result.
#[derive(Debug, Clone, Copy)]
pub struct TracingObserver<A> {
    label: &'static str,
    _action: PhantomData<fn() -> A>,
}

impl<A> TracingObserver<A> {
    /// Creates an observer that tags each event with `label`.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            _action: PhantomData,
        }
    }
}

impl<A> Default for TracingObserver<A> {
    fn default() -> Self {
        Self::new("solver")
    }
}

impl<E, A> Observer<E, A> for TracingObserver<A>
where
    E: HasIteration + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        trace!(
            solver = self.label,
            iter = event.iter(),
            x = event.x(),
            residual = event.residual(),
            "step"
        );
        None
    }
}
