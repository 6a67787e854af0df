use std::marker::PhantomData;

use teletraffic_core::Observer;

use crate::traits::{HasIteration, HasResidual};

/// One recorded solver step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub iter: usize,
    pub x: f64,
    pub residual: f64,
}

/// Records every step a solver reports.
///
/// Pass `&mut history` to a solver to keep ownership of the record.
#[derive(Debug, Clone)]
pub struct History<A> {
    steps: Vec<Step>,
    _action: PhantomData<fn() -> A>,
}

impl<A> History<A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            _action: PhantomData,
        }
    }

    /// Returns the recorded steps in the order they were observed.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the most recent step, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<A> Default for History<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, A> Observer<E, A> for History<A>
where
    E: HasIteration + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.steps.push(Step {
            iter: event.iter(),
            x: event.x(),
            residual: event.residual(),
        });
        None
    }
}

impl<E, A> Observer<E, A> for &mut History<A>
where
    E: HasIteration + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use teletraffic_core::{GosTarget, LossFormula, Trunks};
    use teletraffic_solvers::{
        bisection::{Action, Config},
        solve_offered_traffic_observed,
    };

    #[test]
    fn records_every_midpoint() {
        let mut history = History::<Action>::new();

        let found = solve_offered_traffic_observed(
            GosTarget::from_percent(2.0).unwrap(),
            Trunks::new(10),
            LossFormula::ErlangB,
            &Config::default(),
            &mut history,
        )
        .unwrap();

        assert_eq!(history.len(), found.iters);
        // The first midpoint halves the bracket [0, N].
        assert_relative_eq!(history.steps()[0].x, 5.0);
        assert!(history.steps().iter().enumerate().all(|(i, s)| s.iter == i + 1));

        let last = history.last().unwrap();
        assert_relative_eq!(last.x, found.traffic.erlangs());
        assert!(last.residual.abs() <= 1e-10);
    }
}
