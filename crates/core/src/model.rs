use crate::{DomainError, LossFormula, Probability, Traffic, Trunks};

/// A callable model that maps an input to an output.
///
/// Solvers treat a model as a black box: they choose inputs and read outputs.
/// [`GosCurve`] is the model used to invert the Erlang formulas.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

/// Grade of service as a function of offered traffic, for a fixed trunk group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GosCurve {
    pub trunks: Trunks,
    pub formula: LossFormula,
}

impl GosCurve {
    #[must_use]
    pub fn new(trunks: Trunks, formula: LossFormula) -> Self {
        Self { trunks, formula }
    }
}

impl Model for GosCurve {
    type Input = Traffic;
    type Output = Probability;
    type Error = DomainError;

    fn call(&self, traffic: &Traffic) -> Result<Probability, DomainError> {
        self.formula.gos(self.trunks, *traffic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn curve_evaluates_its_formula() {
        let curve = GosCurve::new(Trunks::new(1), LossFormula::ErlangB);
        let gos = curve.call(&Traffic::from_erlangs(1.0).unwrap()).unwrap();
        assert_relative_eq!(gos.get(), 0.5);
    }

    #[test]
    fn curve_surfaces_domain_errors() {
        let curve = GosCurve::new(Trunks::new(2), LossFormula::ErlangC);
        let result = curve.call(&Traffic::from_erlangs(2.0).unwrap());
        assert!(matches!(result, Err(DomainError::UnstableQueue { .. })));
    }
}
