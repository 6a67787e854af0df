use crate::{GosTarget, InputError, Probability, Traffic};

/// Defines a single-variable equation problem to be solved.
///
/// An equation problem maps the solver variable `x` to a model input, then
/// computes a residual from the model input and output. Solvers search for
/// the `x` that drives the residual to zero.
pub trait EquationProblem {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps the solver variable into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: f64) -> Result<Self::Input, Self::Error>;

    /// Computes the residual from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the residual cannot be computed.
    fn residual(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;
}

/// Finds the offered traffic (in Erlangs) at which a [`GosCurve`] hits a target.
///
/// The residual is `gos − target`, positive when the trunk group is
/// overloaded relative to the objective.
///
/// [`GosCurve`]: crate::GosCurve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetGos {
    pub target: GosTarget,
}

impl TargetGos {
    #[must_use]
    pub fn new(target: GosTarget) -> Self {
        Self { target }
    }
}

impl EquationProblem for TargetGos {
    type Input = Traffic;
    type Output = Probability;
    type Error = InputError;

    fn input(&self, x: f64) -> Result<Traffic, InputError> {
        Traffic::from_erlangs(x)
    }

    fn residual(&self, _traffic: &Traffic, gos: &Probability) -> Result<f64, InputError> {
        Ok(gos.get() - self.target.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn residual_sign_follows_overload() {
        let problem = TargetGos::new(GosTarget::new(0.02).unwrap());
        let traffic = problem.input(4.0).unwrap();

        let over = problem
            .residual(&traffic, &Probability::new(0.05).unwrap())
            .unwrap();
        let under = problem
            .residual(&traffic, &Probability::new(0.01).unwrap())
            .unwrap();

        assert_relative_eq!(over, 0.03);
        assert_relative_eq!(under, -0.01);
    }

    #[test]
    fn negative_traffic_is_rejected() {
        let problem = TargetGos::new(GosTarget::new(0.1).unwrap());
        assert!(matches!(
            problem.input(-1.0),
            Err(InputError::Negative { .. })
        ));
    }
}
