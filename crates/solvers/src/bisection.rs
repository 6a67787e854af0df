//! Bracketing root finder for single-variable equation problems.
//!
//! Bisection needs nothing from the model but a sign change across the
//! starting bracket, which makes it the right tool for inverting monotone
//! curves such as Erlang B: it cannot diverge and the number of iterations
//! needed for a given bracket width is known in advance.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use bracket::BracketError;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use teletraffic_core::{EquationProblem, Model, Observer};
use tracing::debug;

use crate::{Evaluation, evaluate};

use bracket::Bracket;

/// Finds a root of the equation using the bisection method.
///
/// Both endpoints are evaluated first; if either already meets the residual
/// tolerance it is returned with zero iterations. Each midpoint evaluation is
/// then reported to `observer` before the convergence checks, so an observer
/// sees every step including the last one.
///
/// When the solve ends without converging, the evaluation with the smallest
/// residual magnitude is reported.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or does not straddle a root,
/// if the model or problem fails, or if a residual is not finite.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let [lo, hi] = bracket::ordered(bracket)?;
    debug!(
        lo,
        hi,
        max_iters = config.max_iters(),
        residual_tol = config.residual_tol(),
        "starting bisection"
    );

    let lower = evaluate_at(model, problem, lo)?;
    if lower.residual.abs() <= config.residual_tol() {
        return Ok(finished(Solution::from_eval(lower, Status::Converged, 0)));
    }

    let upper = evaluate_at(model, problem, hi)?;
    if upper.residual.abs() <= config.residual_tol() {
        return Ok(finished(Solution::from_eval(upper, Status::Converged, 0)));
    }

    let mut bracket = Bracket::new(lower, upper)?;

    for iter in 1..=config.max_iters() {
        let Some(x) = bracket.split() else {
            let closest = bracket.into_closest();
            return Ok(finished(Solution::from_eval(closest, Status::Stalled, iter - 1)));
        };

        let mid = evaluate_at(model, problem, x)?;

        let event = Event {
            iter,
            bracket: bracket.bounds(),
            x,
            residual: mid.residual,
            snapshot: &mid.snapshot,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            bracket.retire(mid);
            let closest = bracket.into_closest();
            return Ok(finished(Solution::from_eval(
                closest,
                Status::StoppedByObserver,
                iter,
            )));
        }

        let residual_converged = mid.residual.abs() <= config.residual_tol();
        if residual_converged || bracket.is_x_converged(config.x_abs_tol(), config.x_rel_tol()) {
            return Ok(finished(Solution::from_eval(mid, Status::Converged, iter)));
        }

        bracket.shrink(mid);
    }

    let closest = bracket.into_closest();
    Ok(finished(Solution::from_eval(
        closest,
        Status::MaxIters,
        config.max_iters(),
    )))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}

/// Evaluates at `x`, rejecting residuals that cannot be compared or signed.
pub(crate) fn evaluate_at<M, P>(
    model: &M,
    problem: &P,
    x: f64,
) -> Result<Evaluation<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<Input = M::Input, Output = M::Output>,
{
    let eval = evaluate(model, problem, x).map_err(|err| Error::evaluation(x, err))?;
    if eval.residual.is_finite() {
        Ok(eval)
    } else {
        Err(Error::NonFiniteResidual {
            x,
            residual: eval.residual,
        })
    }
}

fn finished<I, O>(solution: Solution<I, O>) -> Solution<I, O> {
    debug!(
        status = ?solution.status,
        x = solution.x,
        residual = solution.residual,
        iters = solution.iters,
        "bisection finished"
    );
    solution
}
