//! Offered traffic a trunk group supports at a target grade of service.
//!
//! Erlang B and Erlang C both increase monotonically with offered traffic for
//! a fixed trunk count, so the inverse is found by bisecting
//! `GoS(N, A) − target` over `A ∈ [0, ceiling]`, where the ceiling comes from
//! [`LossFormula::traffic_ceiling`].

use thiserror::Error;
use tracing::debug;

use teletraffic_core::{
    GosCurve, GosTarget, LossFormula, Observer, Probability, TargetGos, Traffic, Trunks,
};

use crate::bisection::{self, Action, Config, Event, Status};

/// The offered traffic found for a target grade of service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OfferedTraffic {
    /// Offered traffic at the reported estimate.
    pub traffic: Traffic,
    /// Grade of service the formula gives at `traffic`.
    pub gos: Probability,
    /// The target that was solved for.
    pub target: GosTarget,
    /// Why the solver stopped.
    pub status: Status,
    /// Number of bisection steps taken.
    pub iters: usize,
}

impl OfferedTraffic {
    /// Returns true if the residual tolerance was met.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the result only if the solver converged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConvergenceLimit`] carrying the best estimate when the
    /// solver stopped for any other reason.
    pub fn require_converged(self) -> Result<Self, Error> {
        if self.is_converged() {
            Ok(self)
        } else {
            Err(Error::ConvergenceLimit {
                status: self.status,
                iters: self.iters,
                traffic: self.traffic.erlangs(),
                gos: self.gos.get(),
            })
        }
    }
}

/// Errors from solving for offered traffic.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A trunk group without trunks carries no traffic at any grade of service.
    #[error("at least one trunk is required")]
    NoTrunks,

    /// The target exceeds the grade of service at the search ceiling.
    #[error(
        "{formula} with {trunks} trunks cannot reach a GoS of {target} \
         (at most {max_gos} at {ceiling} Erlang)"
    )]
    TargetUnreachable {
        formula: LossFormula,
        trunks: Trunks,
        target: GosTarget,
        ceiling: f64,
        max_gos: Probability,
    },

    /// The solver stopped before meeting its tolerance.
    #[error("no convergence ({status:?} after {iters} iterations): best A = {traffic} Erlang, GoS = {gos}")]
    ConvergenceLimit {
        status: Status,
        iters: usize,
        traffic: f64,
        gos: f64,
    },

    #[error(transparent)]
    Bisection(#[from] bisection::Error),
}

/// Finds the offered traffic at which `trunks` reach `target` under `formula`.
///
/// A zero target is met exactly at zero traffic. The returned value is the
/// best estimate seen; check [`OfferedTraffic::is_converged`] or call
/// [`OfferedTraffic::require_converged`] when the tolerance matters.
///
/// ```
/// use teletraffic_core::{GosTarget, LossFormula, Trunks};
/// use teletraffic_solvers::{bisection::Config, solve_offered_traffic};
///
/// let target = GosTarget::from_percent(2.0).unwrap();
/// let found = solve_offered_traffic(target, Trunks::new(10), LossFormula::ErlangB, &Config::default())
///     .unwrap()
///     .require_converged()
///     .unwrap();
/// assert!((found.traffic.erlangs() - 5.084).abs() < 1e-3);
/// ```
///
/// # Errors
///
/// Returns [`Error::NoTrunks`] for an empty trunk group,
/// [`Error::TargetUnreachable`] when the target lies above the grade of
/// service at the search ceiling, and [`Error::Bisection`] if an evaluation
/// fails.
pub fn solve_offered_traffic(
    target: GosTarget,
    trunks: Trunks,
    formula: LossFormula,
    config: &Config,
) -> Result<OfferedTraffic, Error> {
    solve_offered_traffic_observed(target, trunks, formula, config, ())
}

/// Like [`solve_offered_traffic`], reporting each bisection step to `observer`.
///
/// # Errors
///
/// Same as [`solve_offered_traffic`].
pub fn solve_offered_traffic_observed<Obs>(
    target: GosTarget,
    trunks: Trunks,
    formula: LossFormula,
    config: &Config,
    observer: Obs,
) -> Result<OfferedTraffic, Error>
where
    Obs: for<'a> Observer<Event<'a, Traffic, Probability>, Action>,
{
    if trunks.get() == 0 {
        return Err(Error::NoTrunks);
    }

    let curve = GosCurve::new(trunks, formula);
    let problem = TargetGos::new(target);
    let ceiling = formula.traffic_ceiling(trunks);

    let top = bisection::evaluate_at(&curve, &problem, ceiling)?;
    if top.residual < 0.0 {
        return Err(Error::TargetUnreachable {
            formula,
            trunks,
            target,
            ceiling,
            max_gos: top.snapshot.output,
        });
    }

    debug!(%formula, %trunks, %target, ceiling, "solving for offered traffic");
    let solution = bisection::solve(&curve, &problem, [0.0, ceiling], config, observer)?;

    Ok(OfferedTraffic {
        traffic: solution.snapshot.input,
        gos: solution.snapshot.output,
        target,
        status: solution.status,
        iters: solution.iters,
    })
}
