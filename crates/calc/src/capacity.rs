use std::fmt;

use serde::Serialize;

use teletraffic_core::{GosTarget, LossFormula, Probability, Traffic, Trunks};
use teletraffic_observers::TracingObserver;
use teletraffic_solvers::{
    bisection::{Action, Config},
    solve_offered_traffic_observed,
};

use crate::{Error, format};

/// Offered traffic a trunk group supports at a target grade of service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityRequest {
    pub trunks: Trunks,
    pub target: GosTarget,
    pub formula: LossFormula,
}

/// A converged answer to a [`CapacityRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CapacityReport {
    pub formula: LossFormula,
    pub trunks: Trunks,
    pub target: GosTarget,
    #[serde(rename = "traffic_erlangs")]
    pub traffic: Traffic,
    pub gos: Probability,
    pub iters: usize,
}

impl CapacityRequest {
    /// Solves for the offered traffic, logging each bisection step at `trace`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Solve`] if the request cannot be solved or the solver
    /// stops before meeting the tolerance in `config`.
    pub fn solve(&self, config: &Config) -> Result<CapacityReport, Error> {
        let found = solve_offered_traffic_observed(
            self.target,
            self.trunks,
            self.formula,
            config,
            TracingObserver::<Action>::new(self.formula.name()),
        )?
        .require_converged()?;

        Ok(CapacityReport {
            formula: self.formula,
            trunks: self.trunks,
            target: self.target,
            traffic: found.traffic,
            gos: found.gos,
            iters: found.iters,
        })
    }
}

impl fmt::Display for CapacityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Traffic intensity (A): {}", format::erlangs(self.traffic))
    }
}
