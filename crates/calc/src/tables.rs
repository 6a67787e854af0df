//! Batch sweeps: the method comparison table and the capacity tables.

use std::ops::RangeInclusive;

use serde::Serialize;
use tracing::debug;
use uom::si::{f64::Time, time::minute};

use teletraffic_core::{
    DomainError, GosMethod, GosTarget, Load, LossFormula, Probability, Sources, Traffic,
    TrafficUnit, Trunks,
};
use teletraffic_solvers::bisection::Config;

use crate::{CallRate, CapacityRequest, Demand, Error, HoldingTime, format, format::Table};

/// Grade of service under every method for a grid of users and trunks.
///
/// Every user offers the same `call_rate` and `holding_time`, so the total
/// traffic grows with the user count while the per-user occupancy is fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSweep {
    pub call_rate: CallRate,
    pub holding_time: HoldingTime,
    pub users: Vec<u32>,
    pub trunks: RangeInclusive<u32>,
}

impl Default for ComparisonSweep {
    /// 5 calls/h of 3 min per user, 5 to 50 users in steps of 5, 1 to 10 trunks.
    fn default() -> Self {
        Self {
            call_rate: CallRate(5.0),
            holding_time: HoldingTime(Time::new::<minute>(3.0)),
            users: (5..=50).step_by(5).collect(),
            trunks: 1..=10,
        }
    }
}

/// One line of a [`ComparisonSweep`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub trunks: Trunks,
    pub users: Sources,
    #[serde(rename = "traffic_erlangs")]
    pub traffic: Traffic,
    pub erlang_b: Probability,
    pub binomial: Probability,
    /// `None` where the queue is unstable (`A ≥ N`).
    pub erlang_c: Option<Probability>,
}

impl ComparisonRow {
    fn evaluate(demand: &Demand) -> Result<Self, Error> {
        let load = Load {
            trunks: demand.trunks,
            traffic: demand.traffic()?,
            sources: demand.users,
            occupancy: demand.occupancy()?,
        };

        let erlang_c = match GosMethod::ErlangC.evaluate(&load) {
            Ok(gos) => Some(gos),
            Err(DomainError::UnstableQueue { .. }) => None,
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            trunks: load.trunks,
            users: load.sources,
            traffic: load.traffic,
            erlang_b: GosMethod::ErlangB.evaluate(&load)?,
            binomial: GosMethod::Binomial.evaluate(&load)?,
            erlang_c,
        })
    }
}

impl ComparisonSweep {
    /// Evaluates the grid, users in the outer loop and trunks in the inner one.
    ///
    /// # Errors
    ///
    /// Returns an error if a user count is zero or one user offers more than
    /// one Erlang (the Binomial occupancy would exceed 1).
    pub fn run(&self) -> Result<Vec<ComparisonRow>, Error> {
        let mut rows = Vec::new();
        for &count in &self.users {
            let users = Sources::new(count)?;
            for n in self.trunks.clone() {
                let demand = Demand {
                    trunks: Trunks::new(n),
                    users,
                    call_rate: self.call_rate,
                    holding_time: self.holding_time,
                    unit: TrafficUnit::Erlang,
                };
                rows.push(ComparisonRow::evaluate(&demand)?);
            }
        }
        debug!(rows = rows.len(), "comparison sweep finished");
        Ok(rows)
    }
}

/// Renders comparison rows with percentages, `n/a` where Erlang C is undefined.
#[must_use]
pub fn comparison_table(rows: &[ComparisonRow]) -> Table {
    let mut table = Table::new(["N", "K", "Erlang B", "Binomial", "Erlang C"])
        .title("GoS Comparison Results");
    for row in rows {
        table.push_row([
            row.trunks.to_string(),
            row.users.to_string(),
            format::percent(row.erlang_b),
            format::percent(row.binomial),
            row.erlang_c
                .map_or_else(|| "n/a".to_owned(), |c| format::percent(c)),
        ]);
    }
    table
}

/// Offered traffic for a grid of trunk counts and GoS targets.
#[derive(Debug, Clone, PartialEq)]
pub struct CapacitySweep {
    pub trunks: RangeInclusive<u32>,
    /// Targets as probabilities in `[0, 1)`.
    pub targets: Vec<f64>,
    pub formulas: Vec<LossFormula>,
}

impl Default for CapacitySweep {
    /// 1 to 10 trunks at 0.5%, 1%, 2%, 3% and 5%, for Erlang B and Erlang C.
    fn default() -> Self {
        Self {
            trunks: 1..=10,
            targets: vec![0.005, 0.01, 0.02, 0.03, 0.05],
            formulas: LossFormula::ALL.to_vec(),
        }
    }
}

/// One formula's table from a [`CapacitySweep`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapacityTable {
    pub formula: LossFormula,
    pub targets: Vec<GosTarget>,
    pub rows: Vec<CapacityRow>,
}

/// Offered traffic for one trunk count, one entry per target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapacityRow {
    pub trunks: Trunks,
    #[serde(rename = "traffic_erlangs")]
    pub traffic: Vec<Traffic>,
}

impl CapacitySweep {
    /// Solves every cell of every table.
    ///
    /// # Errors
    ///
    /// Returns an error if a target is outside `[0, 1)` or any cell fails to
    /// solve (including a zero trunk count).
    pub fn run(&self, config: &Config) -> Result<Vec<CapacityTable>, Error> {
        let targets = self
            .targets
            .iter()
            .map(|&t| GosTarget::new(t))
            .collect::<Result<Vec<_>, _>>()?;

        self.formulas
            .iter()
            .map(|&formula| {
                let rows = self
                    .trunks
                    .clone()
                    .map(|n| {
                        let trunks = Trunks::new(n);
                        let traffic = targets
                            .iter()
                            .map(|&target| {
                                CapacityRequest {
                                    trunks,
                                    target,
                                    formula,
                                }
                                .solve(config)
                                .map(|report| report.traffic)
                            })
                            .collect::<Result<Vec<_>, _>>()?;
                        Ok::<_, Error>(CapacityRow { trunks, traffic })
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                debug!(%formula, rows = rows.len(), "capacity table finished");
                Ok::<_, Error>(CapacityTable {
                    formula,
                    targets: targets.clone(),
                    rows,
                })
            })
            .collect()
    }
}

impl CapacityTable {
    /// Renders the table with an `N/B` column and one column per target.
    #[must_use]
    pub fn to_table(&self) -> Table {
        let header = std::iter::once("N/B".to_owned())
            .chain(self.targets.iter().map(|&t| format::percent(t)));
        let mut table = Table::new(header).title(format!("{} Results", self.formula));
        for row in &self.rows {
            table.push_row(
                std::iter::once(row.trunks.to_string())
                    .chain(row.traffic.iter().map(|a| format!("{:.4}", a.erlangs()))),
            );
        }
        table
    }
}
