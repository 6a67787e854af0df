use std::fmt;

use serde::Serialize;
use tracing::debug;

use teletraffic_core::{GosMethod, Probability, Sources, Traffic, TrafficUnit, Trunks, formula};

use crate::{Demand, Error, format};

/// Grade of service for a demand under one method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GosRequest {
    pub demand: Demand,
    pub method: GosMethod,
}

/// Result of [`evaluate_gos`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GosReport {
    pub method: GosMethod,
    pub trunks: Trunks,
    pub users: Sources,
    /// Offered traffic in Erlangs, whatever the display unit.
    #[serde(rename = "traffic_erlangs")]
    pub traffic: Traffic,
    pub unit: TrafficUnit,
    pub gos: Probability,
}

impl GosReport {
    /// Returns the offered traffic in the requested display unit.
    #[must_use]
    pub fn traffic_in_unit(&self) -> f64 {
        self.traffic.in_unit(self.unit)
    }
}

impl fmt::Display for GosReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Traffic intensity (A): {}",
            format::traffic(self.traffic, self.unit)
        )?;
        write!(
            f,
            "Grade of service ({}): {}",
            self.method,
            format::percent(self.gos)
        )
    }
}

/// Derives the offered traffic of `request.demand` and evaluates its GoS.
///
/// The Erlang formulas use `A = λ·H·K`; the Binomial formula uses the
/// per-user occupancy `λ·H` over `K` users. The traffic unit only affects how
/// the report is displayed.
///
/// # Errors
///
/// Returns [`Error::Domain`] for Erlang C when `A ≥ N` or for Binomial when a
/// single user offers more than one Erlang.
pub fn evaluate_gos(request: &GosRequest) -> Result<GosReport, Error> {
    let demand = &request.demand;
    let traffic = demand.traffic()?;

    let gos = match request.method.loss_formula() {
        Some(loss) => loss.gos(demand.trunks, traffic)?,
        None => formula::binomial(demand.trunks, demand.users, demand.occupancy()?),
    };
    debug!(
        method = %request.method,
        trunks = demand.trunks.get(),
        erlangs = traffic.erlangs(),
        gos = gos.get(),
        "evaluated grade of service"
    );

    Ok(GosReport {
        method: request.method,
        trunks: demand.trunks,
        users: demand.users,
        traffic,
        unit: demand.unit,
        gos,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use teletraffic_core::DomainError;

    use crate::{CallRate, HoldingTime};

    /// 12 users at 5 calls/h of 3 min: A = 3 Erlangs.
    fn request(trunks: u32, method: GosMethod, unit: TrafficUnit) -> GosRequest {
        GosRequest {
            demand: Demand {
                trunks: Trunks::new(trunks),
                users: Sources::new(12).unwrap(),
                call_rate: CallRate::per_hour(5.0).unwrap(),
                holding_time: HoldingTime::minutes(3.0).unwrap(),
                unit,
            },
            method,
        }
    }

    #[test]
    fn five_trunks_three_erlangs() {
        let b = evaluate_gos(&request(5, GosMethod::ErlangB, TrafficUnit::Erlang)).unwrap();
        let c = evaluate_gos(&request(5, GosMethod::ErlangC, TrafficUnit::Erlang)).unwrap();

        assert_relative_eq!(b.traffic.erlangs(), 3.0);
        assert_abs_diff_eq!(b.gos.get(), 0.110_054, epsilon = 1e-6);
        assert_abs_diff_eq!(c.gos.get(), 0.236_152, epsilon = 1e-6);
        assert_eq!(
            b.to_string(),
            "Traffic intensity (A): 3.00 Erlang\nGrade of service (Erlang B): 11.01%"
        );
    }

    #[test]
    fn binomial_uses_per_user_occupancy() {
        let report = evaluate_gos(&request(5, GosMethod::Binomial, TrafficUnit::Erlang)).unwrap();
        let expected = formula::binomial(
            Trunks::new(5),
            Sources::new(12).unwrap(),
            formula::Occupancy::new(0.25).unwrap(),
        );
        assert_relative_eq!(report.gos.get(), expected.get(), max_relative = 1e-12);
    }

    #[test]
    fn ccs_changes_only_the_display() {
        let erlang = evaluate_gos(&request(5, GosMethod::ErlangB, TrafficUnit::Erlang)).unwrap();
        let ccs = evaluate_gos(&request(5, GosMethod::ErlangB, TrafficUnit::Ccs)).unwrap();

        assert_eq!(erlang.gos, ccs.gos);
        assert_relative_eq!(ccs.traffic_in_unit(), 108.0);
        assert!(ccs.to_string().starts_with("Traffic intensity (A): 108.00 CCS"));
    }

    #[test]
    fn erlang_c_rejects_overload() {
        let err = evaluate_gos(&request(3, GosMethod::ErlangC, TrafficUnit::Erlang)).unwrap_err();
        assert!(matches!(
            err,
            Error::Domain(DomainError::UnstableQueue { trunks: 3, .. })
        ));
    }

    #[test]
    fn report_serializes_with_erlang_traffic() {
        let report = evaluate_gos(&request(5, GosMethod::ErlangB, TrafficUnit::Ccs)).unwrap();
        let json = serde_json::to_value(report).unwrap();

        assert_eq!(json["method"], "erlang-b");
        assert_eq!(json["unit"], "ccs");
        assert_eq!(json["trunks"], 5);
        assert_relative_eq!(json["traffic_erlangs"].as_f64().unwrap(), 3.0);
    }
}
