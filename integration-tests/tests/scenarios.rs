//! Concrete values a traffic engineer would check by hand.

use approx::{assert_abs_diff_eq, assert_relative_eq};

use integration_tests::{erlangs, percent, trunks};
use teletraffic_calc::{
    CallRate, CapacityRequest, CapacitySweep, ComparisonSweep, Demand, GosRequest, HoldingTime,
    cli::{Args, execute},
    evaluate_gos,
};
use teletraffic_core::{
    GosMethod, LossFormula, Sources, TrafficUnit,
    formula::{Occupancy, binomial, erlang_b, erlang_c},
};
use teletraffic_solvers::bisection::Config;

#[test]
fn five_trunks_three_erlangs() {
    // B = 2.025 / 18.4; C = 5·B / (5 − 3·(1 − B)).
    assert_abs_diff_eq!(erlang_b(trunks(5), erlangs(3.0)).get(), 0.110_054, epsilon = 1e-6);
    assert_abs_diff_eq!(
        erlang_c(trunks(5), erlangs(3.0)).unwrap().get(),
        0.236_152,
        epsilon = 1e-6
    );
}

#[test]
fn ten_sources_three_trunks() {
    let loss = binomial(
        trunks(3),
        Sources::new(10).unwrap(),
        Occupancy::new(0.1).unwrap(),
    );
    assert_abs_diff_eq!(loss.get(), 0.052_972, epsilon = 1e-6);
}

#[test]
fn ten_trunks_at_two_percent() {
    let report = CapacityRequest {
        trunks: trunks(10),
        target: percent(2.0),
        formula: LossFormula::ErlangB,
    }
    .solve(&Config::default())
    .unwrap();

    assert_abs_diff_eq!(report.traffic.erlangs(), 5.084, epsilon = 1e-3);
    assert_abs_diff_eq!(report.gos.get(), 0.02, epsilon = 1e-10);
}

#[test]
fn large_groups_stay_accurate() {
    let n = trunks(5_000);
    let report = CapacityRequest {
        trunks: n,
        target: percent(1.0),
        formula: LossFormula::ErlangB,
    }
    .solve(&Config::default())
    .unwrap();

    // A large group runs close to, but below, full occupancy at 1%.
    let a = report.traffic.erlangs();
    assert!(a > 4_800.0 && a < 5_000.0, "A = {a}");
    assert_abs_diff_eq!(erlang_b(n, report.traffic).get(), 0.01, epsilon = 1e-9);
}

#[test]
fn gos_form_matches_formulas() {
    let demand = Demand {
        trunks: trunks(4),
        users: Sources::new(20).unwrap(),
        call_rate: CallRate::per_hour(2.0).unwrap(),
        holding_time: "90s".parse::<HoldingTime>().unwrap(),
        unit: TrafficUnit::Ccs,
    };
    // 2 calls/h × 1.5 min × 20 users = 1 Erlang = 36 CCS.
    for method in GosMethod::ALL {
        let report = evaluate_gos(&GosRequest { demand, method }).unwrap();
        assert_relative_eq!(report.traffic.erlangs(), 1.0, max_relative = 1e-12);
        assert_relative_eq!(report.traffic_in_unit(), 36.0, max_relative = 1e-12);

        let expected = match method {
            GosMethod::ErlangB => erlang_b(trunks(4), report.traffic),
            GosMethod::ErlangC => erlang_c(trunks(4), report.traffic).unwrap(),
            GosMethod::Binomial => binomial(
                trunks(4),
                Sources::new(20).unwrap(),
                Occupancy::new(0.05).unwrap(),
            ),
        };
        assert_relative_eq!(report.gos.get(), expected.get(), max_relative = 1e-9);
    }
}

#[test]
fn finite_population_never_blocks_with_enough_trunks() {
    let rows = ComparisonSweep::default().run().unwrap();
    for row in &rows {
        if row.trunks.get() >= row.users.get() {
            assert_eq!(row.binomial.get(), 0.0, "{row:?}");
        }
    }
    // Within one population, more trunks never lose more calls.
    for group in rows.chunks(10) {
        assert!(group.windows(2).all(|w| w[1].binomial <= w[0].binomial));
        assert!(group.windows(2).all(|w| w[1].erlang_b <= w[0].erlang_b));
    }
}

#[test]
fn capacity_tables_invert_back() {
    let sweep = CapacitySweep::default();
    for table in sweep.run(&Config::default()).unwrap() {
        for row in &table.rows {
            for (target, traffic) in table.targets.iter().zip(&row.traffic) {
                let gos = table.formula.gos(row.trunks, *traffic).unwrap();
                assert_abs_diff_eq!(gos.get(), target.get(), epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn cli_json_round_trip() {
    let args = Args::parse_from([
        "teletraffic",
        "--json",
        "gos",
        "--trunks",
        "5",
        "--users",
        "12",
        "--rate",
        "5",
        "--holding",
        "3min",
        "--method",
        "erlang-c",
    ])
    .unwrap();
    let out = execute(&args.command, args.json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["method"], "erlang-c");
    assert_abs_diff_eq!(value["gos"].as_f64().unwrap(), 0.236_152, epsilon = 1e-6);
}
