/// Returns the usage text for `teletraffic help`.
#[must_use]
pub fn help_text() -> String {
    format!(
        r"teletraffic {version} - trunk group grade-of-service calculator

USAGE:
    teletraffic [--json] [-v] <COMMAND> [OPTIONS]

COMMANDS:
    gos                         Grade of service for a user population
        --trunks <N>            Number of trunks
        --users <K>             Number of users
        --rate <CALLS>          Calls per user per hour
        --holding <TIME>        Holding time: 180s, 3min, 0.05h (bare = hours)
        --method <METHOD>       erlang-b (default), erlang-c or binomial
        --unit <UNIT>           erlang (default) or ccs

    traffic                     Offered traffic supported at a target GoS
        --trunks <N>            Number of trunks
        --gos <PERCENT>         Target grade of service in percent
        --method <METHOD>       erlang-b (default) or erlang-c
        --tol <TOL>             Residual tolerance (default 1e-10)
        --max-iters <N>         Iteration budget (default 10000)

    compare                     GoS of every method for 1-10 trunks, 5-50 users
    capacity-table              Offered traffic for 1-10 trunks at 0.5-5% GoS
        --tol <TOL>, --max-iters <N>

    help                        Show this help message
    version                     Show version information

GLOBAL OPTIONS:
    --json                      Print results as JSON
    -v, --verbose               Log solver progress to stderr (-vv for each step)

EXAMPLES:
    teletraffic gos --trunks 5 --users 12 --rate 5 --holding 3min
    teletraffic traffic --trunks 10 --gos 2
    teletraffic --json capacity-table
",
        version = env!("CARGO_PKG_VERSION")
    )
}

/// Returns the text for `teletraffic version`.
#[must_use]
pub fn version_text() -> String {
    format!("teletraffic {}\n", env!("CARGO_PKG_VERSION"))
}
