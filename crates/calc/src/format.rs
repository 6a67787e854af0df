//! Text rendering for reports and tables.

use std::fmt;

use teletraffic_core::{Probability, Traffic, TrafficUnit};

/// Formats a probability as a percentage with two decimals, e.g. `2.00%`.
#[must_use]
pub fn percent(p: impl Into<Probability>) -> String {
    format!("{:.2}%", p.into().as_percent())
}

/// Formats traffic in `unit` with two decimals and the unit label.
#[must_use]
pub fn traffic(traffic: Traffic, unit: TrafficUnit) -> String {
    format!("{:.2} {unit}", traffic.in_unit(unit))
}

/// Formats traffic in Erlangs with four decimals and the unit label.
#[must_use]
pub fn erlangs(traffic: Traffic) -> String {
    format!("{:.4} {}", traffic.erlangs(), TrafficUnit::Erlang)
}

/// A plain-text table with right-aligned columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    title: Option<String>,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    #[must_use]
    pub fn new<S: Into<String>>(header: impl IntoIterator<Item = S>) -> Self {
        Self {
            title: None,
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Appends a row; missing cells render empty and extra cells are kept.
    pub fn push_row<S: Into<String>>(&mut self, row: impl IntoIterator<Item = S>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    fn widths(&self) -> Vec<usize> {
        let columns = self
            .rows
            .iter()
            .map(Vec::len)
            .chain([self.header.len()])
            .max()
            .unwrap_or(0);

        (0..columns)
            .map(|i| {
                std::iter::once(&self.header)
                    .chain(&self.rows)
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();

        if let Some(title) = &self.title {
            writeln!(f, "{title}")?;
        }
        write_row(f, &widths, &self.header)?;
        let rule = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        writeln!(f, "{}", "-".repeat(rule))?;
        for row in &self.rows {
            write_row(f, &widths, row)?;
        }
        Ok(())
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, widths: &[usize], row: &[String]) -> fmt::Result {
    let cells: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, &w)| format!("{:>w$}", row.get(i).map_or("", String::as_str)))
        .collect();
    writeln!(f, "{}", cells.join("  ").trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    use teletraffic_core::GosTarget;

    #[test]
    fn percent_has_two_decimals() {
        assert_eq!(percent(Probability::new(0.110_054).unwrap()), "11.01%");
        assert_eq!(percent(GosTarget::new(0.005).unwrap()), "0.50%");
        assert_eq!(percent(Probability::ZERO), "0.00%");
    }

    #[test]
    fn traffic_labels() {
        let a = Traffic::from_erlangs(0.75).unwrap();
        assert_eq!(traffic(a, TrafficUnit::Erlang), "0.75 Erlang");
        assert_eq!(traffic(a, TrafficUnit::Ccs), "27.00 CCS");
        assert_eq!(erlangs(a), "0.7500 Erlang");
    }

    #[test]
    fn table_aligns_columns() {
        let mut table = Table::new(["N", "Erlang B"]).title("Demo");
        table.push_row(["1", "50.00%"]);
        table.push_row(["10", "0.01%"]);

        let expected = "\
Demo
 N  Erlang B
------------
 1    50.00%
10     0.01%
";
        assert_eq!(table.to_string(), expected);
    }
}
