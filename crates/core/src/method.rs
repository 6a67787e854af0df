use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{
    DomainError, Probability, Sources, Traffic, Trunks,
    formula::{Occupancy, binomial, erlang_b, erlang_c},
};

/// A grade-of-service model for forward evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum GosMethod {
    /// Lost calls cleared, infinite sources.
    #[default]
    ErlangB,
    /// Lost calls delayed, infinite sources.
    ErlangC,
    /// Lost calls cleared, finite sources.
    Binomial,
}

impl GosMethod {
    /// Every method, in the order reports list them.
    pub const ALL: [Self; 3] = [Self::ErlangB, Self::Binomial, Self::ErlangC];

    /// Returns the display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            GosMethod::ErlangB => "Erlang B",
            GosMethod::ErlangC => "Erlang C",
            GosMethod::Binomial => "Binomial",
        }
    }

    /// Returns the formula this method inverts with, if any.
    #[must_use]
    pub fn loss_formula(self) -> Option<LossFormula> {
        match self {
            GosMethod::ErlangB => Some(LossFormula::ErlangB),
            GosMethod::ErlangC => Some(LossFormula::ErlangC),
            GosMethod::Binomial => None,
        }
    }
}

impl fmt::Display for GosMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An infinite-source formula that can be inverted for offered traffic.
///
/// Both formulas increase monotonically with traffic for a fixed trunk count,
/// which is what lets a bracketing solver invert them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum LossFormula {
    #[default]
    ErlangB,
    ErlangC,
}

impl LossFormula {
    /// Both formulas, in report order.
    pub const ALL: [Self; 2] = [Self::ErlangB, Self::ErlangC];

    /// Evaluates the grade of service for `trunks` offered `traffic`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnstableQueue`] for Erlang C when the traffic
    /// reaches the trunk count.
    pub fn gos(self, trunks: Trunks, traffic: Traffic) -> Result<Probability, DomainError> {
        match self {
            LossFormula::ErlangB => Ok(erlang_b(trunks, traffic)),
            LossFormula::ErlangC => erlang_c(trunks, traffic),
        }
    }

    /// Returns the largest traffic, in Erlangs, searched when inverting.
    ///
    /// Erlang B is searched up to the trunk count itself. Erlang C is undefined
    /// at the trunk count, so its search stops one relative epsilon short.
    #[must_use]
    pub fn traffic_ceiling(self, trunks: Trunks) -> f64 {
        let n = trunks.as_f64();
        match self {
            LossFormula::ErlangB => n,
            LossFormula::ErlangC => n * (1.0 - f64::EPSILON),
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        GosMethod::from(self).name()
    }
}

impl From<LossFormula> for GosMethod {
    fn from(formula: LossFormula) -> Self {
        match formula {
            LossFormula::ErlangB => GosMethod::ErlangB,
            LossFormula::ErlangC => GosMethod::ErlangC,
        }
    }
}

impl TryFrom<GosMethod> for LossFormula {
    type Error = NotInvertible;

    fn try_from(method: GosMethod) -> Result<Self, Self::Error> {
        method.loss_formula().ok_or(NotInvertible(method))
    }
}

impl fmt::Display for LossFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a method has no offered-traffic inversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} cannot be solved for offered traffic")]
pub struct NotInvertible(pub GosMethod);

/// Error returned when a method label is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown GoS method {0:?} (expected \"erlang-b\", \"erlang-c\" or \"binomial\")")]
pub struct ParseMethodError(pub String);

impl FromStr for GosMethod {
    type Err = ParseMethodError;

    /// Accepts `erlang-b`, `Erlang B`, `erlang_b`, `b` and the like.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "erlangb" | "b" => Ok(GosMethod::ErlangB),
            "erlangc" | "c" => Ok(GosMethod::ErlangC),
            "binomial" | "binom" => Ok(GosMethod::Binomial),
            _ => Err(ParseMethodError(s.to_owned())),
        }
    }
}

impl FromStr for LossFormula {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<GosMethod>()?
            .loss_formula()
            .ok_or_else(|| ParseMethodError(s.to_owned()))
    }
}

/// Inputs for evaluating a [`GosMethod`].
///
/// The infinite-source methods only read `traffic`; the Binomial method only
/// reads `sources` and `occupancy`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Load {
    pub trunks: Trunks,
    pub traffic: Traffic,
    pub sources: Sources,
    pub occupancy: Occupancy,
}

impl GosMethod {
    /// Evaluates this method for the given load.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnstableQueue`] for Erlang C when the traffic
    /// reaches the trunk count.
    pub fn evaluate(self, load: &Load) -> Result<Probability, DomainError> {
        match self {
            GosMethod::ErlangB => Ok(erlang_b(load.trunks, load.traffic)),
            GosMethod::ErlangC => erlang_c(load.trunks, load.traffic),
            GosMethod::Binomial => Ok(binomial(load.trunks, load.sources, load.occupancy)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels() {
        assert_eq!("Erlang B".parse(), Ok(GosMethod::ErlangB));
        assert_eq!("erlang-c".parse(), Ok(GosMethod::ErlangC));
        assert_eq!("ERLANG_C".parse(), Ok(GosMethod::ErlangC));
        assert_eq!("binomial".parse(), Ok(GosMethod::Binomial));
        assert!("poisson".parse::<GosMethod>().is_err());
    }

    #[test]
    fn binomial_is_not_invertible() {
        assert!("binomial".parse::<LossFormula>().is_err());
        assert_eq!(
            LossFormula::try_from(GosMethod::Binomial),
            Err(NotInvertible(GosMethod::Binomial))
        );
        assert_eq!(
            LossFormula::try_from(GosMethod::ErlangC),
            Ok(LossFormula::ErlangC)
        );
    }

    #[test]
    fn erlang_c_ceiling_is_inside_its_domain() {
        for n in [1, 2, 3, 7, 10, 1_000, 65_536] {
            let trunks = Trunks::new(n);
            let ceiling = LossFormula::ErlangC.traffic_ceiling(trunks);
            assert!(ceiling < trunks.as_f64());
            let traffic = Traffic::from_erlangs(ceiling).unwrap();
            assert!(LossFormula::ErlangC.gos(trunks, traffic).is_ok());
        }
    }

    #[test]
    fn dispatch_reads_the_right_inputs() {
        let load = Load {
            trunks: Trunks::new(2),
            traffic: Traffic::from_erlangs(3.0).unwrap(),
            sources: Sources::new(2).unwrap(),
            occupancy: Occupancy::new(0.5).unwrap(),
        };

        assert!(GosMethod::ErlangB.evaluate(&load).is_ok());
        assert!(matches!(
            GosMethod::ErlangC.evaluate(&load),
            Err(DomainError::UnstableQueue { .. })
        ));
        // Two trunks for two sources: nothing is ever lost.
        assert_eq!(
            GosMethod::Binomial.evaluate(&load),
            Ok(Probability::ZERO)
        );
    }
}
