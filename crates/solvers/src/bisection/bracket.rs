use std::{cmp::Ordering, mem};

use thiserror::Error;

use crate::Evaluation;

/// Why a starting interval cannot be bisected.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    #[error("interval end {0} is not finite")]
    NonFinite(f64),

    #[error("interval collapses to the single point {0}")]
    Degenerate(f64),

    #[error("residuals {left} and {right} at the interval ends share a sign")]
    SameSign { left: f64, right: f64 },
}

/// Checks that `[a, b]` can seed a search and returns it in ascending order.
pub(super) fn ordered([a, b]: [f64; 2]) -> Result<[f64; 2], BracketError> {
    if let Some(end) = [a, b].into_iter().find(|end| !end.is_finite()) {
        return Err(BracketError::NonFinite(end));
    }
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => Ok([a, b]),
        Some(Ordering::Greater) => Ok([b, a]),
        _ => Err(BracketError::Degenerate(a)),
    }
}

/// An interval whose ends have residuals of opposite sign.
///
/// Ends are held by residual sign, not position, so a decreasing curve
/// shrinks the same way an increasing one does. Ends pushed out by
/// [`Bracket::shrink`] are remembered until the closest evaluation is
/// claimed with [`Bracket::into_closest`].
pub(super) struct Bracket<I, O> {
    below: Evaluation<I, O>,
    above: Evaluation<I, O>,
    retired: Option<Evaluation<I, O>>,
}

impl<I, O> Bracket<I, O> {
    /// Pairs two evaluated ends. A zero residual counts as above.
    pub(super) fn new(a: Evaluation<I, O>, b: Evaluation<I, O>) -> Result<Self, BracketError> {
        let (below, above) = match (a.residual < 0.0, b.residual < 0.0) {
            (true, false) => (a, b),
            (false, true) => (b, a),
            _ => {
                return Err(BracketError::SameSign {
                    left: a.residual,
                    right: b.residual,
                });
            }
        };
        Ok(Self {
            below,
            above,
            retired: None,
        })
    }

    /// The interval in ascending order.
    pub(super) fn bounds(&self) -> [f64; 2] {
        let (below, above) = (self.below.x, self.above.x);
        if below < above {
            [below, above]
        } else {
            [above, below]
        }
    }

    pub(super) fn width(&self) -> f64 {
        (self.above.x - self.below.x).abs()
    }

    pub(super) fn is_x_converged(&self, x_abs_tol: f64, x_rel_tol: f64) -> bool {
        let mid = 0.5 * (self.below.x + self.above.x);
        self.width() <= x_abs_tol + x_rel_tol * mid.abs()
    }

    /// Returns the midpoint, or `None` once the ends are adjacent floats and
    /// the midpoint rounds onto one of them.
    pub(super) fn split(&self) -> Option<f64> {
        let [lo, hi] = self.bounds();
        let mid = 0.5 * (lo + hi);
        (lo < mid && mid < hi).then_some(mid)
    }

    /// Moves the end that shares a residual sign with `mid` onto it.
    pub(super) fn shrink(&mut self, mid: Evaluation<I, O>) {
        let end = if mid.residual < 0.0 {
            &mut self.below
        } else {
            &mut self.above
        };
        let old = mem::replace(end, mid);
        self.retire(old);
    }

    /// Keeps `eval` as a fallback if it beats every earlier one.
    pub(super) fn retire(&mut self, eval: Evaluation<I, O>) {
        match &self.retired {
            Some(kept) if kept.residual.abs() <= eval.residual.abs() => {}
            _ => self.retired = Some(eval),
        }
    }

    /// Returns the evaluation with the smallest residual magnitude seen.
    pub(super) fn into_closest(self) -> Evaluation<I, O> {
        let mut closest = self.below;
        for eval in [Some(self.above), self.retired].into_iter().flatten() {
            if eval.residual.abs() < closest.residual.abs() {
                closest = eval;
            }
        }
        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use teletraffic_core::Snapshot;

    fn eval(x: f64, residual: f64) -> Evaluation<(), ()> {
        Evaluation {
            x,
            residual,
            snapshot: Snapshot::new((), ()),
        }
    }

    fn bracket(lo: (f64, f64), hi: (f64, f64)) -> Bracket<(), ()> {
        Bracket::new(eval(lo.0, lo.1), eval(hi.0, hi.1)).expect("opposite signs")
    }

    #[test]
    fn ordered_sorts_and_validates() {
        assert_eq!(ordered([3.0, 1.0]), Ok([1.0, 3.0]));
        assert_eq!(ordered([2.0, 2.0]), Err(BracketError::Degenerate(2.0)));
        assert!(matches!(
            ordered([0.0, f64::INFINITY]),
            Err(BracketError::NonFinite(end)) if end.is_infinite()
        ));
        assert!(matches!(
            ordered([f64::NAN, 1.0]),
            Err(BracketError::NonFinite(end)) if end.is_nan()
        ));
    }

    #[test]
    fn same_sign_ends_are_rejected() {
        let result = Bracket::new(eval(0.0, -1.0), eval(1.0, -0.5));
        assert!(matches!(
            result,
            Err(BracketError::SameSign { left, right }) if left == -1.0 && right == -0.5
        ));
    }

    #[test]
    fn shrink_follows_the_residual_sign() {
        // Decreasing curve: the positive end sits on the left.
        let mut bracket = bracket((0.0, 4.0), (8.0, -4.0));

        bracket.shrink(eval(4.0, -1.0));
        assert_eq!(bracket.bounds(), [0.0, 4.0]);

        bracket.shrink(eval(2.0, 1.5));
        assert_eq!(bracket.bounds(), [2.0, 4.0]);
        assert_eq!(bracket.split(), Some(3.0));
        assert_relative_eq!(bracket.width(), 2.0);
    }

    #[test]
    fn closest_includes_retired_ends() {
        let mut bracket = bracket((0.0, -0.1), (1.0, 2.0));
        // The new lower end is further from zero than the one it replaces.
        bracket.shrink(eval(0.5, -0.3));

        let closest = bracket.into_closest();
        assert_relative_eq!(closest.x, 0.0);
        assert_relative_eq!(closest.residual, -0.1);
    }

    #[test]
    fn adjacent_floats_cannot_split() {
        let left = 1.0_f64;
        let bracket = bracket((left, -1.0), (left + f64::EPSILON, 1.0));

        assert_eq!(bracket.split(), None);
    }

    #[test]
    fn x_convergence_scales_with_position() {
        let bracket = bracket((100.0, -1.0), (100.5, 1.0));

        assert!(!bracket.is_x_converged(0.1, 0.0));
        assert!(bracket.is_x_converged(0.0, 1e-2));
    }
}
