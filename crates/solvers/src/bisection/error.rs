use std::error::Error as StdError;

use thiserror::Error;

use crate::EvalError;

use super::BracketError;

/// Why a bisection solve produced no root estimate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The starting interval cannot be bisected.
    #[error(transparent)]
    Bracket(#[from] BracketError),

    /// The model or the residual failed at `x`.
    #[error("equation could not be evaluated at x = {x}")]
    Evaluation {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The residual at `x` has no sign.
    #[error("residual {residual} at x = {x} cannot be signed")]
    NonFiniteResidual { x: f64, residual: f64 },
}

impl Error {
    pub(crate) fn evaluation<ME, PE>(x: f64, err: EvalError<ME, PE>) -> Self
    where
        ME: StdError + Send + Sync + 'static,
        PE: StdError + Send + Sync + 'static,
    {
        Self::Evaluation {
            x,
            source: Box::new(err),
        }
    }
}
