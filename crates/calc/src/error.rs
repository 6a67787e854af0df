use thiserror::Error;

use teletraffic_core::{DomainError, InputError};
use teletraffic_solvers::traffic;

/// Errors from the calculator operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Solve(#[from] traffic::Error),

    #[error("failed to encode JSON output")]
    Json(#[from] serde_json::Error),
}
