use thiserror::Error;

/// Configuration for the bisection solver.
///
/// The solver stops as soon as either test passes:
///
/// - `|residual| <= residual_tol`
/// - `bracket width <= x_abs_tol + x_rel_tol * |midpoint|`
///
/// The defaults (10 000 iterations, residual tolerance `1e-10`, no bracket
/// tolerance) suit grade-of-service inversion, where the residual is a
/// probability difference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_abs_tol: f64,
    x_rel_tol: f64,
    residual_tol: f64,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,

    #[error("x_rel_tol must be finite and non-negative")]
    XRel,

    #[error("residual_tol must be finite and non-negative")]
    Residual,
}

impl Config {
    pub const DEFAULT_MAX_ITERS: usize = 10_000;
    pub const DEFAULT_RESIDUAL_TOL: f64 = 1e-10;

    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn new(
        max_iters: usize,
        x_abs_tol: f64,
        x_rel_tol: f64,
        residual_tol: f64,
    ) -> Result<Self, ConfigError> {
        if !x_abs_tol.is_finite() || x_abs_tol < 0.0 {
            return Err(ConfigError::XAbs);
        }
        if !x_rel_tol.is_finite() || x_rel_tol < 0.0 {
            return Err(ConfigError::XRel);
        }
        if !residual_tol.is_finite() || residual_tol < 0.0 {
            return Err(ConfigError::Residual);
        }

        Ok(Self {
            max_iters,
            x_abs_tol,
            x_rel_tol,
            residual_tol,
        })
    }

    /// Returns a copy with a different iteration budget.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns a copy with a different residual tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Residual`] if the tolerance is negative or non-finite.
    pub fn with_residual_tol(self, residual_tol: f64) -> Result<Self, ConfigError> {
        Self::new(self.max_iters, self.x_abs_tol, self.x_rel_tol, residual_tol)
    }

    /// Returns the maximum number of midpoint evaluations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance for bracket width.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the relative tolerance for bracket width.
    #[must_use]
    pub fn x_rel_tol(&self) -> f64 {
        self.x_rel_tol
    }

    /// Returns the residual tolerance.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: Self::DEFAULT_MAX_ITERS,
            x_abs_tol: 0.0,
            x_rel_tol: 0.0,
            residual_tol: Self::DEFAULT_RESIDUAL_TOL,
        }
    }
}
