use teletraffic_core::Snapshot;

/// Iteration event emitted by the bisection solver for each midpoint.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based within the bisection loop).
    pub iter: usize,
    /// Search bracket the midpoint was taken from.
    pub bracket: [f64; 2],
    /// The midpoint that was evaluated.
    pub x: f64,
    /// Residual at the midpoint.
    pub residual: f64,
    /// Model input and output at the midpoint.
    pub snapshot: &'a Snapshot<I, O>,
}

impl<I, O> Event<'_, I, O> {
    /// Returns the current bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bracket[1] - self.bracket[0]
    }
}
