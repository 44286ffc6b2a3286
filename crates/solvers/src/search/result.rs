use super::IterationRecord;

/// Indicates how a line search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The interval width reached the requested precision.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a completed line search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// How the search terminated.
    pub status: Status,

    /// Final bracket `[a, b]`.
    pub bracket: [f64; 2],

    /// Iteration trace in chronological order.
    pub iterations: Vec<IterationRecord>,

    /// Number of objective evaluations performed.
    pub eval_count: usize,
}

impl SearchResult {
    /// Returns the number of recorded iterations.
    #[must_use]
    pub fn iteration_count(&self) -> usize {
        self.iterations.len()
    }

    /// Returns the width of the final bracket.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bracket[1] - self.bracket[0]
    }

    /// Returns the midpoint of the final bracket as the optimum estimate.
    #[must_use]
    pub fn x(&self) -> f64 {
        0.5 * (self.bracket[0] + self.bracket[1])
    }

    /// Returns true if `x` lies inside the final bracket.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.bracket[0] <= x && x <= self.bracket[1]
    }
}
