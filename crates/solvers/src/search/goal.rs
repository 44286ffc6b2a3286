/// Defines the search direction.
///
/// The solvers always minimize internally. Comparisons are made on
/// [`Goal::transform`] of the objective values, while records keep the raw
/// values returned by the objective.
pub trait Goal {
    /// Transforms an objective value for internal minimization.
    ///
    /// - [`Minimize`]: returns the value unchanged
    /// - [`Maximize`]: negates the value
    fn transform(value: f64) -> f64;

    /// Returns true when the left probe is strictly better than the right one.
    ///
    /// Ties are not better, so an equal pair always discards the left part
    /// of the interval.
    #[inline]
    fn prefers_left(left: f64, right: f64) -> bool {
        Self::transform(left) < Self::transform(right)
    }
}

/// Minimize the objective function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Minimize;

impl Goal for Minimize {
    #[inline]
    fn transform(value: f64) -> f64 {
        value
    }
}

/// Maximize the objective function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Maximize;

impl Goal for Maximize {
    #[inline]
    fn transform(value: f64) -> f64 {
        -value
    }
}
