use std::convert::Infallible;

/// A scalar objective `f: ℝ → ℝ` searched by the line-search solvers.
///
/// The solvers assume the objective is pure and unimodal on the search
/// interval. Evaluation may fail; the error is surfaced to the caller of the
/// search together with the `x` at which it occurred.
///
/// Any closure `Fn(f64) -> f64` is an infallible objective. Wrap a closure
/// returning `Result<f64, E>` in [`Fallible`] to use it as an objective.
pub trait Objective {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be evaluated at `x`.
    fn value(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F> Objective for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn value(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

/// Adapter for objectives that can fail.
///
/// ```
/// use unimin_core::{Fallible, Objective};
///
/// let log = Fallible(|x: f64| {
///     if x > 0.0 {
///         Ok(x.ln())
///     } else {
///         Err(std::fmt::Error)
///     }
/// });
///
/// assert!(log.value(1.0).is_ok());
/// assert!(log.value(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> Objective for Fallible<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn value(&self, x: f64) -> Result<f64, Self::Error> {
        (self.0)(x)
    }
}
