use unimin_core::Objective;

use super::{Error, Point};

/// Evaluates an objective and counts every call.
///
/// The count includes a call that fails, since the objective was invoked.
pub(crate) struct Evaluator<'a, O> {
    objective: &'a O,
    count: usize,
}

impl<'a, O: Objective> Evaluator<'a, O> {
    pub(crate) fn new(objective: &'a O) -> Self {
        Self {
            objective,
            count: 0,
        }
    }

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Objective`] if the objective fails and
    /// [`Error::NanObjective`] if it returns NaN.
    pub(crate) fn eval(&mut self, x: f64) -> Result<Point, Error> {
        self.count += 1;
        let value = self
            .objective
            .value(x)
            .map_err(|err| Error::objective(x, err))?;

        if value.is_nan() {
            return Err(Error::NanObjective { x });
        }

        Ok(Point::new(x, value))
    }

    /// Returns the number of evaluations performed so far.
    pub(crate) fn count(&self) -> usize {
        self.count
    }
}
