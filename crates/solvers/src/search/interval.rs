use super::Error;

/// The bracketing interval `[a, b]` owned by a single search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Interval {
    pub(crate) a: f64,
    pub(crate) b: f64,
}

impl Interval {
    /// Validates the bracket `[a, b]`.
    ///
    /// Unlike the root-finding brackets, reversed bounds are rejected rather
    /// than swapped: an inverted interval is a caller error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if either bound is non-finite or
    /// `a >= b`.
    pub(crate) fn new(bracket: [f64; 2]) -> Result<Self, Error> {
        let [a, b] = bracket;

        if !a.is_finite() || !b.is_finite() || a >= b {
            return Err(Error::InvalidInterval { a, b });
        }

        Ok(Self { a, b })
    }

    /// Returns `b - a`.
    pub(crate) fn width(&self) -> f64 {
        self.b - self.a
    }

    /// Returns true once the width is at most `epsilon`.
    pub(crate) fn is_converged(&self, epsilon: f64) -> bool {
        self.width() <= epsilon
    }

    pub(crate) fn as_array(&self) -> [f64; 2] {
        [self.a, self.b]
    }
}

/// Validates the search precision.
///
/// # Errors
///
/// Returns [`Error::InvalidPrecision`] unless `epsilon` is finite and positive.
pub(crate) fn validate_precision(epsilon: f64) -> Result<f64, Error> {
    if !epsilon.is_finite() || epsilon <= 0.0 {
        return Err(Error::InvalidPrecision { epsilon });
    }
    Ok(epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn accepts_ordered_bounds() {
        let interval = Interval::new([-2.0, 20.0]).expect("valid interval");

        assert_relative_eq!(interval.width(), 22.0);
        assert!(!interval.is_converged(0.1));
        assert!(interval.is_converged(22.0));
    }

    #[test]
    fn rejects_inverted_bounds() {
        assert!(matches!(
            Interval::new([5.0, 2.0]),
            Err(Error::InvalidInterval { .. })
        ));
    }

    #[test]
    fn rejects_empty_interval() {
        assert!(matches!(
            Interval::new([3.0, 3.0]),
            Err(Error::InvalidInterval { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert!(matches!(
            Interval::new([f64::NAN, 1.0]),
            Err(Error::InvalidInterval { .. })
        ));
        assert!(matches!(
            Interval::new([0.0, f64::INFINITY]),
            Err(Error::InvalidInterval { .. })
        ));
    }

    #[test]
    fn precision_must_be_positive_and_finite() {
        assert!(validate_precision(1e-8).is_ok());
        for epsilon in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                validate_precision(epsilon),
                Err(Error::InvalidPrecision { .. })
            ));
        }
    }
}
