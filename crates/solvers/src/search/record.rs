use super::Point;

/// One iteration of a line search.
///
/// `a` and `b` are the bracket bounds after the iteration narrowed the
/// interval, and `width` is `b - a`. `x1 < x2` are the interior probes of the
/// iteration with `f1 = f(x1)` and `f2 = f(x2)`.
///
/// Field order matches the record tuple `(a, b, width, x1, x2, f1, f2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationRecord {
    pub a: f64,
    pub b: f64,
    pub width: f64,
    pub x1: f64,
    pub x2: f64,
    pub f1: f64,
    pub f2: f64,
}

impl IterationRecord {
    pub(crate) fn new(bracket: [f64; 2], left: Point, right: Point) -> Self {
        let [a, b] = bracket;
        Self {
            a,
            b,
            width: b - a,
            x1: left.x,
            x2: right.x,
            f1: left.objective,
            f2: right.objective,
        }
    }

    /// Returns the bracket `[a, b]` recorded by this iteration.
    #[must_use]
    pub fn bracket(&self) -> [f64; 2] {
        [self.a, self.b]
    }
}
