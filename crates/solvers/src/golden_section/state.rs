use crate::search::{Goal, Interval, IterationRecord, Point};

use super::bracket::{lower_probe, upper_probe};

/// Direction to shrink the bracket and where to evaluate next.
#[derive(Debug, Clone, Copy)]
pub(super) enum ShrinkDirection {
    /// Keep `[a, x2]`; payload is x for the new lower probe.
    ShrinkRight(f64),

    /// Keep `[x1, b]`; payload is x for the new upper probe.
    ShrinkLeft(f64),
}

impl ShrinkDirection {
    /// Returns the x that must be evaluated for this shrink.
    pub(super) fn x(self) -> f64 {
        match self {
            Self::ShrinkRight(x) | Self::ShrinkLeft(x) => x,
        }
    }
}

/// Bracket plus the two evaluated interior probes.
///
/// The probe that survives a shrink is carried forward with its objective
/// value, so it is never evaluated twice.
pub(super) struct State {
    interval: Interval,
    left: Point,
    right: Point,
}

impl State {
    pub(super) fn new(interval: Interval, left: Point, right: Point) -> Self {
        Self {
            interval,
            left,
            right,
        }
    }

    /// Pure query: which direction to shrink and where to evaluate next.
    pub(super) fn next_action<G: Goal>(&self) -> ShrinkDirection {
        if G::prefers_left(self.left.objective, self.right.objective) {
            ShrinkDirection::ShrinkRight(lower_probe(self.interval.a, self.right.x))
        } else {
            ShrinkDirection::ShrinkLeft(upper_probe(self.left.x, self.interval.b))
        }
    }

    /// Applies a shrink and installs the newly evaluated probe.
    pub(super) fn apply(&mut self, direction: ShrinkDirection, point: Point) {
        match direction {
            ShrinkDirection::ShrinkRight(_) => {
                self.interval.b = self.right.x;
                self.right = self.left;
                self.left = point;
            }
            ShrinkDirection::ShrinkLeft(_) => {
                self.interval.a = self.left.x;
                self.left = self.right;
                self.right = point;
            }
        }
    }

    pub(super) fn width(&self) -> f64 {
        self.interval.width()
    }

    pub(super) fn is_converged(&self, epsilon: f64) -> bool {
        self.interval.is_converged(epsilon)
    }

    /// Returns true while the probes are still strictly ordered.
    pub(super) fn is_ordered(&self) -> bool {
        self.left.x < self.right.x
    }

    pub(super) fn bracket(&self) -> [f64; 2] {
        self.interval.as_array()
    }

    pub(super) fn record(&self) -> IterationRecord {
        IterationRecord::new(self.bracket(), self.left, self.right)
    }
}
