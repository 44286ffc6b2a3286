use crate::search::Interval;

/// Returns the probe pair `[x1, x2]` placed `delta` apart around the midpoint.
pub(super) fn probes(interval: &Interval, delta: f64) -> [f64; 2] {
    let sum = interval.a + interval.b;
    [(sum - delta) / 2.0, (sum + delta) / 2.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn probes_are_symmetric_about_midpoint() {
        let interval = Interval::new([-2.0, 20.0]).expect("valid interval");

        let [x1, x2] = probes(&interval, 0.05);

        assert_relative_eq!(x1, 8.975);
        assert_relative_eq!(x2, 9.025);
        assert_relative_eq!(0.5 * (x1 + x2), 9.0);
    }

    #[test]
    fn probes_are_delta_over_two_from_midpoint() {
        let interval = Interval::new([0.0, 1.0]).expect("valid interval");

        let [x1, x2] = probes(&interval, 0.2);

        assert_relative_eq!(0.5 - x1, 0.1, epsilon = 1e-15);
        assert_relative_eq!(x2 - 0.5, 0.1, epsilon = 1e-15);
        assert_relative_eq!(x2 - x1, 0.2, epsilon = 1e-15);
    }
}
