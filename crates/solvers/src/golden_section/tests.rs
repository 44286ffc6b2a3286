use std::cell::Cell;

use approx::assert_relative_eq;
use thiserror::Error;

use unimin_core::Fallible;

use crate::{
    dichotomy,
    search::{Action, Config, Error, IterationRecord, Status},
};

use super::{INV_PHI, maximize_unobserved, minimize, minimize_unobserved, search};

/// Parabola with its minimum at x = 1.
fn shifted_square(x: f64) -> f64 {
    (x - 1.0).powi(2)
}

#[test]
fn converges_on_reference_scenario() {
    let result = search(&shifted_square, -2.0, 20.0, 0.1).expect("should converge");

    assert_eq!(result.status, Status::Converged);
    assert_eq!(result.iteration_count(), 12);
    assert_eq!(result.eval_count, 14);
    assert!(result.width() <= 0.1);
    assert!(result.contains(1.0));
    assert_relative_eq!(result.bracket[0], 0.962_56, epsilon = 1e-4);
    assert_relative_eq!(result.bracket[1], 1.030_88, epsilon = 1e-4);
}

#[test]
fn first_record_holds_the_first_narrowed_bracket() {
    let result = search(&shifted_square, -2.0, 20.0, 0.1).expect("should converge");
    let first = result.iterations[0];

    // Initial probes 6.40 and 11.60: f(x1) < f(x2), so b moves to 11.60.
    assert_relative_eq!(first.a, -2.0);
    assert_relative_eq!(first.b, 11.596_747_752_497_688, epsilon = 1e-12);
    assert_relative_eq!(first.width, 13.596_747_752_497_688, epsilon = 1e-12);
    assert_relative_eq!(first.x1, 3.193_495_504_995_372, epsilon = 1e-12);
    assert_relative_eq!(first.x2, 6.403_252_247_502_312, epsilon = 1e-12);
    assert_relative_eq!(first.f1, shifted_square(first.x1));
    assert_relative_eq!(first.f2, shifted_square(first.x2));
}

#[test]
fn surviving_probe_is_reused() {
    let result = search(&shifted_square, -2.0, 20.0, 0.1).expect("should converge");
    let [first, second, third] = [0, 1, 2].map(|i| result.iterations[i]);

    // f(x1) < f(x2) twice in a row: b moves to x2 and the old x1 becomes x2.
    assert_relative_eq!(second.b, first.x2);
    assert_eq!(second.x2, first.x1);
    assert_eq!(second.f2, first.f1);
    assert_relative_eq!(third.b, second.x2);
    assert_eq!(third.x2, second.x1);
    assert_eq!(third.f2, second.f1);
}

#[test]
fn records_are_consistent() {
    let result = search(&shifted_square, -2.0, 20.0, 1e-6).expect("should converge");

    for record in &result.iterations {
        assert!(record.a < record.x1 && record.x1 < record.x2 && record.x2 < record.b);
        assert_relative_eq!(record.width, record.b - record.a);
        assert_relative_eq!(record.f1, shifted_square(record.x1));
        assert_relative_eq!(record.f2, shifted_square(record.x2));
    }
    for pair in result.iterations.windows(2) {
        assert!(pair[1].width < pair[0].width);
    }
    assert_eq!(result.bracket, result.iterations.last().unwrap().bracket());
}

#[test]
fn width_shrinks_by_the_golden_ratio() {
    let result = search(&shifted_square, -2.0, 20.0, 1e-4).expect("should converge");

    for pair in result.iterations.windows(2) {
        assert_relative_eq!(
            pair[1].width / pair[0].width,
            INV_PHI,
            max_relative = 1e-6
        );
    }
}

#[test]
fn one_evaluation_per_iteration_after_the_initial_pair() {
    for epsilon in [1e-1, 1e-3, 1e-5, 1e-8] {
        let result = search(&shifted_square, -2.0, 20.0, epsilon).expect("should converge");
        assert_eq!(result.eval_count, 2 + result.iteration_count());
    }
}

#[test]
fn eval_count_matches_objective_calls() {
    let calls = Cell::new(0usize);
    let counted = |x: f64| {
        calls.set(calls.get() + 1);
        shifted_square(x)
    };

    let result = search(&counted, -2.0, 20.0, 1e-5).expect("should converge");

    assert_eq!(result.eval_count, calls.get());
}

#[test]
fn needs_fewer_evaluations_than_dichotomy() {
    for epsilon in [1e-2, 1e-3, 1e-4, 1e-5, 1e-6, 1e-7, 1e-8] {
        let golden = search(&shifted_square, -2.0, 20.0, epsilon).expect("should converge");
        let dichotomy =
            dichotomy::search(&shifted_square, -2.0, 20.0, epsilon).expect("should converge");

        assert!(golden.eval_count < dichotomy.eval_count);
    }
}

#[test]
fn ties_shrink_from_the_left() {
    let flat = |_: f64| 0.0;

    let result = search(&flat, 0.0, 1.0, 0.1).expect("should converge");

    let lower_bounds: Vec<f64> = result.iterations.iter().take(2).map(|r| r.a).collect();
    assert_relative_eq!(lower_bounds[0], 1.0 - INV_PHI, epsilon = 1e-12);
    assert_relative_eq!(lower_bounds[1], INV_PHI, epsilon = 1e-12);
    assert!(result.iterations.iter().all(|r| r.b == 1.0));
}

#[test]
fn narrow_interval_gives_empty_trace_after_the_initial_pair() {
    let result = search(&shifted_square, 0.0, 0.05, 0.1).expect("already converged");

    assert_eq!(result.status, Status::Converged);
    assert!(result.iterations.is_empty());
    assert_eq!(result.eval_count, 2);
    assert_eq!(result.bracket, [0.0, 0.05]);
}

#[test]
fn rejects_inverted_interval_without_evaluating() {
    let calls = Cell::new(0usize);
    let counted = |x: f64| {
        calls.set(calls.get() + 1);
        shifted_square(x)
    };

    let result = search(&counted, 5.0, 2.0, 0.01);

    assert!(matches!(result, Err(Error::InvalidInterval { .. })));
    assert_eq!(calls.get(), 0);
}

#[test]
fn rejects_zero_precision_without_evaluating() {
    let calls = Cell::new(0usize);
    let counted = |x: f64| {
        calls.set(calls.get() + 1);
        shifted_square(x)
    };

    let result = search(&counted, -2.0, 20.0, 0.0);

    assert!(matches!(result, Err(Error::InvalidPrecision { epsilon }) if epsilon == 0.0));
    assert_eq!(calls.get(), 0);
}

#[test]
fn rejects_negative_precision_without_evaluating() {
    let calls = Cell::new(0usize);
    let counted = |x: f64| {
        calls.set(calls.get() + 1);
        shifted_square(x)
    };

    let result = search(&counted, -2.0, 20.0, -0.1);

    assert!(matches!(result, Err(Error::InvalidPrecision { .. })));
    assert_eq!(calls.get(), 0);
}

#[test]
fn maximizes_cosine() {
    let result = maximize_unobserved(&f64::cos, [-3.0, 3.0], 1e-6, &Config::default())
        .expect("should converge");

    assert_eq!(result.status, Status::Converged);
    assert!(result.contains(0.0));
    assert_relative_eq!(result.x(), 0.0, epsilon = 1e-6);
}

#[test]
fn observer_sees_every_record() {
    let mut seen = Vec::new();
    let observer = |record: &IterationRecord| {
        seen.push(*record);
        None
    };

    let result = minimize(&shifted_square, [-2.0, 20.0], 0.1, &Config::default(), observer)
        .expect("should converge");

    assert_eq!(seen, result.iterations);
    assert_eq!(seen.len(), 12);
    assert!(seen.iter().all(|record| record.width < 22.0));
}

#[test]
fn observer_can_stop_early() {
    let observer = |record: &IterationRecord| (record.width < 3.0).then_some(Action::StopEarly);

    let result = minimize(&shifted_square, [-2.0, 20.0], 0.1, &Config::default(), observer)
        .expect("should stop cleanly");

    // Widths run 13.60, 8.40, 5.19, 3.21, 1.98: the fifth record stops.
    assert_eq!(result.status, Status::StoppedByObserver);
    assert_eq!(result.iteration_count(), 5);
    assert_eq!(result.eval_count, 7);
}

#[test]
fn observer_can_stop_on_the_first_record() {
    let result = minimize(
        &shifted_square,
        [-2.0, 20.0],
        0.1,
        &Config::default(),
        |_: &IterationRecord| Some(Action::StopEarly),
    )
    .expect("should stop cleanly");

    assert_eq!(result.status, Status::StoppedByObserver);
    assert_eq!(result.iteration_count(), 1);
    assert_eq!(result.eval_count, 3);
    assert_relative_eq!(result.bracket[0], -2.0);
    assert_relative_eq!(result.bracket[1], 11.596_747_752_497_688, epsilon = 1e-12);
}

#[test]
fn iteration_guard_reports_non_termination() {
    let config = Config::new(5).expect("valid config");

    let result = minimize_unobserved(&shifted_square, [-2.0, 20.0], 1e-6, &config);

    assert!(matches!(
        result,
        Err(Error::NonTerminating { iters: 5, .. })
    ));
}

#[test]
fn precision_below_resolution_stalls() {
    let result = search(&shifted_square, 1e9, 1e9 + 1.0, 1e-12);

    assert!(matches!(result, Err(Error::Stalled { .. })));
}

#[derive(Debug, Error)]
#[error("objective undefined at {x}")]
struct Undefined {
    x: f64,
}

#[test]
fn objective_failure_is_propagated() {
    let partial = Fallible(|x: f64| {
        if x > 10.0 {
            Err(Undefined { x })
        } else {
            Ok(shifted_square(x))
        }
    });

    let result = search(&partial, -2.0, 20.0, 0.1);

    match result {
        Err(Error::Objective { x, source }) => {
            assert_relative_eq!(x, 11.596_747_752_497_688, epsilon = 1e-12);
            assert!(source.to_string().starts_with("objective undefined at 11.59"));
        }
        other => panic!("expected objective error, got {other:?}"),
    }
}

#[test]
fn infinite_values_are_ordinary_comparisons() {
    let walled = |x: f64| if x > 11.0 { f64::INFINITY } else { shifted_square(x) };

    let result = search(&walled, -2.0, 20.0, 1e-3).expect("should converge");

    // f(11.60) is infinite, so the first step keeps [a, x2].
    assert_relative_eq!(result.iterations[0].b, 11.596_747_752_497_688, epsilon = 1e-12);
    assert!(result.contains(1.0));
}
