use unimin_core::{Objective, Observer};

use crate::search::{
    Action, Config, Error, Evaluator, Goal, Interval, IterationRecord, Recorder, SearchResult,
    Status, validate_precision,
};

use super::probe::probes;

/// Core dichotomy loop, generic over the search direction.
pub(super) fn run<G, O, Obs>(
    objective: &O,
    bracket: [f64; 2],
    epsilon: f64,
    config: &Config,
    observer: Obs,
) -> Result<SearchResult, Error>
where
    G: Goal,
    O: Objective,
    Obs: Observer<IterationRecord, Action>,
{
    let mut interval = Interval::new(bracket)?;
    let epsilon = validate_precision(epsilon)?;
    let delta = epsilon / 2.0;

    let mut evaluator = Evaluator::new(objective);
    let mut recorder = Recorder::new("dichotomy", observer);

    for iter in 1..=config.max_iters() {
        if interval.is_converged(epsilon) {
            break;
        }

        let [x1, x2] = probes(&interval, delta);
        if x1 >= x2 {
            return Err(Error::Stalled {
                iters: iter - 1,
                width: interval.width(),
            });
        }

        let left = evaluator.eval(x1)?;
        let right = evaluator.eval(x2)?;

        let width = interval.width();
        if G::prefers_left(left.objective, right.objective) {
            interval.b = x2;
        } else {
            interval.a = x1;
        }
        if interval.width() >= width {
            return Err(Error::Stalled {
                iters: iter,
                width: interval.width(),
            });
        }

        let record = IterationRecord::new(interval.as_array(), left, right);
        if let Some(Action::StopEarly) = recorder.record(record) {
            return Ok(recorder.finish(
                Status::StoppedByObserver,
                interval.as_array(),
                evaluator.count(),
            ));
        }
    }

    if !interval.is_converged(epsilon) {
        return Err(Error::NonTerminating {
            iters: recorder.len(),
            width: interval.width(),
        });
    }

    Ok(recorder.finish(
        Status::Converged,
        interval.as_array(),
        evaluator.count(),
    ))
}
