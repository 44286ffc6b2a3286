use unimin_core::{Objective, Observer};

use crate::search::{
    Action, Config, Error, Evaluator, Goal, Interval, IterationRecord, Recorder, SearchResult,
    Status, validate_precision,
};

use super::{
    bracket::{lower_probe, upper_probe},
    state::State,
};

/// Core golden-section loop, generic over the search direction.
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
    let interval = Interval::new(bracket)?;
    let epsilon = validate_precision(epsilon)?;

    let mut evaluator = Evaluator::new(objective);
    let mut recorder = Recorder::new("golden_section", observer);

    let left = evaluator.eval(lower_probe(interval.a, interval.b))?;
    let right = evaluator.eval(upper_probe(interval.a, interval.b))?;
    let mut state = State::new(interval, left, right);

    for iter in 1..=config.max_iters() {
        if state.is_converged(epsilon) {
            break;
        }

        let width = state.width();
        let direction = state.next_action::<G>();
        let point = evaluator.eval(direction.x())?;
        state.apply(direction, point);

        if !state.is_ordered() || state.width() >= width {
            return Err(Error::Stalled {
                iters: iter,
                width: state.width(),
            });
        }

        if let Some(Action::StopEarly) = recorder.record(state.record()) {
            return Ok(recorder.finish(
                Status::StoppedByObserver,
                state.bracket(),
                evaluator.count(),
            ));
        }
    }

    if !state.is_converged(epsilon) {
        return Err(Error::NonTerminating {
            iters: recorder.len(),
            width: state.width(),
        });
    }

    Ok(recorder.finish(Status::Converged, state.bracket(), evaluator.count()))
}
