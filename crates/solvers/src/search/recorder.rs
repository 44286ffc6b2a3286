use unimin_core::Observer;

use super::{Action, IterationRecord, SearchResult, Status};

/// Appends iteration records and forwards each one to the observer.
pub(crate) struct Recorder<Obs> {
    method: &'static str,
    observer: Obs,
    iterations: Vec<IterationRecord>,
}

impl<Obs> Recorder<Obs>
where
    Obs: Observer<IterationRecord, Action>,
{
    pub(crate) fn new(method: &'static str, observer: Obs) -> Self {
        Self {
            method,
            observer,
            iterations: Vec::new(),
        }
    }

    /// Number of records appended so far.
    pub(crate) fn len(&self) -> usize {
        self.iterations.len()
    }

    /// Appends `record` and returns the observer's action.
    ///
    /// The record is appended before the observer sees it, so a stopped
    /// search still reports the iteration that triggered the stop.
    pub(crate) fn record(&mut self, record: IterationRecord) -> Option<Action> {
        self.iterations.push(record);
        tracing::trace!(
            method = self.method,
            iter = self.iterations.len(),
            a = record.a,
            b = record.b,
            width = record.width,
            "iteration recorded"
        );
        self.observer.observe(&record)
    }

    pub(crate) fn finish(self, status: Status, bracket: [f64; 2], eval_count: usize) -> SearchResult {
        tracing::debug!(
            method = self.method,
            ?status,
            iters = self.iterations.len(),
            eval_count,
            width = bracket[1] - bracket[0],
            "search finished"
        );
        SearchResult {
            status,
            bracket,
            iterations: self.iterations,
            eval_count,
        }
    }
}
