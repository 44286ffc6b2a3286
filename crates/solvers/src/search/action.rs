/// Control actions an observer can return during a line search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search and return the trace recorded so far.
    ///
    /// The result carries [`Status::StoppedByObserver`](super::Status::StoppedByObserver)
    /// and its final bracket may still be wider than `epsilon`.
    StopEarly,
}
