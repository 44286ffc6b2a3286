//! Dichotomy search for single-variable minimization.
//!
//! # Algorithm
//!
//! Each iteration probes two points placed `delta = epsilon / 2` apart,
//! symmetric about the midpoint of `[a, b]`:
//!
//! ```text
//! x1 = ((a + b) - delta) / 2
//! x2 = ((a + b) + delta) / 2
//! ```
//!
//! If `f(x1) < f(x2)` the minimum cannot lie right of `x2`, so `b = x2`.
//! Otherwise, ties included, `a = x1`. Every iteration pays for two fresh
//! evaluations and roughly halves the interval, so the search takes
//! `O(log((b - a) / epsilon))` iterations.
//!
//! # Records
//!
//! The record of an iteration holds the bracket **after** narrowing together
//! with the probes that decided it. A bracket that already satisfies
//! `b - a <= epsilon` yields an empty trace and zero evaluations.
//!
//! # Observer
//!
//! The observer receives each [`IterationRecord`] after it is appended and may
//! return [`Action::StopEarly`].

mod probe;
mod run;


use unimin_core::{Objective, Observer};

use crate::search::{Action, Config, Error, IterationRecord, Maximize, Minimize, SearchResult};

use run::run;

/// Minimizes `objective` on `[a, b]` to precision `epsilon`.
///
/// Uses the default [`Config`] and no observer.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] if `a >= b`, [`Error::InvalidPrecision`]
/// if `epsilon <= 0`, or an evaluation error from the objective.
pub fn search<O: Objective>(
    objective: &O,
    a: f64,
    b: f64,
    epsilon: f64,
) -> Result<SearchResult, Error> {
    minimize_unobserved(objective, [a, b], epsilon, &Config::default())
}

/// Finds the minimum of the objective using dichotomy search.
///
/// The observer receives an [`IterationRecord`] after each iteration.
///
/// # Errors
///
/// Returns an error if the bracket or precision is invalid, the objective
/// fails, or the search does not converge within [`Config::max_iters`].
pub fn minimize<O, Obs>(
    objective: &O,
    bracket: [f64; 2],
    epsilon: f64,
    config: &Config,
    observer: Obs,
) -> Result<SearchResult, Error>
where
    O: Objective,
    Obs: Observer<IterationRecord, Action>,
{
    run::<Minimize, _, _>(objective, bracket, epsilon, config, observer)
}

/// Finds the minimum of the objective without observer support.
///
/// # Errors
///
/// See [`minimize`].
pub fn minimize_unobserved<O: Objective>(
    objective: &O,
    bracket: [f64; 2],
    epsilon: f64,
    config: &Config,
) -> Result<SearchResult, Error> {
    minimize(objective, bracket, epsilon, config, ())
}

/// Finds the maximum of the objective using dichotomy search.
///
/// Records keep the raw objective values.
///
/// # Errors
///
/// See [`minimize`].
pub fn maximize<O, Obs>(
    objective: &O,
    bracket: [f64; 2],
    epsilon: f64,
    config: &Config,
    observer: Obs,
) -> Result<SearchResult, Error>
where
    O: Objective,
    Obs: Observer<IterationRecord, Action>,
{
    run::<Maximize, _, _>(objective, bracket, epsilon, config, observer)
}

/// Finds the maximum of the objective without observer support.
///
/// # Errors
///
/// See [`minimize`].
pub fn maximize_unobserved<O: Objective>(
    objective: &O,
    bracket: [f64; 2],
    epsilon: f64,
    config: &Config,
) -> Result<SearchResult, Error> {
    maximize(objective, bracket, epsilon, config, ())
}
